//! Assembles the economy report from content records.

use super::types::*;
use super::verify::verify;
use crate::core::{level_curve, BalanceProfile};
use crate::dungeon::{completion_reward, reward_at_floor, DungeonRecord};
use crate::enhancement::enhancement_curve;
use crate::error::{RecordFailure, RecordKind, Result};
use crate::items::{mean_price_for_grade, price_distribution, Grade, GradePriceStats, ItemRecord};
use crate::rewards::{kills_to_level, MonsterRaceRecord};
use std::ops::RangeInclusive;
use tracing::{info, warn};

/// Build every report section from the records handed in.
///
/// Pure: nothing is mutated and the same inputs always give the same report.
/// Bad records are listed in `failures` and left out of their section; only
/// an invalid profile or a level range starting at 0 fails the whole call.
pub fn build_economy_report(
    profile: &BalanceProfile,
    levels: RangeInclusive<u32>,
    races: &[MonsterRaceRecord],
    dungeons: &[DungeonRecord],
    items: &[ItemRecord],
) -> Result<EconomyReport> {
    profile.validate()?;
    let (first_level, last_level) = (*levels.start(), *levels.end());
    let leveling = level_curve(&profile.curve, first_level, last_level)?;

    let mut failures = Vec::new();
    let race_rows = race_table(profile, races)?;
    let dungeon_rows = dungeon_table(profile, dungeons, &mut failures);
    let (item_prices, item_failures) = price_distribution(items);
    failures.extend(item_failures);
    let cross_check = cross_check(profile, levels, races, &item_prices)?;

    let mut report = EconomyReport {
        first_level,
        last_level,
        leveling,
        races: race_rows,
        dungeons: dungeon_rows,
        item_prices,
        cross_check,
        verification: Verification::default(),
        failures,
    };
    report.verification = verify(profile, &report, races, dungeons, items);

    info!(
        passed = report.verification.passed,
        findings = report.verification.findings.len(),
        skipped = report.failures.len(),
        "economy report built"
    );
    Ok(report)
}

fn race_table(profile: &BalanceProfile, races: &[MonsterRaceRecord]) -> Result<Vec<RaceRewardRow>> {
    let low = profile.report.low_reference_level;
    let high = profile.report.high_reference_level;
    races
        .iter()
        .map(|race| -> Result<RaceRewardRow> {
            Ok(RaceRewardRow {
                race: race.race.clone(),
                base_experience: race.base_experience,
                base_gold: race.base_gold,
                low_level: low,
                kills_at_low_level: kills_to_level(profile, race, low)?,
                high_level: high,
                kills_at_high_level: kills_to_level(profile, race, high)?,
            })
        })
        .collect()
}

fn dungeon_table(
    profile: &BalanceProfile,
    dungeons: &[DungeonRecord],
    failures: &mut Vec<RecordFailure>,
) -> Vec<DungeonRewardRow> {
    let mut rows = Vec::with_capacity(dungeons.len());
    for dungeon in dungeons {
        match dungeon_row(profile, dungeon) {
            Ok(row) => rows.push(row),
            Err(err) => {
                warn!(dungeon = %dungeon.id, error = %err, "skipping dungeon");
                failures.push(RecordFailure::new(RecordKind::Dungeon, &dungeon.id, &err));
            }
        }
    }
    rows
}

fn dungeon_row(profile: &BalanceProfile, dungeon: &DungeonRecord) -> Result<DungeonRewardRow> {
    let reference_floor = profile.report.reference_floor.min(dungeon.floor_count);
    Ok(DungeonRewardRow {
        id: dungeon.id.clone(),
        floor_count: dungeon.floor_count,
        base: reward_at_floor(dungeon, 1)?,
        reference_floor,
        reward_at_reference: reward_at_floor(dungeon, reference_floor)?,
        completion_bonus: dungeon.completion_bonus,
        completion_reward: completion_reward(dungeon)?,
    })
}

fn cross_check(
    profile: &BalanceProfile,
    levels: RangeInclusive<u32>,
    races: &[MonsterRaceRecord],
    item_prices: &[GradePriceStats],
) -> Result<CrossCheck> {
    let config = &profile.report;
    let reference = races.iter().find(|r| r.race == config.reference_race);

    let mut columns: Vec<&MonsterRaceRecord> = Vec::new();
    if let Some(reference) = reference {
        columns.push(reference);
    }
    for name in &config.comparison_races {
        if *name == config.reference_race {
            continue;
        }
        if let Some(race) = races.iter().find(|r| r.race == *name) {
            columns.push(race);
        }
    }

    let mut pacing = Vec::new();
    for level in levels {
        let kills = columns
            .iter()
            .map(|race| kills_to_level(profile, race, level))
            .collect::<Result<Vec<_>>>()?;
        pacing.push(PacingRow { level, kills });
    }

    let gear_cost = reference.map(|reference| {
        let common_mean_price = mean_price_for_grade(item_prices, Grade::Common);
        let rare_mean_price = mean_price_for_grade(item_prices, Grade::Rare);
        let per_kill = |price: Option<f64>| {
            price
                .filter(|_| reference.base_gold > 0)
                .map(|p| p / reference.base_gold as f64)
        };
        GearCost {
            gold_per_kill: reference.base_gold,
            common_mean_price,
            rare_mean_price,
            common_cost_in_kills: per_kill(common_mean_price),
            rare_cost_in_kills: per_kill(rare_mean_price),
        }
    });

    Ok(CrossCheck {
        reference_race: config.reference_race.clone(),
        races: columns.iter().map(|r| r.race.clone()).collect(),
        pacing,
        gear_cost,
        enhancement: enhancement_curve(&profile.enhancement),
    })
}
