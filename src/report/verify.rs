//! Pass/fail checks over a built report.

use super::types::*;
use crate::core::BalanceProfile;
use crate::dungeon::DungeonRecord;
use crate::items::ItemRecord;
use crate::rewards::MonsterRaceRecord;
use std::collections::HashSet;

/// Run every check. Verification passes when there is no `Failure` finding.
pub fn verify(
    profile: &BalanceProfile,
    report: &EconomyReport,
    races: &[MonsterRaceRecord],
    dungeons: &[DungeonRecord],
    items: &[ItemRecord],
) -> Verification {
    let mut findings = Vec::new();
    check_leveling(report, &mut findings);
    check_races(profile, report, races, &mut findings);
    check_dungeons(dungeons, &mut findings);
    check_items(items, &mut findings);
    check_gear_cost(profile, report, &mut findings);

    if !report.failures.is_empty() {
        findings.push(Finding::failure(
            "records",
            format!("{} record(s) skipped, see failures", report.failures.len()),
        ));
    }

    let passed = findings.iter().all(|f| f.severity != Severity::Failure);
    Verification { findings, passed }
}

fn check_leveling(report: &EconomyReport, findings: &mut Vec<Finding>) {
    if report.leveling.is_empty() {
        findings.push(Finding::warning(
            "leveling",
            format!(
                "level range {}..={} is empty",
                report.first_level, report.last_level
            ),
        ));
    }
    for pair in report.leveling.windows(2) {
        if pair[1].experience_required <= pair[0].experience_required {
            findings.push(Finding::failure(
                "leveling",
                format!(
                    "experience for level {} ({}) does not exceed level {} ({})",
                    pair[1].level,
                    pair[1].experience_required,
                    pair[0].level,
                    pair[0].experience_required
                ),
            ));
        }
    }
}

fn check_races(
    profile: &BalanceProfile,
    report: &EconomyReport,
    races: &[MonsterRaceRecord],
    findings: &mut Vec<Finding>,
) {
    let config = &profile.report;
    let band = config.pacing_band_min_kills..=config.pacing_band_max_kills;

    if !races.iter().any(|r| r.race == config.reference_race) {
        findings.push(Finding::failure(
            config.reference_race.as_str(),
            "reference race is missing, cross-check has no anchor",
        ));
    }
    for name in &config.comparison_races {
        if !races.iter().any(|r| r.race == *name) {
            findings.push(Finding::warning(
                name.as_str(),
                "comparison race is missing from the snapshot",
            ));
        }
    }

    let mut seen = HashSet::new();
    for row in &report.races {
        if !seen.insert(row.race.as_str()) {
            findings.push(Finding::warning(
                row.race.as_str(),
                "duplicate race id, pacing targets only update the first record",
            ));
        }
        if row.base_gold < 0 {
            findings.push(Finding::failure(
                row.race.as_str(),
                format!("negative base gold {}", row.base_gold),
            ));
        }
        if row.base_experience <= 0 {
            findings.push(Finding::warning(
                row.race.as_str(),
                "grants no experience, pacing unreachable",
            ));
        } else if !band.contains(&row.kills_at_low_level) && !band.contains(&row.kills_at_high_level) {
            findings.push(Finding::warning(
                row.race.as_str(),
                format!(
                    "off pace at both reference levels: {} kills at L{}, {} kills at L{} (band {}-{})",
                    row.kills_at_low_level,
                    row.low_level,
                    row.kills_at_high_level,
                    row.high_level,
                    band.start(),
                    band.end()
                ),
            ));
        }
    }
}

fn check_dungeons(dungeons: &[DungeonRecord], findings: &mut Vec<Finding>) {
    for dungeon in dungeons {
        for warning in dungeon.design_warnings() {
            findings.push(Finding::warning(dungeon.id.as_str(), warning));
        }
    }
}

fn check_items(items: &[ItemRecord], findings: &mut Vec<Finding>) {
    for item in items {
        if item.is_equipment() && item.grade().is_ok() && item.sell_price <= 0 {
            findings.push(Finding::failure(
                item.id.as_str(),
                format!("tradeable item has sell price {}", item.sell_price),
            ));
        }
    }
}

fn check_gear_cost(profile: &BalanceProfile, report: &EconomyReport, findings: &mut Vec<Finding>) {
    let Some(gear) = &report.cross_check.gear_cost else {
        return;
    };
    let subject = report.cross_check.reference_race.as_str();
    if gear.gold_per_kill <= 0 {
        findings.push(Finding::warning(
            subject,
            "reference race drops no gold, gear cost cannot be compared",
        ));
        return;
    }
    if let Some(kills) = gear.rare_cost_in_kills {
        if kills > profile.report.max_rare_cost_in_kills {
            findings.push(Finding::warning(
                subject,
                format!(
                    "a Rare item costs {:.0} kills of gold (limit {:.0})",
                    kills, profile.report.max_rare_cost_in_kills
                ),
            ));
        }
    }
    if let (Some(common), Some(rare)) = (gear.common_mean_price, gear.rare_mean_price) {
        if rare < common {
            findings.push(Finding::warning(
                "items",
                format!(
                    "mean Rare price {:.0} is below mean Common price {:.0}",
                    rare, common
                ),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::Grade;
    use crate::report::build_economy_report;

    fn goblin() -> MonsterRaceRecord {
        MonsterRaceRecord::new("Goblin", 4, 5)
    }

    #[test]
    fn test_clean_snapshot_passes() {
        let mut profile = BalanceProfile::default();
        profile.report.comparison_races.clear();
        let report = build_economy_report(
            &profile,
            1..=10,
            &[goblin()],
            &[],
            &[ItemRecord::armor("Vest", Grade::Common, 40)],
        )
        .unwrap();
        assert!(report.verification.passed, "{:?}", report.verification);
        assert_eq!(report.verification.failures().count(), 0);
    }

    #[test]
    fn test_missing_reference_race_fails() {
        let profile = BalanceProfile::default();
        let report = build_economy_report(&profile, 1..=2, &[], &[], &[]).unwrap();
        assert!(!report.verification.passed);
        assert!(report
            .verification
            .failures()
            .any(|f| f.subject == "Goblin"));
    }

    #[test]
    fn test_unpriced_equipment_fails() {
        let mut profile = BalanceProfile::default();
        profile.report.comparison_races.clear();
        let report = build_economy_report(
            &profile,
            1..=2,
            &[goblin()],
            &[],
            &[ItemRecord::weapon("Unpriced Sword", Grade::Common, 12)],
        )
        .unwrap();
        assert!(!report.verification.passed);
    }

    #[test]
    fn test_unreachable_race_only_warns() {
        let mut profile = BalanceProfile::default();
        profile.report.comparison_races.clear();
        let races = vec![goblin(), MonsterRaceRecord::new("Training Dummy", 0, 0)];
        let report = build_economy_report(&profile, 1..=2, &races, &[], &[]).unwrap();
        assert!(report.verification.passed);
        assert!(report
            .verification
            .warnings()
            .any(|f| f.subject == "Training Dummy"));
    }

    #[test]
    fn test_negative_gold_fails_even_without_experience() {
        let mut profile = BalanceProfile::default();
        profile.report.comparison_races.clear();
        let races = vec![goblin(), MonsterRaceRecord::new("Cursed", 0, -50)];
        let report = build_economy_report(&profile, 1..=2, &races, &[], &[]).unwrap();
        assert!(!report.verification.passed);
        assert!(report.verification.failures().any(|f| f.subject == "Cursed"));
        assert!(report.verification.warnings().any(|f| f.subject == "Cursed"));
    }

    #[test]
    fn test_duplicate_race_ids_warn() {
        let mut profile = BalanceProfile::default();
        profile.report.comparison_races.clear();
        let races = vec![goblin(), MonsterRaceRecord::new("Goblin", 8, 5)];
        let report = build_economy_report(&profile, 1..=2, &races, &[], &[]).unwrap();
        let duplicates: Vec<_> = report
            .verification
            .warnings()
            .filter(|f| f.subject == "Goblin" && f.message.contains("duplicate"))
            .collect();
        assert_eq!(duplicates.len(), 1);
    }

    #[test]
    fn test_off_pace_race_warns() {
        let mut profile = BalanceProfile::default();
        profile.report.comparison_races.clear();
        // 1 xp per kill: 100 kills at L1, 3162 at L10
        let races = vec![goblin(), MonsterRaceRecord::new("Rat", 1, 5)];
        let report = build_economy_report(&profile, 1..=2, &races, &[], &[]).unwrap();
        assert!(report.verification.warnings().any(|f| f.subject == "Rat"));
        assert!(!report.verification.warnings().any(|f| f.subject == "Goblin"));
    }

    #[test]
    fn test_skipped_records_fail_verification() {
        let mut profile = BalanceProfile::default();
        profile.report.comparison_races.clear();
        let mut glitch = ItemRecord::armor("Glitch", Grade::Common, 10);
        glitch.grade = 99;
        let report = build_economy_report(&profile, 1..=2, &[goblin()], &[], &[glitch]).unwrap();
        assert_eq!(report.failures.len(), 1);
        assert!(!report.verification.passed);
    }

    #[test]
    fn test_flat_curve_profile_fails() {
        let mut profile = BalanceProfile::default();
        profile.report.comparison_races.clear();
        profile.curve.xp_base = 1.0;
        profile.curve.xp_exponent = 0.1;
        let report = build_economy_report(&profile, 1..=20, &[goblin()], &[], &[]).unwrap();
        assert!(report
            .verification
            .failures()
            .any(|f| f.subject == "leveling"));
    }
}
