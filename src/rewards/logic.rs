use super::types::*;
use crate::core::curve::experience_for_level;
use crate::core::profile::BalanceProfile;
use crate::error::{BalanceError, RecordFailure, RecordKind, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Result of a pacing batch: what was written and what was skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PacingOutcome {
    pub applied: Vec<AppliedPacing>,
    pub failures: Vec<RecordFailure>,
}

/// Derive base rewards so that `target.kills` kills reach the next level.
///
/// base_experience = max(min_xp, XP(level) / kills)
/// base_gold       = max(min_gold, base_experience / gold_divisor)
pub fn solve_base_reward(profile: &BalanceProfile, target: &PacingTarget) -> Result<SolvedReward> {
    if target.kills <= 0 {
        return Err(BalanceError::InvalidPacingTarget {
            race: target.race.clone(),
            kills: target.kills,
        });
    }
    let policy = &profile.rewards;
    let needed = experience_for_level(&profile.curve, target.level)?;

    let per_kill = i64::try_from(needed / target.kills as u64).unwrap_or(i64::MAX);
    let base_experience = per_kill.max(policy.min_base_experience);
    let base_gold = (base_experience / policy.gold_divisor.max(1)).max(policy.min_base_gold);

    Ok(SolvedReward {
        base_experience,
        base_gold,
    })
}

/// Overwrite a race's rewards, returning the values it had before.
pub fn apply_reward(race: &mut MonsterRaceRecord, reward: SolvedReward) -> SolvedReward {
    let previous = SolvedReward {
        base_experience: race.base_experience,
        base_gold: race.base_gold,
    };
    race.base_experience = reward.base_experience;
    race.base_gold = reward.base_gold;
    previous
}

/// Kills of `race` needed to clear `level`, rounded up.
///
/// Races with no experience report the profile's unreachable sentinel instead
/// of failing: this is a diagnostic path.
pub fn kills_to_level(profile: &BalanceProfile, race: &MonsterRaceRecord, level: u32) -> Result<u64> {
    let needed = experience_for_level(&profile.curve, level)?;
    if race.base_experience <= 0 {
        return Ok(profile.rewards.unreachable_kills);
    }
    Ok(needed.div_ceil(race.base_experience as u64))
}

/// Solve every target and write the result into the matching race.
///
/// A bad target is recorded in `failures` and the rest of the batch continues.
pub fn solve_and_apply_pacing(
    profile: &BalanceProfile,
    races: &mut [MonsterRaceRecord],
    targets: &[PacingTarget],
) -> PacingOutcome {
    let mut outcome = PacingOutcome::default();

    for target in targets {
        match solve_and_apply_one(profile, races, target) {
            Ok(applied) => {
                debug!(
                    race = %applied.race,
                    base_experience = applied.applied.base_experience,
                    base_gold = applied.applied.base_gold,
                    "applied pacing target"
                );
                outcome.applied.push(applied);
            }
            Err(err) => {
                warn!(race = %target.race, error = %err, "skipping pacing target");
                outcome
                    .failures
                    .push(RecordFailure::new(RecordKind::PacingTarget, &target.race, &err));
            }
        }
    }

    info!(
        applied = outcome.applied.len(),
        failed = outcome.failures.len(),
        "pacing pass finished"
    );
    outcome
}

fn solve_and_apply_one(
    profile: &BalanceProfile,
    races: &mut [MonsterRaceRecord],
    target: &PacingTarget,
) -> Result<AppliedPacing> {
    let race = races
        .iter_mut()
        .find(|r| r.race == target.race)
        .ok_or_else(|| BalanceError::UnknownRace {
            race: target.race.clone(),
        })?;
    let reward = solve_base_reward(profile, target)?;
    let previous = apply_reward(race, reward);
    Ok(AppliedPacing {
        race: race.race.clone(),
        previous,
        applied: reward,
    })
}
