//! Per-floor reward accrual.

use super::types::*;
use crate::error::{BalanceError, Result};

/// Reward for clearing `floor`: base * multiplier^(floor - 1), floored.
pub fn reward_at_floor(dungeon: &DungeonRecord, floor: u32) -> Result<FloorReward> {
    if floor == 0 || floor > dungeon.floor_count {
        return Err(BalanceError::FloorOutOfRange {
            floor,
            floor_count: dungeon.floor_count,
        });
    }
    let exponent = i32::try_from(floor - 1).unwrap_or(i32::MAX);
    Ok(FloorReward {
        experience: scale(dungeon.base_experience, dungeon.exp_multiplier_per_floor, exponent),
        gold: scale(dungeon.base_gold, dungeon.gold_multiplier_per_floor, exponent),
    })
}

fn scale(base: u64, multiplier: f64, exponent: i32) -> u64 {
    (base as f64 * multiplier.powi(exponent)).floor() as u64
}

/// Last-floor reward with the completion bonus applied.
///
/// Only the amount is computed here; whether the run was actually cleared is
/// up to the caller.
pub fn completion_reward(dungeon: &DungeonRecord) -> Result<FloorReward> {
    let last = reward_at_floor(dungeon, dungeon.floor_count)?;
    Ok(FloorReward {
        experience: (last.experience as f64 * dungeon.completion_bonus).floor() as u64,
        gold: (last.gold as f64 * dungeon.completion_bonus).floor() as u64,
    })
}

/// Sum of every floor's reward plus the completion reward, for a full clear.
///
/// Totals saturate at `u64::MAX`.
pub fn full_run_reward(dungeon: &DungeonRecord) -> Result<FloorReward> {
    let mut total = completion_reward(dungeon)?;
    for floor in 1..=dungeon.floor_count {
        let reward = reward_at_floor(dungeon, floor)?;
        total.experience = total.experience.saturating_add(reward.experience);
        total.gold = total.gold.saturating_add(reward.gold);
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crypt() -> DungeonRecord {
        DungeonRecord::new("Goblin Warrens", 100, 40, 10)
            .with_floor_multipliers(1.5, 1.1)
            .with_completion_bonus(2.0)
    }

    #[test]
    fn test_first_floor_is_base() {
        let d = crypt();
        assert_eq!(
            reward_at_floor(&d, 1),
            Ok(FloorReward {
                experience: 100,
                gold: 40
            })
        );
    }

    #[test]
    fn test_floor_growth() {
        let d = crypt();
        // 100 * 1.5^2 = 225, 40 * 1.1^2 = 48.4
        let third = reward_at_floor(&d, 3).unwrap();
        assert_eq!(third.experience, 225);
        assert_eq!(third.gold, 48);
        let last = reward_at_floor(&d, 10).unwrap();
        assert!(last.experience > third.experience);
    }

    #[test]
    fn test_floor_out_of_range() {
        let d = crypt();
        assert_eq!(
            reward_at_floor(&d, 0),
            Err(BalanceError::FloorOutOfRange {
                floor: 0,
                floor_count: 10
            })
        );
        assert!(reward_at_floor(&d, 11).is_err());
        assert!(reward_at_floor(&d, 10).is_ok());
    }

    #[test]
    fn test_completion_reward_doubles_last_floor() {
        let d = crypt();
        let last = reward_at_floor(&d, 10).unwrap();
        let bonus = completion_reward(&d).unwrap();
        assert_eq!(bonus.experience, last.experience * 2);
        assert_eq!(bonus.gold, last.gold * 2);
    }

    #[test]
    fn test_floorless_dungeon_has_no_completion_reward() {
        let empty = DungeonRecord::new("Collapsed Mine", 10, 10, 0);
        assert!(completion_reward(&empty).is_err());
        assert!(full_run_reward(&empty).is_err());
    }

    #[test]
    fn test_steep_dungeon_totals_saturate() {
        let abyss = DungeonRecord::new("Abyss", 100, 100, 40).with_floor_multipliers(10.0, 10.0);
        // 100 * 10^39 does not fit in u64
        let last = reward_at_floor(&abyss, 40).unwrap();
        assert_eq!(last.experience, u64::MAX);
        let total = full_run_reward(&abyss).unwrap();
        assert_eq!(total.experience, u64::MAX);
        assert_eq!(total.gold, u64::MAX);
    }

    #[test]
    fn test_exponent_clamped_for_deep_floors() {
        let deep = DungeonRecord::new("Endless Stair", 10, 10, u32::MAX)
            .with_floor_multipliers(1.5, 0.5);
        let bottom = reward_at_floor(&deep, u32::MAX).unwrap();
        assert_eq!(bottom.experience, u64::MAX);
        assert_eq!(bottom.gold, 0);
    }

    #[test]
    fn test_full_run_includes_every_floor_and_bonus() {
        let d = DungeonRecord::new("Short", 10, 5, 2)
            .with_floor_multipliers(2.0, 2.0)
            .with_completion_bonus(1.5);
        // floors: (10,5) + (20,10), bonus: (30,15)
        assert_eq!(
            full_run_reward(&d),
            Ok(FloorReward {
                experience: 60,
                gold: 30
            })
        );
    }
}
