//! Dungeon reward records.

use serde::{Deserialize, Serialize};

/// Dungeon as held by the content store. Read-only to the balance models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DungeonRecord {
    pub id: String,
    pub base_experience: u64,
    pub base_gold: u64,
    /// Per-floor growth, expected > 1.0
    pub exp_multiplier_per_floor: f64,
    /// Per-floor growth, expected > 1.0
    pub gold_multiplier_per_floor: f64,
    /// Applied to the last floor's reward on a full clear, expected >= 1.0
    pub completion_bonus: f64,
    pub floor_count: u32,
}

impl DungeonRecord {
    pub fn new(id: impl Into<String>, base_experience: u64, base_gold: u64, floor_count: u32) -> Self {
        Self {
            id: id.into(),
            base_experience,
            base_gold,
            exp_multiplier_per_floor: 1.1,
            gold_multiplier_per_floor: 1.1,
            completion_bonus: 1.0,
            floor_count,
        }
    }

    pub fn with_floor_multipliers(mut self, exp: f64, gold: f64) -> Self {
        self.exp_multiplier_per_floor = exp;
        self.gold_multiplier_per_floor = gold;
        self
    }

    pub fn with_completion_bonus(mut self, bonus: f64) -> Self {
        self.completion_bonus = bonus;
        self
    }

    /// Content problems that do not stop reward math but should be surfaced.
    pub fn design_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.floor_count == 0 {
            warnings.push("has no floors".to_string());
        }
        if self.exp_multiplier_per_floor <= 1.0 {
            warnings.push(format!(
                "exp multiplier {} does not grow per floor",
                self.exp_multiplier_per_floor
            ));
        }
        if self.gold_multiplier_per_floor <= 1.0 {
            warnings.push(format!(
                "gold multiplier {} does not grow per floor",
                self.gold_multiplier_per_floor
            ));
        }
        if self.completion_bonus < 1.0 {
            warnings.push(format!(
                "completion bonus {} shrinks the final reward",
                self.completion_bonus
            ));
        }
        warnings
    }
}

/// Experience and gold granted together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FloorReward {
    pub experience: u64,
    pub gold: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_dungeon_has_no_warnings() {
        let crypt = DungeonRecord::new("Crypt", 50, 20, 10)
            .with_floor_multipliers(1.15, 1.2)
            .with_completion_bonus(1.5);
        assert!(crypt.design_warnings().is_empty());
    }

    #[test]
    fn test_flat_multipliers_warn() {
        let flat = DungeonRecord::new("Flat", 50, 20, 0)
            .with_floor_multipliers(1.0, 0.9)
            .with_completion_bonus(0.5);
        assert_eq!(flat.design_warnings().len(), 4);
    }
}
