use serde::{Deserialize, Serialize};

/// Monster race as held by the content store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterRaceRecord {
    pub race: String,
    /// Non-positive values are tolerated and reported as unreachable pacing.
    pub base_experience: i64,
    pub base_gold: i64,
}

impl MonsterRaceRecord {
    pub fn new(race: impl Into<String>, base_experience: i64, base_gold: i64) -> Self {
        Self {
            race: race.into(),
            base_experience,
            base_gold,
        }
    }
}

/// "A character at `level` should level up after `kills` kills of `race`."
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacingTarget {
    pub race: String,
    pub level: u32,
    pub kills: i64,
}

impl PacingTarget {
    pub fn new(race: impl Into<String>, level: u32, kills: i64) -> Self {
        Self {
            race: race.into(),
            level,
            kills,
        }
    }
}

/// Base rewards derived from a pacing target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvedReward {
    pub base_experience: i64,
    pub base_gold: i64,
}

/// A race whose rewards were overwritten by the solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedPacing {
    pub race: String,
    pub previous: SolvedReward,
    pub applied: SolvedReward,
}
