//! Report sections.

use crate::core::LevelCurvePoint;
use crate::dungeon::FloorReward;
use crate::enhancement::EnhancementStep;
use crate::error::RecordFailure;
use crate::items::GradePriceStats;
use serde::{Deserialize, Serialize};

/// Cross-checked balance tables for one content snapshot, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomyReport {
    pub first_level: u32,
    pub last_level: u32,
    pub leveling: Vec<LevelCurvePoint>,
    pub races: Vec<RaceRewardRow>,
    pub dungeons: Vec<DungeonRewardRow>,
    pub item_prices: Vec<GradePriceStats>,
    pub cross_check: CrossCheck,
    pub verification: Verification,
    /// Records left out of one or more sections.
    pub failures: Vec<RecordFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceRewardRow {
    pub race: String,
    pub base_experience: i64,
    pub base_gold: i64,
    pub low_level: u32,
    pub kills_at_low_level: u64,
    pub high_level: u32,
    pub kills_at_high_level: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DungeonRewardRow {
    pub id: String,
    pub floor_count: u32,
    pub base: FloorReward,
    /// The configured reference floor, clamped to this dungeon's depth.
    pub reference_floor: u32,
    pub reward_at_reference: FloorReward,
    pub completion_bonus: f64,
    pub completion_reward: FloorReward,
}

/// Kills-to-level for several races at one level. Columns follow
/// `CrossCheck::races`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacingRow {
    pub level: u32,
    pub kills: Vec<u64>,
}

/// How many kills of the reference race a mean-priced item costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearCost {
    pub gold_per_kill: i64,
    pub common_mean_price: Option<f64>,
    pub rare_mean_price: Option<f64>,
    pub common_cost_in_kills: Option<f64>,
    pub rare_cost_in_kills: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossCheck {
    pub reference_race: String,
    /// Reference race first, then the comparison races present in the snapshot.
    pub races: Vec<String>,
    pub pacing: Vec<PacingRow>,
    /// None when the reference race is missing.
    pub gear_cost: Option<GearCost>,
    pub enhancement: Vec<EnhancementStep>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// Worth a look, does not fail verification.
    Warning,
    /// Fails verification.
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub subject: String,
    pub message: String,
}

impl Finding {
    pub fn warning(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn failure(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Failure,
            subject: subject.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    pub findings: Vec<Finding>,
    pub passed: bool,
}

impl Verification {
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    pub fn failures(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Failure)
    }
}
