//! Balance profile: every tunable constant the models read.

use super::balance::*;
use crate::error::{BalanceError, Result};
use crate::items::Grade;
use serde::{Deserialize, Serialize};

/// Complete set of balance constants.
///
/// Every model function takes a profile so that alternate balance setups can be
/// compared side by side. Missing fields in a profile file fall back to the
/// defaults in `core::balance`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceProfile {
    pub curve: CurveConfig,
    pub enhancement: EnhancementConfig,
    pub rewards: RewardPolicy,
    pub pricing: PricingPolicy,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    pub xp_base: f64,
    pub xp_exponent: f64,
    pub baseline_attribute: f64,
    pub hp_base: f64,
    pub vitality_per_level: f64,
    pub hp_per_vitality: f64,
    pub mp_base: f64,
    pub intellect_per_level: f64,
    pub mp_per_intellect: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            xp_base: XP_CURVE_BASE,
            xp_exponent: XP_CURVE_EXPONENT,
            baseline_attribute: BASELINE_ATTRIBUTE,
            hp_base: REFERENCE_HP_BASE,
            vitality_per_level: VITALITY_PER_LEVEL,
            hp_per_vitality: HP_PER_VITALITY,
            mp_base: REFERENCE_MP_BASE,
            intellect_per_level: INTELLECT_PER_LEVEL,
            mp_per_intellect: MP_PER_INTELLECT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhancementConfig {
    pub base_cost: f64,
    pub growth: f64,
    pub tiers: u32,
}

impl Default for EnhancementConfig {
    fn default() -> Self {
        Self {
            base_cost: ENHANCE_BASE_COST,
            growth: ENHANCE_COST_GROWTH,
            tiers: ENHANCE_TIERS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardPolicy {
    pub min_base_experience: i64,
    pub min_base_gold: i64,
    pub gold_divisor: i64,
    pub unreachable_kills: u64,
}

impl Default for RewardPolicy {
    fn default() -> Self {
        Self {
            min_base_experience: MIN_BASE_EXPERIENCE,
            min_base_gold: MIN_BASE_GOLD,
            gold_divisor: GOLD_PER_EXPERIENCE_DIVISOR,
            unreachable_kills: UNREACHABLE_KILLS,
        }
    }
}

/// Price multiplier per grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradeMultipliers {
    pub none: f64,
    pub common: f64,
    pub uncommon: f64,
    pub rare: f64,
    pub epic: f64,
    pub legendary: f64,
}

impl GradeMultipliers {
    pub fn get(&self, grade: Grade) -> f64 {
        match grade {
            Grade::None => self.none,
            Grade::Common => self.common,
            Grade::Uncommon => self.uncommon,
            Grade::Rare => self.rare,
            Grade::Epic => self.epic,
            Grade::Legendary => self.legendary,
        }
    }
}

impl Default for GradeMultipliers {
    fn default() -> Self {
        let [none, common, uncommon, rare, epic, legendary] = GRADE_PRICE_MULTIPLIERS;
        Self {
            none,
            common,
            uncommon,
            rare,
            epic,
            legendary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingPolicy {
    pub grade_multipliers: GradeMultipliers,
    pub weapon_damage_factor: f64,
    pub min_armor_base: i64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            grade_multipliers: GradeMultipliers::default(),
            weapon_damage_factor: WEAPON_DAMAGE_PRICE_FACTOR,
            min_armor_base: MIN_ARMOR_BASE_PRICE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub low_reference_level: u32,
    pub high_reference_level: u32,
    pub reference_floor: u32,
    pub reference_race: String,
    /// Races shown next to the reference race in the pacing cross-check.
    pub comparison_races: Vec<String>,
    pub pacing_band_min_kills: u64,
    pub pacing_band_max_kills: u64,
    pub max_rare_cost_in_kills: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            low_reference_level: REPORT_LOW_REFERENCE_LEVEL,
            high_reference_level: REPORT_HIGH_REFERENCE_LEVEL,
            reference_floor: REPORT_REFERENCE_FLOOR,
            reference_race: REPORT_REFERENCE_RACE.to_string(),
            comparison_races: vec![
                "Slime".to_string(),
                "Wolf".to_string(),
                "Orc".to_string(),
                "Skeleton".to_string(),
            ],
            pacing_band_min_kills: PACING_BAND_MIN_KILLS,
            pacing_band_max_kills: PACING_BAND_MAX_KILLS,
            max_rare_cost_in_kills: MAX_RARE_COST_IN_KILLS,
        }
    }
}

impl BalanceProfile {
    /// Reject constants under which the curves stop being well-formed.
    pub fn validate(&self) -> Result<()> {
        let curve = &self.curve;
        if !(curve.xp_base.is_finite() && curve.xp_base >= 1.0) {
            return Err(invalid(format!(
                "xp_base must be at least 1, got {}",
                curve.xp_base
            )));
        }
        if !(curve.xp_exponent.is_finite() && curve.xp_exponent > 0.0) {
            return Err(invalid(format!(
                "xp_exponent must be positive, got {}",
                curve.xp_exponent
            )));
        }

        let enh = &self.enhancement;
        if !(enh.base_cost.is_finite() && enh.base_cost > 0.0) {
            return Err(invalid(format!(
                "enhancement base_cost must be positive, got {}",
                enh.base_cost
            )));
        }
        if !(enh.growth.is_finite() && enh.growth > 1.0) {
            return Err(invalid(format!(
                "enhancement growth must exceed 1.0, got {}",
                enh.growth
            )));
        }

        let rewards = &self.rewards;
        if rewards.min_base_experience < 1 {
            return Err(invalid("min_base_experience must be at least 1".into()));
        }
        if rewards.gold_divisor < 1 {
            return Err(invalid("gold_divisor must be at least 1".into()));
        }

        let grades = &self.pricing.grade_multipliers;
        for grade in Grade::all() {
            let mult = grades.get(grade);
            if !(mult.is_finite() && mult > 0.0) {
                return Err(invalid(format!(
                    "{} multiplier must be positive, got {}",
                    grade.name(),
                    mult
                )));
            }
        }
        if self.pricing.min_armor_base < 1 {
            return Err(invalid("min_armor_base must be at least 1".into()));
        }

        let report = &self.report;
        if report.low_reference_level == 0 || report.high_reference_level == 0 {
            return Err(invalid("reference levels start at 1".into()));
        }
        if report.reference_floor == 0 {
            return Err(invalid("reference_floor starts at 1".into()));
        }
        if report.pacing_band_min_kills > report.pacing_band_max_kills {
            return Err(invalid(format!(
                "pacing band is inverted: {}..{}",
                report.pacing_band_min_kills, report.pacing_band_max_kills
            )));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> BalanceError {
    BalanceError::InvalidProfile(msg)
}
