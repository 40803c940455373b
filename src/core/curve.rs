//! Leveling curve and reference stats.

use super::profile::CurveConfig;
use crate::error::{BalanceError, Result};
use serde::{Deserialize, Serialize};

/// One row of the leveling table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelCurvePoint {
    pub level: u32,
    pub experience_required: u64,
    pub cumulative_experience: u64,
    pub reference_hp: u64,
    pub reference_mp: f64,
}

const MAX_PREALLOCATED_ROWS: usize = 4096;

fn check_level(level: u32) -> Result<()> {
    if level == 0 {
        return Err(BalanceError::InvalidLevel { level });
    }
    Ok(())
}

fn raw_experience(config: &CurveConfig, level: u32) -> u64 {
    (config.xp_base * f64::powf(level as f64, config.xp_exponent)).floor() as u64
}

/// XP required to advance out of `level`.
/// XP for level N = xp_base * N^xp_exponent, floored.
pub fn experience_for_level(config: &CurveConfig, level: u32) -> Result<u64> {
    check_level(level)?;
    Ok(raw_experience(config, level))
}

/// Total XP from level 1 through `level`, accumulated term by term.
///
/// Saturates at `u64::MAX` for curves that outgrow the integer range.
pub fn cumulative_experience(config: &CurveConfig, level: u32) -> Result<u64> {
    check_level(level)?;
    Ok((1..=level)
        .map(|l| raw_experience(config, l))
        .fold(0, u64::saturating_add))
}

/// Illustrative HP for a character with baseline attributes.
pub fn reference_hp(config: &CurveConfig, level: u32) -> Result<u64> {
    check_level(level)?;
    let vitality = config.baseline_attribute + config.vitality_per_level * level as f64;
    Ok((config.hp_base + vitality * config.hp_per_vitality).floor() as u64)
}

/// Illustrative MP for a character with baseline attributes.
pub fn reference_mp(config: &CurveConfig, level: u32) -> Result<f64> {
    check_level(level)?;
    let intellect = config.baseline_attribute + config.intellect_per_level * level as f64;
    Ok(config.mp_base + intellect * config.mp_per_intellect)
}

/// Leveling table for `first..=last`, with the running cumulative total.
///
/// The cumulative column starts from level 1 even when `first` is higher, so
/// rows always agree with `cumulative_experience` (saturating included).
pub fn level_curve(config: &CurveConfig, first: u32, last: u32) -> Result<Vec<LevelCurvePoint>> {
    check_level(first)?;
    let mut cumulative = if first > 1 {
        cumulative_experience(config, first - 1)?
    } else {
        0
    };

    let rows = (last.saturating_sub(first) as usize).saturating_add(1);
    let mut points = Vec::with_capacity(rows.min(MAX_PREALLOCATED_ROWS));
    for level in first..=last {
        let experience_required = raw_experience(config, level);
        cumulative = cumulative.saturating_add(experience_required);
        points.push(LevelCurvePoint {
            level,
            experience_required,
            cumulative_experience: cumulative,
            reference_hp: reference_hp(config, level)?,
            reference_mp: reference_mp(config, level)?,
        });
    }
    Ok(points)
}
