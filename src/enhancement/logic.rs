use super::types::*;
use crate::core::profile::EnhancementConfig;

/// Gold cost of a single enhancement tier: base_cost * growth^tier, floored.
pub fn enhance_cost(config: &EnhancementConfig, tier: u32) -> u64 {
    (config.base_cost * config.growth.powi(tier as i32)).floor() as u64
}

/// The full cost curve for tiers 0..config.tiers with running totals.
pub fn enhancement_curve(config: &EnhancementConfig) -> Vec<EnhancementStep> {
    let mut cumulative_cost = 0u64;
    (0..config.tiers)
        .map(|tier| {
            let cost = enhance_cost(config, tier);
            cumulative_cost += cost;
            EnhancementStep {
                tier,
                cost,
                cumulative_cost,
            }
        })
        .collect()
}

/// Total gold to take an item from tier 0 through `tier` inclusive.
/// Tiers past the end of the curve return None.
pub fn cumulative_enhance_cost(config: &EnhancementConfig, tier: u32) -> Option<u64> {
    if tier >= config.tiers {
        return None;
    }
    Some((0..=tier).map(|t| enhance_cost(config, t)).sum())
}
