//! Default balance constants.
//!
//! These seed `BalanceProfile::default()`. Model functions never read them
//! directly; they read the profile they are handed, so alternate profiles can
//! be tested without touching this file.

// =============================================================================
// LEVELING CURVE
// =============================================================================

/// Base XP required for leveling.
pub const XP_CURVE_BASE: f64 = 100.0;

/// XP curve exponent (polynomial scaling).
/// XP for level N = XP_CURVE_BASE * N^XP_CURVE_EXPONENT
pub const XP_CURVE_EXPONENT: f64 = 1.5;

// =============================================================================
// REFERENCE STATS
// =============================================================================

/// Fixed attribute value the reference HP/MP columns are computed from.
pub const BASELINE_ATTRIBUTE: f64 = 10.0;

/// HP = REFERENCE_HP_BASE + (BASELINE_ATTRIBUTE + level * VITALITY_PER_LEVEL) * HP_PER_VITALITY
pub const REFERENCE_HP_BASE: f64 = 100.0;
/// Vitality gained per level on top of the baseline.
pub const VITALITY_PER_LEVEL: f64 = 2.0;
/// Max HP granted by each point of vitality.
pub const HP_PER_VITALITY: f64 = 10.0;

/// MP = REFERENCE_MP_BASE + (BASELINE_ATTRIBUTE + level * INTELLECT_PER_LEVEL) * MP_PER_INTELLECT
pub const REFERENCE_MP_BASE: f64 = 50.0;
/// Intellect gained per level on top of the baseline.
pub const INTELLECT_PER_LEVEL: f64 = 1.5;
/// Max MP granted by each point of intellect.
pub const MP_PER_INTELLECT: f64 = 5.0;

// =============================================================================
// ENHANCEMENT
// =============================================================================

/// Gold cost of the first enhancement tier.
pub const ENHANCE_BASE_COST: f64 = 100.0;

/// Each tier costs this much more than the previous one.
pub const ENHANCE_COST_GROWTH: f64 = 1.8;

/// Tiers 0..ENHANCE_TIERS.
pub const ENHANCE_TIERS: u32 = 10;

// =============================================================================
// MONSTER REWARDS
// =============================================================================

/// Solved base experience never drops below this.
pub const MIN_BASE_EXPERIENCE: i64 = 1;

/// Solved base gold never drops below this.
pub const MIN_BASE_GOLD: i64 = 5;

/// base_gold = base_experience / GOLD_PER_EXPERIENCE_DIVISOR
pub const GOLD_PER_EXPERIENCE_DIVISOR: i64 = 4;

/// Reported kill count for races that grant no experience.
pub const UNREACHABLE_KILLS: u64 = 999;

// =============================================================================
// ITEM PRICING
// =============================================================================

/// Sell price multiplier per grade, indexed by grade ordinal (None..=Legendary).
pub const GRADE_PRICE_MULTIPLIERS: [f64; 6] = [1.0, 1.0, 1.5, 3.0, 7.0, 20.0];

/// Weapon price = max damage * WEAPON_DAMAGE_PRICE_FACTOR * grade multiplier.
pub const WEAPON_DAMAGE_PRICE_FACTOR: f64 = 10.0;

/// Floor for the un-inflated base when re-pricing armor.
pub const MIN_ARMOR_BASE_PRICE: i64 = 10;

// =============================================================================
// REPORT
// =============================================================================

/// Levels at which the race table shows kills-to-level.
pub const REPORT_LOW_REFERENCE_LEVEL: u32 = 1;
/// Second, later reference level for the race table.
pub const REPORT_HIGH_REFERENCE_LEVEL: u32 = 10;

/// Floor at which the dungeon table samples rewards.
pub const REPORT_REFERENCE_FLOOR: u32 = 10;

/// Race every cross-check is anchored on.
pub const REPORT_REFERENCE_RACE: &str = "Goblin";

/// Kills-to-level outside this band is flagged.
/// Lower edge; fewer kills than this levels too fast.
pub const PACING_BAND_MIN_KILLS: u64 = 5;
/// Upper edge of the kill band; more kills than this is a grind.
pub const PACING_BAND_MAX_KILLS: u64 = 60;

/// Kills of the reference race needed to afford a mean-priced Rare item
/// beyond which the economy is flagged as too stingy.
pub const MAX_RARE_COST_IN_KILLS: f64 = 200.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_multipliers_are_monotonic() {
        for pair in GRADE_PRICE_MULTIPLIERS.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn test_reference_levels_ordered() {
        assert!(REPORT_LOW_REFERENCE_LEVEL >= 1);
        assert!(REPORT_HIGH_REFERENCE_LEVEL > REPORT_LOW_REFERENCE_LEVEL);
        assert!(PACING_BAND_MAX_KILLS > PACING_BAND_MIN_KILLS);
    }
}
