use serde::{Deserialize, Serialize};

/// One tier of the enhancement cost curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancementStep {
    pub tier: u32,
    pub cost: u64,
    /// Total gold spent on tiers 0..=tier.
    pub cumulative_cost: u64,
}
