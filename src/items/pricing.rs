//! Sell price policy.

use super::types::*;
use crate::core::profile::PricingPolicy;
use crate::error::{RecordFailure, RecordKind, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// An item whose price went through the pricing pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepricedItem {
    pub id: String,
    pub previous_price: i64,
    pub price: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepriceOutcome {
    pub repriced: Vec<RepricedItem>,
    pub failures: Vec<RecordFailure>,
}

/// Count and mean sell price for one grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradePriceStats {
    pub grade: Grade,
    pub count: usize,
    /// None when no item of this grade was seen.
    pub mean_price: Option<f64>,
}

/// Compute the price an item should sell for.
///
/// First match wins:
/// 1. equipment with max damage > 0 is priced from damage
/// 2. an existing positive price is treated as already grade-inflated armor:
///    the un-inflated base is recovered and the multiplier reapplied
/// 3. anything else keeps its price
pub fn price_for_item(policy: &PricingPolicy, item: &ItemRecord) -> Result<i64> {
    let grade = item.grade()?;
    let mult = policy.grade_multipliers.get(grade);

    if let Some(damage) = item.weapon_max_damage.filter(|&d| d > 0) {
        if item.is_equipment() {
            return Ok((damage as f64 * policy.weapon_damage_factor * mult).round() as i64);
        }
    }

    if item.sell_price > 0 {
        let base = ((item.sell_price as f64 / mult).floor() as i64).max(policy.min_armor_base);
        return Ok((base as f64 * mult).round() as i64);
    }

    Ok(item.sell_price)
}

/// Run the pricing pass over every item, writing new prices in place.
pub fn reprice_items(policy: &PricingPolicy, items: &mut [ItemRecord]) -> RepriceOutcome {
    let mut outcome = RepriceOutcome::default();

    for item in items.iter_mut() {
        match price_for_item(policy, item) {
            Ok(price) => {
                if price != item.sell_price {
                    debug!(item = %item.id, from = item.sell_price, to = price, "repriced item");
                }
                outcome.repriced.push(RepricedItem {
                    id: item.id.clone(),
                    previous_price: item.sell_price,
                    price,
                });
                item.sell_price = price;
            }
            Err(err) => {
                warn!(item = %item.id, error = %err, "skipping item");
                outcome
                    .failures
                    .push(RecordFailure::new(RecordKind::Item, &item.id, &err));
            }
        }
    }

    info!(
        repriced = outcome.repriced.len(),
        failed = outcome.failures.len(),
        "pricing pass finished"
    );
    outcome
}

/// Count and mean current sell price per grade, Common through Legendary.
///
/// Items with an unknown grade are returned as failures and left out of the
/// stats; None-grade items are ignored.
pub fn price_distribution(items: &[ItemRecord]) -> (Vec<GradePriceStats>, Vec<RecordFailure>) {
    let mut totals = [(0usize, 0i64); 6];
    let mut failures = Vec::new();

    for item in items {
        match item.grade() {
            Ok(grade) => {
                let slot = &mut totals[grade.ordinal() as usize];
                slot.0 += 1;
                slot.1 += item.sell_price;
            }
            Err(err) => failures.push(RecordFailure::new(RecordKind::Item, &item.id, &err)),
        }
    }

    let stats = Grade::priced()
        .into_iter()
        .map(|grade| {
            let (count, total) = totals[grade.ordinal() as usize];
            GradePriceStats {
                grade,
                count,
                mean_price: (count > 0).then(|| total as f64 / count as f64),
            }
        })
        .collect();

    (stats, failures)
}

/// Mean current sell price for a single grade, if any item has it.
pub fn mean_price_for_grade(stats: &[GradePriceStats], grade: Grade) -> Option<f64> {
    stats
        .iter()
        .find(|s| s.grade == grade)
        .and_then(|s| s.mean_price)
}
