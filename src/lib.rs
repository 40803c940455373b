//! Economy balancing engine.
//!
//! Keeps character leveling, monster rewards, dungeon rewards, and item
//! pricing consistent with each other. Works forward (report on current
//! content) and inverse (solve base rewards from pacing targets).
//!
//! Every model reads its constants from a [`core::BalanceProfile`] and only
//! touches the records it is handed.

pub mod build_info;
pub mod content;
pub mod core;
pub mod dungeon;
pub mod enhancement;
pub mod error;
pub mod items;
pub mod report;
pub mod rewards;

pub use crate::core::BalanceProfile;
pub use content::ContentSnapshot;
pub use error::{BalanceError, RecordFailure, Result, StoreError};
pub use items::reprice_items;
pub use report::{build_economy_report, EconomyReport};
pub use rewards::solve_and_apply_pacing;
