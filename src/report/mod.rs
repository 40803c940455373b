//! Economy report: cross-checked balance tables and a pass/fail verdict.

mod builder;
mod text;
mod types;
mod verify;

pub use builder::build_economy_report;
pub use types::*;
pub use verify::verify;
