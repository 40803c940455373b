//! Item records, grades, and the sell price model.

pub mod pricing;
pub mod types;

pub use pricing::*;
pub use types::*;
