//! Leveling curve and the balance profile every model reads.

pub mod balance;
pub mod curve;
pub mod profile;

pub use curve::*;
pub use profile::*;
