//! Error types shared by every balance model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;

/// Validation failure for a single record or a single model call.
///
/// These are deterministic: retrying the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BalanceError {
    /// Curve functions are only defined for level >= 1.
    #[error("invalid level {level}: levels start at 1")]
    InvalidLevel { level: u32 },

    /// A pacing target asked for zero or negative kills.
    #[error("invalid pacing target for {race}: target kills must be positive, got {kills}")]
    InvalidPacingTarget { race: String, kills: i64 },

    /// Grade ordinal outside None..=Legendary.
    #[error("unknown grade ordinal {ordinal}")]
    UnknownGrade { ordinal: u8 },

    /// Floor outside `[1, floor_count]`.
    #[error("floor {floor} out of range 1..={floor_count}")]
    FloorOutOfRange { floor: u32, floor_count: u32 },

    /// Pacing target names a race that is not in the handed collection.
    #[error("unknown monster race {race}")]
    UnknownRace { race: String },

    /// A balance profile constant that would break the curve invariants.
    #[error("invalid balance profile: {0}")]
    InvalidProfile(String),
}

pub type Result<T> = std::result::Result<T, BalanceError>;

/// Failure loading or saving a snapshot or profile file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Balance(#[from] BalanceError),

    #[error("could not determine home directory")]
    NoHomeDir,
}

/// Which content family a failed record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    Race,
    PacingTarget,
    Dungeon,
    Item,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Race => "race",
            RecordKind::PacingTarget => "pacing target",
            RecordKind::Dungeon => "dungeon",
            RecordKind::Item => "item",
        };
        f.write_str(name)
    }
}

/// A record skipped by a batch operation, kept so reports never drop it silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordFailure {
    pub kind: RecordKind,
    pub id: String,
    pub reason: String,
}

impl RecordFailure {
    pub fn new(kind: RecordKind, id: impl Into<String>, error: &BalanceError) -> Self {
        Self {
            kind,
            id: id.into(),
            reason: error.to_string(),
        }
    }
}

impl fmt::Display for RecordFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}': {}", self.kind, self.id, self.reason)
    }
}
