//! Content snapshots handed to the balance models.
//!
//! The balance models never own content; the surrounding tooling does. A
//! snapshot is the JSON form those records travel in between the two.

pub mod data;
pub mod persistence;

pub use data::default_catalog;
pub use persistence::*;

use crate::dungeon::DungeonRecord;
use crate::items::ItemRecord;
use crate::rewards::MonsterRaceRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSnapshot {
    pub races: Vec<MonsterRaceRecord>,
    pub dungeons: Vec<DungeonRecord>,
    pub items: Vec<ItemRecord>,
}

impl ContentSnapshot {
    pub fn race(&self, race: &str) -> Option<&MonsterRaceRecord> {
        self.races.iter().find(|r| r.race == race)
    }

    pub fn item(&self, id: &str) -> Option<&ItemRecord> {
        self.items.iter().find(|i| i.id == id)
    }
}
