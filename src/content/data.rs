//! Built-in sample catalog.

use super::ContentSnapshot;
use crate::dungeon::DungeonRecord;
use crate::items::{Grade, ItemKind, ItemRecord};
use crate::rewards::MonsterRaceRecord;

/// Returns the sample catalog: monster races, dungeons, and items.
///
/// Weapon prices are deliberately stale so a pricing pass has work to do.
pub fn default_catalog() -> ContentSnapshot {
    ContentSnapshot {
        races: vec![
            // Early game: level-1 pacing around 25 kills
            MonsterRaceRecord::new("Goblin", 4, 5),
            MonsterRaceRecord::new("Slime", 3, 5),
            MonsterRaceRecord::new("Wolf", 6, 5),
            // Mid game
            MonsterRaceRecord::new("Orc", 12, 5),
            MonsterRaceRecord::new("Skeleton", 20, 5),
            MonsterRaceRecord::new("Lizardman", 55, 13),
            // Late game
            MonsterRaceRecord::new("Troll", 90, 22),
            MonsterRaceRecord::new("Wyvern", 150, 37),
            MonsterRaceRecord::new("Dragon", 400, 100),
        ],
        dungeons: vec![
            DungeonRecord::new("Goblin Warrens", 40, 15, 5)
                .with_floor_multipliers(1.12, 1.1)
                .with_completion_bonus(1.5),
            DungeonRecord::new("Sunken Crypt", 120, 40, 10)
                .with_floor_multipliers(1.15, 1.12)
                .with_completion_bonus(1.75),
            DungeonRecord::new("Frozen Caverns", 250, 90, 15)
                .with_floor_multipliers(1.15, 1.12)
                .with_completion_bonus(2.0),
            DungeonRecord::new("Dragon's Spire", 500, 200, 20)
                .with_floor_multipliers(1.2, 1.15)
                .with_completion_bonus(2.5),
        ],
        items: vec![
            // Weapons
            ItemRecord::weapon("Rusty Dagger", Grade::None, 4).with_price(30),
            ItemRecord::weapon("Iron Sword", Grade::Common, 12).with_price(100),
            ItemRecord::weapon("Oak Staff", Grade::Common, 9).with_price(90),
            ItemRecord::weapon("Steel Longsword", Grade::Uncommon, 18).with_price(250),
            ItemRecord::weapon("Runed Blade", Grade::Rare, 25).with_price(700),
            ItemRecord::weapon("Stormcaller", Grade::Epic, 38).with_price(2500),
            ItemRecord::weapon("Dawnbreaker", Grade::Legendary, 55).with_price(10000),
            // Armor, prices already carry the grade multiplier
            ItemRecord::armor("Leather Vest", Grade::Common, 40),
            ItemRecord::armor("Wooden Shield", Grade::Common, 30),
            ItemRecord::armor("Chain Mail", Grade::Uncommon, 120),
            ItemRecord::armor("Mithril Chain", Grade::Rare, 450),
            ItemRecord::armor("Dragonscale Plate", Grade::Epic, 2100),
            ItemRecord::armor("Crown of Ages", Grade::Legendary, 8000),
            // Consumables and materials
            ItemRecord::new("Health Potion", Grade::None, ItemKind::Other).with_price(25),
            ItemRecord::new("Mana Potion", Grade::None, ItemKind::Other).with_price(30),
            ItemRecord::new("Enhancement Stone", Grade::Uncommon, ItemKind::Other)
                .with_price(150),
            ItemRecord::new("Quest Letter", Grade::None, ItemKind::Other),
        ],
    }
}
