use crate::error::{BalanceError, Result};
use serde::{Deserialize, Serialize};

/// Item rarity tier. Ordinals match the content store's encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    None = 0,
    Common = 1,
    Uncommon = 2,
    Rare = 3,
    Epic = 4,
    Legendary = 5,
}

impl Grade {
    pub fn all() -> [Grade; 6] {
        [
            Grade::None,
            Grade::Common,
            Grade::Uncommon,
            Grade::Rare,
            Grade::Epic,
            Grade::Legendary,
        ]
    }

    /// Grades that appear in the price distribution.
    pub fn priced() -> [Grade; 5] {
        [
            Grade::Common,
            Grade::Uncommon,
            Grade::Rare,
            Grade::Epic,
            Grade::Legendary,
        ]
    }

    pub fn from_ordinal(ordinal: u8) -> Result<Grade> {
        Grade::all()
            .get(ordinal as usize)
            .copied()
            .ok_or(BalanceError::UnknownGrade { ordinal })
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the display name for this grade.
    pub fn name(&self) -> &'static str {
        match self {
            Grade::None => "None",
            Grade::Common => "Common",
            Grade::Uncommon => "Uncommon",
            Grade::Rare => "Rare",
            Grade::Epic => "Epic",
            Grade::Legendary => "Legendary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Equipment,
    Other,
}

/// Item as held by the content store.
///
/// `grade` is kept as the store's raw ordinal so a single corrupt record can be
/// reported instead of failing the whole snapshot load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: String,
    pub grade: u8,
    pub kind: ItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon_max_damage: Option<u32>,
    pub sell_price: i64,
}

impl ItemRecord {
    pub fn new(id: impl Into<String>, grade: Grade, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            grade: grade.ordinal(),
            kind,
            weapon_max_damage: None,
            sell_price: 0,
        }
    }

    pub fn weapon(id: impl Into<String>, grade: Grade, max_damage: u32) -> Self {
        Self::new(id, grade, ItemKind::Equipment).with_max_damage(max_damage)
    }

    pub fn armor(id: impl Into<String>, grade: Grade, sell_price: i64) -> Self {
        Self::new(id, grade, ItemKind::Equipment).with_price(sell_price)
    }

    pub fn with_max_damage(mut self, max_damage: u32) -> Self {
        self.weapon_max_damage = Some(max_damage);
        self
    }

    pub fn with_price(mut self, sell_price: i64) -> Self {
        self.sell_price = sell_price;
        self
    }

    pub fn grade(&self) -> Result<Grade> {
        Grade::from_ordinal(self.grade)
    }

    pub fn is_equipment(&self) -> bool {
        self.kind == ItemKind::Equipment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_ordering() {
        assert!(Grade::None < Grade::Common);
        assert!(Grade::Common < Grade::Uncommon);
        assert!(Grade::Uncommon < Grade::Rare);
        assert!(Grade::Rare < Grade::Epic);
        assert!(Grade::Epic < Grade::Legendary);
    }

    #[test]
    fn test_grade_ordinal_round_trip() {
        for grade in Grade::all() {
            assert_eq!(Grade::from_ordinal(grade.ordinal()), Ok(grade));
        }
    }

    #[test]
    fn test_unknown_grade_ordinal() {
        assert_eq!(
            Grade::from_ordinal(6),
            Err(BalanceError::UnknownGrade { ordinal: 6 })
        );
        let item = ItemRecord {
            grade: 42,
            ..ItemRecord::new("Cursed Idol", Grade::Common, ItemKind::Other)
        };
        assert!(item.grade().is_err());
    }

    #[test]
    fn test_builders() {
        let sword = ItemRecord::weapon("Iron Sword", Grade::Common, 12);
        assert!(sword.is_equipment());
        assert_eq!(sword.weapon_max_damage, Some(12));
        assert_eq!(sword.sell_price, 0);

        let vest = ItemRecord::armor("Leather Vest", Grade::Uncommon, 60);
        assert_eq!(vest.weapon_max_damage, None);
        assert_eq!(vest.grade(), Ok(Grade::Uncommon));
    }

    #[test]
    fn test_grade_name() {
        assert_eq!(Grade::None.name(), "None");
        assert_eq!(Grade::Rare.name(), "Rare");
        assert_eq!(Grade::Legendary.name(), "Legendary");
    }
}
