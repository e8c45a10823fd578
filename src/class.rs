use crate::attribute::Attribute;
use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString};

// Character archetypes selectable on the sheet.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    strum_macros::Display,
)]
pub enum Class {
    Barbarian,
    Bard,
    Cleric,
    Druid,
    Fighter,
    Monk,
    Paladin,
    Ranger,
    Rogue,
    Sorcerer,
    Warlock,
    Wizard,
}

impl Class {
    // Minimum attribute scores required to play the class.
    pub fn minimums(&self) -> &'static [(Attribute, i32)] {
        use Attribute::*;
        match self {
            Class::Barbarian => &[(Strength, 14), (Constitution, 12)],
            Class::Bard => &[(Charisma, 14), (Dexterity, 12)],
            Class::Cleric => &[(Wisdom, 14), (Charisma, 12)],
            Class::Druid => &[(Wisdom, 14), (Constitution, 12)],
            Class::Fighter => &[(Strength, 14), (Constitution, 12)],
            Class::Monk => &[(Dexterity, 14), (Wisdom, 12)],
            Class::Paladin => &[(Strength, 14), (Charisma, 14)],
            Class::Ranger => &[(Dexterity, 14), (Wisdom, 12)],
            Class::Rogue => &[(Dexterity, 14), (Intelligence, 12)],
            Class::Sorcerer => &[(Charisma, 14), (Constitution, 12)],
            Class::Warlock => &[(Charisma, 14), (Wisdom, 12)],
            Class::Wizard => &[(Intelligence, 14), (Wisdom, 12)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_class_has_two_requirements() {
        assert_eq!(Class::iter().count(), 12);
        assert!(Class::iter().all(|c| c.minimums().len() == 2));
    }
}
