use crate::attribute::Attribute;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString};

// The eighteen fixed skills. Display and parsing use the sheet names.
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
pub enum Skill {
    Acrobatics,
    #[strum(serialize = "Animal Handling")]
    AnimalHandling,
    Arcana,
    Athletics,
    Deception,
    History,
    Insight,
    Intimidation,
    Investigation,
    Medicine,
    Nature,
    Perception,
    Performance,
    Persuasion,
    Religion,
    #[strum(serialize = "Sleight of Hand")]
    SleightOfHand,
    Stealth,
    Survival,
}

impl Skill {
    // The attribute whose modifier is added to this skill.
    pub fn governing_attribute(&self) -> Attribute {
        match self {
            Skill::Athletics => Attribute::Strength,
            Skill::Acrobatics | Skill::SleightOfHand | Skill::Stealth => Attribute::Dexterity,
            Skill::Arcana
            | Skill::History
            | Skill::Investigation
            | Skill::Nature
            | Skill::Religion => Attribute::Intelligence,
            Skill::AnimalHandling
            | Skill::Insight
            | Skill::Medicine
            | Skill::Perception
            | Skill::Survival => Attribute::Wisdom,
            Skill::Deception | Skill::Intimidation | Skill::Performance | Skill::Persuasion => {
                Attribute::Charisma
            }
        }
    }
}

// Point allocation per skill. Every skill is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    points: BTreeMap<Skill, i32>,
}

impl Skills {
    pub fn get(&self, skill: Skill) -> i32 {
        self.points.get(&skill).copied().unwrap_or(0)
    }

    pub fn set(&mut self, skill: Skill, value: i32) {
        self.points.insert(skill, value);
    }

    // Widened so hand-built or deserialized sheets cannot overflow.
    pub fn used(&self) -> i64 {
        self.points.values().map(|points| i64::from(*points)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Skill, i32)> + '_ {
        self.points.iter().map(|(skill, points)| (*skill, *points))
    }
}

impl Default for Skills {
    fn default() -> Self {
        Skills {
            points: Skill::iter().map(|skill| (skill, 0)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn multi_word_names_round_trip_through_display() {
        assert_eq!(Skill::from_str("Sleight of Hand"), Ok(Skill::SleightOfHand));
        assert_eq!(Skill::AnimalHandling.to_string(), "Animal Handling");
        assert!(Skill::from_str("Sleight Of Hand").is_err());
    }

    #[test]
    fn every_attribute_but_constitution_governs_something() {
        let governed: Vec<Attribute> = Skill::iter().map(|s| s.governing_attribute()).collect();
        assert_eq!(governed.len(), 18);
        assert!(!governed.contains(&Attribute::Constitution));
        assert_eq!(
            governed.iter().filter(|a| **a == Attribute::Wisdom).count(),
            5
        );
    }

    #[test]
    fn default_allocation_is_empty() {
        let skills = Skills::default();
        assert_eq!(skills.iter().count(), 18);
        assert_eq!(skills.used(), 0);
    }
}
