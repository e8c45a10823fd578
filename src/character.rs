// Import necessary modules from external crates.
use crate::attribute::{Attribute, Attributes};
use crate::class::Class;
use crate::skill::{Skill, Skills};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

// Stable identifier of a character within a party.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize,
)]
pub struct CharacterId(u32);

impl CharacterId {
    pub const fn new(value: u32) -> Self {
        CharacterId(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub(crate) fn next(&self) -> Self {
        CharacterId(self.0.saturating_add(1))
    }
}

// A single character's sheet: attributes, skill allocation and chosen class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    id: CharacterId, // Immutable once created; no setter.
    pub name: String,
    pub attributes: Attributes,
    pub skills: Skills,
    pub selected_class: Option<Class>,
}

impl Character {
    // Fresh sheet: every attribute 10, no skill points spent, no class.
    pub fn new(id: CharacterId, name: impl Into<String>) -> Self {
        Character {
            id,
            name: name.into(),
            attributes: Attributes::default(),
            skills: Skills::default(),
            selected_class: None,
        }
    }

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn attribute(&self, attribute: Attribute) -> i32 {
        self.attributes.get(attribute)
    }

    pub fn skill_points(&self, skill: Skill) -> i32 {
        self.skills.get(skill)
    }
}

// Builder for sheets that do not start from the defaults.
// Values are taken as given; use the rules engine to validate edits.
pub struct CharacterBuilder {
    character: Character,
}

impl CharacterBuilder {
    pub fn new(id: CharacterId, name: impl Into<String>) -> Self {
        CharacterBuilder {
            character: Character::new(id, name),
        }
    }

    pub fn attribute(mut self, attribute: Attribute, value: i32) -> Self {
        self.character.attributes.set(attribute, value);
        self
    }

    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.character.attributes = attributes;
        self
    }

    pub fn skill(mut self, skill: Skill, points: i32) -> Self {
        self.character.skills.set(skill, points);
        self
    }

    pub fn class(mut self, class: Class) -> Self {
        self.character.selected_class = Some(class);
        self
    }

    pub fn build(self) -> Character {
        self.character
    }
}
