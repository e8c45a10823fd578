// Derived values and validated edits for a character sheet.
// Every operation reads the character it is given and, for edits, returns a
// new record. Nothing is cached between calls.

use crate::attribute::{Attribute, Attributes};
use crate::character::{Character, CharacterId};
use crate::class::Class;
use crate::config::RulesConfig;
use crate::error::{AttributeRejection, ConfigError, EditError, SheetError, SkillRejection};
use crate::skill::{Skill, Skills};
use log::{debug, info};
use std::str::FromStr;
use strum::IntoEnumIterator;

// Attribute modifier: floor((score - 10) / 2), rounding toward negative infinity.
pub fn modifier(score: i32) -> i32 {
    (i64::from(score) - 10).div_euclid(2) as i32
}

// One line of the class requirements panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementStatus {
    pub attribute: Attribute,
    pub minimum: i32,
    pub current: i32,
    pub met: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Rules {
    config: RulesConfig,
}

impl Rules {
    // Only validated configurations make it into an engine.
    pub fn new(config: RulesConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Rules { config })
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn new_character(&self, id: CharacterId, name: impl Into<String>) -> Character {
        let mut character = Character::new(id, name);
        character.attributes = Attributes::uniform(self.config.default_score);
        character.skills = Skills::default();
        character
    }

    // region:  --- Classes

    pub fn meets_class_requirements(&self, character: &Character, class: Class) -> bool {
        class
            .minimums()
            .iter()
            .all(|(attribute, minimum)| character.attribute(*attribute) >= *minimum)
    }

    // An unknown class name is never met.
    pub fn meets_class_requirements_named(&self, character: &Character, class_name: &str) -> bool {
        Class::from_str(class_name)
            .map(|class| self.meets_class_requirements(character, class))
            .unwrap_or(false)
    }

    pub fn class_requirements(&self, character: &Character, class: Class) -> Vec<RequirementStatus> {
        class
            .minimums()
            .iter()
            .map(|(attribute, minimum)| {
                let current = character.attribute(*attribute);
                RequirementStatus {
                    attribute: *attribute,
                    minimum: *minimum,
                    current,
                    met: current >= *minimum,
                }
            })
            .collect()
    }

    pub fn eligible_classes(&self, character: &Character) -> Vec<Class> {
        Class::iter()
            .filter(|class| self.meets_class_requirements(character, *class))
            .collect()
    }

    // Selecting the current class clears it. Eligibility is not checked.
    pub fn toggle_class_selection(&self, character: &Character, class: Class) -> Character {
        let mut updated = character.clone();
        updated.selected_class = if character.selected_class == Some(class) {
            None
        } else {
            Some(class)
        };
        debug!(
            "Character {} class selection: {:?}",
            character.id(),
            updated.selected_class
        );
        updated
    }

    pub fn toggle_class_selection_named(
        &self,
        character: &Character,
        class_name: &str,
    ) -> Result<Character, SheetError> {
        let class = Class::from_str(class_name)
            .map_err(|_| SheetError::UnknownClass(class_name.to_string()))?;
        Ok(self.toggle_class_selection(character, class))
    }

    // endregion:  --- Classes

    // region:  --- Skill points

    // Point arithmetic is done in i64 so arbitrary sheets cannot overflow it.
    pub fn available_skill_points(&self, character: &Character) -> i64 {
        i64::from(self.config.base_skill_points)
            + i64::from(self.config.skill_points_per_int_modifier)
                * i64::from(modifier(character.attribute(Attribute::Intelligence)))
    }

    pub fn used_skill_points(&self, character: &Character) -> i64 {
        character.skills.used()
    }

    // Negative when a lowered Intelligence left the sheet over budget.
    pub fn remaining_skill_points(&self, character: &Character) -> i64 {
        self.available_skill_points(character) - self.used_skill_points(character)
    }

    pub fn skill_total(&self, character: &Character, skill: Skill) -> i64 {
        i64::from(character.skill_points(skill))
            + i64::from(modifier(character.attribute(skill.governing_attribute())))
    }

    // Unknown skills count as 0.
    pub fn skill_total_named(&self, character: &Character, skill_name: &str) -> i64 {
        Skill::from_str(skill_name)
            .map(|skill| self.skill_total(character, skill))
            .unwrap_or(0)
    }

    // endregion:  --- Skill points

    // region:  --- Edits

    pub fn apply_attribute_edit(
        &self,
        character: &Character,
        attribute: Attribute,
        new_value: i32,
    ) -> Result<Character, EditError> {
        let reject = |reason: AttributeRejection| {
            info!(
                "Rejected {} = {} for character {}: {:?}",
                attribute,
                new_value,
                character.id(),
                reason
            );
            EditError::InvalidAttributeValue {
                attribute,
                value: new_value,
                reason,
            }
        };

        if new_value < self.config.attribute_floor {
            return Err(reject(AttributeRejection::BelowMinimum {
                minimum: self.config.attribute_floor,
            }));
        }

        let total = character.attributes.total() - i64::from(character.attribute(attribute))
            + i64::from(new_value);
        if total > self.config.attribute_total_cap {
            return Err(reject(AttributeRejection::ExceedsTotalCap {
                total,
                cap: self.config.attribute_total_cap,
            }));
        }

        let mut updated = character.clone();
        updated.attributes.set(attribute, new_value);
        debug!(
            "Character {} {} set to {}",
            character.id(),
            attribute,
            new_value
        );
        Ok(updated)
    }

    pub fn apply_attribute_edit_named(
        &self,
        character: &Character,
        attribute_name: &str,
        new_value: i32,
    ) -> Result<Character, SheetError> {
        let attribute = Attribute::from_str(attribute_name)
            .map_err(|_| SheetError::UnknownAttribute(attribute_name.to_string()))?;
        Ok(self.apply_attribute_edit(character, attribute, new_value)?)
    }

    // Only increases are checked against the remaining budget.
    pub fn apply_skill_edit(
        &self,
        character: &Character,
        skill: Skill,
        new_value: i32,
    ) -> Result<Character, EditError> {
        let reject = |reason: SkillRejection| {
            info!(
                "Rejected {} = {} for character {}: {:?}",
                skill,
                new_value,
                character.id(),
                reason
            );
            EditError::InvalidSkillValue {
                skill,
                value: new_value,
                reason,
            }
        };

        if new_value < 0 {
            return Err(reject(SkillRejection::Negative));
        }

        let difference = i64::from(new_value) - i64::from(character.skill_points(skill));
        let remaining = self.remaining_skill_points(character);
        if difference > 0 && difference > remaining {
            return Err(reject(SkillRejection::InsufficientPoints {
                requested: difference,
                remaining,
            }));
        }

        let mut updated = character.clone();
        updated.skills.set(skill, new_value);
        debug!("Character {} {} set to {}", character.id(), skill, new_value);
        Ok(updated)
    }

    pub fn apply_skill_edit_named(
        &self,
        character: &Character,
        skill_name: &str,
        new_value: i32,
    ) -> Result<Character, SheetError> {
        let skill = Skill::from_str(skill_name)
            .map_err(|_| SheetError::UnknownSkill(skill_name.to_string()))?;
        Ok(self.apply_skill_edit(character, skill, new_value)?)
    }

    // endregion:  --- Edits
}
