use crate::attribute::Attribute;
use crate::character::{Character, CharacterId};
use crate::class::Class;
use crate::error::SheetError;
use crate::rules::Rules;
use crate::skill::Skill;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Characters owned by the caller, addressed by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    characters: BTreeMap<CharacterId, Character>,
    next_id: CharacterId,
}

impl Party {
    // A party starts with a single default sheet, "Character 1".
    pub fn new(rules: &Rules) -> Self {
        let mut party = Party::empty();
        party.add_character(rules, "Character 1");
        party
    }

    pub fn empty() -> Self {
        Party {
            characters: BTreeMap::new(),
            next_id: CharacterId::new(1),
        }
    }

    pub fn add_character(&mut self, rules: &Rules, name: impl Into<String>) -> CharacterId {
        let id = self.next_id;
        self.next_id = id.next();
        let character = rules.new_character(id, name);
        debug!("Added character {} ({})", id, character.name);
        self.characters.insert(id, character);
        id
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.values()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    // Run an edit against one character and store the result only if it was accepted.
    fn update<F>(&mut self, id: CharacterId, edit: F) -> Result<&Character, SheetError>
    where
        F: FnOnce(&Character) -> Result<Character, SheetError>,
    {
        let slot = self
            .characters
            .get_mut(&id)
            .ok_or(SheetError::CharacterNotFound(id))?;
        *slot = edit(&*slot)?;
        Ok(&*slot)
    }

    pub fn edit_attribute(
        &mut self,
        rules: &Rules,
        id: CharacterId,
        attribute: Attribute,
        value: i32,
    ) -> Result<&Character, SheetError> {
        self.update(id, |c| Ok(rules.apply_attribute_edit(c, attribute, value)?))
    }

    pub fn edit_skill(
        &mut self,
        rules: &Rules,
        id: CharacterId,
        skill: Skill,
        value: i32,
    ) -> Result<&Character, SheetError> {
        self.update(id, |c| Ok(rules.apply_skill_edit(c, skill, value)?))
    }

    pub fn toggle_class(
        &mut self,
        rules: &Rules,
        id: CharacterId,
        class: Class,
    ) -> Result<&Character, SheetError> {
        self.update(id, |c| Ok(rules.toggle_class_selection(c, class)))
    }

    // Highest skill total wins; ties go to the lowest id.
    pub fn best_for_skill(&self, rules: &Rules, skill: Skill) -> Option<&Character> {
        self.characters
            .values()
            .fold(None::<&Character>, |best, candidate| match best {
                Some(current)
                    if rules.skill_total(current, skill) >= rules.skill_total(candidate, skill) =>
                {
                    Some(current)
                }
                _ => Some(candidate),
            })
    }
}
