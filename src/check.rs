// Import required modules and crates.
use crate::character::{Character, CharacterId};
use crate::error::SheetError;
use crate::party::Party;
use crate::rules::Rules;
use crate::skill::Skill;
use log::info;
use rand::Rng; // Randomness is always supplied by the caller.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
pub enum Outcome {
    Success,
    Failure,
}

// Structure to encapsulate the result of a skill check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCheckResult {
    pub roll: i32,        // The natural die result.
    pub skill_total: i64, // Points plus governing modifier at the time of the roll.
    pub total: i64,
    pub outcome: Outcome,
}

// Resolve a check for a roll that has already been made. The roll must be on the die.
pub fn resolve_with_roll(
    rules: &Rules,
    roll: i32,
    character: &Character,
    skill: Skill,
    dc: i32,
) -> Result<SkillCheckResult, SheetError> {
    let sides = rules.config().die_sides;
    if !(1..=sides).contains(&roll) {
        return Err(SheetError::RollOutOfRange { roll, sides });
    }
    Ok(resolve(rules, roll, character, skill, dc))
}

// Roll the die and resolve the check. Does not touch the character.
pub fn resolve_skill_check<R: Rng + ?Sized>(
    rules: &Rules,
    rng: &mut R,
    character: &Character,
    skill: Skill,
    dc: i32,
) -> SkillCheckResult {
    let roll = roll_die(rng, rules.config().die_sides);
    resolve(rules, roll, character, skill, dc)
}

fn resolve(
    rules: &Rules,
    roll: i32,
    character: &Character,
    skill: Skill,
    dc: i32,
) -> SkillCheckResult {
    let skill_total = rules.skill_total(character, skill);
    let total = i64::from(roll) + skill_total;
    let outcome = if total >= i64::from(dc) {
        Outcome::Success
    } else {
        Outcome::Failure
    };

    info!(
        "{} check for character {}: {} + {} = {} vs DC {} -> {}",
        skill,
        character.id(),
        roll,
        skill_total,
        total,
        dc,
        outcome
    );

    SkillCheckResult {
        roll,
        skill_total,
        total,
        outcome,
    }
}

// Helper function to roll a single die with the given number of sides.
fn roll_die<R: Rng + ?Sized>(rng: &mut R, sides: i32) -> i32 {
    rng.random_range(1..=sides.max(1))
}

// A pending skill check as set up on the sheet: which skill, against what DC, for whom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCheck {
    pub skill: Skill,
    pub dc: i32,
    pub character_id: CharacterId,
    pub result: Option<SkillCheckResult>,
}

impl SkillCheck {
    pub fn new(rules: &Rules) -> Self {
        SkillCheck {
            skill: Skill::Acrobatics,
            dc: rules.config().default_dc,
            character_id: CharacterId::new(1),
            result: None,
        }
    }

    // Roll for the selected character. A missing character keeps the previous result.
    pub fn perform<R: Rng + ?Sized>(
        &mut self,
        rules: &Rules,
        party: &Party,
        rng: &mut R,
    ) -> Result<&SkillCheckResult, SheetError> {
        let character = party
            .get(self.character_id)
            .ok_or(SheetError::CharacterNotFound(self.character_id))?;
        let result = resolve_skill_check(rules, rng, character, self.skill, self.dc);
        Ok(&*self.result.insert(result))
    }
}

// Party-wide check: the member best at the skill rolls on behalf of everyone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartySkillCheck {
    pub skill: Skill,
    pub dc: i32,
    pub character_id: Option<CharacterId>, // Filled in with whoever rolled.
    pub result: Option<SkillCheckResult>,
}

impl PartySkillCheck {
    pub fn new(rules: &Rules) -> Self {
        PartySkillCheck {
            skill: Skill::Acrobatics,
            dc: rules.config().default_dc,
            character_id: None,
            result: None,
        }
    }

    pub fn perform<R: Rng + ?Sized>(
        &mut self,
        rules: &Rules,
        party: &Party,
        rng: &mut R,
    ) -> Result<&SkillCheckResult, SheetError> {
        let character = party
            .best_for_skill(rules, self.skill)
            .ok_or(SheetError::EmptyParty)?;
        let result = resolve_skill_check(rules, rng, character, self.skill, self.dc);
        self.character_id = Some(character.id());
        Ok(&*self.result.insert(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterBuilder;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rolls_stay_on_the_die() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let roll = roll_die(&mut rng, 20);
            assert!((1..=20).contains(&roll));
        }
    }

    #[test]
    fn degenerate_die_always_rolls_one() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(roll_die(&mut rng, 0), 1);
        assert_eq!(roll_die(&mut rng, 1), 1);
    }

    #[test]
    fn supplied_rolls_must_be_on_the_die() {
        let rules = Rules::default();
        let character = rules.new_character(CharacterId::new(1), "Character 1");
        for roll in [0, 21, -1, i32::MAX, i32::MIN] {
            assert_eq!(
                resolve_with_roll(&rules, roll, &character, Skill::Stealth, 5),
                Err(SheetError::RollOutOfRange { roll, sides: 20 })
            );
        }
        assert!(resolve_with_roll(&rules, 20, &character, Skill::Stealth, 5).is_ok());
    }

    #[test]
    fn totals_do_not_overflow_on_extreme_sheets() {
        let rules = Rules::default();
        let character = CharacterBuilder::new(CharacterId::new(1), "Maxed")
            .skill(Skill::Stealth, i32::MAX)
            .build();
        let result = resolve_with_roll(&rules, 20, &character, Skill::Stealth, i32::MAX)
            .expect("on the die");
        assert_eq!(result.total, i64::from(i32::MAX) + 20);
        assert_eq!(result.outcome, Outcome::Success);
    }
}
