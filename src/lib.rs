pub mod attribute;
pub mod character;
pub mod check;
pub mod class;
pub mod config;
pub mod error;
pub mod logging;
pub mod party;
pub mod rules;
pub mod skill;

// Re-export commonly used items for easier access
pub use attribute::{Attribute, Attributes};
pub use character::{Character, CharacterBuilder, CharacterId};
pub use check::{
    Outcome, PartySkillCheck, SkillCheck, SkillCheckResult, resolve_skill_check, resolve_with_roll,
};
pub use class::Class;
pub use config::RulesConfig;
pub use error::{
    AttributeRejection, ConfigError, EditError, LoggingError, SheetError, SkillRejection,
};
pub use party::Party;
pub use rules::{RequirementStatus, Rules, modifier};
pub use skill::{Skill, Skills};
