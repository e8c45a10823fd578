use crate::attribute::Attribute;
use crate::character::CharacterId;
use crate::skill::Skill;
use thiserror::Error;

// Why an attribute edit was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeRejection {
    BelowMinimum { minimum: i32 },
    ExceedsTotalCap { total: i64, cap: i64 },
}

// Why a skill edit was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillRejection {
    Negative,
    InsufficientPoints { requested: i64, remaining: i64 },
}

// Rejected edits. The character is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("Invalid value {value} for {attribute}: {reason:?}")]
    InvalidAttributeValue {
        attribute: Attribute,
        value: i32,
        reason: AttributeRejection,
    },

    #[error("Invalid value {value} for {skill}: {reason:?}")]
    InvalidSkillValue {
        skill: Skill,
        value: i32,
        reason: SkillRejection,
    },
}

// Errors surfaced by lookups and roster operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetError {
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Unknown skill: {0}")]
    UnknownSkill(String),

    #[error("Unknown class: {0}")]
    UnknownClass(String),

    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterId),

    #[error("Roll {roll} is not on a d{sides}")]
    RollOutOfRange { roll: i32, sides: i32 },

    #[error("Party has no characters")]
    EmptyParty,

    #[error("Edit rejected: {0}")]
    Edit(#[from] EditError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid rules configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Could not determine the home directory")]
    NoHomeDirectory,

    #[error("Could not create log directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger already set")]
    AlreadyInitialized,

    #[error("Failed to install logger: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}
