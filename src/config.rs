// Import necessary libraries for file I/O and serialization.
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

// Rule constants the engine reads. Loaded once, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub attribute_floor: i32,     // Lowest score any attribute may hold.
    pub attribute_total_cap: i64, // Upper bound on the sum of all six scores.
    pub default_score: i32,       // Score every attribute starts at.
    pub base_skill_points: i32,
    pub skill_points_per_int_modifier: i32,
    pub die_sides: i32,
    pub default_dc: i32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            attribute_floor: 1,
            attribute_total_cap: 70,
            default_score: 10,
            base_skill_points: 10,
            skill_points_per_int_modifier: 4,
            die_sides: 20,
            default_dc: 20,
        }
    }
}

impl RulesConfig {
    // Load rules from a JSON file and make sure they are usable.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        let config: RulesConfig = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let data = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(path)?;
        file.write_all(data.as_bytes())?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.attribute_floor < 1 {
            return Err(ConfigError::Invalid(format!(
                "attribute_floor must be at least 1, got {}",
                self.attribute_floor
            )));
        }
        if self.base_skill_points < 0 {
            return Err(ConfigError::Invalid(format!(
                "base_skill_points must not be negative, got {}",
                self.base_skill_points
            )));
        }
        if self.skill_points_per_int_modifier < 0 {
            return Err(ConfigError::Invalid(format!(
                "skill_points_per_int_modifier must not be negative, got {}",
                self.skill_points_per_int_modifier
            )));
        }
        if self.die_sides < 1 {
            return Err(ConfigError::Invalid(format!(
                "die_sides must be at least 1, got {}",
                self.die_sides
            )));
        }
        if self.attribute_total_cap < 6 * i64::from(self.attribute_floor) {
            return Err(ConfigError::Invalid(format!(
                "attribute_total_cap {} is below six times the floor",
                self.attribute_total_cap
            )));
        }
        if self.default_score < self.attribute_floor
            || 6 * i64::from(self.default_score) > self.attribute_total_cap
        {
            return Err(ConfigError::Invalid(format!(
                "default_score {} does not fit within the attribute bounds",
                self.default_score
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(RulesConfig::default().validate().is_ok());
    }

    #[test]
    fn default_score_above_cap_is_rejected() {
        let config = RulesConfig {
            default_score: 12,
            ..RulesConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn negative_skill_points_are_rejected() {
        let config = RulesConfig {
            base_skill_points: -1,
            ..RulesConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: RulesConfig =
            serde_json::from_str(r#"{ "default_dc": 15 }"#).expect("valid json");
        assert_eq!(config.default_dc, 15);
        assert_eq!(config.attribute_total_cap, 70);
    }
}
