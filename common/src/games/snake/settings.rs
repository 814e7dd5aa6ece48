use serde::{Deserialize, Serialize};

use crate::config::Validate;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnakeSettings {
    pub tile_count: usize,
    pub initial_length: usize,
    pub initial_speed_ms: u64,
    pub min_speed_ms: u64,
    pub speed_step_ms: u64,
    /// Share of occupied cells above which food is drawn from the free-cell list.
    pub dense_board_threshold: f32,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            tile_count: 20,
            initial_length: 3,
            initial_speed_ms: 130,
            min_speed_ms: 65,
            speed_step_ms: 3,
            dense_board_threshold: 0.7,
            seed: None,
        }
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.tile_count < 5 || self.tile_count > 100 {
            return Err("tile_count must be between 5 and 100".to_string());
        }
        if self.initial_length < 3 {
            return Err("initial_length must be at least 3".to_string());
        }
        if self.initial_length >= self.tile_count {
            return Err("initial_length must be smaller than tile_count".to_string());
        }
        if self.min_speed_ms < 20 {
            return Err("min_speed_ms must be at least 20".to_string());
        }
        if self.initial_speed_ms > 5000 {
            return Err("initial_speed_ms must not exceed 5000".to_string());
        }
        if self.min_speed_ms > self.initial_speed_ms {
            return Err("min_speed_ms must not exceed initial_speed_ms".to_string());
        }
        if self.speed_step_ms > 1000 {
            return Err("speed_step_ms must not exceed 1000".to_string());
        }
        if !(self.dense_board_threshold > 0.0 && self.dense_board_threshold <= 1.0) {
            return Err("dense_board_threshold must be greater than 0 and at most 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSerializer, YamlConfigSerializer};

    #[test]
    fn test_default_settings_are_valid() {
        assert!(SnakeSettings::default().validate().is_ok());
    }

    #[test]
    fn test_min_speed_above_initial_is_rejected() {
        let settings = SnakeSettings {
            min_speed_ms: 200,
            ..SnakeSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_snake_longer_than_row_is_rejected() {
        let settings = SnakeSettings {
            tile_count: 5,
            initial_length: 5,
            ..SnakeSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_seed_is_optional_in_yaml() {
        let yaml = "tile_count: 12\ninitial_length: 4\ninitial_speed_ms: 150\nmin_speed_ms: 60\nspeed_step_ms: 5\ndense_board_threshold: 0.5\n";
        let settings: SnakeSettings = YamlConfigSerializer::new().deserialize(yaml).unwrap();
        assert_eq!(settings.tile_count, 12);
        assert_eq!(settings.seed, None);
        assert!(settings.validate().is_ok());
    }
}
