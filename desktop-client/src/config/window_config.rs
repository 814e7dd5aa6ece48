use serde::{Deserialize, Serialize};
use snake3d_common::config::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if self.width < 320.0 || self.height < 320.0 {
            return Err("window must be at least 320x320".to_string());
        }
        if self.width > 4096.0 || self.height > 4096.0 {
            return Err("window must not exceed 4096x4096".to_string());
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 760.0,
        }
    }
}
