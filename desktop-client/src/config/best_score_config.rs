use serde::{Deserialize, Serialize};
use snake3d_common::config::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BestScoreConfig {
    pub persist: bool,
    pub file: String,
}

impl Validate for BestScoreConfig {
    fn validate(&self) -> Result<(), String> {
        if self.persist && self.file.is_empty() {
            return Err("best score file must not be empty when persist is enabled".to_string());
        }
        Ok(())
    }
}

impl Default for BestScoreConfig {
    fn default() -> Self {
        Self {
            persist: true,
            file: "snake3d_best_score.yaml".to_string(),
        }
    }
}
