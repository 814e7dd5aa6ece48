use std::sync::{Arc, Mutex};

use super::BestScoreStore;

/// Keeps the best score for the lifetime of the process only. Clones share the value.
#[derive(Clone, Default)]
pub struct InMemoryBestScoreStore {
    score: Arc<Mutex<u32>>,
}

impl InMemoryBestScoreStore {
    pub fn new(initial: u32) -> Self {
        Self {
            score: Arc::new(Mutex::new(initial)),
        }
    }
}

impl BestScoreStore for InMemoryBestScoreStore {
    fn load_best_score(&self) -> Result<u32, String> {
        self.score
            .lock()
            .map(|score| *score)
            .map_err(|_| "Best score lock poisoned".to_string())
    }

    fn save_best_score(&self, score: u32) -> Result<(), String> {
        let mut current = self
            .score
            .lock()
            .map_err(|_| "Best score lock poisoned".to_string())?;
        *current = score;
        Ok(())
    }
}
