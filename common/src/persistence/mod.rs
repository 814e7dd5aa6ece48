mod file_store;
mod memory_store;

pub use file_store::{BestScoreRecord, FileBestScoreStore};
pub use memory_store::InMemoryBestScoreStore;

/// Storage for the single best score kept across games.
///
/// `load_best_score` reports missing or unreadable data as `Ok(0)`; `Err` means the
/// storage itself is unavailable.
pub trait BestScoreStore: Send {
    fn load_best_score(&self) -> Result<u32, String>;
    fn save_best_score(&self, score: u32) -> Result<(), String>;
}
