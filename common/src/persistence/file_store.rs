use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, YamlConfigSerializer};
use crate::log;
use super::BestScoreStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScoreRecord {
    pub best_score: u32,
}

pub struct FileBestScoreStore {
    content_provider: FileContentConfigProvider,
    serializer: YamlConfigSerializer,
}

impl FileBestScoreStore {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            content_provider: FileContentConfigProvider::new(file_path.as_ref()),
            serializer: YamlConfigSerializer::new(),
        }
    }

    fn parse(&self, content: &str) -> Option<u32> {
        let record: Result<BestScoreRecord, String> = self.serializer.deserialize(content);
        match record {
            Ok(record) => Some(record.best_score),
            // Older saves hold just the number.
            Err(_) => content.trim().parse::<u32>().ok(),
        }
    }
}

impl BestScoreStore for FileBestScoreStore {
    fn load_best_score(&self) -> Result<u32, String> {
        let path = self.content_provider.path();
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(0),
            Err(err) => return Err(format!("Failed to read {}: {}", path.display(), err)),
        };

        let score = std::str::from_utf8(&bytes)
            .ok()
            .and_then(|content| self.parse(content));
        match score {
            Some(score) => Ok(score),
            None => {
                log!("Ignoring unreadable best score in {}", path.display());
                Ok(0)
            }
        }
    }

    fn save_best_score(&self, score: u32) -> Result<(), String> {
        let content = self.serializer.serialize(&BestScoreRecord { best_score: score })?;
        self.content_provider.set_config_content(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::{GameObserver, GameSession, GameSnapshot, SnakeSettings};

    fn get_temp_file_path() -> std::path::PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_snake3d_best_score_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_file_loads_zero() {
        let store = FileBestScoreStore::new(get_temp_file_path());
        assert_eq!(store.load_best_score(), Ok(0));
    }

    #[test]
    fn test_saved_score_is_loaded_back() {
        let path = get_temp_file_path();
        let store = FileBestScoreStore::new(&path);
        store.save_best_score(37).unwrap();

        let reopened = FileBestScoreStore::new(&path);
        assert_eq!(reopened.load_best_score(), Ok(37));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_bare_number_is_accepted() {
        let path = get_temp_file_path();
        std::fs::write(&path, "12\n").unwrap();
        assert_eq!(FileBestScoreStore::new(&path).load_best_score(), Ok(12));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_garbage_loads_zero() {
        let path = get_temp_file_path();
        std::fs::write(&path, "best_score: [not, a, number]\n").unwrap();
        assert_eq!(FileBestScoreStore::new(&path).load_best_score(), Ok(0));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_non_utf8_content_loads_zero() {
        let path = get_temp_file_path();
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x31]).unwrap();
        assert_eq!(FileBestScoreStore::new(&path).load_best_score(), Ok(0));
        let _ = std::fs::remove_file(path);
    }

    struct SilentObserver;

    impl GameObserver for SilentObserver {
        fn render_frame(&self, _snapshot: &GameSnapshot) {}
    }

    #[test]
    fn test_session_on_non_utf8_file_keeps_saving() {
        let path = get_temp_file_path();
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x31]).unwrap();

        let session = GameSession::new(
            SnakeSettings::default(),
            Box::new(FileBestScoreStore::new(&path)),
            SilentObserver,
        )
        .unwrap();

        assert!(session.is_best_score_persistent());
        assert_eq!(session.best_score(), 0);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_directory_in_place_of_file_is_an_error() {
        let store = FileBestScoreStore::new(std::env::temp_dir());
        assert!(store.load_best_score().is_err());
    }
}
