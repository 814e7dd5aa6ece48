use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads a validated config through a content provider and caches it.
/// A missing source yields `TConfig::default()` without caching it.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    struct TestConfig {
        tiles: u32,
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            if self.tiles > 100 {
                return Err("tiles must not exceed 100".to_string());
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryProvider {
        content: RefCell<Option<String>>,
        reads: RefCell<usize>,
    }

    impl ConfigContentProvider for MemoryProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            *self.reads.borrow_mut() += 1;
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), String> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    fn manager_with(content: Option<&str>) -> ConfigManager<MemoryProvider, TestConfig> {
        let provider = MemoryProvider {
            content: RefCell::new(content.map(str::to_string)),
            reads: RefCell::new(0),
        };
        ConfigManager::new(provider, YamlConfigSerializer::new())
    }

    #[test]
    fn test_missing_content_returns_default() {
        let manager = manager_with(None);
        assert_eq!(manager.get_config().unwrap(), TestConfig::default());
    }

    #[test]
    fn test_loaded_config_is_cached() {
        let manager = manager_with(Some("tiles: 20\n"));
        assert_eq!(manager.get_config().unwrap().tiles, 20);
        assert_eq!(manager.get_config().unwrap().tiles, 20);
        assert_eq!(*manager.config_content_provider.reads.borrow(), 1);
    }

    #[test]
    fn test_invalid_config_is_rejected_on_load() {
        let manager = manager_with(Some("tiles: 500\n"));
        let err = manager.get_config().unwrap_err();
        assert!(err.contains("validation"), "{}", err);
    }

    #[test]
    fn test_set_config_rejects_invalid_and_keeps_content() {
        let manager = manager_with(None);
        assert!(manager.set_config(&TestConfig { tiles: 101 }).is_err());
        assert!(manager.config_content_provider.content.borrow().is_none());

        manager.set_config(&TestConfig { tiles: 30 }).unwrap();
        assert_eq!(manager.get_config().unwrap().tiles, 30);
    }
}
