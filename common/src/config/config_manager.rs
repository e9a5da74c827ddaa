use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer,
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
            config_serializer,
            config_content_provider,
            config: Mutex::new(None),
        }
    }

    /// Loads and validates the stored config once, then serves the cached copy.
    /// Falls back to `TConfig::default()` when nothing is stored.
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

    pub fn content_provider(&self) -> &TConfigContentProvider {
        &self.config_content_provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InMemoryConfigProvider;

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    struct SampleConfig {
        depth: usize,
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.depth > 9 {
                return Err(format!("depth {} is too large", self.depth));
            }
            Ok(())
        }
    }

    fn manager(content: Option<&str>) -> ConfigManager<InMemoryConfigProvider, SampleConfig> {
        ConfigManager::new(
            InMemoryConfigProvider::new(content.map(str::to_string)),
            YamlConfigSerializer,
        )
    }

    #[test]
    fn test_get_config_falls_back_to_default_when_empty() {
        let manager = manager(None);
        assert_eq!(manager.get_config().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_get_config_parses_yaml() {
        let manager = manager(Some("depth: 4\n"));
        assert_eq!(manager.get_config().unwrap(), SampleConfig { depth: 4 });
    }

    #[test]
    fn test_get_config_rejects_invalid_values() {
        let manager = manager(Some("depth: 12\n"));
        let err = manager.get_config().unwrap_err();
        assert!(err.contains("Config validation error"));
    }

    #[test]
    fn test_set_config_writes_through_provider() {
        let manager = manager(None);
        manager.set_config(&SampleConfig { depth: 7 }).unwrap();

        let stored = manager.content_provider().content().unwrap();
        assert!(stored.contains("depth: 7"));
        assert_eq!(manager.get_config().unwrap(), SampleConfig { depth: 7 });
    }

    #[test]
    fn test_set_config_refuses_invalid_values() {
        let manager = manager(None);
        assert!(manager.set_config(&SampleConfig { depth: 10 }).is_err());
        assert!(manager.content_provider().content().is_none());
    }
}
