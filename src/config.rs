use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Runtime configuration for the recipe tool
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// JSON file to load recipes from instead of the bundled collection
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with CAKE_RECIPES__ prefix
    /// 2. recipes.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: CAKE_RECIPES__DATA_FILE
    pub fn load() -> Result<Self, ConfigError> {
        load_config(File::with_name("recipes").required(false))
    }
}

fn load_config<S>(file: S) -> Result<AppConfig, ConfigError>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix("CAKE_RECIPES")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_has_no_data_file() {
        assert!(AppConfig::default().data_file.is_none());
    }

    #[test]
    fn test_load_data_file_from_toml() {
        let source = File::from_str("data_file = \"/tmp/cakes.json\"", FileFormat::Toml);
        let config = load_config(source).unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/cakes.json")));
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = load_config(File::from_str("", FileFormat::Toml)).unwrap();
        assert!(config.data_file.is_none());
    }
}
