use roamly_catalog::PricingConfig;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    File,
    /// Read-only mode: every collection serves its seed
    Unavailable,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Only used by the file backend
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("data/roamly.json")
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_filter() }
    }
}

fn default_filter() -> String {
    "info".into()
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Layer `default`, the `RUN_MODE` file, `local`, then `ROAMLY__*`
    /// environment variables.
    pub fn load_from(dir: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let dir = dir.as_ref();
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let layer = |name: &str| dir.join(name).to_string_lossy().into_owned();

        let s = config::Config::builder()
            .add_source(config::File::with_name(&layer("default")))
            // optional per-environment overrides
            .add_source(config::File::with_name(&layer(&run_mode)).required(false))
            // not checked in
            .add_source(config::File::with_name(&layer("local")).required(false))
            // e.g. ROAMLY__STORAGE__BACKEND=file
            .add_source(config::Environment::with_prefix("ROAMLY").prefix_separator("__").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_dir(files: &[(&str, &str)]) -> PathBuf {
        let dir = env::temp_dir().join(format!("roamly-config-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        for (name, body) in files {
            fs::write(dir.join(name), body).unwrap();
        }
        dir
    }

    #[test]
    fn test_defaults_fill_missing_sections() {
        let dir = config_dir(&[("default.toml", "[storage]\nbackend = \"memory\"\n")]);
        let config = Config::load_from(&dir).unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.logging.filter, "info");
        assert_eq!(config.pricing, PricingConfig::default());
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_local_overrides_default() {
        let dir = config_dir(&[
            ("default.toml", "[storage]\nbackend = \"memory\"\n\n[pricing]\nprice_step = 500\n"),
            ("local.toml", "[storage]\nbackend = \"file\"\npath = \"/tmp/roamly-test.json\"\n\n[pricing]\nprice_step = 1000\n"),
        ]);
        let config = Config::load_from(&dir).unwrap();
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.path, PathBuf::from("/tmp/roamly-test.json"));
        assert_eq!(config.pricing.price_step, 1000);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_missing_default_is_an_error() {
        let dir = config_dir(&[]);
        assert!(Config::load_from(&dir).is_err());
        fs::remove_dir_all(dir).ok();
    }
}
