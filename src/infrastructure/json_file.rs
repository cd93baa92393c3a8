use crate::domain::ports::{MerchantConfig, MerchantConfigSource};
use crate::error::{QrisError, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Reads the merchant configuration from a JSON file.
///
/// The file may hold the configuration object itself or the backend's
/// `getConfig` response, which nests it under a `config` key.
#[derive(Debug, Clone)]
pub struct JsonFileConfigSource {
    path: PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ConfigDocument {
    Envelope { config: MerchantConfig },
    Bare(MerchantConfig),
}

impl JsonFileConfigSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl MerchantConfigSource for JsonFileConfigSource {
    fn load(&self) -> Result<MerchantConfig> {
        let file = File::open(&self.path)?;
        let document: ConfigDocument = serde_json::from_reader(BufReader::new(file))?;
        let mut config = match document {
            ConfigDocument::Envelope { config } | ConfigDocument::Bare(config) => config,
        };

        config.qris_static = config.qris_static.trim().to_string();
        if config.qris_static.is_empty() {
            return Err(QrisError::ConfigError(format!(
                "{} has an empty qris_static",
                self.path.display()
            )));
        }
        tracing::debug!(path = %self.path.display(), store = %config.store_name, "loaded merchant config");
        Ok(config)
    }
}
