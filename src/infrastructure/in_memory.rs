use crate::domain::ports::{MerchantConfig, MerchantConfigSource};
use crate::error::Result;

/// A configuration source holding a fixed `MerchantConfig`.
///
/// Used when the static payload is given directly on the command line, and
/// in tests.
#[derive(Debug, Clone)]
pub struct InMemoryConfigSource {
    config: MerchantConfig,
}

impl InMemoryConfigSource {
    pub fn new(config: MerchantConfig) -> Self {
        Self { config }
    }

    /// Wraps a bare static payload in an otherwise empty configuration.
    pub fn from_payload(qris_static: impl Into<String>) -> Self {
        Self::new(MerchantConfig {
            store_name: String::new(),
            store_slogan: None,
            logo_url: None,
            qris_static: qris_static.into(),
        })
    }
}

impl MerchantConfigSource for InMemoryConfigSource {
    fn load(&self) -> Result<MerchantConfig> {
        Ok(self.config.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_config_source() {
        let source = InMemoryConfigSource::from_payload("0002015802ID");
        let config = source.load().unwrap();
        assert_eq!(config.qris_static, "0002015802ID");
        assert!(config.store_slogan.is_none());
    }
}
