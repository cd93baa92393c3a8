use crate::error::Result;
use serde::Deserialize;

/// Store settings delivered by the merchant backend.
///
/// Only `qris_static` matters to payload generation; the rest is carried so
/// a checkout can label what it shows.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct MerchantConfig {
    pub store_name: String,
    #[serde(default)]
    pub store_slogan: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    /// The merchant's static QRIS payload, checksum included.
    pub qris_static: String,
}

/// Where the merchant configuration comes from.
pub trait MerchantConfigSource: Send + Sync {
    fn load(&self) -> Result<MerchantConfig>;
}

pub type MerchantConfigBox = Box<dyn MerchantConfigSource>;
