use super::injector::generate_dynamic;
use crate::domain::amount::Amount;
use crate::domain::order::{DynamicPayloadRecord, OrderRequest};
use crate::domain::ports::{MerchantConfig, MerchantConfigBox};
use crate::error::Result;

/// Produces payment payloads for a single merchant.
///
/// `Checkout` owns the configuration source and reads the static payload
/// from it on every `dynamic_payload` call, so a source backed by a file
/// picks up edits without a restart. Runs that build many payloads should
/// [`prepare`](Checkout::prepare) once instead.
pub struct Checkout {
    config_source: MerchantConfigBox,
}

impl Checkout {
    /// Creates a new `Checkout` reading the merchant's settings from `config_source`.
    pub fn new(config_source: MerchantConfigBox) -> Self {
        Self { config_source }
    }

    /// Loads the merchant configuration once and keeps it for every
    /// payload built from the returned value.
    pub fn prepare(&self) -> Result<PreparedCheckout> {
        let config = self.config_source.load()?;
        tracing::debug!(store = %config.store_name, "loaded merchant config");
        Ok(PreparedCheckout { config })
    }

    /// Dynamic payload for `amount`, built from the merchant's static payload.
    pub fn dynamic_payload(&self, amount: &Amount) -> Result<String> {
        self.prepare()?.dynamic_payload(amount)
    }
}

/// A checkout bound to one snapshot of the merchant configuration.
#[derive(Debug, Clone)]
pub struct PreparedCheckout {
    config: MerchantConfig,
}

impl PreparedCheckout {
    pub fn dynamic_payload(&self, amount: &Amount) -> Result<String> {
        generate_dynamic(&self.config.qris_static, amount)
    }

    /// Attaches a dynamic payload to `order`.
    pub fn process_order(&self, order: OrderRequest) -> Result<DynamicPayloadRecord> {
        let payload = self.dynamic_payload(&order.amount)?;
        tracing::info!(order = %order.order, amount = %order.amount, "generated payload");
        Ok(DynamicPayloadRecord {
            order: order.order,
            amount: order.amount,
            payload,
        })
    }
}
