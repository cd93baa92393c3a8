use super::amount::Amount;
use serde::{Deserialize, Serialize};

/// An order awaiting payment, as created by the checkout flow.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct OrderRequest {
    pub order: String,
    pub amount: Amount,
}

/// An order paired with the dynamic payload the payer should scan.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct DynamicPayloadRecord {
    pub order: String,
    pub amount: Amount,
    pub payload: String,
}
