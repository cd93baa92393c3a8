//! Dynamic QRIS payload generation.
//!
//! Takes a merchant's static EMVCo-style payment payload and embeds a
//! transaction amount in it, recomputing the CRC-16 checksum so payer
//! wallets accept the result.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::injector::{generate_dynamic, verify_checksum};
pub use domain::amount::Amount;
pub use domain::crc::crc16;
pub use domain::field::{Field, Tag};
pub use domain::tlv::{Payload, parse, serialize};
pub use error::{QrisError, Result};
