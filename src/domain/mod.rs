//! Payload model: fields, the TLV codec, the checksum and amounts.

pub mod amount;
pub mod crc;
pub mod field;
pub mod order;
pub mod ports;
pub mod tlv;
