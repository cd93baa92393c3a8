use crate::domain::amount::Amount;
use crate::domain::crc::crc16;
use crate::domain::field::Tag;
use crate::domain::tlv::{self, Payload};
use crate::error::{QrisError, Result};

/// Header of the checksum field: tag `63`, length `04`.
pub const CRC_HEADER: &str = "6304";

/// Turns a static payload into a dynamic one carrying `amount`.
///
/// Any existing checksum field is dropped, the amount is set (see
/// [`Payload::set_amount`]) and a fresh checksum is appended. The CRC covers
/// the whole body including the `6304` header of the checksum field itself.
pub fn generate_dynamic(static_payload: &str, amount: &Amount) -> Result<String> {
    let mut payload = Payload::parse(static_payload)?;
    let stale = payload.remove_all(Tag::CRC);
    tracing::debug!(fields = payload.len(), stale_checksums = stale, "parsed static payload");

    let amount = amount.to_payload_string();
    payload.set_amount(amount.as_str());

    let mut body = payload.encode()?;
    body.push_str(CRC_HEADER);
    let checksum = crc16(&body);
    tracing::debug!(%amount, %checksum, "built dynamic payload");

    body.push_str(&checksum);
    Ok(body)
}

/// Checks that `payload` ends with a `63` field whose value matches the CRC
/// of everything before it.
///
/// The comparison ignores hex case since some issuers print lowercase
/// digits.
pub fn verify_checksum(payload: &str) -> Result<()> {
    let fields = tlv::parse(payload)?;
    match fields.last() {
        Some(last) if last.tag == Tag::CRC && last.value.len() == 4 => {}
        _ => return Err(QrisError::MissingChecksum),
    }

    let (covered, found) = payload.split_at(payload.len() - 4);
    let expected = crc16(covered);
    if expected.eq_ignore_ascii_case(found) {
        Ok(())
    } else {
        Err(QrisError::ChecksumMismatch {
            expected,
            found: found.to_string(),
        })
    }
}
