//! Tag-length-value codec for EMVCo-style QR payloads.
//!
//! Each field is `[tag: 2 digits][length: 2 digits][value: length chars]`.
//! Nested templates are left as opaque strings.

use super::field::{Field, Tag};
use crate::error::{QrisError, Result};

/// Characters taken by the tag and length prefix of every field.
pub const HEADER_LEN: usize = 4;

/// Splits `payload` into its fields, in the order they appear.
///
/// Duplicate tags are kept and nothing is validated beyond the framing
/// itself. A field that runs past the end of the input, a length that is not
/// two digits, or a tag that is not two digits fails with
/// [`QrisError::MalformedPayload`].
pub fn parse(payload: &str) -> Result<Vec<Field>> {
    if let Some(offset) = payload.bytes().position(|b| !b.is_ascii()) {
        return Err(QrisError::malformed(offset, "non-ASCII character"));
    }

    let bytes = payload.as_bytes();
    let mut fields = Vec::new();
    let mut offset = 0;

    while offset < bytes.len() {
        let header = bytes.get(offset..offset + HEADER_LEN).ok_or_else(|| {
            QrisError::malformed(
                offset,
                format!(
                    "truncated field header ({} of {HEADER_LEN} characters)",
                    bytes.len() - offset
                ),
            )
        })?;

        let tag = Tag::new([header[0], header[1]])
            .map_err(|_| QrisError::malformed(offset, "tag is not two digits"))?;
        let len = decode_length(header[2], header[3])
            .ok_or_else(|| QrisError::malformed(offset, "length is not two digits"))?;

        let start = offset + HEADER_LEN;
        let value = payload.get(start..start + len).ok_or_else(|| {
            QrisError::malformed(
                offset,
                format!(
                    "tag {tag} declares {len} characters but only {} remain",
                    bytes.len() - start
                ),
            )
        })?;

        fields.push(Field::new(tag, value));
        offset = start + len;
    }

    Ok(fields)
}

/// Encodes `fields` back into a payload string, recomputing every length.
pub fn serialize(fields: &[Field]) -> Result<String> {
    let mut out = String::with_capacity(fields.iter().map(Field::encoded_len).sum());
    for field in fields {
        field.encode_into(&mut out)?;
    }
    Ok(out)
}

fn decode_length(hi: u8, lo: u8) -> Option<usize> {
    if hi.is_ascii_digit() && lo.is_ascii_digit() {
        Some(usize::from(hi - b'0') * 10 + usize::from(lo - b'0'))
    } else {
        None
    }
}

/// An ordered sequence of fields decoded from one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    fields: Vec<Field>,
}

impl Payload {
    pub fn parse(payload: &str) -> Result<Self> {
        parse(payload).map(Self::from)
    }

    pub fn encode(&self) -> Result<String> {
        serialize(&self.fields)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Index of the first field carrying `tag`.
    pub fn position(&self, tag: Tag) -> Option<usize> {
        self.fields.iter().position(|f| f.tag == tag)
    }

    /// Value of the first field carrying `tag`.
    pub fn get(&self, tag: Tag) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.tag == tag)
            .map(|f| f.value.as_str())
    }

    /// Removes every field carrying `tag` and returns how many were dropped.
    pub fn remove_all(&mut self, tag: Tag) -> usize {
        let before = self.fields.len();
        self.fields.retain(|f| f.tag != tag);
        before - self.fields.len()
    }

    /// Sets the transaction amount (tag `54`).
    ///
    /// An existing amount is overwritten in place and any later duplicates
    /// are dropped. Otherwise the amount goes right before the country code
    /// (tag `58`), or at the end when there is none.
    pub fn set_amount(&mut self, value: impl Into<String>) {
        let value = value.into();
        match self.position(Tag::AMOUNT) {
            Some(index) => {
                self.fields[index].value = value;
                let mut seen = false;
                self.fields.retain(|f| {
                    if f.tag != Tag::AMOUNT {
                        return true;
                    }
                    let keep = !seen;
                    seen = true;
                    keep
                });
            }
            None => {
                let index = self
                    .position(Tag::COUNTRY_CODE)
                    .unwrap_or(self.fields.len());
                self.fields.insert(index, Field::new(Tag::AMOUNT, value));
            }
        }
    }
}

impl From<Vec<Field>> for Payload {
    fn from(fields: Vec<Field>) -> Self {
        Self { fields }
    }
}
