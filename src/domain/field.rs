use crate::error::{QrisError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Largest value a two-digit length prefix can describe.
pub const MAX_VALUE_LEN: usize = 99;

/// A two-digit field identifier, e.g. `54` for the transaction amount.
///
/// Tags are only unique within one nesting level; templates such as `26` or
/// `51` carry their own TLV-encoded sub-fields, which this crate treats as
/// opaque values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag([u8; 2]);

impl Tag {
    pub const PAYLOAD_FORMAT: Self = Self(*b"00");
    pub const AMOUNT: Self = Self(*b"54");
    pub const COUNTRY_CODE: Self = Self(*b"58");
    pub const MERCHANT_NAME: Self = Self(*b"59");
    pub const CRC: Self = Self(*b"63");

    pub fn new(raw: [u8; 2]) -> Result<Self> {
        if raw.iter().all(u8::is_ascii_digit) {
            Ok(Self(raw))
        } else {
            Err(QrisError::InvalidTag(
                String::from_utf8_lossy(&raw).into_owned(),
            ))
        }
    }
}

impl FromStr for Tag {
    type Err = QrisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.as_bytes() {
            [a, b] => Self::new([*a, *b]),
            _ => Err(QrisError::InvalidTag(s.to_string())),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0] as char, self.0[1] as char)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A single tag-length-value entry.
///
/// The length is never stored: it is always the character count of `value`
/// and gets recomputed whenever the field is encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub tag: Tag,
    pub value: String,
}

impl Field {
    pub fn new(tag: Tag, value: impl Into<String>) -> Self {
        Self {
            tag,
            value: value.into(),
        }
    }

    /// Length of the field once encoded: header plus value.
    pub fn encoded_len(&self) -> usize {
        4 + self.value.len()
    }

    /// Appends `tag`, the zero-padded length and the value to `out`.
    pub fn encode_into(&self, out: &mut String) -> Result<()> {
        if !self.value.is_ascii() {
            return Err(QrisError::NonAsciiValue {
                tag: self.tag.to_string(),
            });
        }
        let len = self.value.len();
        if len > MAX_VALUE_LEN {
            return Err(QrisError::ValueTooLong {
                tag: self.tag.to_string(),
                len,
            });
        }

        let [t0, t1] = self.tag.0;
        out.push(t0 as char);
        out.push(t1 as char);
        out.push(char::from(b'0' + (len / 10) as u8));
        out.push(char::from(b'0' + (len % 10) as u8));
        out.push_str(&self.value);
        Ok(())
    }
}
