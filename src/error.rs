use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum QrisError {
    #[error("Malformed payload at offset {offset}: {reason}")]
    #[diagnostic(code(qris::malformed_payload))]
    MalformedPayload { offset: usize, reason: String },

    #[error("Value of tag {tag} is {len} characters long, the limit is 99")]
    #[diagnostic(code(qris::value_too_long))]
    ValueTooLong { tag: String, len: usize },

    #[error("Value of tag {tag} contains non-ASCII characters")]
    #[diagnostic(code(qris::non_ascii_value))]
    NonAsciiValue { tag: String },

    #[error("Invalid amount: {0}")]
    #[diagnostic(
        code(qris::invalid_amount),
        help("amounts are positive decimal numbers, e.g. 50000")
    )]
    InvalidAmount(String),

    #[error("Invalid tag {0:?}: tags are exactly two ASCII digits")]
    #[diagnostic(code(qris::invalid_tag))]
    InvalidTag(String),

    #[error("Payload does not end with a 6304 checksum field")]
    #[diagnostic(code(qris::missing_checksum))]
    MissingChecksum,

    #[error("Checksum mismatch: payload carries {found}, computed {expected}")]
    #[diagnostic(code(qris::checksum_mismatch))]
    ChecksumMismatch { expected: String, found: String },

    #[error("Merchant configuration error: {0}")]
    #[diagnostic(code(qris::config))]
    ConfigError(String),

    #[error("CSV error: {0}")]
    #[diagnostic(code(qris::csv))]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    #[diagnostic(code(qris::io))]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    #[diagnostic(code(qris::json))]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QrisError>;

impl QrisError {
    pub(crate) fn malformed(offset: usize, reason: impl Into<String>) -> Self {
        Self::MalformedPayload {
            offset,
            reason: reason.into(),
        }
    }
}
