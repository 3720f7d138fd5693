use thiserror::Error;

/// Bad input caught before any network call.
///
/// The `Display` text names the violated constraint and is safe to surface
/// to users as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Message text is required")]
    EmptyMessage,

    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),

    #[error("Unknown badge: {0}")]
    UnknownBadge(String),

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Document exceeds the {limit_mb} MB size limit")]
    DocumentTooLarge { limit_mb: u32 },
}

/// Malformed image payload on a document upload.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Document data is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded bytes do not start with the signature of the declared
    /// image format.
    #[error("Document data is not a valid {expected} image")]
    UnrecognizedImage { expected: &'static str },
}
