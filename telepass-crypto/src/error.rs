//! Decryption error types.

use telepass_types::ElementKind;
use thiserror::Error;

/// Result type for passport decryption operations.
pub type PassportResult<T> = Result<T, PassportError>;

/// Errors that can occur while decrypting a passport submission.
///
/// Every variant is an expected, caller-recoverable condition; lower-level
/// failures pass through the higher-level operations unmodified so callers
/// always see the root cause.
#[derive(Debug, Error)]
pub enum PassportError {
    /// Ciphertext length is not a multiple of the AES block size.
    #[error("ciphertext length is not a multiple of 16")]
    InvalidCiphertextLength,

    /// The integrity hash is not 32 bytes.
    #[error("integrity hash must be 32 bytes, got {actual}")]
    InvalidHashLength { actual: usize },

    /// SHA-256 of the decrypted plaintext does not match the integrity
    /// hash: tampered input or mismatched credentials pairing.
    #[error("plaintext hash mismatch (tampered data or wrong credentials)")]
    HashMismatch,

    /// The padding prefix length is below the protocol floor of 32.
    #[error("padding length {actual} is below the minimum of 32")]
    InvalidPaddingLength { actual: u8 },

    /// The padding prefix is longer than the decrypted plaintext.
    #[error("padding length {padding} exceeds plaintext length {length}")]
    InvalidDataLength { padding: usize, length: usize },

    /// An RSA or AES primitive failed. Deliberately opaque: which internal
    /// step failed is not disclosed.
    #[error("cryptographic operation failed")]
    Crypto,

    /// Decrypted credentials are not valid UTF-8 JSON of the expected
    /// shape.
    #[error("malformed credentials: {0}")]
    MalformedCredentials(#[source] serde_json::Error),

    /// Decrypted document data is not valid UTF-8 JSON of the expected
    /// shape.
    #[error("malformed document: {0}")]
    MalformedDocument(#[source] serde_json::Error),

    /// The element kind carries no structured-data blob.
    #[error("element kind {0:?} has no structured data")]
    NotDataKind(ElementKind),

    /// A streaming decryption was cancelled by the caller.
    #[error("decryption cancelled")]
    Cancelled,

    /// Stream read or write failed.
    #[error("stream I/O error: {0}")]
    Io(#[from] std::io::Error),
}
