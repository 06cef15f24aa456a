//! Decryption core for Telegram Passport submissions.
//!
//! Turns the encrypted blobs a user submitted (personal data fields, ID
//! document scans, selfies, translations) into verified plaintext, using
//! only the bot operator's RSA private key.
//!
//! # Architecture
//!
//! Four dependency-ordered pieces:
//!
//! 1. **Envelope decryptor** ([`decrypt_envelope`], [`decrypt_envelope_stream`]):
//!    AES-256-CBC with key/IV derived from `SHA512(secret || hash)`,
//!    SHA-256 integrity verification, random-prefix padding removal.
//! 2. **Credentials unwrapper** ([`decrypt_credentials`]): RSA-OAEP(SHA-1)
//!    unwrap of the per-submission secret, then envelope decryption of the
//!    credentials JSON into a typed [`telepass_types::Credentials`] tree.
//! 3. **Field data decryptor** ([`decrypt_data`], [`decrypt_element_data`]):
//!    envelope decryption of one element's structured-data blob into its
//!    document shape.
//! 4. **File decryptor** ([`decrypt_file`], [`decrypt_file_stream`]): same
//!    envelope core, returning opaque bytes.
//!
//! Every operation is a pure, single-pass function of its inputs: no shared
//! state, no caching, no retries. Concurrent calls with distinct arguments
//! are always safe.
//!
//! Fetching encrypted payloads and persisting decrypted output belong to
//! the caller; so does parsing the RSA private key.

mod credentials;
mod data;
mod envelope;
mod error;
mod file;
mod stream;

pub use credentials::decrypt_credentials;
pub use data::{decrypt_data, decrypt_element_data};
pub use envelope::decrypt_envelope;
pub use error::{PassportError, PassportResult};
pub use file::{decrypt_file, decrypt_file_stream};
pub use stream::decrypt_envelope_stream;
