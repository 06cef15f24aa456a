//! Wire model for Telegram Passport submissions.
//!
//! Mirrors the documented Bot API shapes on the encrypted side
//! (`EncryptedCredentials`, `EncryptedPassportElement`, `PassportFile`) and
//! the credentials/document shapes that appear after decryption
//! (`Credentials`, `PersonalDetails`, `IdDocumentData`, `ResidentialAddress`).
//!
//! Binary fields are base64 on the wire; they deserialize straight into
//! `Vec<u8>` so downstream code never handles encoding.

mod b64;
mod credentials;
mod documents;
mod element;

pub use credentials::{
    Credentials, DataCredentials, EncryptedCredentials, FileCredentials, SecureData, SecureValue,
};
pub use documents::{ElementDocument, IdDocumentData, PersonalDetails, ResidentialAddress};
pub use element::{ElementKind, EncryptedPassportElement, PassportFile};
