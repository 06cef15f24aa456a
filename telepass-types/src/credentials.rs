//! Credentials: the RSA-sealed envelope and its decrypted tree.

use crate::element::ElementKind;
use serde::{Deserialize, Serialize};

/// The credentials envelope attached to a passport submission.
///
/// `secret` is the per-submission symmetric secret, RSA-OAEP-encrypted with
/// the bot's public key; `data` is the envelope-encrypted credentials JSON;
/// `hash` is the SHA-256 of the padded plaintext. All three are base64 on
/// the wire.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EncryptedCredentials {
    #[serde(with = "crate::b64")]
    pub data: Vec<u8>,
    #[serde(with = "crate::b64")]
    pub hash: Vec<u8>,
    #[serde(with = "crate::b64")]
    pub secret: Vec<u8>,
}

/// Secret and hash pair for one element's structured-data blob.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataCredentials {
    #[serde(with = "crate::b64")]
    pub data_hash: Vec<u8>,
    #[serde(with = "crate::b64")]
    pub secret: Vec<u8>,
}

/// Secret and hash pair for one encrypted file (scan, selfie, translation).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FileCredentials {
    #[serde(with = "crate::b64")]
    pub file_hash: Vec<u8>,
    #[serde(with = "crate::b64")]
    pub secret: Vec<u8>,
}

/// Credentials for everything one element carries.
///
/// Which fields are populated matches the element's shape: `data` for the
/// structured-field kinds, side/selfie/files/translation for scan-bearing
/// kinds.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SecureValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<DataCredentials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_side: Option<FileCredentials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse_side: Option<FileCredentials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selfie: Option<FileCredentials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<Vec<FileCredentials>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileCredentials>>,
}

/// Per-element credentials, keyed by element kind.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SecureData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_details: Option<SecureValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport: Option<SecureValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_passport: Option<SecureValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_license: Option<SecureValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_card: Option<SecureValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<SecureValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utility_bill: Option<SecureValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_statement: Option<SecureValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rental_agreement: Option<SecureValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_registration: Option<SecureValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporary_registration: Option<SecureValue>,
}

impl SecureData {
    /// Looks up the credentials for one element kind.
    ///
    /// Returns `None` for the plaintext kinds (`PhoneNumber`, `Email`),
    /// which never have credentials.
    pub fn get(&self, kind: ElementKind) -> Option<&SecureValue> {
        match kind {
            ElementKind::PersonalDetails => self.personal_details.as_ref(),
            ElementKind::Passport => self.passport.as_ref(),
            ElementKind::InternalPassport => self.internal_passport.as_ref(),
            ElementKind::DriverLicense => self.driver_license.as_ref(),
            ElementKind::IdentityCard => self.identity_card.as_ref(),
            ElementKind::Address => self.address.as_ref(),
            ElementKind::UtilityBill => self.utility_bill.as_ref(),
            ElementKind::BankStatement => self.bank_statement.as_ref(),
            ElementKind::RentalAgreement => self.rental_agreement.as_ref(),
            ElementKind::PassportRegistration => self.passport_registration.as_ref(),
            ElementKind::TemporaryRegistration => self.temporary_registration.as_ref(),
            ElementKind::PhoneNumber | ElementKind::Email => None,
        }
    }
}

/// The decrypted credentials tree for one submission.
///
/// `nonce` echoes the value the bot put in its authorization request; the
/// caller compares it against the nonce it issued. Each credentials record
/// under `secure_data` decrypts exactly one payload of the same submission.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Credentials {
    pub secure_data: SecureData,
    pub nonce: String,
}
