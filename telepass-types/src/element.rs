//! Encrypted passport elements as they arrive from the Bot API.

use serde::{Deserialize, Serialize};

/// The thirteen documented passport element types.
///
/// Six of them (`PersonalDetails` through `Address`) carry an encrypted
/// structured-data blob; the scan-bearing kinds carry file references
/// instead; `PhoneNumber` and `Email` arrive as verified plaintext.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    PersonalDetails,
    Passport,
    DriverLicense,
    IdentityCard,
    InternalPassport,
    Address,
    UtilityBill,
    BankStatement,
    RentalAgreement,
    PassportRegistration,
    TemporaryRegistration,
    PhoneNumber,
    Email,
}

impl ElementKind {
    /// Whether elements of this kind carry an encrypted `data` blob.
    pub fn has_data(self) -> bool {
        matches!(
            self,
            Self::PersonalDetails
                | Self::Passport
                | Self::DriverLicense
                | Self::IdentityCard
                | Self::InternalPassport
                | Self::Address
        )
    }

    /// Whether elements of this kind carry a `files` scan list.
    pub fn has_files(self) -> bool {
        matches!(
            self,
            Self::UtilityBill
                | Self::BankStatement
                | Self::RentalAgreement
                | Self::PassportRegistration
                | Self::TemporaryRegistration
        )
    }

    /// Whether elements of this kind carry a `front_side` scan.
    pub fn has_front_side(self) -> bool {
        matches!(
            self,
            Self::Passport | Self::DriverLicense | Self::IdentityCard | Self::InternalPassport
        )
    }

    /// Whether elements of this kind carry a `reverse_side` scan.
    pub fn has_reverse_side(self) -> bool {
        matches!(self, Self::DriverLicense | Self::IdentityCard)
    }

    /// Whether elements of this kind may carry a `selfie` scan.
    pub fn has_selfie(self) -> bool {
        matches!(
            self,
            Self::Passport | Self::DriverLicense | Self::IdentityCard | Self::InternalPassport
        )
    }

    /// Whether elements of this kind may carry `translation` scans.
    pub fn has_translation(self) -> bool {
        self.has_front_side() || self.has_files()
    }
}

/// A file uploaded to Telegram Passport, referenced by ID.
///
/// The content itself is fetched through the Bot API file endpoints and is
/// encrypted with the envelope scheme until paired with its
/// `FileCredentials`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportFile {
    pub file_id: String,
    pub file_unique_id: String,
    pub file_size: u64,
    pub file_date: i64,
}

/// One element of a passport submission, still encrypted.
///
/// Which optional fields are populated depends on `kind`; the predicates on
/// [`ElementKind`] describe the documented combinations. `phone_number` and
/// `email` are the only fields delivered in plaintext.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EncryptedPassportElement {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(default, with = "crate::b64::option", skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<PassportFile>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_side: Option<PassportFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse_side: Option<PassportFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selfie: Option<PassportFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<Vec<PassportFile>>,
    #[serde(with = "crate::b64")]
    pub hash: Vec<u8>,
}
