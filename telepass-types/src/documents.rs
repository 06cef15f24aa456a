//! Document shapes recovered from structured-data blobs.

use serde::{Deserialize, Serialize};

/// Personal details of the submitting user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalDetails {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// DD.MM.YYYY
    pub birth_date: String,
    pub gender: String,
    pub country_code: String,
    pub residence_country_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name_native: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name_native: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name_native: Option<String>,
}

/// Data page of an identity document (passport, license, card).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdDocumentData {
    pub document_no: String,
    /// DD.MM.YYYY, absent when the document does not expire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

/// Residential address of the submitting user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidentialAddress {
    pub street_line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_line2: Option<String>,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub country_code: String,
    pub post_code: String,
}

/// A decrypted structured-data blob, tagged by the element kind it came
/// from.
///
/// This is the closed mapping from data-bearing element kinds to their
/// document shapes: four identity kinds share `IdDocumentData`, personal
/// details and address each have their own shape. Scan-only and plaintext
/// kinds have no variant here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElementDocument {
    PersonalDetails(PersonalDetails),
    Passport(IdDocumentData),
    DriverLicense(IdDocumentData),
    IdentityCard(IdDocumentData),
    InternalPassport(IdDocumentData),
    Address(ResidentialAddress),
}
