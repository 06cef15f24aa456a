//! Structured-data decryption for data-bearing elements.

use crate::envelope::decrypt_envelope;
use crate::error::{PassportError, PassportResult};
use serde::de::DeserializeOwned;
use telepass_types::{DataCredentials, ElementDocument, ElementKind};

/// Decrypts one element's structured-data blob into a caller-chosen
/// document shape.
///
/// `T` must match the element's declared kind; this function does not know
/// which shape a kind implies. Prefer [`decrypt_element_data`], which fixes
/// the association once.
pub fn decrypt_data<T: DeserializeOwned>(
    data: &[u8],
    credentials: &DataCredentials,
) -> PassportResult<T> {
    let plaintext = decrypt_envelope(data, &credentials.data_hash, &credentials.secret)?;
    serde_json::from_slice(&plaintext).map_err(PassportError::MalformedDocument)
}

/// Decrypts a structured-data blob into the document shape its element
/// kind implies.
///
/// The kind-to-shape mapping is closed: the four identity-document kinds
/// yield [`telepass_types::IdDocumentData`], personal details and address
/// their own shapes. Kinds without a data blob fail with
/// [`PassportError::NotDataKind`].
pub fn decrypt_element_data(
    kind: ElementKind,
    data: &[u8],
    credentials: &DataCredentials,
) -> PassportResult<ElementDocument> {
    match kind {
        ElementKind::PersonalDetails => {
            Ok(ElementDocument::PersonalDetails(decrypt_data(data, credentials)?))
        }
        ElementKind::Passport => Ok(ElementDocument::Passport(decrypt_data(data, credentials)?)),
        ElementKind::DriverLicense => {
            Ok(ElementDocument::DriverLicense(decrypt_data(data, credentials)?))
        }
        ElementKind::IdentityCard => {
            Ok(ElementDocument::IdentityCard(decrypt_data(data, credentials)?))
        }
        ElementKind::InternalPassport => {
            Ok(ElementDocument::InternalPassport(decrypt_data(data, credentials)?))
        }
        ElementKind::Address => Ok(ElementDocument::Address(decrypt_data(data, credentials)?)),
        other => Err(PassportError::NotDataKind(other)),
    }
}
