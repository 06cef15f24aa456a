//! Wire-format tests against documented Bot API JSON shapes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use pretty_assertions::assert_eq;
use telepass_types::{
    Credentials, ElementKind, EncryptedCredentials, EncryptedPassportElement, PassportFile,
};

// ── Encrypted Side ──

#[test]
fn encrypted_credentials_decode_base64_fields() {
    let json = serde_json::json!({
        "data": STANDARD.encode(b"ciphertext bytes"),
        "hash": STANDARD.encode([0x11u8; 32]),
        "secret": STANDARD.encode(b"rsa sealed secret"),
    });

    let credentials: EncryptedCredentials = serde_json::from_value(json).unwrap();
    assert_eq!(credentials.data, b"ciphertext bytes");
    assert_eq!(credentials.hash, vec![0x11u8; 32]);
    assert_eq!(credentials.secret, b"rsa sealed secret");
}

#[test]
fn invalid_base64_is_a_deserialization_error() {
    let json = serde_json::json!({
        "data": "not@@base64!!",
        "hash": STANDARD.encode([0u8; 32]),
        "secret": STANDARD.encode(b"s"),
    });

    assert!(serde_json::from_value::<EncryptedCredentials>(json).is_err());
}

#[test]
fn driver_license_element_parses() {
    let json = serde_json::json!({
        "type": "driver_license",
        "data": STANDARD.encode(b"encrypted structured data"),
        "front_side": {
            "file_id": "DgADBAADEAMAAnUe2VZ0",
            "file_unique_id": "AQAD6wy8Gq4",
            "file_size": 91776,
            "file_date": 1534074942,
        },
        "reverse_side": {
            "file_id": "DgADBAADKQMAAkgi2FYB",
            "file_unique_id": "AQADyby9Gq5",
            "file_size": 102340,
            "file_date": 1534074942,
        },
        "hash": STANDARD.encode([0x42u8; 32]),
    });

    let element: EncryptedPassportElement = serde_json::from_value(json).unwrap();
    assert_eq!(element.kind, ElementKind::DriverLicense);
    assert_eq!(element.data.as_deref(), Some(b"encrypted structured data".as_slice()));
    assert_eq!(
        element.front_side.as_ref().map(|f| f.file_size),
        Some(91776)
    );
    assert!(element.reverse_side.is_some());
    assert!(element.files.is_none());
}

#[test]
fn phone_number_element_is_plaintext() {
    let json = serde_json::json!({
        "type": "phone_number",
        "phone_number": "+15551234567",
        "hash": STANDARD.encode([0x01u8; 32]),
    });

    let element: EncryptedPassportElement = serde_json::from_value(json).unwrap();
    assert_eq!(element.kind, ElementKind::PhoneNumber);
    assert_eq!(element.phone_number.as_deref(), Some("+15551234567"));
    assert!(element.data.is_none());
}

#[test]
fn passport_file_roundtrips() {
    let file = PassportFile {
        file_id: "DgADBAADEAMAAnUe2VZ0".to_string(),
        file_unique_id: "AQAD6wy8Gq4".to_string(),
        file_size: 91776,
        file_date: 1534074942,
    };

    let json = serde_json::to_string(&file).unwrap();
    let parsed: PassportFile = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, file);
}

// ── Element Kind Predicates ──

#[test]
fn data_bearing_kinds() {
    for kind in [
        ElementKind::PersonalDetails,
        ElementKind::Passport,
        ElementKind::DriverLicense,
        ElementKind::IdentityCard,
        ElementKind::InternalPassport,
        ElementKind::Address,
    ] {
        assert!(kind.has_data(), "{kind:?} carries a data blob");
        assert!(!kind.has_files(), "{kind:?} carries no files list");
    }
}

#[test]
fn scan_bearing_kinds() {
    for kind in [
        ElementKind::UtilityBill,
        ElementKind::BankStatement,
        ElementKind::RentalAgreement,
        ElementKind::PassportRegistration,
        ElementKind::TemporaryRegistration,
    ] {
        assert!(kind.has_files(), "{kind:?} carries a files list");
        assert!(!kind.has_data(), "{kind:?} carries no data blob");
        assert!(kind.has_translation());
    }
}

#[test]
fn only_two_sided_documents_have_reverse_side() {
    assert!(ElementKind::DriverLicense.has_reverse_side());
    assert!(ElementKind::IdentityCard.has_reverse_side());
    assert!(!ElementKind::Passport.has_reverse_side());
    assert!(!ElementKind::UtilityBill.has_reverse_side());
}

#[test]
fn plaintext_kinds_carry_nothing_encrypted() {
    for kind in [ElementKind::PhoneNumber, ElementKind::Email] {
        assert!(!kind.has_data());
        assert!(!kind.has_files());
        assert!(!kind.has_front_side());
        assert!(!kind.has_selfie());
        assert!(!kind.has_translation());
    }
}

// ── Decrypted Credentials Tree ──

#[test]
fn credentials_tree_parses_and_indexes_by_kind() {
    let json = serde_json::json!({
        "nonce": "issued-by-the-bot",
        "secure_data": {
            "driver_license": {
                "data": {
                    "data_hash": STANDARD.encode([0x33u8; 32]),
                    "secret": STANDARD.encode(b"data secret"),
                },
                "front_side": {
                    "file_hash": STANDARD.encode([0x44u8; 32]),
                    "secret": STANDARD.encode(b"front secret"),
                },
                "translation": [{
                    "file_hash": STANDARD.encode([0x55u8; 32]),
                    "secret": STANDARD.encode(b"translation secret"),
                }],
            },
        },
    });

    let credentials: Credentials = serde_json::from_value(json).unwrap();
    assert_eq!(credentials.nonce, "issued-by-the-bot");

    let value = credentials
        .secure_data
        .get(ElementKind::DriverLicense)
        .expect("driver license credentials");
    assert_eq!(value.data.as_ref().unwrap().data_hash, vec![0x33u8; 32]);
    assert_eq!(value.front_side.as_ref().unwrap().secret, b"front secret");
    assert_eq!(value.translation.as_ref().unwrap().len(), 1);

    assert!(credentials.secure_data.get(ElementKind::Passport).is_none());
    assert!(credentials.secure_data.get(ElementKind::PhoneNumber).is_none());
}

#[test]
fn secure_data_serializes_without_absent_kinds() {
    let credentials: Credentials = serde_json::from_value(serde_json::json!({
        "nonce": "n",
        "secure_data": {},
    }))
    .unwrap();

    let json = serde_json::to_value(&credentials).unwrap();
    assert_eq!(json["secure_data"], serde_json::json!({}));
}
