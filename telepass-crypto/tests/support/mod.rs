//! Reference encryption path for building test fixtures.
//!
//! Mirrors the wire protocol from the encrypting side: random prefix
//! padding (first byte = padding length, minimum 32), SHA-256 of the padded
//! plaintext as the integrity hash, AES-256-CBC under
//! `SHA512(secret || hash)`, and RSA-OAEP(SHA-1) for wrapping the
//! submission secret. Encryption exists only here; the published API is
//! decrypt-only.

#![allow(dead_code)]

use aes::cipher::block_padding::NoPadding;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::RngCore;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use std::sync::OnceLock;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;

/// Pads the plaintext per protocol and encrypts it.
///
/// Returns `(ciphertext, hash)` where `hash` is the SHA-256 of the padded
/// plaintext — the value that goes into the credentials record.
pub fn encrypt_envelope(plaintext: &[u8], secret: &[u8]) -> (Vec<u8>, Vec<u8>) {
    // Smallest protocol-legal padding: at least 32, block-aligning.
    let padding = 32 + (16 - (plaintext.len() + 32) % 16) % 16;
    let mut padded = vec![0u8; padding];
    OsRng.fill_bytes(&mut padded);
    padded[0] = padding as u8;
    padded.extend_from_slice(plaintext);
    encrypt_padded(&padded, secret)
}

/// Encrypts an already-padded buffer as-is.
///
/// Lets tests construct protocol-violating paddings (below the floor,
/// longer than the buffer) that still pass the integrity check.
pub fn encrypt_padded(padded: &[u8], secret: &[u8]) -> (Vec<u8>, Vec<u8>) {
    assert_eq!(padded.len() % 16, 0, "padded buffer must be block-aligned");

    let hash = Sha256::digest(padded).to_vec();

    let mut kdf = Sha512::new();
    kdf.update(secret);
    kdf.update(&hash);
    let digest = kdf.finalize();

    let cipher = Aes256CbcEnc::new(
        GenericArray::from_slice(&digest[..32]),
        GenericArray::from_slice(&digest[32..48]),
    );
    let ciphertext = cipher.encrypt_padded_vec_mut::<NoPadding>(padded);
    (ciphertext, hash)
}

/// A fresh 32-byte submission secret.
pub fn random_secret() -> Vec<u8> {
    let mut secret = vec![0u8; 32];
    OsRng.fill_bytes(&mut secret);
    secret
}

/// The bot's RSA private key, shared across a test binary.
///
/// 1024 bits keeps debug-mode key generation fast; OAEP(SHA-1) overhead
/// still leaves room for the 32-byte secret.
pub fn rsa_key() -> &'static RsaPrivateKey {
    static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
    KEY.get_or_init(|| {
        RsaPrivateKey::new(&mut OsRng, 1024).expect("RSA key generation failed")
    })
}

/// Wraps a submission secret with the key's public half, as the Telegram
/// service does.
pub fn wrap_secret(secret: &[u8], key: &RsaPrivateKey) -> Vec<u8> {
    RsaPublicKey::from(key)
        .encrypt(&mut OsRng, Oaep::new::<Sha1>(), secret)
        .expect("RSA-OAEP encryption failed")
}
