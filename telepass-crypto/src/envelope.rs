//! Envelope decryption: the AES-256-CBC core shared by credentials, data
//! and file payloads.
//!
//! The scheme is Telegram's: key and IV are derived from
//! `SHA512(secret || hash)`, the plaintext carries a random padding prefix
//! whose length is its own first byte, and `hash` is the SHA-256 of the
//! padded plaintext. The same `hash` value therefore both parameterizes the
//! cipher and authenticates the result.

use crate::error::{PassportError, PassportResult};
use aes::cipher::block_padding::NoPadding;
use aes::cipher::{BlockDecryptMut, KeyIvInit};
use sha2::{Digest, Sha256, Sha512};

pub(crate) type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

pub(crate) const BLOCK_SIZE: usize = 16;
pub(crate) const HASH_SIZE: usize = 32;
/// Protocol floor for the padding prefix. Blobs are always padded with at
/// least 32 random bytes so short plaintexts do not leak their length.
pub(crate) const MIN_PADDING: usize = 32;

/// AES key and IV derived from a secret and an integrity hash.
pub(crate) struct CipherParams {
    pub key: [u8; 32],
    pub iv: [u8; 16],
}

/// Derives the AES-256-CBC parameters: `SHA512(secret || hash)` split into
/// a 32-byte key and a 16-byte IV.
pub(crate) fn derive_cipher_params(secret: &[u8], hash: &[u8]) -> CipherParams {
    let mut digest = Sha512::new();
    digest.update(secret);
    digest.update(hash);
    let digest = digest.finalize();

    let mut key = [0u8; 32];
    let mut iv = [0u8; 16];
    key.copy_from_slice(&digest[..32]);
    iv.copy_from_slice(&digest[32..48]);
    CipherParams { key, iv }
}

/// Decrypts one envelope-encrypted blob.
///
/// `hash` must be the 32-byte SHA-256 of the padded plaintext, sourced from
/// the same credentials record that delivered `secret`. The hash is checked
/// against the full decrypted buffer before the padding byte is trusted;
/// the padding length is not self-authenticating, so the hash is the only
/// tamper check.
pub fn decrypt_envelope(ciphertext: &[u8], hash: &[u8], secret: &[u8]) -> PassportResult<Vec<u8>> {
    if ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(PassportError::InvalidCiphertextLength);
    }
    if hash.len() != HASH_SIZE {
        return Err(PassportError::InvalidHashLength { actual: hash.len() });
    }

    let params = derive_cipher_params(secret, hash);
    let cipher = Aes256CbcDec::new(&params.key.into(), &params.iv.into());
    let mut raw = cipher
        .decrypt_padded_vec_mut::<NoPadding>(ciphertext)
        .map_err(|_| PassportError::Crypto)?;

    // Integrity first: nothing below is safe on unverified plaintext.
    if Sha256::digest(&raw).as_slice() != hash {
        return Err(PassportError::HashMismatch);
    }

    let padding = usize::from(*raw.first().unwrap_or(&0));
    if padding < MIN_PADDING {
        return Err(PassportError::InvalidPaddingLength {
            actual: padding as u8,
        });
    }
    if padding > raw.len() {
        return Err(PassportError::InvalidDataLength {
            padding,
            length: raw.len(),
        });
    }

    raw.drain(..padding);
    Ok(raw)
}
