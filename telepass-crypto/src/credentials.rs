//! Credentials unwrapping: RSA-OAEP key-unwrap plus envelope decryption.

use crate::envelope::decrypt_envelope;
use crate::error::{PassportError, PassportResult};
use rsa::{Oaep, RsaPrivateKey};
use sha1::Sha1;
use telepass_types::{Credentials, EncryptedCredentials};

/// Unwraps and decrypts a submission's credentials envelope.
///
/// The per-submission secret is recovered with RSA-OAEP(SHA-1) under the
/// bot's private key, then fed with `encrypted.data` and `encrypted.hash`
/// into the envelope decryptor. Any RSA failure surfaces as the opaque
/// [`PassportError::Crypto`]; distinguishing the failing step would hand an
/// attacker a decryption oracle.
///
/// The secret is single-use per submission, so nothing is cached: each call
/// re-derives it from `encrypted.secret`.
pub fn decrypt_credentials(
    encrypted: &EncryptedCredentials,
    key: &RsaPrivateKey,
) -> PassportResult<Credentials> {
    let secret = key
        .decrypt(Oaep::new::<Sha1>(), &encrypted.secret)
        .map_err(|_| PassportError::Crypto)?;

    let plaintext = decrypt_envelope(&encrypted.data, &encrypted.hash, &secret)?;
    serde_json::from_slice(&plaintext).map_err(PassportError::MalformedCredentials)
}
