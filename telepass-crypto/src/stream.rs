//! Streaming variant of the envelope decryptor.
//!
//! Identical algorithm to [`crate::decrypt_envelope`], but ciphertext is
//! consumed from an `AsyncRead` and trimmed plaintext written to an
//! `AsyncWrite`, buffering only what block alignment requires. The SHA-256
//! integrity check runs incrementally and is verified after the last block;
//! on any error the caller must discard whatever was already written, since
//! plaintext streams out before the final verdict.

use crate::envelope::{derive_cipher_params, Aes256CbcDec, BLOCK_SIZE, HASH_SIZE, MIN_PADDING};
use crate::error::{PassportError, PassportResult};
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecryptMut, KeyIvInit};
use sha2::{Digest, Sha256};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;
use tracing::debug;

const READ_CHUNK: usize = 8 * 1024;

/// Decrypts an envelope-encrypted stream.
///
/// Produces byte-identical output to [`crate::decrypt_envelope`] for
/// identical inputs. `cancel` aborts the read/decrypt/write loop at the
/// next iteration; cipher state and buffers are dropped on every exit
/// path.
pub async fn decrypt_envelope_stream<R, W>(
    mut reader: R,
    hash: &[u8],
    secret: &[u8],
    mut writer: W,
    cancel: &CancellationToken,
) -> PassportResult<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    if hash.len() != HASH_SIZE {
        return Err(PassportError::InvalidHashLength { actual: hash.len() });
    }

    let params = derive_cipher_params(secret, hash);
    let mut cipher = Aes256CbcDec::new(&params.key.into(), &params.iv.into());
    let mut hasher = Sha256::new();

    let mut buf = vec![0u8; READ_CHUNK];
    // Carries the sub-block remainder between reads.
    let mut pending: Vec<u8> = Vec::with_capacity(READ_CHUNK + BLOCK_SIZE);
    let mut declared_padding: Option<usize> = None;
    let mut remaining_skip = 0usize;
    let mut plain_total = 0usize;

    loop {
        let n = tokio::select! {
            _ = cancel.cancelled() => return Err(PassportError::Cancelled),
            read = reader.read(&mut buf) => read?,
        };
        if n == 0 {
            break;
        }
        pending.extend_from_slice(&buf[..n]);

        let usable = pending.len() - pending.len() % BLOCK_SIZE;
        if usable == 0 {
            continue;
        }
        let mut plain: Vec<u8> = pending.drain(..usable).collect();
        for block in plain.chunks_mut(BLOCK_SIZE) {
            cipher.decrypt_block_mut(GenericArray::from_mut_slice(block));
        }
        hasher.update(&plain);
        plain_total += plain.len();

        if declared_padding.is_none() {
            let padding = usize::from(plain[0]);
            if padding < MIN_PADDING {
                return Err(PassportError::InvalidPaddingLength {
                    actual: plain[0],
                });
            }
            declared_padding = Some(padding);
            remaining_skip = padding;
        }

        let drop_now = remaining_skip.min(plain.len());
        remaining_skip -= drop_now;
        if drop_now < plain.len() {
            tokio::select! {
                _ = cancel.cancelled() => return Err(PassportError::Cancelled),
                res = writer.write_all(&plain[drop_now..]) => res?,
            }
        }
    }

    if !pending.is_empty() {
        return Err(PassportError::InvalidCiphertextLength);
    }
    if hasher.finalize().as_slice() != hash {
        return Err(PassportError::HashMismatch);
    }
    let Some(padding) = declared_padding else {
        // Empty ciphertext whose hash happened to verify: no padding byte.
        return Err(PassportError::InvalidPaddingLength { actual: 0 });
    };
    if remaining_skip > 0 {
        return Err(PassportError::InvalidDataLength {
            padding,
            length: plain_total,
        });
    }

    writer.flush().await?;
    debug!("stream decrypt complete: {} plaintext bytes", plain_total - padding);
    Ok(())
}
