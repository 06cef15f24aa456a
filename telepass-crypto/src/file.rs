//! File decryption for document scans, selfies and translations.

use crate::envelope::decrypt_envelope;
use crate::error::PassportResult;
use crate::stream::decrypt_envelope_stream;
use telepass_types::FileCredentials;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::sync::CancellationToken;

/// Decrypts an encrypted file's bytes.
///
/// The result is the opaque file content (image or PDF); no deserialization
/// is applied.
pub fn decrypt_file(bytes: &[u8], credentials: &FileCredentials) -> PassportResult<Vec<u8>> {
    decrypt_envelope(bytes, &credentials.file_hash, &credentials.secret)
}

/// Streaming variant of [`decrypt_file`] for large scans.
///
/// Byte-identical output to the in-memory variant for identical inputs. On
/// error or cancellation the caller must discard whatever reached `writer`.
pub async fn decrypt_file_stream<R, W>(
    reader: R,
    credentials: &FileCredentials,
    writer: W,
    cancel: &CancellationToken,
) -> PassportResult<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    decrypt_envelope_stream(
        reader,
        &credentials.file_hash,
        &credentials.secret,
        writer,
        cancel,
    )
    .await
}
