//! Bounded stream reader.
//!
//! Pulls the whole path list into one owned buffer, one chunk at a time,
//! and stops at end-of-stream or at the hard ceiling (whichever is first).
//! Anything past the ceiling is silently left unread.

use std::io::ErrorKind;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::BridgeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadLimits {
    pub chunk_size: usize,
    pub max_chunks: usize,
    pub timeout: Option<Duration>,
}

impl ReadLimits {
    pub fn ceiling(&self) -> usize {
        self.chunk_size.saturating_mul(self.max_chunks)
    }
}

/// Read `source` to end-of-stream, keeping at most `limits.ceiling()` bytes.
///
/// An empty result is not an error; the caller decides what "nothing piped
/// in" means.
pub async fn read_bounded<R>(source: &mut R, limits: &ReadLimits) -> Result<Vec<u8>, BridgeError>
where
    R: AsyncRead + Unpin,
{
    match limits.timeout {
        Some(limit) => tokio::time::timeout(limit, fill(source, limits))
            .await
            .map_err(|_| BridgeError::ReadTimeout(limit))?,
        None => fill(source, limits).await,
    }
}

async fn fill<R>(source: &mut R, limits: &ReadLimits) -> Result<Vec<u8>, BridgeError>
where
    R: AsyncRead + Unpin,
{
    let chunk = limits.chunk_size;
    let ceiling = limits.ceiling();
    if chunk == 0 || ceiling == 0 {
        return Err(BridgeError::Config(
            "read limits must allow at least one byte".into(),
        ));
    }

    let mut buf: Vec<u8> = Vec::with_capacity(chunk);
    let mut reads = 0usize;

    loop {
        let start = buf.len();
        if start >= ceiling {
            tracing::debug!(ceiling, reads, "input ceiling reached, ignoring the rest");
            break;
        }

        // Grow by exactly one chunk once the current one is full.
        if start == buf.capacity() {
            buf.reserve_exact(chunk.min(ceiling - start));
        }

        // Reads land in spare capacity; nothing is zero-filled up front.
        let room = (buf.capacity() - start).min(ceiling - start);
        let n = match (&mut *source).take(room as u64).read_buf(&mut buf).await {
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(BridgeError::Read(e)),
        };

        if n == 0 {
            break;
        }
        reads += 1;
    }

    tracing::debug!(bytes = buf.len(), reads, "input stream drained");
    Ok(buf)
}
