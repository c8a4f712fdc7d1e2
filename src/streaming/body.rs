//! Chunked file bodies.
//!
//! Both streaming modes hand the transport one chunk per read so memory stays
//! bounded regardless of file size. The stream owns the file handle: when the
//! client disconnects the transport drops the body, which ends the loop and
//! closes the file.

use std::io;
use std::time::Duration;

use bytes::{Bytes, BytesMut};
use futures_core::Stream;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// Stream at most `limit` bytes of `file` from its current position.
///
/// Reads are `chunk_size` bytes (the last one may be shorter). With `pace`
/// set, the stream sleeps that long after each chunk that is followed by
/// another. End of file and read errors both end the stream without yielding
/// an error, since response headers are already on the wire by then.
pub fn file_chunks(
    mut file: File,
    limit: u64,
    chunk_size: usize,
    pace: Option<Duration>,
) -> impl Stream<Item = io::Result<Bytes>> + Send + 'static {
    async_stream::stream! {
        let mut remaining = limit;

        while remaining > 0 {
            let want = remaining.min(chunk_size as u64) as usize;
            let mut buf = BytesMut::zeroed(want);

            let n = match file.read(&mut buf[..]).await {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) => {
                    tracing::debug!("Stopping stream after read error: {}", e);
                    break;
                }
            };

            buf.truncate(n);
            remaining -= n as u64;
            yield Ok::<_, io::Error>(buf.freeze());

            if remaining > 0 {
                if let Some(delay) = pace {
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}

/// Pacing for a configured delay; zero disables it.
pub fn pace_for(delay: Duration) -> Option<Duration> {
    (!delay.is_zero()).then_some(delay)
}
