//! HTTP `Range` header parsing for seekable streams.

use webinar_common::{Error, Result};

/// Inclusive byte span of a file, validated against the file size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    /// Parse a `Range: bytes=START-END` header value.
    ///
    /// Supports formats:
    /// - bytes=0-499
    /// - bytes=500- (to end of file)
    ///
    /// Anything else, including suffix ranges (`bytes=-500`) and multiple
    /// ranges, is rejected as unsatisfiable, as is a range with
    /// `start >= size`, `end >= size`, or `start > end`.
    pub fn parse(header: &str, size: u64) -> Result<Self> {
        let unsatisfiable = || Error::RangeNotSatisfiable { size };

        let span = header
            .trim()
            .strip_prefix("bytes=")
            .ok_or_else(unsatisfiable)?;
        let (start, end) = span.split_once('-').ok_or_else(unsatisfiable)?;

        let start: u64 = start.trim().parse().map_err(|_| unsatisfiable())?;
        let end: u64 = match end.trim() {
            "" => size.checked_sub(1).ok_or_else(unsatisfiable)?,
            end => end.parse().map_err(|_| unsatisfiable())?,
        };

        if start >= size || end >= size || start > end {
            return Err(unsatisfiable());
        }

        Ok(Self { start, end })
    }

    /// Number of bytes in the span.
    pub fn length(&self) -> u64 {
        self.end - self.start + 1
    }

    /// `Content-Range` value for a file of `size` bytes.
    pub fn content_range(&self, size: u64) -> String {
        format!("bytes {}-{}/{}", self.start, self.end, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_unsatisfiable(result: Result<ByteRange>, size: u64) -> bool {
        matches!(result, Err(Error::RangeNotSatisfiable { size: s }) if s == size)
    }

    #[test]
    fn test_parse_closed_range() {
        let range = ByteRange::parse("bytes=100-199", 1000).unwrap();
        assert_eq!(range, ByteRange { start: 100, end: 199 });
        assert_eq!(range.length(), 100);
        assert_eq!(range.content_range(1000), "bytes 100-199/1000");
    }

    #[test]
    fn test_parse_open_end() {
        let range = ByteRange::parse("bytes=500-", 1000).unwrap();
        assert_eq!(range, ByteRange { start: 500, end: 999 });
        assert_eq!(range.length(), 500);
    }

    #[test]
    fn test_parse_whole_file() {
        let range = ByteRange::parse("bytes=0-999", 1000).unwrap();
        assert_eq!(range.length(), 1000);
    }

    #[test]
    fn test_parse_single_byte() {
        let range = ByteRange::parse("bytes=999-999", 1000).unwrap();
        assert_eq!(range.length(), 1);
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        let range = ByteRange::parse(" bytes= 10 - 20 ", 100).unwrap();
        assert_eq!(range, ByteRange { start: 10, end: 20 });
    }

    #[test]
    fn test_start_past_end_of_file() {
        assert!(is_unsatisfiable(ByteRange::parse("bytes=1000-", 1000), 1000));
        assert!(is_unsatisfiable(ByteRange::parse("bytes=1500-1600", 1000), 1000));
    }

    #[test]
    fn test_end_past_end_of_file() {
        // Not clamped: an end beyond the file is unsatisfiable.
        assert!(is_unsatisfiable(ByteRange::parse("bytes=0-1000", 1000), 1000));
    }

    #[test]
    fn test_start_after_end() {
        assert!(is_unsatisfiable(ByteRange::parse("bytes=200-100", 1000), 1000));
    }

    #[test]
    fn test_empty_file() {
        assert!(is_unsatisfiable(ByteRange::parse("bytes=0-", 0), 0));
        assert!(is_unsatisfiable(ByteRange::parse("bytes=0-0", 0), 0));
    }

    #[test]
    fn test_malformed() {
        for header in [
            "bytes=-500",
            "bytes=-",
            "bytes=abc-def",
            "bytes=0-1-2",
            "bytes=0-1,5-6",
            "bytes=5",
            "items=0-5",
            "0-5",
        ] {
            assert!(
                is_unsatisfiable(ByteRange::parse(header, 1000), 1000),
                "{header} should be rejected"
            );
        }
    }
}
