//! Core data types for the Texel scanning pipeline.

use serde::{Deserialize, Serialize};

/// One report row per recognized hires texture.
///
/// A record is created only for files that opened as images and whose
/// basename carries a well-formed checksum tag. Records are never mutated
/// after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureRecord {
    /// 16-hex-digit combined checksum: palette checksum (or "00000000" when
    /// the tag carries none) followed by the image checksum. Hex case is
    /// whatever the filename used.
    pub crc: String,

    /// Image width divided by the largest power-of-two factor shared with height
    pub min_width: u32,

    /// Image height divided by that same factor
    pub min_height: u32,

    /// Size code from the filename tag (one hex digit)
    pub size: String,

    /// Format code from the filename tag (one hex digit)
    pub format: String,

    /// Directory portion of the file's path relative to the scanned root;
    /// empty for files at the root itself
    pub folder: String,
}

/// Per-run counters for a scan.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScanStats {
    /// Files that produced a report row
    pub analyzed: usize,

    /// Files whose name carries no `#` at all
    pub untagged: usize,

    /// Files with a `#` but no well-formed tag
    pub malformed: usize,

    /// Files that could not be opened as images
    pub unreadable: usize,
}

impl ScanStats {
    /// Total number of files the scan looked at.
    pub fn total(&self) -> usize {
        self.analyzed + self.untagged + self.malformed + self.unreadable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> TextureRecord {
        TextureRecord {
            crc: "11223344AABBCCDD".to_string(),
            min_width: 2,
            min_height: 1,
            size: "2".to_string(),
            format: "3".to_string(),
            folder: "foo".to_string(),
        }
    }

    #[test]
    fn test_record_serde_roundtrip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"crc\":\"11223344AABBCCDD\""));
        assert!(json.contains("\"min_width\":2"));

        let parsed: TextureRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.crc, record.crc);
        assert_eq!(parsed.folder, "foo");
    }

    #[test]
    fn test_stats_total() {
        let stats = ScanStats {
            analyzed: 3,
            untagged: 2,
            malformed: 1,
            unreadable: 1,
        };
        assert_eq!(stats.total(), 7);
    }
}
