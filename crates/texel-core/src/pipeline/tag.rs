//! Filename tag extraction.
//!
//! Hires texture filenames embed an identifying tag after the first `#`:
//! an 8-hex-digit image checksum, a 1-hex-digit format code, a 1-hex-digit
//! size code, and optionally an 8-hex-digit palette checksum, e.g.
//! `wall#AABBCCDD#3#2#11223344.png`.

use regex::Regex;
use std::sync::LazyLock;

static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#([0-9A-Fa-f]{8})#([0-9A-Fa-f])#([0-9A-Fa-f])(?:#([0-9A-Fa-f]{8}))?")
        .expect("tag pattern is a valid regex")
});

/// Fields extracted from a well-formed filename tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiresTag {
    /// Combined 16-hex-digit checksum: palette checksum (or "00000000")
    /// followed by the image checksum, case preserved from the filename
    pub crc: String,

    /// Format code (one hex digit)
    pub format: String,

    /// Size code (one hex digit)
    pub size: String,
}

/// Outcome of parsing a filename for a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagParse {
    /// The name carries a well-formed tag
    Tag(HiresTag),
    /// No `#` anywhere in the name; skipped silently
    Untagged,
    /// A `#` is present but the tag region does not match the pattern;
    /// the caller diagnoses and skips
    Malformed,
}

/// Parse the tag from a bare filename (not a full path).
///
/// The pattern is searched in the substring starting at the first `#`, so
/// text before the tag never interferes. Hex digits are matched
/// case-insensitively and kept verbatim.
pub fn parse_tag(name: &str) -> TagParse {
    let Some(pos) = name.find('#') else {
        return TagParse::Untagged;
    };

    let Some(caps) = TAG_PATTERN.captures(&name[pos..]) else {
        return TagParse::Malformed;
    };

    let image_crc = &caps[1];
    let crc = match caps.get(4) {
        Some(palette_crc) => format!("{}{}", palette_crc.as_str(), image_crc),
        None => format!("00000000{image_crc}"),
    };

    TagParse::Tag(HiresTag {
        crc,
        format: caps[2].to_string(),
        size: caps[3].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_tag_with_palette() {
        let parsed = parse_tag("tex#AABBCCDD#3#2#11223344.png");
        let TagParse::Tag(tag) = parsed else {
            panic!("expected a tag, got {parsed:?}");
        };
        assert_eq!(tag.crc, "11223344AABBCCDD");
        assert_eq!(tag.format, "3");
        assert_eq!(tag.size, "2");
    }

    #[test]
    fn test_tag_without_palette_pads_with_zeros() {
        let parsed = parse_tag("tex#AABBCCDD#3#2.png");
        let TagParse::Tag(tag) = parsed else {
            panic!("expected a tag, got {parsed:?}");
        };
        assert_eq!(tag.crc, "00000000AABBCCDD");
    }

    #[test]
    fn test_no_hash_is_untagged() {
        assert_eq!(parse_tag("plain.png"), TagParse::Untagged);
    }

    #[test]
    fn test_hash_without_pattern_is_malformed() {
        assert_eq!(parse_tag("tex#zzz.png"), TagParse::Malformed);
        assert_eq!(parse_tag("tex#AABBCC.png"), TagParse::Malformed);
    }

    #[test]
    fn test_tag_may_start_after_first_hash() {
        // The first `#` belongs to no tag; the real tag follows later.
        let parsed = parse_tag("a#b#AABBCCDD#3#2.png");
        assert!(matches!(parsed, TagParse::Tag(_)));
    }

    #[test]
    fn test_hex_case_is_preserved() {
        let TagParse::Tag(tag) = parse_tag("tex#aAbBcCdD#e#f#00112233.png") else {
            panic!("expected a tag");
        };
        assert_eq!(tag.crc, "00112233aAbBcCdD");
        assert_eq!(tag.format, "e");
        assert_eq!(tag.size, "f");
    }

    #[test]
    fn test_short_palette_checksum_is_ignored() {
        // A trailing `#1122` is not a palette checksum; the tag still parses
        // without one.
        let TagParse::Tag(tag) = parse_tag("tex#AABBCCDD#3#2#1122.png") else {
            panic!("expected a tag");
        };
        assert_eq!(tag.crc, "00000000AABBCCDD");
    }
}
