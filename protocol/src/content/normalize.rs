//! # Normalization & Canonical Serialization
//!
//! Two independently computed fingerprints of the same submission must
//! match, so before anything is hashed the record is pinned down twice:
//!
//! 1. **Normalize** — trim `title`, `description` and `url`; an absent or
//!    whitespace-only `url` becomes `""`. The timestamp is copied as-is.
//! 2. **Serialize** — a fixed template, built field by field:
//!
//! ```text
//! {"title":<str>,"description":<str>,"url":<str>,"timestamp":<int>}
//! ```
//!
//! No whitespace, no optional fields, no dependence on a serializer's idea
//! of field order. Strings are JSON string literals (UTF-8, minimal
//! escaping) and the timestamp is plain decimal. Any implementation in any
//! language that follows this template produces the same bytes.
//!
//! `url: None` and `url: Some("")` normalize identically. That equivalence is
//! part of the hash contract; changing it would orphan every published hash.

use serde::{Deserialize, Serialize};

/// A content record as submitted by the caller.
///
/// `timestamp` is hashed verbatim. chainvote producers use Unix epoch
/// **milliseconds**; a verifier using seconds computes a different hash,
/// and rightly so.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashableContent {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub timestamp: i64,
}

impl HashableContent {
    pub fn new(title: impl Into<String>, description: impl Into<String>, timestamp: i64) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: None,
            timestamp,
        }
    }

    /// Builder-style setter for the optional URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Produce the normalized form.
    pub fn normalize(&self) -> NormalizedContent {
        NormalizedContent {
            title: trim_portable(&self.title).to_string(),
            description: trim_portable(&self.description).to_string(),
            url: self
                .url
                .as_deref()
                .map(trim_portable)
                .unwrap_or_default()
                .to_string(),
            timestamp: self.timestamp,
        }
    }
}

/// Trim the whitespace set browsers and Node trim with.
///
/// Unicode `White_Space` minus U+0085 (NEL), plus U+FEFF (BOM). `str::trim`
/// disagrees on exactly those two, and a hash made by a JavaScript producer
/// has to verify here.
pub fn trim_portable(s: &str) -> &str {
    s.trim_matches(is_portable_whitespace)
}

fn is_portable_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{0085}') || c == '\u{FEFF}'
}

/// A record after normalization. Field order here is the hash order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedContent {
    pub title: String,
    pub description: String,
    pub url: String,
    pub timestamp: i64,
}

impl NormalizedContent {
    /// The canonical byte form fed to the hash function.
    ///
    /// Fails only if a string can't be rendered as a JSON literal, which
    /// `serde_json` never does for a `&str`; the error path exists so a
    /// future encoder change surfaces as an error instead of a panic.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        let title = serde_json::to_string(&self.title)?;
        let description = serde_json::to_string(&self.description)?;
        let url = serde_json::to_string(&self.url)?;

        let mut out = String::with_capacity(
            title.len() + description.len() + url.len() + CANONICAL_OVERHEAD,
        );
        out.push_str("{\"title\":");
        out.push_str(&title);
        out.push_str(",\"description\":");
        out.push_str(&description);
        out.push_str(",\"url\":");
        out.push_str(&url);
        out.push_str(",\"timestamp\":");
        out.push_str(&self.timestamp.to_string());
        out.push('}');
        Ok(out.into_bytes())
    }
}

// Keys, punctuation and a 20-digit timestamp.
const CANONICAL_OVERHEAD: usize = 64;

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(content: &HashableContent) -> String {
        String::from_utf8(content.normalize().canonical_bytes().unwrap()).unwrap()
    }

    #[test]
    fn trims_text_fields() {
        let n = HashableContent::new("  A ", "\tB\n", 1)
            .with_url("  https://x.io  ")
            .normalize();
        assert_eq!(n.title, "A");
        assert_eq!(n.description, "B");
        assert_eq!(n.url, "https://x.io");
        assert_eq!(n.timestamp, 1);
    }

    #[test]
    fn trim_strips_bom_and_keeps_nel() {
        let n = HashableContent::new("\u{FEFF}A\u{FEFF}", "\u{0085}B\u{0085}", 1)
            .with_url("\u{FEFF} https://x.io\u{3000}")
            .normalize();
        assert_eq!(n.title, "A");
        assert_eq!(n.description, "\u{0085}B\u{0085}");
        assert_eq!(n.url, "https://x.io");
    }

    #[test]
    fn portable_trim_matches_str_trim_elsewhere() {
        for s in [
            "  a ",
            "\t\r\n a\u{000B}\u{000C}",
            "\u{00A0}a\u{2028}\u{2029}",
            "\u{3000}a\u{205F}",
        ] {
            assert_eq!(trim_portable(s), s.trim());
        }
    }

    #[test]
    fn test_absent_and_empty_url_are_equivalent() {
        let absent = HashableContent::new("A", "B", 7);
        let empty = HashableContent::new("A", "B", 7).with_url("");
        let blank = HashableContent::new("A", "B", 7).with_url("   ");
        assert_eq!(absent.normalize(), empty.normalize());
        assert_eq!(absent.normalize(), blank.normalize());
        assert_eq!(absent.normalize().url, "");
    }

    #[test]
    fn timestamp_passes_through() {
        for ts in [0, -1, i64::MAX, i64::MIN, 1_700_000_000_000] {
            assert_eq!(HashableContent::new("a", "b", ts).normalize().timestamp, ts);
        }
    }

    #[test]
    fn test_canonical_template() {
        let c = HashableContent::new("Hello", "World", 1_700_000_000_000);
        assert_eq!(
            canonical(&c),
            r#"{"title":"Hello","description":"World","url":"","timestamp":1700000000000}"#
        );
    }

    #[test]
    fn canonical_escapes_strings() {
        let c = HashableContent::new("Café \"quoted\"", "line\nbreak", -5);
        assert_eq!(
            canonical(&c),
            r#"{"title":"Café \"quoted\"","description":"line\nbreak","url":"","timestamp":-5}"#
        );
    }

    #[test]
    fn field_values_cannot_bleed_into_each_other() {
        // Without quoting, these two would concatenate to the same bytes.
        let a = HashableContent::new("ab", "c", 1);
        let b = HashableContent::new("a", "bc", 1);
        assert_ne!(canonical(&a), canonical(&b));
    }

    #[test]
    fn serde_shape_is_camel_case_and_skips_missing_url() {
        let c = HashableContent::new("t", "d", 3);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"title":"t","description":"d","timestamp":3}"#);
        let back: HashableContent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
