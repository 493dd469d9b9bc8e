//! # Aliases
//!
//! An alias is the one string that names a participant everywhere else in
//! chainvote:
//!
//! ```text
//! addr|0x7e5f4552091a69125d5dfcb7b8c2659029395bdf   (address-based)
//! name|alice                                        (name-based)
//! ```
//!
//! It is always rebuilt from `(prefix, name)` and never stored on its own,
//! so the two can't drift apart.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ADDRESS_PREFIX_TAG, ALIAS_SEPARATOR, NAME_PREFIX_TAG};

/// Errors from parsing alias strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AliasError {
    #[error("alias is missing the '|' separator")]
    MissingSeparator,

    #[error("unknown alias prefix tag: '{0}'")]
    UnknownPrefix(String),

    #[error("alias has an empty name")]
    EmptyName,
}

/// Which naming mode an identity uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AliasPrefix {
    /// Named after its own (lowercase) address.
    AddressBased,
    /// Named with a caller-supplied display name.
    NameBased,
}

impl AliasPrefix {
    /// The tag written before the separator.
    pub fn tag(self) -> &'static str {
        match self {
            AliasPrefix::AddressBased => ADDRESS_PREFIX_TAG,
            AliasPrefix::NameBased => NAME_PREFIX_TAG,
        }
    }

    /// Reverse of [`tag`](Self::tag).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            ADDRESS_PREFIX_TAG => Some(AliasPrefix::AddressBased),
            NAME_PREFIX_TAG => Some(AliasPrefix::NameBased),
            _ => None,
        }
    }

    /// `"<tag>|"`, the marker stripped from incoming display names.
    pub fn marker(self) -> String {
        format!("{}{}", self.tag(), ALIAS_SEPARATOR)
    }
}

impl fmt::Display for AliasPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Build the alias string for `(prefix, name)`.
pub fn format_alias(prefix: AliasPrefix, name: &str) -> String {
    format!("{}{}{}", prefix.tag(), ALIAS_SEPARATOR, name)
}

/// Remove every embedded name-mode marker from a display name.
///
/// Callers sometimes hand back an alias fragment (`"name|alice"`) where a
/// bare name was expected. Stripping here keeps the round trip from turning
/// into `"name|name|alice"`.
pub fn strip_name_marker(name: &str) -> String {
    name.replace(&AliasPrefix::NameBased.marker(), "")
}

/// A parsed alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alias {
    prefix: AliasPrefix,
    name: String,
}

impl Alias {
    pub fn new(prefix: AliasPrefix, name: impl Into<String>) -> Self {
        Self {
            prefix,
            name: name.into(),
        }
    }

    pub fn prefix(&self) -> AliasPrefix {
        self.prefix
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_alias(self.prefix, &self.name))
    }
}

impl FromStr for Alias {
    type Err = AliasError;

    /// Splits on the *first* separator only, so names may themselves
    /// contain `|`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tag, name) = s
            .split_once(ALIAS_SEPARATOR)
            .ok_or(AliasError::MissingSeparator)?;
        let prefix =
            AliasPrefix::from_tag(tag).ok_or_else(|| AliasError::UnknownPrefix(tag.to_string()))?;
        if name.is_empty() {
            return Err(AliasError::EmptyName);
        }
        Ok(Self::new(prefix, name))
    }
}

impl Serialize for Alias {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Alias {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_both_modes() {
        assert_eq!(format_alias(AliasPrefix::NameBased, "alice"), "name|alice");
        assert_eq!(
            format_alias(AliasPrefix::AddressBased, "0xabc"),
            "addr|0xabc"
        );
    }

    #[test]
    fn strip_is_idempotent() {
        assert_eq!(strip_name_marker("alice"), "alice");
        assert_eq!(strip_name_marker("name|alice"), "alice");
        assert_eq!(strip_name_marker("name|name|alice"), "alice");
        assert_eq!(strip_name_marker(&strip_name_marker("name|alice")), "alice");
    }

    #[test]
    fn strip_leaves_other_tags_alone() {
        assert_eq!(strip_name_marker("addr|0xabc"), "addr|0xabc");
        assert_eq!(strip_name_marker("nickname|bob"), "nickbob");
    }

    #[test]
    fn parse_roundtrip() {
        let alias: Alias = "name|alice".parse().unwrap();
        assert_eq!(alias.prefix(), AliasPrefix::NameBased);
        assert_eq!(alias.name(), "alice");
        assert_eq!(alias.to_string(), "name|alice");
    }

    #[test]
    fn parse_keeps_separator_inside_name() {
        let alias: Alias = "name|a|b".parse().unwrap();
        assert_eq!(alias.name(), "a|b");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "alice".parse::<Alias>().unwrap_err(),
            AliasError::MissingSeparator
        );
        assert_eq!(
            "user|alice".parse::<Alias>().unwrap_err(),
            AliasError::UnknownPrefix("user".into())
        );
        assert_eq!("addr|".parse::<Alias>().unwrap_err(), AliasError::EmptyName);
    }

    #[test]
    fn prefix_tag_roundtrip() {
        for prefix in [AliasPrefix::AddressBased, AliasPrefix::NameBased] {
            assert_eq!(AliasPrefix::from_tag(prefix.tag()), Some(prefix));
        }
        assert_eq!(AliasPrefix::from_tag("nope"), None);
    }

    #[test]
    fn alias_serializes_as_string() {
        let alias = Alias::new(AliasPrefix::NameBased, "alice");
        assert_eq!(serde_json::to_string(&alias).unwrap(), "\"name|alice\"");
        let back: Alias = serde_json::from_str("\"name|alice\"").unwrap();
        assert_eq!(back, alias);
    }
}
