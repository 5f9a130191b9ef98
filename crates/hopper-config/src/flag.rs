//! Decoding for boolean-like configuration values.
//!
//! Operators write switches as `verbose = On` as often as `verbose = true`,
//! so the `[logs]` flags accept TOML booleans, the integers `0`/`1`, and the
//! usual on/off spellings.

use std::fmt;
use std::path::PathBuf;

use serde::Deserializer;
use serde::de::{self, Visitor};

/// Interprets a boolean-like string, ignoring ASCII case and surrounding
/// whitespace.
///
/// Returns `None` when the text is not a recognised spelling.
///
/// # Examples
///
/// ```rust
/// use hopper_config::parse_flag;
///
/// assert_eq!(parse_flag("On"), Some(true));
/// assert_eq!(parse_flag("no"), Some(false));
/// assert_eq!(parse_flag("maybe"), None);
/// ```
#[must_use]
pub fn parse_flag(text: &str) -> Option<bool> {
    const TRUTHY: [&str; 4] = ["on", "yes", "true", "1"];
    const FALSY: [&str; 4] = ["off", "no", "false", "0"];
    let trimmed = text.trim();
    if TRUTHY.iter().any(|word| trimmed.eq_ignore_ascii_case(word)) {
        Some(true)
    } else if FALSY.iter().any(|word| trimmed.eq_ignore_ascii_case(word)) {
        Some(false)
    } else {
        None
    }
}

struct FlagVisitor;

impl Visitor<'_> for FlagVisitor {
    type Value = bool;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a boolean or one of on/off, yes/no, true/false, 1/0")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<bool, E> {
        Ok(value)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<bool, E> {
        match value {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(E::invalid_value(de::Unexpected::Signed(other), &self)),
        }
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<bool, E> {
        match value {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(E::invalid_value(de::Unexpected::Unsigned(other), &self)),
        }
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<bool, E> {
        parse_flag(value).ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

pub(crate) fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(FlagVisitor)
}

struct PathVisitor;

impl Visitor<'_> for PathVisitor {
    type Value = Option<PathBuf>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a file path")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(non_empty_path(value))
    }
}

/// Empty strings disable the corresponding log file.
pub(crate) fn deserialize_path<'de, D>(deserializer: D) -> Result<Option<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(PathVisitor)
}

pub(crate) fn non_empty_path(value: impl Into<PathBuf>) -> Option<PathBuf> {
    let path = value.into();
    if path.as_os_str().is_empty() {
        None
    } else {
        Some(path)
    }
}
