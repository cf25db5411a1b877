//! Name configuration layers and the three-way merge.
//!
//! A [`NameConfig`] is a partial layer where every field is optional. Layers
//! are resolved into a [`ResolvedConfig`] by [`merge_config`]:
//! per-call options override caller defaults, which override the library
//! built-ins. Each field is resolved on its own.

use serde::{Deserialize, Serialize};

use crate::error::{NameError, Result};

pub const DEFAULT_DELIMITER: &str = "-";
pub const DEFAULT_TOKEN_LENGTH: u32 = 4;
pub const DECIMAL_ALPHABET: &str = "0123456789";
pub const HEX_ALPHABET: &str = "0123456789abcdef";

/// One optional layer of name settings.
///
/// Serializes in camelCase, skipping absent fields, in the order
/// `delimiter, tokenLength, tokenHex, tokenChars`. That encoding feeds the
/// seed hash, so the field order is load-bearing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    #[serde(default, alias = "token_length", skip_serializing_if = "Option::is_none")]
    pub token_length: Option<u32>,
    #[serde(default, alias = "token_hex", skip_serializing_if = "Option::is_none")]
    pub token_hex: Option<bool>,
    #[serde(default, alias = "token_chars", skip_serializing_if = "Option::is_none")]
    pub token_chars: Option<String>,
}

impl NameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    pub fn token_length(mut self, length: u32) -> Self {
        self.token_length = Some(length);
        self
    }

    pub fn token_hex(mut self, hex: bool) -> Self {
        self.token_hex = Some(hex);
        self
    }

    pub fn token_chars(mut self, chars: impl Into<String>) -> Self {
        self.token_chars = Some(chars.into());
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.delimiter.is_none()
            && self.token_length.is_none()
            && self.token_hex.is_none()
            && self.token_chars.is_none()
    }
}

/// A fully populated configuration, produced fresh for every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub delimiter: String,
    pub token_length: u32,
    pub token_hex: bool,
    pub token_chars: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            token_length: DEFAULT_TOKEN_LENGTH,
            token_hex: false,
            token_chars: DECIMAL_ALPHABET.to_string(),
        }
    }
}

impl ResolvedConfig {
    /// The token alphabet as individual characters.
    pub fn alphabet(&self) -> Vec<char> {
        self.token_chars.chars().collect()
    }

    /// Reject configurations that cannot build a token.
    pub fn validate(&self) -> Result<()> {
        if self.token_length > 0 && self.token_chars.is_empty() {
            return Err(NameError::InvalidConfiguration(format!(
                "token length is {} but the token alphabet is empty",
                self.token_length
            )));
        }
        Ok(())
    }
}

fn pick<T: Clone>(
    outer: Option<&NameConfig>,
    middle: Option<&NameConfig>,
    field: impl Fn(&NameConfig) -> Option<&T>,
    fallback: &T,
) -> T {
    outer
        .and_then(&field)
        .or_else(|| middle.and_then(&field))
        .unwrap_or(fallback)
        .clone()
}

/// Resolve `outer` (per-call options) over `middle` (caller defaults) over
/// `inner` (built-ins), then force the hex alphabet when `token_hex` is set.
pub fn merge_config(
    outer: Option<&NameConfig>,
    middle: Option<&NameConfig>,
    inner: &ResolvedConfig,
) -> ResolvedConfig {
    let mut merged = ResolvedConfig {
        delimiter: pick(outer, middle, |c| c.delimiter.as_ref(), &inner.delimiter),
        token_length: pick(outer, middle, |c| c.token_length.as_ref(), &inner.token_length),
        token_hex: pick(outer, middle, |c| c.token_hex.as_ref(), &inner.token_hex),
        token_chars: pick(outer, middle, |c| c.token_chars.as_ref(), &inner.token_chars),
    };
    if merged.token_hex {
        merged.token_chars = HEX_ALPHABET.to_string();
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_middle() -> NameConfig {
        NameConfig::new()
            .delimiter("-")
            .token_length(4)
            .token_hex(false)
            .token_chars(DECIMAL_ALPHABET)
    }

    #[test]
    fn test_no_layers_gives_builtins() {
        let merged = merge_config(None, None, &ResolvedConfig::default());
        assert_eq!(merged, ResolvedConfig::default());
    }

    #[test]
    fn test_outer_overrides_middle() {
        let outer = NameConfig::new().token_length(6).token_hex(true);
        let merged = merge_config(Some(&outer), Some(&full_middle()), &ResolvedConfig::default());
        assert_eq!(merged.delimiter, "-");
        assert_eq!(merged.token_length, 6);
        assert!(merged.token_hex);
        assert_eq!(merged.token_chars, HEX_ALPHABET);
    }

    #[test]
    fn test_hex_beats_explicit_alphabet() {
        let outer = NameConfig::new().token_hex(true).token_chars("xyz");
        let merged = merge_config(Some(&outer), None, &ResolvedConfig::default());
        assert_eq!(merged.token_chars, HEX_ALPHABET);
    }

    #[test]
    fn test_middle_fills_gaps() {
        let outer = NameConfig::new().token_length(2);
        let middle = NameConfig::new().delimiter("_").token_length(9);
        let merged = merge_config(Some(&outer), Some(&middle), &ResolvedConfig::default());
        assert_eq!(merged.delimiter, "_");
        assert_eq!(merged.token_length, 2);
        assert_eq!(merged.token_chars, DECIMAL_ALPHABET);
    }

    #[test]
    fn test_outer_false_hex_overrides_middle_true() {
        let outer = NameConfig::new().token_hex(false);
        let middle = NameConfig::new().token_hex(true).token_chars("ab");
        let merged = merge_config(Some(&outer), Some(&middle), &ResolvedConfig::default());
        assert!(!merged.token_hex);
        assert_eq!(merged.token_chars, "ab");
    }

    #[test]
    fn test_validate_empty_alphabet() {
        let outer = NameConfig::new().token_chars("");
        let merged = merge_config(Some(&outer), None, &ResolvedConfig::default());
        assert!(matches!(
            merged.validate(),
            Err(NameError::InvalidConfiguration(_))
        ));

        let zero = NameConfig::new().token_chars("").token_length(0);
        let merged = merge_config(Some(&zero), None, &ResolvedConfig::default());
        assert!(merged.validate().is_ok());
    }

    #[test]
    fn test_serializes_present_fields_in_order() {
        let cfg = NameConfig::new().token_chars("xyz").delimiter(".").token_length(3);
        assert_eq!(
            serde_json::to_string(&cfg).unwrap(),
            r#"{"delimiter":".","tokenLength":3,"tokenChars":"xyz"}"#
        );
    }

    #[test]
    fn test_accepts_snake_case_keys() {
        let cfg: NameConfig = toml::from_str("token_length = 6\ntoken_hex = true").unwrap();
        assert_eq!(cfg, NameConfig::new().token_length(6).token_hex(true));
    }
}
