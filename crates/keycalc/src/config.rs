//! Calculator configuration
//!
//! Configuration types for number display and input handling. The defaults
//! reproduce `en` formatting with permissive token entry, so a calculator
//! built without any configuration file behaves like a plain keypad.

use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Separators used when displaying numbers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NumberLocale {
    /// Inserted between digit groups of the integer part
    pub group_separator: String,
    /// Placed before the fractional digits
    pub decimal_separator: String,
    /// Digits per group, counted from the right (0 disables grouping)
    pub group_size: usize,
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::en()
    }
}

impl NumberLocale {
    /// `1,234,567.89`
    #[must_use]
    pub fn en() -> Self {
        Self {
            group_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            group_size: 3,
        }
    }

    /// `1.234.567,89`
    #[must_use]
    pub fn de() -> Self {
        Self {
            group_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            group_size: 3,
        }
    }

    /// `1 234 567,89` with a narrow no-break space
    #[must_use]
    pub fn fr() -> Self {
        Self {
            group_separator: "\u{202f}".to_string(),
            decimal_separator: ",".to_string(),
            group_size: 3,
        }
    }

    /// Looks up a preset by language tag (`en`, `en-US`, `de-CH`, ...)
    pub fn for_tag(tag: &str) -> CalcResult<Self> {
        let language = tag.split(|c: char| c == '-' || c == '_').next().unwrap_or_default();
        match language.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::en()),
            "de" => Ok(Self::de()),
            "fr" => Ok(Self::fr()),
            _ => Err(CalcError::config(format!("unsupported locale tag {tag:?}"))),
        }
    }
}

/// Top-level calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Display separators
    pub locale: NumberLocale,
    /// Ignore tokens other than a single ASCII digit or `.`
    pub strict_tokens: bool,
}

impl CalculatorConfig {
    /// Creates the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the display locale
    #[must_use]
    pub fn with_locale(mut self, locale: NumberLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Enables or disables strict token entry
    #[must_use]
    pub const fn with_strict_tokens(mut self, strict: bool) -> Self {
        self.strict_tokens = strict;
        self
    }

    /// Parses a YAML document
    pub fn from_yaml_str(yaml: &str) -> CalcResult<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(CalcError::config)?;
        config.validate()
    }

    /// Parses a JSON document
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(CalcError::config)?;
        config.validate()
    }

    /// Loads a configuration file; `.json` is read as JSON, anything else as YAML
    pub fn from_path(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        tracing::debug!(path = %path.display(), is_json, "loading calculator config");
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_yaml_str(&text)
        }
    }

    /// Serializes to YAML
    pub fn to_yaml(&self) -> CalcResult<String> {
        serde_yaml_ng::to_string(self).map_err(CalcError::config)
    }

    fn validate(self) -> CalcResult<Self> {
        let locale = &self.locale;
        if locale.decimal_separator.is_empty() {
            return Err(CalcError::config("decimal_separator must not be empty"));
        }
        if locale.group_size > 0 && locale.group_separator == locale.decimal_separator {
            return Err(CalcError::config(
                "group_separator and decimal_separator must differ",
            ));
        }
        Ok(self)
    }
}
