//! Configuration for the smart punctuation transform.
//!
//! Each of the four rule families is an independent axis, every axis
//! defaulting to enabled. The axes are closed enums, so out-of-set values
//! are unrepresentable in the typed API; the historic loose forms (a bare
//! boolean, or a tag string such as `"oldschool"`) are still accepted at
//! the serde boundary, where an out-of-set value fails with an error naming
//! it. The single cross-field constraint is checked when the transformer is
//! built, before any tree is touched.

use serde::de::{self, Deserialize, Deserializer, Unexpected, Visitor};
use serde::ser::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// Dash replacement convention.
///
/// Matching is on the whole token value only; a run of three dashes is one
/// token and never matches the two-dash pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dashes {
    /// Leave dashes untouched.
    Off,
    /// Two dashes become an em dash; three dashes are left alone.
    #[default]
    Em,
    /// Three dashes become an em dash, two an en dash.
    Oldschool,
    /// Three dashes become an en dash, two an em dash.
    Inverted,
}

/// Backtick replacement convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backticks {
    /// Leave backticks untouched.
    Off,
    /// Double backticks open, doubled straight single quotes close, a
    /// double quote. Single backticks and single quotes are left alone.
    #[default]
    Double,
    /// As `Double`, and additionally a single backtick opens, a single
    /// straight quote closes, a single quote. Conflicts with the quotes
    /// rule, which claims the same single-quote character.
    All,
}

/// Ellipsis collapsing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ellipses {
    /// Leave full-stop runs untouched.
    Off,
    /// Collapse a run to a bare ellipsis, dropping interior whitespace.
    #[default]
    Unspaced,
    /// Collapse a run to an ellipsis, keeping one separating space when the
    /// run's dots were whitespace-separated.
    Spaced,
}

/// A pair of quote glyphs, keyed by quote kind.
///
/// A glyph is a string, not a single character, so multi-character
/// conventions (a guillemet padded with a narrow space, say) stay
/// representable.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuoteCharacters {
    /// Glyph for double quotes.
    pub double: Cow<'static, str>,
    /// Glyph for single quotes.
    pub single: Cow<'static, str>,
}

/// Default opening glyphs: left curly double and single quotes.
pub const DEFAULT_OPENING_QUOTES: QuoteCharacters = QuoteCharacters {
    double: Cow::Borrowed("\u{201C}"),
    single: Cow::Borrowed("\u{2018}"),
};

/// Default closing glyphs: right curly double and single quotes.
pub const DEFAULT_CLOSING_QUOTES: QuoteCharacters = QuoteCharacters {
    double: Cow::Borrowed("\u{201D}"),
    single: Cow::Borrowed("\u{2019}"),
};

/// Transform configuration.
///
/// Immutable once handed to [`Transformer::new`](crate::Transformer::new);
/// the derived method list is cached in the transformer and reusable across
/// any number of trees.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Options {
    /// Curl straight double and single quotes.
    pub quotes: bool,
    /// Collapse full-stop runs into an ellipsis.
    pub ellipses: Ellipses,
    /// Replace backtick quoting.
    pub backticks: Backticks,
    /// Replace dash runs.
    pub dashes: Dashes,
    /// Glyphs used for opening quotes.
    pub opening_quotes: QuoteCharacters,
    /// Glyphs used for closing quotes.
    pub closing_quotes: QuoteCharacters,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            quotes: true,
            ellipses: Ellipses::default(),
            backticks: Backticks::default(),
            dashes: Dashes::default(),
            opening_quotes: DEFAULT_OPENING_QUOTES,
            closing_quotes: DEFAULT_CLOSING_QUOTES,
        }
    }
}

/// Error type for configuration validation failures.
///
/// Raised while building a transformer, never mid-traversal; a caller that
/// gets a transformer always gets a fully configured one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `backticks: all` and `quotes: true` both claim the single straight
    /// quote character.
    BackticksAllWithQuotes,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BackticksAllWithQuotes => write!(
                f,
                "`backticks: all` is not a valid value when `quotes: true`"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

// ------------------------------------------------------------------------
// Loose-form serde for the option axes
// ------------------------------------------------------------------------

impl Serialize for Dashes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Dashes::Off => serializer.serialize_bool(false),
            Dashes::Em => serializer.serialize_bool(true),
            Dashes::Oldschool => serializer.serialize_str("oldschool"),
            Dashes::Inverted => serializer.serialize_str("inverted"),
        }
    }
}

impl<'de> Deserialize<'de> for Dashes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DashesVisitor;

        impl<'de> Visitor<'de> for DashesVisitor {
            type Value = Dashes;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a boolean, \"oldschool\", or \"inverted\"")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Dashes, E> {
                Ok(if v { Dashes::Em } else { Dashes::Off })
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Dashes, E> {
                match v {
                    "oldschool" => Ok(Dashes::Oldschool),
                    "inverted" => Ok(Dashes::Inverted),
                    _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
                }
            }
        }

        deserializer.deserialize_any(DashesVisitor)
    }
}

impl Serialize for Backticks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Backticks::Off => serializer.serialize_bool(false),
            Backticks::Double => serializer.serialize_bool(true),
            Backticks::All => serializer.serialize_str("all"),
        }
    }
}

impl<'de> Deserialize<'de> for Backticks {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BackticksVisitor;

        impl<'de> Visitor<'de> for BackticksVisitor {
            type Value = Backticks;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a boolean or \"all\"")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Backticks, E> {
                Ok(if v { Backticks::Double } else { Backticks::Off })
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Backticks, E> {
                match v {
                    "all" => Ok(Backticks::All),
                    _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
                }
            }
        }

        deserializer.deserialize_any(BackticksVisitor)
    }
}

impl Serialize for Ellipses {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Ellipses::Off => serializer.serialize_bool(false),
            Ellipses::Unspaced => serializer.serialize_bool(true),
            Ellipses::Spaced => serializer.serialize_str("spaced"),
        }
    }
}

impl<'de> Deserialize<'de> for Ellipses {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EllipsesVisitor;

        impl<'de> Visitor<'de> for EllipsesVisitor {
            type Value = Ellipses;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a boolean, \"spaced\", or \"unspaced\"")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Ellipses, E> {
                Ok(if v { Ellipses::Unspaced } else { Ellipses::Off })
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Ellipses, E> {
                match v {
                    "spaced" => Ok(Ellipses::Spaced),
                    "unspaced" => Ok(Ellipses::Unspaced),
                    _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
                }
            }
        }

        deserializer.deserialize_any(EllipsesVisitor)
    }
}
