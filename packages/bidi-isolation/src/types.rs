//! Core types for directional formatting character handling
//!
//! This module defines the nine Unicode directional formatting characters,
//! their classification, and the direction/envelope enums used by the
//! balancing and isolation operations.

use core::fmt;
use core::str::FromStr;

/// U+2066 LEFT-TO-RIGHT ISOLATE
pub const LTR_ISOLATE: char = '\u{2066}';
/// U+2067 RIGHT-TO-LEFT ISOLATE
pub const RTL_ISOLATE: char = '\u{2067}';
/// U+2068 FIRST STRONG ISOLATE
pub const FIRST_STRONG_ISOLATE: char = '\u{2068}';
/// U+2069 POP DIRECTIONAL ISOLATE
pub const POP_DIRECTIONAL_ISOLATE: char = '\u{2069}';
/// U+202A LEFT-TO-RIGHT EMBEDDING
pub const LTR_EMBEDDING: char = '\u{202A}';
/// U+202B RIGHT-TO-LEFT EMBEDDING
pub const RTL_EMBEDDING: char = '\u{202B}';
/// U+202C POP DIRECTIONAL FORMATTING
pub const POP_DIRECTIONAL_FORMATTING: char = '\u{202C}';
/// U+202D LEFT-TO-RIGHT OVERRIDE
pub const LTR_OVERRIDE: char = '\u{202D}';
/// U+202E RIGHT-TO-LEFT OVERRIDE
pub const RTL_OVERRIDE: char = '\u{202E}';

/// The three isolate-start characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IsolateKind {
    /// LRI, U+2066
    Ltr,
    /// RLI, U+2067
    Rtl,
    /// FSI, U+2068
    FirstStrong,
}

/// The four embedding/override-start characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormattingKind {
    /// LRE, U+202A
    LtrEmbedding,
    /// RLE, U+202B
    RtlEmbedding,
    /// LRO, U+202D
    LtrOverride,
    /// RLO, U+202E
    RtlOverride,
}

/// Classification of a scalar value with respect to the nine directional
/// formatting characters.
///
/// Isolates and embeddings/overrides nest on separate tracks, so their
/// openers and terminators are distinct variants: a [`DirFormatClass::PopIsolate`]
/// never closes an embedding scope and a [`DirFormatClass::PopFormatting`]
/// never closes an isolate scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirFormatClass {
    /// LRI, RLI or FSI — opens an isolate scope
    IsolateStart(IsolateKind),
    /// LRE, RLE, LRO or RLO — opens an embedding/override scope
    FormattingStart(FormattingKind),
    /// PDI — closes the innermost open isolate
    PopIsolate,
    /// PDF — closes the innermost open embedding/override
    PopFormatting,
    /// Any other scalar value
    Other,
}

impl DirFormatClass {
    /// Classify a scalar value. Total over all of `char`; anything outside
    /// the nine formatting characters maps to [`DirFormatClass::Other`].
    #[inline]
    pub fn of(c: char) -> Self {
        match c {
            LTR_ISOLATE => DirFormatClass::IsolateStart(IsolateKind::Ltr),
            RTL_ISOLATE => DirFormatClass::IsolateStart(IsolateKind::Rtl),
            FIRST_STRONG_ISOLATE => DirFormatClass::IsolateStart(IsolateKind::FirstStrong),
            POP_DIRECTIONAL_ISOLATE => DirFormatClass::PopIsolate,
            LTR_EMBEDDING => DirFormatClass::FormattingStart(FormattingKind::LtrEmbedding),
            RTL_EMBEDDING => DirFormatClass::FormattingStart(FormattingKind::RtlEmbedding),
            LTR_OVERRIDE => DirFormatClass::FormattingStart(FormattingKind::LtrOverride),
            RTL_OVERRIDE => DirFormatClass::FormattingStart(FormattingKind::RtlOverride),
            POP_DIRECTIONAL_FORMATTING => DirFormatClass::PopFormatting,
            _ => DirFormatClass::Other,
        }
    }
}

/// Returns true if `c` is one of the nine directional formatting characters.
#[inline]
pub fn is_dir_format_char(c: char) -> bool {
    DirFormatClass::of(c) != DirFormatClass::Other
}

/// Text direction requested for an isolate or envelope
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
    Default,
)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
    #[default]
    Auto,
}

impl Direction {
    /// The isolate-start character this direction selects: LRI for LTR,
    /// RLI for RTL, FSI for auto.
    #[inline]
    pub fn isolate_start(self) -> char {
        match self {
            Direction::LeftToRight => LTR_ISOLATE,
            Direction::RightToLeft => RTL_ISOLATE,
            Direction::Auto => FIRST_STRONG_ISOLATE,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::LeftToRight => "ltr",
            Direction::RightToLeft => "rtl",
            Direction::Auto => "auto",
        })
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "ltr" => Direction::LeftToRight,
            "rtl" => Direction::RightToLeft,
            "auto" => Direction::Auto,
            _ => return Err(ParseDirectionError(s.to_string())),
        })
    }
}

/// Error returned when parsing an unrecognized direction tag
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized direction tag: {0:?} (expected \"ltr\", \"rtl\" or \"auto\")")]
pub struct ParseDirectionError(pub String);

/// Kind of wrapping applied by [`bidi_envelope`](crate::bidi_envelope)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, Default,
)]
pub enum EnvelopeMode {
    /// Wrap in an isolate pair (LRI/RLI/FSI .. PDI)
    #[default]
    Isolate,
    /// Wrap in an embedding pair (LRE/RLE .. PDF)
    Embedding,
    /// Wrap in an override pair (LRO/RLO .. PDF)
    Override,
}

impl FromStr for EnvelopeMode {
    type Err = ParseEnvelopeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "isolate" => EnvelopeMode::Isolate,
            "embedding" => EnvelopeMode::Embedding,
            "override" => EnvelopeMode::Override,
            _ => return Err(ParseEnvelopeModeError(s.to_string())),
        })
    }
}

/// Error returned when parsing an unrecognized envelope mode
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized envelope mode: {0:?} (expected \"isolate\", \"embedding\" or \"override\")")]
pub struct ParseEnvelopeModeError(pub String);
