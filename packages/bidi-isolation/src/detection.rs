//! Detection of directional content
//!
//! Fast scans used to short-circuit the balancer and to decide whether a
//! string needs bidirectional handling at all.

use unicode_bidi::{bidi_class, BidiClass};

use crate::types::{is_dir_format_char, Direction};

/// Returns true if `text` contains any of the nine directional formatting
/// characters.
///
/// Used as a fast path by the balancer: when this returns false the balancer
/// returns its input unchanged.
pub fn has_dir_format_chars(text: &str) -> bool {
    text.chars().any(is_dir_format_char)
}

/// Returns true if the string requires bidirectional support.
///
/// A string needs bidi handling when it contains a right-to-left strong
/// character (bidi class R or AL), an Arabic number (AN), or any explicit
/// directional formatting character.
pub fn is_bidi(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(
            bidi_class(c),
            BidiClass::R
                | BidiClass::AL
                | BidiClass::AN
                | BidiClass::LRE
                | BidiClass::RLE
                | BidiClass::LRO
                | BidiClass::RLO
                | BidiClass::PDF
                | BidiClass::LRI
                | BidiClass::RLI
                | BidiClass::FSI
                | BidiClass::PDI
        )
    })
}

/// Detect base direction from the first strong directional character,
/// following UBA rules P2/P3.
///
/// Returns [`Direction::Auto`] when the text contains no strong character,
/// leaving the choice to the caller.
pub fn detect_base_direction(text: &str) -> Direction {
    for c in text.chars() {
        match bidi_class(c) {
            BidiClass::L => return Direction::LeftToRight,
            BidiClass::R | BidiClass::AL => return Direction::RightToLeft,
            _ => continue,
        }
    }
    Direction::Auto
}
