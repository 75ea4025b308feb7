//! Wrapping text in directional isolates and envelopes
//!
//! The isolator balances the interior first, so its output is always a fully
//! balanced string that can be concatenated into surrounding bidirectional
//! text without leaking directional state in either direction.

use crate::balance::balance_dir_format_chars;
use crate::types::{
    Direction, EnvelopeMode, LTR_EMBEDDING, LTR_OVERRIDE, POP_DIRECTIONAL_FORMATTING,
    POP_DIRECTIONAL_ISOLATE, RTL_EMBEDDING, RTL_OVERRIDE,
};

/// Wrap `text` in an isolate pair, balancing its interior.
///
/// The opening character is LRI for [`Direction::LeftToRight`], RLI for
/// [`Direction::RightToLeft`] and FSI for [`Direction::Auto`]; the closer is
/// always PDI. FSI lets the consuming renderer pick the direction from the
/// first strong character inside the isolate.
///
/// # Examples
///
/// ```
/// use bidi_isolation::{bidi_isolate, Direction};
///
/// assert_eq!(bidi_isolate("hello", Direction::Auto), "\u{2068}hello\u{2069}");
/// assert_eq!(bidi_isolate("hello", Direction::RightToLeft), "\u{2067}hello\u{2069}");
/// ```
pub fn bidi_isolate(text: &str, direction: Direction) -> String {
    let interior = balance_dir_format_chars(text);
    let mut result = String::with_capacity(interior.len() + 6);
    result.push(direction.isolate_start());
    result.push_str(&interior);
    result.push(POP_DIRECTIONAL_ISOLATE);
    result
}

/// Wrap `text` in the formatting pair selected by `mode`, balancing its
/// interior.
///
/// Isolate mode behaves like [`bidi_isolate`]. Embedding and override pairs
/// have no auto form, so [`Direction::Auto`] falls back to right-to-left for
/// those modes.
pub fn bidi_envelope(text: &str, direction: Direction, mode: EnvelopeMode) -> String {
    let (open, close) = match mode {
        EnvelopeMode::Isolate => (direction.isolate_start(), POP_DIRECTIONAL_ISOLATE),
        EnvelopeMode::Embedding => {
            let open = match direction {
                Direction::LeftToRight => LTR_EMBEDDING,
                Direction::RightToLeft | Direction::Auto => RTL_EMBEDDING,
            };
            (open, POP_DIRECTIONAL_FORMATTING)
        }
        EnvelopeMode::Override => {
            let open = match direction {
                Direction::LeftToRight => LTR_OVERRIDE,
                Direction::RightToLeft | Direction::Auto => RTL_OVERRIDE,
            };
            (open, POP_DIRECTIONAL_FORMATTING)
        }
    };

    let interior = balance_dir_format_chars(text);
    let mut result = String::with_capacity(interior.len() + 6);
    result.push(open);
    result.push_str(&interior);
    result.push(close);
    result
}
