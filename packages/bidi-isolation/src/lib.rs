//! Balancing and isolation of Unicode directional formatting characters
//!
//! Arbitrary text may contain the nine directional formatting characters
//! (explicit embeddings, overrides and isolates) in improperly nested or
//! unbalanced sequences. Concatenating such a fragment into larger
//! bidirectional text lets its directional state leak into neighboring
//! content. This crate repairs the fragment and wraps it in an isolate so it
//! can be embedded anywhere:
//!
//! - [`balance_dir_format_chars`] drops orphan terminators and appends the
//!   terminators needed to close every open scope;
//! - [`bidi_isolate`] balances and wraps in an LRI/RLI/FSI .. PDI pair;
//! - [`has_dir_format_chars`], [`is_bidi`] and [`detect_base_direction`]
//!   answer whether and how a string needs directional handling.
//!
//! Full bidirectional reordering (UAX #9) is out of scope; the transforms
//! here only make fragments safe to embed.
//!
//! ```
//! use bidi_isolation::{bidi_isolate, Direction};
//!
//! let safe = bidi_isolate("user \u{202E}input", Direction::Auto);
//! assert_eq!(safe, "\u{2068}user \u{202E}input\u{202C}\u{2069}");
//! ```

pub mod balance;
pub mod detection;
pub mod isolate;
pub mod types;

pub use balance::{balance_dir_format_chars, strip_dir_format_chars};
pub use detection::{detect_base_direction, has_dir_format_chars, is_bidi};
pub use isolate::{bidi_envelope, bidi_isolate};
pub use types::{
    Direction, DirFormatClass, EnvelopeMode, FormattingKind, IsolateKind, ParseDirectionError,
    ParseEnvelopeModeError, is_dir_format_char, FIRST_STRONG_ISOLATE, LTR_EMBEDDING, LTR_ISOLATE,
    LTR_OVERRIDE, POP_DIRECTIONAL_FORMATTING, POP_DIRECTIONAL_ISOLATE, RTL_EMBEDDING, RTL_ISOLATE,
    RTL_OVERRIDE,
};
