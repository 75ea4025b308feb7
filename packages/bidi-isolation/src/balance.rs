//! Repair of unbalanced directional formatting characters
//!
//! A single left-to-right pass that drops orphan terminators and appends the
//! terminators needed to close every scope still open at the end of the text.
//! Isolates and embeddings/overrides nest on independent tracks, so the pass
//! keeps one depth counter per track and never lets either close the other.

use crate::detection::has_dir_format_chars;
use crate::types::{DirFormatClass, POP_DIRECTIONAL_FORMATTING, POP_DIRECTIONAL_ISOLATE};

/// Balance the directional formatting characters in `text`.
///
/// Every isolate-start in the output has a matching PDI and every
/// embedding/override-start a matching PDF. Ordinary characters are passed
/// through verbatim; the only changes are dropped orphan terminators and
/// terminators appended at the end. The operation is total and idempotent,
/// and returns input with no formatting characters unchanged.
///
/// # Examples
///
/// ```
/// use bidi_isolation::balance_dir_format_chars;
///
/// assert_eq!(balance_dir_format_chars("hello"), "hello");
/// // An unclosed embedding gets a trailing PDF.
/// assert_eq!(balance_dir_format_chars("\u{202A}hello"), "\u{202A}hello\u{202C}");
/// // An orphan PDI is dropped.
/// assert_eq!(balance_dir_format_chars("\u{2069}hello"), "hello");
/// ```
pub fn balance_dir_format_chars(text: &str) -> String {
    if !has_dir_format_chars(text) {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut formatting_depth: usize = 0;
    let mut isolate_depth: usize = 0;

    for c in text.chars() {
        match DirFormatClass::of(c) {
            DirFormatClass::FormattingStart(_) => {
                formatting_depth += 1;
                result.push(c);
            }
            DirFormatClass::PopFormatting => {
                // A PDF with no open embedding/override is an orphan.
                if formatting_depth > 0 {
                    formatting_depth -= 1;
                    result.push(c);
                } else {
                    log::trace!("dropping orphan PDF");
                }
            }
            DirFormatClass::IsolateStart(_) => {
                isolate_depth += 1;
                result.push(c);
            }
            DirFormatClass::PopIsolate => {
                if isolate_depth > 0 {
                    isolate_depth -= 1;
                    result.push(c);
                } else {
                    log::trace!("dropping orphan PDI");
                }
            }
            DirFormatClass::Other => result.push(c),
        }
    }

    // Close whatever is still open. PDFs before PDIs; the tracks are
    // independent so the relative order carries no meaning.
    if formatting_depth > 0 || isolate_depth > 0 {
        log::trace!(
            "closing {formatting_depth} open embedding/override and {isolate_depth} open isolate scopes"
        );
        for _ in 0..formatting_depth {
            result.push(POP_DIRECTIONAL_FORMATTING);
        }
        for _ in 0..isolate_depth {
            result.push(POP_DIRECTIONAL_ISOLATE);
        }
    }

    result
}

/// Remove all nine directional formatting characters from `text`.
///
/// ```
/// use bidi_isolation::strip_dir_format_chars;
///
/// assert_eq!(strip_dir_format_chars("\u{2066}abc\u{2069}"), "abc");
/// ```
pub fn strip_dir_format_chars(text: &str) -> String {
    text.chars()
        .filter(|&c| DirFormatClass::of(c) == DirFormatClass::Other)
        .collect()
}
