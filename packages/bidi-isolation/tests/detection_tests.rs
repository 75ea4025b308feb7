use bidi_isolation::{
    detect_base_direction, has_dir_format_chars, is_bidi, is_dir_format_char, Direction,
    DirFormatClass, FormattingKind, IsolateKind,
};

#[test]
fn classifies_all_nine_controls() {
    assert_eq!(
        DirFormatClass::of('\u{2066}'),
        DirFormatClass::IsolateStart(IsolateKind::Ltr)
    );
    assert_eq!(
        DirFormatClass::of('\u{2067}'),
        DirFormatClass::IsolateStart(IsolateKind::Rtl)
    );
    assert_eq!(
        DirFormatClass::of('\u{2068}'),
        DirFormatClass::IsolateStart(IsolateKind::FirstStrong)
    );
    assert_eq!(DirFormatClass::of('\u{2069}'), DirFormatClass::PopIsolate);
    assert_eq!(
        DirFormatClass::of('\u{202A}'),
        DirFormatClass::FormattingStart(FormattingKind::LtrEmbedding)
    );
    assert_eq!(
        DirFormatClass::of('\u{202B}'),
        DirFormatClass::FormattingStart(FormattingKind::RtlEmbedding)
    );
    assert_eq!(DirFormatClass::of('\u{202C}'), DirFormatClass::PopFormatting);
    assert_eq!(
        DirFormatClass::of('\u{202D}'),
        DirFormatClass::FormattingStart(FormattingKind::LtrOverride)
    );
    assert_eq!(
        DirFormatClass::of('\u{202E}'),
        DirFormatClass::FormattingStart(FormattingKind::RtlOverride)
    );
}

#[test]
fn non_controls_classify_as_other() {
    for c in ['a', 'ع', 'א', '1', ' ', '\u{200E}', '\u{200F}', '\u{061C}'] {
        assert_eq!(DirFormatClass::of(c), DirFormatClass::Other, "{c:?}");
        assert!(!is_dir_format_char(c), "{c:?}");
    }
}

#[test]
fn detects_presence_of_any_control() {
    assert!(!has_dir_format_chars(""));
    assert!(!has_dir_format_chars("plain text"));
    assert!(!has_dir_format_chars("مرحبا"));
    assert!(has_dir_format_chars("a\u{2066}b"));
    assert!(has_dir_format_chars("\u{202C}"));
}

#[test]
fn is_bidi_on_rtl_scripts() {
    assert!(is_bidi("مرحبا"));
    assert!(is_bidi("שלום"));
    assert!(is_bidi("latin مرحبا latin"));
}

#[test]
fn is_bidi_on_explicit_controls() {
    assert!(is_bidi("a\u{202E}b"));
    assert!(is_bidi("a\u{2067}b"));
    assert!(is_bidi("a\u{2069}b"));
}

#[test]
fn is_bidi_false_for_ltr_only_text() {
    assert!(!is_bidi("hello world"));
    assert!(!is_bidi("123 456"));
    assert!(!is_bidi(""));
}

#[test]
fn base_direction_follows_first_strong_character() {
    assert_eq!(detect_base_direction("hello"), Direction::LeftToRight);
    assert_eq!(detect_base_direction("مرحبا"), Direction::RightToLeft);
    assert_eq!(detect_base_direction("שלום"), Direction::RightToLeft);
    assert_eq!(detect_base_direction("hello مرحبا"), Direction::LeftToRight);
    assert_eq!(detect_base_direction("مرحبا hello"), Direction::RightToLeft);
    // Digits and punctuation are not strong.
    assert_eq!(detect_base_direction("123 שלום"), Direction::RightToLeft);
}

#[test]
fn base_direction_is_auto_without_strong_characters() {
    assert_eq!(detect_base_direction(""), Direction::Auto);
    assert_eq!(detect_base_direction("123 !?"), Direction::Auto);
}
