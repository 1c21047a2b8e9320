use tuimotion::text::{align_offset, char_width, display_width, wrap_words};
use tuimotion::TextAlign;

#[test]
fn test_display_width() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
    assert_eq!(display_width("a日b"), 4);
}

#[test]
fn test_char_width() {
    assert_eq!(char_width('a'), 1);
    assert_eq!(char_width('日'), 2);
    assert_eq!(char_width('\u{0301}'), 0);
}

#[test]
fn test_wrap_words_greedy() {
    assert_eq!(
        wrap_words("I may disappear!", 8),
        vec!["I may", "disappea", "r!"]
    );
    assert_eq!(wrap_words("Tap here to expand!", 11), vec!["Tap here to", "expand!"]);
}

#[test]
fn test_wrap_words_keeps_explicit_lines() {
    assert_eq!(wrap_words("a\nb c", 10), vec!["a", "b c"]);
    assert_eq!(wrap_words("", 10), vec![""]);
}

#[test]
fn test_wrap_words_zero_width() {
    assert!(wrap_words("anything", 0).is_empty());
}

#[test]
fn test_wrap_words_breaks_wide_chars() {
    assert_eq!(wrap_words("日本語", 4), vec!["日本", "語"]);
}

#[test]
fn test_align_offset() {
    assert_eq!(align_offset(4, 10, TextAlign::Left), 0);
    assert_eq!(align_offset(4, 10, TextAlign::Center), 3);
    assert_eq!(align_offset(4, 10, TextAlign::Right), 6);
    assert_eq!(align_offset(12, 10, TextAlign::Right), 0);
}
