use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::types::TextAlign;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Greedy word wrap. Words longer than `max_width` are broken by character.
pub fn wrap_words(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();

    for input_line in s.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in input_line.split_whitespace() {
            let mut word = word;
            let mut word_width = display_width(word);

            while word_width > max_width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                let split = split_at_width(word, max_width);
                lines.push(word[..split].to_string());
                word = &word[split..];
                word_width = display_width(word);
            }

            let space = usize::from(!current.is_empty());
            if current_width + space + word_width > max_width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            } else if space == 1 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }

        lines.push(current);
    }

    lines
}

/// Byte index of the longest prefix of `s` fitting in `max_width` columns.
/// Always consumes at least one char so callers make progress.
fn split_at_width(s: &str, max_width: usize) -> usize {
    let mut width = 0;
    for (idx, ch) in s.char_indices() {
        let w = char_width(ch);
        if width + w > max_width && idx > 0 {
            return idx;
        }
        width += w;
    }
    s.len()
}

pub fn align_offset(text_width: usize, available_width: usize, align: TextAlign) -> usize {
    if text_width >= available_width {
        return 0;
    }

    match align {
        TextAlign::Left => 0,
        TextAlign::Center => (available_width - text_width) / 2,
        TextAlign::Right => available_width - text_width,
    }
}
