//! Greedy word wrapping by character count.

/// Wrap `text` into lines of at most `max_width` characters.
///
/// Words are split on any whitespace and rejoined with single spaces. A
/// word longer than `max_width` is kept whole on its own line. A width of
/// zero is treated as one.
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current_len > 0 && current_len + 1 + word_len > max_width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if current_len > 0 {
        lines.push(current);
    }

    lines
}
