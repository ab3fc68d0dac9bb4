/// Spreadsheet column label for a zero-based column index (0 -> A, 26 -> AA).
#[must_use]
pub fn column_label(index: usize) -> String {
    let mut label = String::new();
    let mut n = index + 1;

    while n > 0 {
        let remainder = (n - 1) % 26;
        label.insert(0, (b'A' + remainder as u8) as char);
        n = (n - 1) / 26;
    }

    label
}

/// Shorten `text` to at most `max_chars` characters, marking the cut with `…`.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut shortened: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    shortened.push('…');
    shortened
}
