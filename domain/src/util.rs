//! Shared utility functions.

/// Single-line preview of free text for log output.
///
/// Collapses runs of whitespace (including newlines) to one space and cuts
/// the result at `max_chars` characters, appending `…` when something was
/// dropped.
pub fn preview(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let mut out: String = collapsed.chars().take(max_chars).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_short_text_unchanged() {
        assert_eq!(preview("show products", 40), "show products");
    }

    #[test]
    fn preview_collapses_whitespace() {
        assert_eq!(preview("  hello\n\n  world\t!", 40), "hello world !");
    }

    #[test]
    fn preview_truncates_on_char_boundary() {
        assert_eq!(preview("こんにちは世界", 5), "こんにちは…");
    }

    #[test]
    fn preview_empty() {
        assert_eq!(preview("   ", 10), "");
    }
}
