//! String utilities for the domain layer.

/// Single-line preview of model text for log records (UTF-8 safe).
///
/// Newlines are folded into spaces and the result is cut at `max_len` bytes
/// on a character boundary, with `...` appended when anything was dropped.
pub fn preview(s: &str, max_len: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.len() <= max_len {
        return flat;
    }
    let mut end = max_len.saturating_sub(3).min(flat.len());
    while end > 0 && !flat.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &flat[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("Do you like maps?", 40), "Do you like maps?");
    }

    #[test]
    fn test_preview_folds_newlines() {
        assert_eq!(preview("line one\nline two", 40), "line one line two");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        assert_eq!(preview("hello world", 8), "hello...");
        // 'é' is two bytes; the cut must not land inside it
        assert_eq!(preview("ééééé", 7), "éé...");
    }
}
