//! Text helpers for user-supplied question and choice text.

use super::error::DomainError;

/// Maximum length (in characters) of question and choice text.
pub const MAX_TEXT_LEN: usize = 200;

/// Check that `text` is non-blank and at most [`MAX_TEXT_LEN`] characters.
pub fn validate_text(field: &'static str, text: String) -> Result<String, DomainError> {
    if text.trim().is_empty() {
        return Err(DomainError::EmptyText { field });
    }
    let actual = text.chars().count();
    if actual > MAX_TEXT_LEN {
        return Err(DomainError::TextTooLong {
            field,
            max: MAX_TEXT_LEN,
            actual,
        });
    }
    Ok(text)
}

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary.
///
/// Used for log previews of question text.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
