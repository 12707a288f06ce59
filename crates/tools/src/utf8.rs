//! Character-offset helpers over UTF-8 strings.
//!
//! Document offsets count Unicode scalar values, not bytes: offset `0` sits
//! before the first character and `char_len(s)` after the last. Every helper
//! clamps out-of-range offsets instead of panicking, so callers can feed
//! transiently invalid cursor positions straight through.

/// Number of characters in `s`.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Clamp a character offset to `[0, char_len(s)]`.
///
/// ```
/// use tools::utf8::clamp_offset;
///
/// assert_eq!(clamp_offset("yup", 2), 2);
/// assert_eq!(clamp_offset("yup", 9), 3);
/// ```
#[inline]
pub fn clamp_offset(s: &str, offset: usize) -> usize {
    offset.min(char_len(s))
}

/// Byte index of the character boundary at `offset` (clamped to `s.len()`).
///
/// ```
/// use tools::utf8::byte_index;
///
/// let s = "a€b"; // '€' is 3 bytes
/// assert_eq!(byte_index(s, 0), 0);
/// assert_eq!(byte_index(s, 1), 1);
/// assert_eq!(byte_index(s, 2), 4);
/// assert_eq!(byte_index(s, 3), 5);
/// assert_eq!(byte_index(s, 100), 5);
/// ```
pub fn byte_index(s: &str, offset: usize) -> usize {
    s.char_indices()
        .nth(offset)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}

/// The character right after the boundary at `offset`, if any.
///
/// ```
/// use tools::utf8::char_at;
///
/// assert_eq!(char_at("hi ", 0), Some('h'));
/// assert_eq!(char_at("hi ", 2), Some(' '));
/// assert_eq!(char_at("hi ", 3), None);
/// ```
#[inline]
pub fn char_at(s: &str, offset: usize) -> Option<char> {
    s.chars().nth(offset)
}

/// Split `s` at a character offset (clamped).
pub fn split_at_char(s: &str, offset: usize) -> (&str, &str) {
    s.split_at(byte_index(s, offset))
}
