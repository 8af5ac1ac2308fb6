//! Small string helpers shared by the matchers.

use memchr::memmem;

/// `true` for empty or whitespace-only input.
#[inline(always)]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Byte offset of the first occurrence of `needle` in `haystack`.
#[inline]
pub fn find(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    memmem::find(haystack.as_bytes(), needle.as_bytes())
}

#[inline]
pub fn contains(haystack: &str, needle: &str) -> bool {
    find(haystack, needle).is_some()
}

/// Character (not byte) offset of the first occurrence of `needle`.
pub fn char_offset(haystack: &str, needle: &str) -> Option<usize> {
    find(haystack, needle).map(|byte| byte_to_char(haystack, byte))
}

/// Character count of `haystack[..byte]`. `byte` must be a char boundary.
#[inline]
pub fn byte_to_char(haystack: &str, byte: usize) -> usize {
    // Fast ASCII path: byte offset == char offset
    if haystack.as_bytes()[..byte].is_ascii() {
        return byte;
    }
    haystack[..byte].chars().count()
}

/// Substring test in either direction, case-insensitive.
pub fn fuzzy_match(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    contains(&a, &b) || contains(&b, &a)
}

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
