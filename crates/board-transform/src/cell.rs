//! Pure per-cell cleaning rules.
//!
//! Each rule is applied uniformly across a column with an explicit
//! type-check-before-transform: non-string cells are never transformed.

/// Word-initial capitalization: every letter that follows a non-letter is
/// uppercased, every other letter lowercased.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut prev_letter = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if prev_letter {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            prev_letter = true;
        } else {
            result.push(ch);
            prev_letter = false;
        }
    }
    result
}

/// True iff the value is a valid 2-character state code.
pub fn is_state_code(value: &str) -> bool {
    value.chars().count() == 2
}

/// Rewrite an 11-character MAWB identifier as `first 3 + "-" + last 8`.
///
/// Returns `None` for any other length; malformed or short identifiers are a
/// deliberate pass-through, not an error.
pub fn format_mawb(value: &str) -> Option<String> {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() != 11 {
        return None;
    }
    let prefix: String = chars[..3].iter().collect();
    let suffix: String = chars[3..].iter().collect();
    Some(format!("{prefix}-{suffix}"))
}
