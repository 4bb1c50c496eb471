//! Helper utility functions

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SEPARATORS: Regex = Regex::new(r"[-_]+").unwrap();
    static ref NON_SLUG: Regex = Regex::new(r"[^a-z0-9\s]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Display title for an image file: extension dropped, separators turned
/// into spaces, title-cased. `"user_registration_flow.png"` becomes
/// `"User Registration Flow"`.
pub fn title_from_file_name(file_name: &str) -> String {
    let stem = match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    };
    title_case(SEPARATORS.replace_all(stem, " ").trim())
}

/// Uppercase every letter that follows a non-letter and lowercase the
/// rest. Digits and punctuation pass through and start a new word, so
/// `"api (v1)"` becomes `"Api (V1)"` and `"HLD"` becomes `"Hld"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut after_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if after_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            after_letter = true;
        } else {
            out.push(c);
            after_letter = false;
        }
    }
    out
}

/// File-name slug: lowercase, separators as spaces, anything outside
/// `[a-z0-9 ]` removed, whitespace runs joined with `_`
pub fn slugify(name: &str) -> String {
    let lowered = SEPARATORS.replace_all(&name.to_lowercase(), " ").to_string();
    let cleaned = NON_SLUG.replace_all(&lowered, "");
    WHITESPACE.replace_all(cleaned.trim(), "_").to_string()
}

/// `1234567` -> `"1,234,567"`
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
