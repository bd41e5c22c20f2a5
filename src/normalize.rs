//! Name normalization for filename tokens, route segments and titles.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonical token for a display name: lowercased, accents stripped via NFD
/// decomposition, runs of whitespace collapsed to single hyphens, and every
/// remaining character outside `[a-z0-9-]` deleted.
///
/// The same token is used for filenames and (hyphen-stripped, see
/// [`route_segment`]) for route path segments. No collision detection is
/// done; two names that normalize identically share an output file.
pub fn normalize_name(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();

    let mut out = String::with_capacity(stripped.len());
    let mut in_whitespace = false;
    for c in stripped.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
        } else {
            in_whitespace = false;
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                out.push(c);
            }
        }
    }
    out
}

/// Route path segment: the normalized token with hyphens removed.
pub fn route_segment(text: &str) -> String {
    normalize_name(text).replace('-', "")
}

/// Uppercase only the first character, leaving the rest untouched.
/// Display titles only; never used for filenames or routes.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
