//! Lexical path normalization.
//!
//! Paths handed to phpcs are canonicalized for the host platform without
//! touching the filesystem: separators are unified, `.` segments dropped,
//! `..` segments folded into their parent where possible, and a trailing
//! separator is preserved. The path is not required to exist.

use std::path::MAIN_SEPARATOR;

fn is_separator(c: char) -> bool {
    c == '/' || (cfg!(windows) && c == '\\')
}

/// Split a Windows drive prefix (`C:`) off the front of `path`.
fn split_prefix(path: &str) -> (&str, &str) {
    if cfg!(windows) {
        let bytes = path.as_bytes();
        if bytes.len() >= 2 && bytes[1] == b':' && bytes[0].is_ascii_alphabetic() {
            return path.split_at(2);
        }
    }
    ("", path)
}

/// Normalize `path` lexically for the current platform.
///
/// An empty path normalizes to `.`.
pub fn normalize(path: &str) -> String {
    let (prefix, rest) = split_prefix(path);
    if prefix.is_empty() && rest.is_empty() {
        return ".".to_string();
    }

    let absolute = rest.starts_with(is_separator);
    let trailing = rest.ends_with(is_separator);

    let mut segments: Vec<&str> = Vec::new();
    for segment in rest.split(is_separator) {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let separator = MAIN_SEPARATOR.to_string();
    let mut out = String::from(prefix);
    if absolute {
        out.push(MAIN_SEPARATOR);
    }
    out.push_str(&segments.join(&separator));

    if segments.is_empty() {
        if !absolute {
            out.push('.');
        }
        if trailing && !absolute {
            out.push(MAIN_SEPARATOR);
        }
        return out;
    }

    if trailing {
        out.push(MAIN_SEPARATOR);
    }
    out
}
