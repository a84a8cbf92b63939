//! URL decomposition and regeneration.
//!
//! A URL is held as a single normalized string; this module is the
//! parse/generate pair behind that normalization. Parsing is by simple
//! delimiter scanning (no percent-decoding of the stored form), generation
//! reassembles the canonical rendering.

/// Decomposed URL.
///
/// `segments` never contains `.` entries; `..` entries only survive at the
/// front of a relative URL where they cannot be collapsed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct UrlParts {
    pub scheme: Option<String>,
    pub authority: Option<String>,
    pub absolute: bool,
    pub segments: Vec<String>,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

/// Split `text` into URL parts and collapse dot segments.
pub(crate) fn parse(text: &str) -> UrlParts {
    let mut parts = UrlParts::default();
    let mut rest = text;

    if let Some(i) = rest.find('#') {
        parts.fragment = Some(rest[i + 1..].to_string());
        rest = &rest[..i];
    }
    if let Some(i) = rest.find('?') {
        parts.query = Some(rest[i + 1..].to_string());
        rest = &rest[..i];
    }
    if let Some(i) = rest.find(':') {
        if is_scheme(&rest[..i]) {
            parts.scheme = Some(rest[..i].to_ascii_lowercase());
            rest = &rest[i + 1..];
        }
    }
    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find('/').unwrap_or(after.len());
        parts.authority = Some(after[..end].to_string());
        rest = &after[end..];
    }

    parts.absolute = rest.starts_with('/') || parts.authority.is_some();
    parts.segments = collapse_segments(rest.split('/'), parts.absolute);
    parts
}

/// Reassemble the canonical string form.
pub(crate) fn generate(parts: &UrlParts) -> String {
    let mut out = String::new();
    if let Some(scheme) = &parts.scheme {
        out.push_str(scheme);
        out.push(':');
    }
    if let Some(authority) = &parts.authority {
        out.push_str("//");
        out.push_str(authority);
    }
    out.push_str(&generate_path(parts));
    if let Some(query) = &parts.query {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = &parts.fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

/// The path portion only: `/a/b` or `a/b`.
pub(crate) fn generate_path(parts: &UrlParts) -> String {
    let joined = parts.segments.join("/");
    if parts.absolute {
        format!("/{joined}")
    } else {
        joined
    }
}

/// Append `other`'s segments onto `base`'s path.
///
/// An absolute `other` replaces the path outright, which matches how the
/// toolkit composes resource locations.
pub(crate) fn concatenate(base: &UrlParts, other: &UrlParts) -> UrlParts {
    let mut out = base.clone();
    if other.absolute {
        out.segments = other.segments.clone();
    } else {
        out.segments.extend(other.segments.iter().cloned());
        out.segments = collapse_segments(out.segments.iter().map(String::as_str), out.absolute);
    }
    out.query = other.query.clone();
    out.fragment = other.fragment.clone();
    out
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Drop empty and `.` segments, resolve `..` against preceding segments.
///
/// Leading `..` segments of a relative path are preserved; on an absolute
/// path they are dropped (there is nothing above the root).
fn collapse_segments<'a>(raw: impl Iterator<Item = &'a str>, absolute: bool) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for segment in raw {
        match segment {
            "" | "." => {}
            ".." => match out.last() {
                Some(last) if last != ".." => {
                    out.pop();
                }
                _ if absolute => {}
                _ => out.push("..".to_string()),
            },
            other => out.push(other.to_string()),
        }
    }
    out
}
