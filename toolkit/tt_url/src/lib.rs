//! Normalized URL value type for the TTauri toolkit.
//!
//! A [`Url`] holds one canonical string: scheme and dot segments are
//! normalized on construction, so two URLs naming the same resource compare
//! equal with a plain string comparison. That same string drives ordering
//! and hashing, which lets `Url` participate in sorted and hashed
//! collections without extra machinery.
//!
//! File-system scanning and glob matching live with the platform layer, not
//! here.

mod parts;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use parts::UrlParts;

/// An immutable, normalized URL.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Url {
    value: String,
}

impl Url {
    /// Parse and normalize `text`.
    ///
    /// Normalization lowercases the scheme, removes empty and `.` path
    /// segments and resolves `..` segments. Construction never fails; text
    /// without URL structure is treated as a relative path reference.
    pub fn new(text: &str) -> Self {
        Self {
            value: parts::generate(&parts::parse(text)),
        }
    }

    /// The canonical string form.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The lowercased scheme, if present.
    pub fn scheme(&self) -> Option<String> {
        self.decompose().scheme
    }

    /// The query string after `?`, if present.
    pub fn query(&self) -> Option<String> {
        self.decompose().query
    }

    /// The fragment after `#`, if present.
    pub fn fragment(&self) -> Option<String> {
        self.decompose().fragment
    }

    /// The path portion, `/a/b` when absolute.
    pub fn path(&self) -> String {
        parts::generate_path(&self.decompose())
    }

    /// Decoded path segments in order.
    pub fn path_segments(&self) -> Vec<String> {
        self.decompose().segments
    }

    /// The final path segment, or the empty string when the path is empty.
    pub fn filename(&self) -> String {
        self.decompose().segments.pop().unwrap_or_default()
    }

    /// The filename's extension (text after the last `.`), or empty.
    pub fn extension(&self) -> String {
        let name = self.filename();
        match name.rfind('.') {
            Some(i) => name[i + 1..].to_string(),
            None => String::new(),
        }
    }

    /// Whether the path is anchored at a root (or carries an authority).
    pub fn is_absolute(&self) -> bool {
        self.decompose().absolute
    }

    /// Whether the path is relative.
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// Append `other`'s path to this URL's path.
    ///
    /// Query and fragment of the result come from `other`.
    pub fn join(&self, other: &str) -> Self {
        let combined = parts::concatenate(&self.decompose(), &parts::parse(other));
        Self {
            value: parts::generate(&combined),
        }
    }

    /// A copy of this URL with the final path segment removed.
    pub fn with_filename_removed(&self) -> Self {
        let mut parts = self.decompose();
        parts.segments.pop();
        Self {
            value: parts::generate(&parts),
        }
    }

    fn decompose(&self) -> UrlParts {
        parts::parse(&self.value)
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl fmt::Debug for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Url({})", self.value)
    }
}

impl From<&str> for Url {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Url {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

impl FromStr for Url {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(text))
    }
}
