//! Dotted key paths

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A dot-delimited sequence of field names, e.g. `CPU.Manufacturer`.
///
/// The empty path addresses the item itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a dotted path. Segments are kept verbatim, including empty ones.
    pub fn new(path: &str) -> Self {
        if path.is_empty() {
            return Self::root();
        }
        Self {
            segments: path.split('.').map(str::to_owned).collect(),
        }
    }

    /// The path that addresses the item itself
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub fn from_segments(segments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl FromStr for KeyPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for KeyPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for KeyPath {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl Serialize for KeyPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for KeyPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let path = String::deserialize(deserializer)?;
        Ok(Self::new(&path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_on_dots() {
        let path = KeyPath::new("CPU.Manufacturer");
        assert_eq!(path.segments().to_vec(), vec!["CPU", "Manufacturer"]);
        assert_eq!(path.to_string(), "CPU.Manufacturer");
    }

    #[test]
    fn test_empty_is_root() {
        assert!(KeyPath::new("").is_root());
        assert_eq!(KeyPath::root().to_string(), "");
    }

    #[test]
    fn test_empty_segments_kept() {
        let path = KeyPath::new("a..b");
        assert_eq!(path.segments().len(), 3);
        assert_eq!(path.segments()[1], "");
    }

    #[test]
    fn test_serde_as_string() {
        let path: KeyPath = serde_json::from_str("\"CPU.Series\"").unwrap();
        assert_eq!(path, KeyPath::from_segments(["CPU", "Series"]));
        assert_eq!(serde_json::to_string(&path).unwrap(), "\"CPU.Series\"");
    }
}
