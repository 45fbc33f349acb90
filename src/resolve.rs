//! Dotted-path resolution against a configuration document.

use serde_yaml::Value;

/// Result of resolving a dotted path against a document.
///
/// `Absent` is a sentinel outside the YAML value domain: it marks "the path
/// does not resolve" and is distinct from an explicit `null` value found in
/// the document.
///
/// # Examples
///
/// ```rust
/// use keywatch::resolve::{Resolved, resolve};
///
/// let doc: serde_yaml::Value = serde_yaml::from_str("service:\n  image: v1\n").unwrap();
/// assert!(matches!(resolve(&doc, "service.image"), Resolved::Found(_)));
/// assert_eq!(resolve(&doc, "service.replicas"), Resolved::Absent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    /// The path resolved to this value.
    Found(&'a Value),
    /// Some segment was missing, or an intermediate value was not a mapping.
    Absent,
}

impl<'a> Resolved<'a> {
    /// Returns `true` if the path did not resolve.
    pub fn is_absent(&self) -> bool {
        matches!(self, Resolved::Absent)
    }

    /// The resolved value, or `None` for `Absent`.
    pub fn value(&self) -> Option<&'a Value> {
        match self {
            Resolved::Found(value) => Some(value),
            Resolved::Absent => None,
        }
    }
}

/// Resolve a dotted path against a document by sequential exact-key lookups.
///
/// The path is trimmed of surrounding whitespace and split on `.`. Starting
/// from the document root, each segment descends into the current mapping;
/// a missing key or a non-mapping intermediate stops resolution and yields
/// [`Resolved::Absent`]. An empty path returns the document root.
///
/// Pure and infallible: no panics, no errors, no side effects.
pub fn resolve<'a>(document: &'a Value, dotted_path: &str) -> Resolved<'a> {
    let path = dotted_path.trim();
    if path.is_empty() {
        return Resolved::Found(document);
    }

    let mut current = document;
    for segment in path.split('.') {
        let key = Value::String(segment.to_string());
        match current {
            Value::Mapping(map) => match map.get(&key) {
                Some(next) => current = next,
                None => return Resolved::Absent,
            },
            _ => return Resolved::Absent,
        }
    }
    Resolved::Found(current)
}
