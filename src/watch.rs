//! The watch list: which dotted key paths are monitored for change.

use crate::error::{KeywatchError, Result};
use serde_yaml::Value;

/// A single watch-list entry: one top-level key and its watched sub-keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchEntry {
    top_level: String,
    sub_keys: Vec<String>,
}

impl WatchEntry {
    /// The top-level document key this entry watches under.
    pub fn top_level(&self) -> &str {
        &self.top_level
    }

    /// The sub-keys watched under the top-level key, in watch-list order.
    pub fn sub_keys(&self) -> &[String] {
        &self.sub_keys
    }
}

/// The externally supplied set of dotted paths to monitor.
///
/// Parsed from a serialized YAML mapping of top-level key to a sequence of
/// sub-key names, e.g. `{service: [image, replicas]}`. Entry order follows
/// the mapping's document order, and sub-key order follows each sequence,
/// so log output is deterministic and reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchList {
    entries: Vec<WatchEntry>,
}

impl WatchList {
    /// Parse a watch list from its serialized YAML form.
    ///
    /// Blank input (or explicit `null`/`{}`) yields an empty watch list,
    /// which performs no checks. Input that fails to parse, or parses to
    /// anything other than a mapping of string keys to sequences of string
    /// sub-keys, is an error: a corrupt watch list must not be silently
    /// defaulted into a false "no change" signal.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed YAML or an unexpected shape.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        let value: Value = serde_yaml::from_str(raw)
            .map_err(|e| KeywatchError::ParseError("watch list".to_string(), e))?;
        Self::from_value(value)
    }

    fn from_value(value: Value) -> Result<Self> {
        let map = match value {
            Value::Null => return Ok(Self::default()),
            Value::Mapping(map) => map,
            other => {
                return Err(KeywatchError::InvalidWatchList(format!(
                    "expected a mapping of top-level keys to sub-key sequences, got {}",
                    value_kind(&other)
                )));
            }
        };

        let mut entries = Vec::with_capacity(map.len());
        for (key, sub_keys) in map {
            let top_level = match key {
                Value::String(s) => s,
                other => {
                    return Err(KeywatchError::InvalidWatchList(format!(
                        "top-level keys must be strings, got {}",
                        value_kind(&other)
                    )));
                }
            };

            let sequence = match sub_keys {
                Value::Sequence(seq) => seq,
                other => {
                    return Err(KeywatchError::InvalidWatchList(format!(
                        "sub-keys for '{top_level}' must be a sequence, got {}",
                        value_kind(&other)
                    )));
                }
            };

            let mut subs = Vec::with_capacity(sequence.len());
            for sub in sequence {
                match sub {
                    Value::String(s) => subs.push(s),
                    other => {
                        return Err(KeywatchError::InvalidWatchList(format!(
                            "sub-keys for '{top_level}' must be strings, got {}",
                            value_kind(&other)
                        )));
                    }
                }
            }

            entries.push(WatchEntry {
                top_level,
                sub_keys: subs,
            });
        }

        Ok(Self { entries })
    }

    /// The watch entries, in watch-list order.
    pub fn entries(&self) -> &[WatchEntry] {
        &self.entries
    }

    /// Returns `true` if no paths are watched.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of watched dotted paths across all entries.
    pub fn path_count(&self) -> usize {
        self.entries.iter().map(|e| e.sub_keys.len()).sum()
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
