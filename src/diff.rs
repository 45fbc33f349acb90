//! The change detector: compares watched paths between two documents.

use crate::resolve::resolve;
use crate::watch::WatchList;
use serde::Serialize;
use serde_yaml::Value;

/// A watched path whose resolved value differs between the two documents.
///
/// Each side holds the resolved value, or `None` when the path did not
/// resolve on that side. `None` here means "absent", which is distinct from
/// `Some(Value::Null)`, an explicit null in the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Change {
    /// The dotted path that changed.
    pub path: String,
    /// The resolved value on the old side, `None` if absent.
    pub old: Option<Value>,
    /// The resolved value on the new side, `None` if absent.
    pub new: Option<Value>,
}

/// Ordered collection of changes produced by one diff run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChangeSet {
    changes: Vec<Change>,
}

impl ChangeSet {
    /// Returns `true` if any watched path changed.
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// The changes, in watch-list order.
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    /// The changed dotted paths, in watch-list order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.changes.iter().map(|c| c.path.as_str())
    }
}

/// Compare every watched path between `old` and `new`.
///
/// Iterates the watch list in its defined order, resolves each dotted path
/// against both documents, and records a [`Change`] wherever the two
/// resolutions differ under deep structural equality. Two absent results are
/// equal; absent never equals any real value, including explicit null.
///
/// An empty watch list produces an empty [`ChangeSet`].
pub fn diff(old: &Value, new: &Value, watch_list: &WatchList) -> ChangeSet {
    let mut changes = Vec::new();

    for entry in watch_list.entries() {
        for sub_key in entry.sub_keys() {
            let path = format!("{}.{}", entry.top_level(), sub_key);
            let old_resolved = resolve(old, &path);
            let new_resolved = resolve(new, &path);

            if old_resolved != new_resolved {
                tracing::debug!(%path, "watched key changed");
                changes.push(Change {
                    path,
                    old: old_resolved.value().cloned(),
                    new: new_resolved.value().cloned(),
                });
            }
        }
    }

    tracing::info!(
        watched = watch_list.path_count(),
        changed = changes.len(),
        "diff complete"
    );
    ChangeSet { changes }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn watch(yaml: &str) -> WatchList {
        WatchList::parse(yaml).unwrap()
    }

    #[test]
    fn test_single_changed_key() {
        let old = doc("service:\n  image: v1\n  replicas: 2\n");
        let new = doc("service:\n  image: v2\n  replicas: 2\n");
        let changes = diff(&old, &new, &watch("service: [image, replicas]"));

        assert!(changes.has_changes());
        assert_eq!(changes.changes().len(), 1);
        let change = &changes.changes()[0];
        assert_eq!(change.path, "service.image");
        assert_eq!(change.old, Some(Value::String("v1".to_string())));
        assert_eq!(change.new, Some(Value::String("v2".to_string())));
    }

    #[test]
    fn test_identical_documents_report_nothing() {
        let old = doc("a:\n  b: 1\nc:\n  d: [1, 2]\n");
        let new = old.clone();
        let changes = diff(&old, &new, &watch("a: [b]\nc: [d]\n"));
        assert!(!changes.has_changes());
    }

    #[test]
    fn test_absent_on_both_sides_is_no_change() {
        let old = doc("{}");
        let new = doc("{}");
        let changes = diff(&old, &new, &watch("a: [b]"));
        assert!(!changes.has_changes());
    }

    #[test]
    fn test_present_to_absent_is_a_change() {
        let old = doc("a:\n  b: 1\n");
        let new = doc("{}");
        let changes = diff(&old, &new, &watch("a: [b]"));
        assert_eq!(changes.changes().len(), 1);
        assert_eq!(changes.changes()[0].old, Some(Value::Number(1.into())));
        assert_eq!(changes.changes()[0].new, None);
    }

    #[test]
    fn test_value_to_explicit_null_is_a_change() {
        let old = doc("a:\n  b: 1\n");
        let new = doc("a:\n  b: null\n");
        let changes = diff(&old, &new, &watch("a: [b]"));
        assert_eq!(changes.changes().len(), 1);
        assert_eq!(changes.changes()[0].new, Some(Value::Null));
    }

    #[test]
    fn test_type_change_is_a_change() {
        let old = doc("a:\n  b: \"1\"\n");
        let new = doc("a:\n  b: 1\n");
        let changes = diff(&old, &new, &watch("a: [b]"));
        assert_eq!(changes.changes().len(), 1);
    }

    #[test]
    fn test_nested_structure_compared_deeply() {
        let old = doc("svc:\n  env:\n    A: 1\n    B: 2\n");
        let new = doc("svc:\n  env:\n    A: 1\n    B: 3\n");
        let changes = diff(&old, &new, &watch("svc: [env]"));
        assert_eq!(changes.changes().len(), 1);
        assert_eq!(changes.changes()[0].path, "svc.env");
    }

    #[test]
    fn test_empty_watch_list_reports_nothing() {
        let old = doc("a: 1\n");
        let new = doc("a: 2\n");
        let changes = diff(&old, &new, &WatchList::default());
        assert!(!changes.has_changes());
    }

    #[test]
    fn test_changes_follow_watch_list_order() {
        let old = doc("z:\n  a: 1\n  b: 1\na:\n  c: 1\n");
        let new = doc("z:\n  a: 2\n  b: 2\na:\n  c: 2\n");
        let changes = diff(&old, &new, &watch("z: [b, a]\na: [c]\n"));
        let paths: Vec<&str> = changes.paths().collect();
        assert_eq!(paths, ["z.b", "z.a", "a.c"]);
    }

    #[test]
    fn test_each_changed_path_reported_once() {
        let old = doc("a:\n  b: 1\n");
        let new = doc("a:\n  b: 2\n");
        let changes = diff(&old, &new, &watch("a: [b]"));
        assert_eq!(changes.paths().filter(|p| *p == "a.b").count(), 1);
    }
}
