//! Reporting: console lines for humans, one `key=value` line for the pipeline.

use crate::diff::{Change, ChangeSet};
use crate::error::{KeywatchError, Result};
use serde_yaml::Value;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Print one line per detected change, or a summary line if nothing changed.
///
/// This is the human-readable side of the report; the machine-readable
/// contract is [`write_outcome`].
pub fn print_changes(changes: &ChangeSet) {
    for change in changes.changes() {
        println!("{}", format_change(change));
    }
    if !changes.has_changes() {
        println!("✅ No watched keys changed.");
    }
}

/// Append the outcome line to the sink file, creating it if needed.
///
/// Writes exactly one line, `no_change=true` or `no_change=false`. The sink
/// is opened in append mode since the pipeline may already have written
/// other outputs to it, and is flushed and closed before returning.
///
/// # Errors
///
/// Returns an error if the sink cannot be opened or written.
pub fn write_outcome(sink_path: &Path, no_change: bool) -> Result<()> {
    let mut sink = OpenOptions::new()
        .create(true)
        .append(true)
        .open(sink_path)
        .map_err(|e| KeywatchError::SinkError(sink_path.display().to_string(), e))?;

    writeln!(sink, "no_change={no_change}")
        .and_then(|()| sink.flush())
        .map_err(|e| KeywatchError::SinkError(sink_path.display().to_string(), e))?;

    tracing::debug!(sink = %sink_path.display(), no_change, "outcome written");
    Ok(())
}

fn format_change(change: &Change) -> String {
    format!(
        "🔺 Changed: {} — {} → {}",
        change.path,
        render(change.old.as_ref()),
        render(change.new.as_ref())
    )
}

/// Render a resolved value for the console; `<absent>` marks a path that did
/// not resolve, keeping it visually distinct from an explicit `null`.
fn render(value: Option<&Value>) -> String {
    match value {
        None => "<absent>".to_string(),
        Some(v) => render_value(v),
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("'{s}'"),
        Value::Sequence(seq) => {
            let items: Vec<String> = seq.iter().map(render_value).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(map) => {
            let items: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", render_value(k), render_value(v)))
                .collect();
            format!("{{{}}}", items.join(", "))
        }
        Value::Tagged(tagged) => render_value(&tagged.value),
    }
}
