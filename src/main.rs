//! keywatch binary: check watched keys between `old.yml` and `new.yml` and
//! append the outcome to the pipeline output file.

use keywatch::prelude::*;
use keywatch::{document, report};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("keywatch: {err}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let settings = Settings::from_env()?;

    let old = document::load(&settings.old_path)?;
    let new = document::load(&settings.new_path)?;

    let changes = diff(&old, &new, &settings.watch_list);
    report::print_changes(&changes);
    report::write_outcome(&settings.output_path, !changes.has_changes())?;

    Ok(())
}
