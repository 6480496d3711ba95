//! Delimited text export of a `SeriesStore`.
//!
//! Two layouts are supported:
//! - `Column`: one `Frame,<name>` block per series, separated by blank lines
//! - `Table`: a single table keyed by every tick seen in any series, with an
//!   empty field where a series has no sample at that tick
//!
//! Both read the store without mutating it.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::store::SeriesStore;
use crate::error::{GraphLogError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Column,
    #[default]
    Table,
}

/// Result of an export attempt that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Nothing was recorded; the destination was left untouched.
    Skipped,
    Written { path: PathBuf, bytes: usize },
}

/// Write one `Frame,<name>` block per series in first-seen order.
pub fn write_column<W: Write>(w: &mut W, store: &SeriesStore) -> io::Result<()> {
    for (_, series) in store.iter() {
        writeln!(w, "Frame,{}", series.name())?;
        for (tick, value) in series.samples() {
            writeln!(w, "{tick},{value}")?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Write a single table with one row per distinct tick across all series.
pub fn write_table<W: Write>(w: &mut W, store: &SeriesStore) -> io::Result<()> {
    write!(w, "Frame")?;
    for name in store.names() {
        write!(w, ",{name}")?;
    }
    writeln!(w)?;

    for tick in store.all_ticks() {
        write!(w, "{tick}")?;
        for (_, series) in store.iter() {
            match series.value_at(tick) {
                Some(value) => write!(w, ",{value}")?,
                None => write!(w, ",")?,
            }
        }
        writeln!(w)?;
    }
    writeln!(w)?;
    Ok(())
}

pub fn write_format<W: Write>(w: &mut W, store: &SeriesStore, format: ExportFormat) -> io::Result<()> {
    match format {
        ExportFormat::Column => write_column(w, store),
        ExportFormat::Table => write_table(w, store),
    }
}

/// Render the full snapshot in memory.
pub fn render(store: &SeriesStore, format: ExportFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    // writing into a Vec cannot fail
    let _ = write_format(&mut buf, store, format);
    buf
}

/// Export `store` to `path`, appending or truncating.
///
/// The snapshot is rendered first and handed to the file in one write, so a
/// failure never leaves a half-written row behind from this call. An empty
/// store is skipped without touching the file.
pub fn export_to_path(
    path: &Path,
    store: &SeriesStore,
    format: ExportFormat,
    append: bool,
) -> Result<ExportOutcome> {
    if store.is_empty() {
        return Ok(ExportOutcome::Skipped);
    }
    let snapshot = render(store, format);

    let sink_err = |source: io::Error| GraphLogError::SinkUnavailable {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(sink_err)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .map_err(sink_err)?;
    let mut out = BufWriter::new(file);
    out.write_all(&snapshot).map_err(sink_err)?;
    out.flush().map_err(sink_err)?;

    Ok(ExportOutcome::Written {
        path: path.to_path_buf(),
        bytes: snapshot.len(),
    })
}
