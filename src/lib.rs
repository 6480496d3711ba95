//! graphlog crate root: re-exports and module wiring.
//!
//! An in-process telemetry buffer for frame-driven applications:
//! - `data::traces`: bounded, tick-ordered series with running min/max
//! - `data::store`: name routing in first-seen order
//! - `data::mapping`: normalization into a display rectangle
//! - `data::export`: column and table CSV layouts
//! - `logger`: host-owned handle with frame counter and lifecycle flushes
//! - `sink`: channels to feed samples from other threads
//! - `plot`: egui overlay drawing the numeric series

pub mod config;
pub mod data;
pub mod error;
pub mod logger;
pub mod plot;
pub mod sink;

// Public re-exports for a compact external API
pub use config::{GraphLogConfig, PlotRect};
pub use data::export::{ExportFormat, ExportOutcome};
pub use data::mapping::{CoordinateMapper, MappedPoints, Viewport};
pub use data::store::SeriesStore;
pub use data::trace_look::Palette;
pub use data::traces::{Extent, SampleValue, Series, SeriesKind, ValueRef};
pub use error::{GraphLogError, Result};
pub use logger::{GraphLogger, DEFAULT_SERIES};
pub use sink::{channel_log, LogCommand, LogSink};
