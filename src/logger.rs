//! GraphLogger: the host-owned logging handle.
//!
//! The host creates one logger at startup, feeds it samples from its frame
//! loop and calls the lifecycle hooks when the application pauses, loses
//! focus or shuts down. The logger flushes the log file once more when it is
//! dropped without an explicit [`GraphLogger::shutdown`].

use std::sync::mpsc::Receiver;

use tracing::{debug, error, info, warn};

use crate::config::GraphLogConfig;
use crate::data::export::{self, ExportOutcome};
use crate::data::mapping::{CoordinateMapper, Viewport};
use crate::data::store::SeriesStore;
use crate::data::trace_look::Palette;
use crate::data::traces::SampleValue;
use crate::error::Result;
use crate::sink::LogCommand;

/// Series used by [`GraphLogger::add_default`].
pub const DEFAULT_SERIES: &str = "default";

pub struct GraphLogger {
    config: GraphLogConfig,
    store: SeriesStore,
    frame: i64,
    closed: bool,
}

impl GraphLogger {
    pub fn new(config: GraphLogConfig) -> Self {
        let store = SeriesStore::from_config(&config);
        Self {
            config,
            store,
            frame: 0,
            closed: false,
        }
    }

    pub fn config(&self) -> &GraphLogConfig {
        &self.config
    }

    pub fn store(&self) -> &SeriesStore {
        &self.store
    }

    /// Current frame, used as the tick by `add_point`.
    pub fn frame(&self) -> i64 {
        self.frame
    }

    /// Advance to the next frame and return it.
    pub fn begin_frame(&mut self) -> i64 {
        self.frame += 1;
        self.frame
    }

    pub fn set_frame(&mut self, frame: i64) {
        self.frame = frame;
    }

    /// Record a sample at an explicit tick, returning any rejection.
    pub fn record<V: Into<SampleValue>>(&mut self, name: &str, value: V, tick: i64) -> Result<()> {
        self.store.record(name, value, tick)
    }

    /// Record a sample at the current frame.
    ///
    /// Rejected samples are logged and dropped; returns whether the sample
    /// was stored.
    pub fn add_point<V: Into<SampleValue>>(&mut self, name: &str, value: V) -> bool {
        let tick = self.frame;
        self.record_logged(name, value.into(), tick)
    }

    /// Record a sample into the `"default"` series at the current frame.
    pub fn add_default<V: Into<SampleValue>>(&mut self, value: V) -> bool {
        self.add_point(DEFAULT_SERIES, value)
    }

    /// Apply every queued sink command. Returns how many samples were stored.
    pub fn drain(&mut self, rx: &Receiver<LogCommand>) -> usize {
        let mut stored = 0;
        while let Ok(cmd) = rx.try_recv() {
            let ok = match cmd {
                LogCommand::Record { name, value, tick } => self.record_logged(&name, value, tick),
                LogCommand::Point { name, value } => {
                    let tick = self.frame;
                    self.record_logged(&name, value, tick)
                }
            };
            if ok {
                stored += 1;
            }
        }
        stored
    }

    fn record_logged(&mut self, name: &str, value: SampleValue, tick: i64) -> bool {
        match self.store.record(name, value, tick) {
            Ok(()) => true,
            Err(e) => {
                warn!("Dropped sample at tick {tick}: {e}");
                false
            }
        }
    }

    /// Export every series to the configured log file.
    pub fn save_log(&self) -> Result<ExportOutcome> {
        let path = &self.config.log_path;
        let result = export::export_to_path(
            path,
            &self.store,
            self.config.format,
            self.config.append_log_file,
        );
        match &result {
            Ok(ExportOutcome::Written { path, .. }) => info!("Log file saved: {}", path.display()),
            Ok(ExportOutcome::Skipped) => debug!("Nothing recorded; log file not written"),
            Err(e) => error!("Could not save to path: {}: {e}", path.display()),
        }
        result
    }

    /// Flush when the application is paused.
    pub fn on_pause(&self, paused: bool) {
        if paused {
            let _ = self.save_log();
        }
    }

    /// Flush when the application loses focus.
    pub fn on_focus_changed(&self, focused: bool) {
        if !focused {
            let _ = self.save_log();
        }
    }

    /// Flush one last time and release the logger.
    pub fn shutdown(mut self) -> Result<ExportOutcome> {
        self.closed = true;
        self.save_log()
    }

    pub fn graph_on(&self) -> bool {
        self.config.graph_on
    }

    pub fn set_graph_on(&mut self, on: bool) {
        self.config.graph_on = on;
    }

    /// Mapper for the configured plot rectangle on a viewport of the given size.
    pub fn mapper(&self, viewport: Viewport) -> CoordinateMapper {
        CoordinateMapper::new(self.config.plot, viewport)
    }

    pub fn palette(&self) -> Palette {
        Palette::from_rgb(&self.config.colors)
    }
}

impl Drop for GraphLogger {
    fn drop(&mut self) {
        if !self.closed {
            let _ = self.save_log();
        }
    }
}
