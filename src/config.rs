//! Logger configuration and its YAML/JSON persistence.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::export::ExportFormat;
use crate::data::trace_look::DEFAULT_COLORS;
use crate::error::{GraphLogError, Result};

/// Samples kept per series unless configured otherwise.
pub const DEFAULT_MAX_COUNT: usize = 6000;

/// Rectangle (in screen pixels, origin bottom-left) that numeric series are
/// normalized into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotRect {
    /// Distance from the bottom left corner.
    pub offset: [f32; 2],
    /// Width and height of the graph area.
    pub size: [f32; 2],
}

impl Default for PlotRect {
    fn default() -> Self {
        Self {
            offset: [10.0, 10.0],
            size: [300.0, 150.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphLogConfig {
    /// Append to an existing log file instead of overwriting it.
    pub append_log_file: bool,
    pub format: ExportFormat,
    /// Paint the on-screen graph.
    pub graph_on: bool,
    /// Samples kept per series.
    pub max_count: usize,
    pub plot: PlotRect,
    /// Line colours, cycled by series index.
    pub colors: [[u8; 3]; 6],
    pub log_path: PathBuf,
}

impl Default for GraphLogConfig {
    fn default() -> Self {
        Self {
            append_log_file: false,
            format: ExportFormat::Table,
            graph_on: true,
            max_count: DEFAULT_MAX_COUNT,
            plot: PlotRect::default(),
            colors: DEFAULT_COLORS,
            log_path: default_log_path(),
        }
    }
}

impl GraphLogConfig {
    /// Load a configuration file. `.yaml`/`.yml` files are read as YAML,
    /// anything else as JSON. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(
                "Config file not found at '{}'; using defaults.",
                path.display()
            );
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path).map_err(|e| {
            GraphLogError::Config(format!("cannot read '{}': {e}", path.display()))
        })?;
        let mut config: Self = if is_yaml(path) {
            serde_yaml::from_str(&raw)
                .map_err(|e| GraphLogError::Config(format!("YAML parse error: {e}")))?
        } else {
            serde_json::from_str(&raw)
                .map_err(|e| GraphLogError::Config(format!("JSON parse error: {e}")))?
        };
        config.max_count = config.max_count.max(1);
        Ok(config)
    }

    /// Write the configuration, choosing YAML or JSON from the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let txt = if is_yaml(path) {
            serde_yaml::to_string(self)
                .map_err(|e| GraphLogError::Config(format!("Serialization error: {e}")))?
        } else {
            serde_json::to_string_pretty(self)
                .map_err(|e| GraphLogError::Config(format!("Serialization error: {e}")))?
        };
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, txt)?;
        Ok(())
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// `$HOME/.graphlog/log.csv`, or `log.csv` in the working directory when
/// `HOME` is unset.
pub fn default_log_path() -> PathBuf {
    match std::env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(".graphlog").join("log.csv"),
        Err(_) => PathBuf::from("log.csv"),
    }
}
