//! SeriesStore: routes named samples to their series.

use std::collections::{BTreeSet, HashMap};

use crate::config::GraphLogConfig;
use crate::data::traces::{SampleValue, Series};
use crate::error::Result;

/// All series recorded by one logger, in first-seen order.
#[derive(Debug, Clone)]
pub struct SeriesStore {
    series: HashMap<String, Series>,
    order: Vec<String>,
    max_count: usize,
    plot_size: [f32; 2],
}

impl Default for SeriesStore {
    fn default() -> Self {
        Self::from_config(&GraphLogConfig::default())
    }
}

impl SeriesStore {
    pub fn new(max_count: usize, plot_size: [f32; 2]) -> Self {
        Self {
            series: HashMap::new(),
            order: Vec::new(),
            max_count: max_count.max(1),
            plot_size,
        }
    }

    pub fn from_config(config: &GraphLogConfig) -> Self {
        Self::new(config.max_count, config.plot.size)
    }

    /// Record `value` at `tick` into the series called `name`.
    ///
    /// The series is created on its first sample and takes that sample's
    /// kind. A rejected first sample does not leave an empty series behind.
    pub fn record<V: Into<SampleValue>>(&mut self, name: &str, value: V, tick: i64) -> Result<()> {
        let value = value.into();
        if let Some(series) = self.series.get_mut(name) {
            return series.insert(tick, value);
        }

        let mut series = Series::new(name, value.kind(), self.max_count, self.plot_size);
        series.insert(tick, value)?;
        tracing::debug!(series = name, kind = %series.kind(), "created series");
        self.series.insert(name.to_string(), series);
        self.order.push(name.to_string());
        Ok(())
    }

    /// Series names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.order.iter().map(String::as_str)
    }

    /// Series in first-seen order, paired with their line index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Series)> + '_ {
        self.order
            .iter()
            .filter_map(|name| self.series.get(name))
            .enumerate()
    }

    pub fn get(&self, name: &str) -> Option<&Series> {
        self.series.get(name)
    }

    /// First-seen index of `name`, used for colour cycling.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.order.iter().position(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Every distinct tick held by any series, ascending.
    pub fn all_ticks(&self) -> BTreeSet<i64> {
        self.series
            .values()
            .flat_map(|series| series.samples().map(|(tick, _)| tick))
            .collect()
    }

    /// Drop every series. Capacity and plot size are kept.
    pub fn clear(&mut self) {
        self.series.clear();
        self.order.clear();
    }
}
