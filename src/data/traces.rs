//! Series: a bounded, tick-ordered window of samples with running extrema.
//!
//! A series is either numeric or textual; the kind is fixed by the first
//! sample. Numeric series keep `min`/`max` equal to the extrema of the
//! samples currently in the window. New values update them in O(1); when a
//! sample holding an extreme leaves the window (eviction or replacement at
//! the same tick) only that side is re-derived by scanning what is left.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GraphLogError, Result};

/// Value carried by a single sample.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleValue {
    Number(f64),
    Text(String),
}

impl SampleValue {
    pub fn kind(&self) -> SeriesKind {
        match self {
            SampleValue::Number(_) => SeriesKind::Numeric,
            SampleValue::Text(_) => SeriesKind::Text,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            SampleValue::Number(v) => Some(*v),
            SampleValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SampleValue::Number(_) => None,
            SampleValue::Text(s) => Some(s),
        }
    }
}

impl From<f64> for SampleValue {
    fn from(v: f64) -> Self {
        SampleValue::Number(v)
    }
}

/// Goes through the shortest decimal form of the `f32`, so `0.1f32` is
/// stored (and exported) as `0.1` rather than its exact binary widening.
impl From<f32> for SampleValue {
    fn from(v: f32) -> Self {
        SampleValue::Number(v.to_string().parse().unwrap_or(v as f64))
    }
}

impl From<i32> for SampleValue {
    fn from(v: i32) -> Self {
        SampleValue::Number(v as f64)
    }
}

impl From<u32> for SampleValue {
    fn from(v: u32) -> Self {
        SampleValue::Number(v as f64)
    }
}

impl From<i64> for SampleValue {
    fn from(v: i64) -> Self {
        SampleValue::Number(v as f64)
    }
}

impl From<&str> for SampleValue {
    fn from(s: &str) -> Self {
        SampleValue::Text(s.to_string())
    }
}

impl From<String> for SampleValue {
    fn from(s: String) -> Self {
        SampleValue::Text(s)
    }
}

/// Borrowed view of a stored sample value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRef<'a> {
    Number(f64),
    Text(&'a str),
}

/// Numbers use `f64`'s `Display`: shortest round-trip decimal, no exponent,
/// no digit grouping. Text is written verbatim.
impl fmt::Display for ValueRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueRef::Number(v) => write!(f, "{v}"),
            ValueRef::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Numeric,
    Text,
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesKind::Numeric => f.write_str("numeric"),
            SeriesKind::Text => f.write_str("text"),
        }
    }
}

/// Minimum and maximum of the values currently in a numeric window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_flat(&self) -> bool {
        self.max == self.min
    }
}

#[derive(Debug, Clone)]
enum Window {
    Numeric(BTreeMap<i64, f64>),
    Text(BTreeMap<i64, String>),
}

impl Window {
    fn len(&self) -> usize {
        match self {
            Window::Numeric(points) => points.len(),
            Window::Text(strings) => strings.len(),
        }
    }

    fn first_tick(&self) -> Option<i64> {
        match self {
            Window::Numeric(points) => points.keys().next().copied(),
            Window::Text(strings) => strings.keys().next().copied(),
        }
    }

    fn last_tick(&self) -> Option<i64> {
        match self {
            Window::Numeric(points) => points.keys().next_back().copied(),
            Window::Text(strings) => strings.keys().next_back().copied(),
        }
    }
}

/// A named, bounded, tick-ordered sample history.
#[derive(Debug, Clone)]
pub struct Series {
    name: String,
    window: Window,
    extent: Option<Extent>,
    /// `[x, y]` factors mapping tick and value spans onto `plot_size`.
    scale: [f64; 2],
    plot_size: [f64; 2],
    max_count: usize,
}

impl Series {
    /// Create an empty series. `max_count` is clamped to at least one sample.
    pub fn new<S: Into<String>>(
        name: S,
        kind: SeriesKind,
        max_count: usize,
        plot_size: [f32; 2],
    ) -> Self {
        let window = match kind {
            SeriesKind::Numeric => Window::Numeric(BTreeMap::new()),
            SeriesKind::Text => Window::Text(BTreeMap::new()),
        };
        let plot_size = [plot_size[0] as f64, plot_size[1] as f64];
        Self {
            name: name.into(),
            window,
            extent: None,
            scale: plot_size,
            plot_size,
            max_count: max_count.max(1),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SeriesKind {
        match self.window {
            Window::Numeric(_) => SeriesKind::Numeric,
            Window::Text(_) => SeriesKind::Text,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.kind() == SeriesKind::Numeric
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.len() == 0
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Smallest and largest tick in the window.
    pub fn tick_range(&self) -> Option<(i64, i64)> {
        Some((self.window.first_tick()?, self.window.last_tick()?))
    }

    pub fn extent(&self) -> Option<Extent> {
        self.extent
    }

    pub fn min(&self) -> Option<f64> {
        self.extent.map(|e| e.min)
    }

    pub fn max(&self) -> Option<f64> {
        self.extent.map(|e| e.max)
    }

    /// `[x, y]` scale factors. A component whose span is zero keeps its last
    /// meaningful value (initially the plot size itself).
    ///
    /// Relative to the plot size the series was created with, which is the
    /// store's configured one. A `CoordinateMapper` derives its own factors
    /// from the rect it is given.
    pub fn scale(&self) -> [f64; 2] {
        self.scale
    }

    /// Numeric samples in tick order, or `None` for a text series.
    pub fn numbers(&self) -> Option<btree_map::Iter<'_, i64, f64>> {
        match &self.window {
            Window::Numeric(points) => Some(points.iter()),
            Window::Text(_) => None,
        }
    }

    /// All samples in tick order.
    pub fn samples(&self) -> Box<dyn Iterator<Item = (i64, ValueRef<'_>)> + '_> {
        match &self.window {
            Window::Numeric(points) => {
                Box::new(points.iter().map(|(t, v)| (*t, ValueRef::Number(*v))))
            }
            Window::Text(strings) => {
                Box::new(strings.iter().map(|(t, s)| (*t, ValueRef::Text(s.as_str()))))
            }
        }
    }

    pub fn value_at(&self, tick: i64) -> Option<ValueRef<'_>> {
        match &self.window {
            Window::Numeric(points) => points.get(&tick).map(|v| ValueRef::Number(*v)),
            Window::Text(strings) => strings.get(&tick).map(|s| ValueRef::Text(s.as_str())),
        }
    }

    /// Insert a sample at `tick`.
    ///
    /// A sample already present at `tick` is replaced. Otherwise the window
    /// grows and, past `max_count`, drops its oldest tick. A value of the
    /// wrong kind or a non-finite number is rejected and leaves the series
    /// untouched.
    pub fn insert<V: Into<SampleValue>>(&mut self, tick: i64, value: V) -> Result<()> {
        let expected = self.kind();
        match (&mut self.window, value.into()) {
            (Window::Numeric(points), SampleValue::Number(v)) => {
                if !v.is_finite() {
                    return Err(GraphLogError::NonFiniteValue {
                        name: self.name.clone(),
                        tick,
                    });
                }
                let replaced = points.insert(tick, v);
                let evicted = if points.len() > self.max_count {
                    points.pop_first().map(|(_, old)| old)
                } else {
                    None
                };
                let removed = replaced.into_iter().chain(evicted);
                self.extent = track_extent(points, self.extent, v, removed);
            }
            (Window::Text(strings), SampleValue::Text(s)) => {
                strings.insert(tick, s);
                if strings.len() > self.max_count {
                    strings.pop_first();
                }
            }
            (_, value) => {
                return Err(GraphLogError::TypeMismatch {
                    name: self.name.clone(),
                    expected,
                    found: value.kind(),
                });
            }
        }
        self.rescale();
        Ok(())
    }

    fn rescale(&mut self) {
        if let Some((first, last)) = self.tick_range() {
            if last != first {
                self.scale[0] = self.plot_size[0] / tick_span(first, last);
            }
        }
        if let Some(extent) = self.extent {
            if !extent.is_flat() {
                self.scale[1] = self.plot_size[1] / extent.span();
            }
        }
    }
}

/// Distance between two ticks. Any two `i64` ticks fit in a `u64` span.
pub(crate) fn tick_span(from: i64, to: i64) -> f64 {
    to.abs_diff(from) as f64
}

/// Fold `added` into `extent`, then re-derive any side whose value was held
/// by one of the samples in `removed`. Another sample may share the removed
/// extreme, so the remaining window is scanned instead of guessing.
fn track_extent(
    points: &BTreeMap<i64, f64>,
    extent: Option<Extent>,
    added: f64,
    removed: impl Iterator<Item = f64>,
) -> Option<Extent> {
    let mut extent = match extent {
        Some(mut e) => {
            if added < e.min {
                e.min = added;
            }
            if added > e.max {
                e.max = added;
            }
            e
        }
        None => Extent {
            min: added,
            max: added,
        },
    };

    let (mut rescan_min, mut rescan_max) = (false, false);
    for old in removed {
        rescan_min |= old == extent.min;
        rescan_max |= old == extent.max;
    }
    if !(rescan_min || rescan_max) {
        return Some(extent);
    }
    if points.is_empty() {
        return None;
    }
    if rescan_min {
        extent.min = points.values().copied().fold(f64::INFINITY, f64::min);
    }
    if rescan_max {
        extent.max = points.values().copied().fold(f64::NEG_INFINITY, f64::max);
    }
    tracing::trace!(min = extent.min, max = extent.max, "rescanned window extent");
    Some(extent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_extent_skips_scan_when_extremes_survive() {
        let points: BTreeMap<i64, f64> = [(1, 1.0), (2, 3.0), (3, 2.0)].into_iter().collect();
        let start = Some(Extent { min: 1.0, max: 3.0 });
        let e = track_extent(&points, start, 2.0, [2.5].into_iter()).unwrap();
        assert_eq!(e, Extent { min: 1.0, max: 3.0 });
    }

    #[test]
    fn track_extent_rescans_only_removed_side() {
        // 9.0 was the max and left; 1.0 is still the min
        let points: BTreeMap<i64, f64> = [(2, 1.0), (3, 4.0)].into_iter().collect();
        let start = Some(Extent { min: 1.0, max: 9.0 });
        let e = track_extent(&points, start, 4.0, [9.0].into_iter()).unwrap();
        assert_eq!(e, Extent { min: 1.0, max: 4.0 });
    }

    #[test]
    fn value_ref_formats_numbers_without_exponent() {
        assert_eq!(ValueRef::Number(10.0).to_string(), "10");
        assert_eq!(ValueRef::Number(0.25).to_string(), "0.25");
        assert_eq!(ValueRef::Number(-3.5).to_string(), "-3.5");
        assert_eq!(ValueRef::Number(1e21).to_string(), "1000000000000000000000");
        assert_eq!(ValueRef::Text("a b").to_string(), "a b");
    }
}
