//! Normalization of numeric series into a display rectangle.
//!
//! Ticks are stretched so the window's first tick lands on the rectangle's
//! left edge and its last tick on the right edge; values are stretched so
//! `min` sits on the bottom edge and `max` on the top edge. The result is
//! then multiplied by `1/viewport` so it can be handed straight to a backend
//! that draws in normalized device coordinates (origin bottom-left, `[0, 1]`).

use std::collections::btree_map;

use crate::config::PlotRect;
use crate::data::store::SeriesStore;
use crate::data::traces::{tick_span, Series};

/// Size of the drawing surface in pixels, supplied by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Screen-to-normalized conversion factors. Degenerate sizes count as one pixel.
    pub fn scale(&self) -> [f32; 2] {
        [1.0 / self.width.max(1.0), 1.0 / self.height.max(1.0)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    rect: PlotRect,
    ndc: [f32; 2],
}

impl CoordinateMapper {
    pub fn new(rect: PlotRect, viewport: Viewport) -> Self {
        Self {
            rect,
            ndc: viewport.scale(),
        }
    }

    pub fn rect(&self) -> PlotRect {
        self.rect
    }

    /// Map a numeric series. Text series have no coordinates and yield `None`.
    pub fn map<'a>(&self, series: &'a Series) -> Option<MappedPoints<'a>> {
        let points = series.numbers()?;
        let (min_tick, max_tick) = series.tick_range().unwrap_or((0, 0));
        let x_factor = if max_tick == min_tick {
            0.0
        } else {
            self.rect.size[0] as f64 / tick_span(min_tick, max_tick)
        };
        let (min, y_factor) = match series.extent() {
            Some(e) if !e.is_flat() => (e.min, self.rect.size[1] as f64 / e.span()),
            Some(e) => (e.min, 0.0),
            None => (0.0, 0.0),
        };
        Some(MappedPoints {
            points,
            min_tick,
            x_factor,
            min,
            y_factor,
            origin: [self.rect.offset[0] as f64, self.rect.offset[1] as f64],
            ndc: [self.ndc[0] as f64, self.ndc[1] as f64],
        })
    }

    /// Every numeric series of `store` with its first-seen index. Text series are skipped.
    pub fn map_store<'a>(
        &'a self,
        store: &'a SeriesStore,
    ) -> impl Iterator<Item = (usize, MappedPoints<'a>)> + 'a {
        store
            .iter()
            .filter_map(move |(index, series)| self.map(series).map(|pts| (index, pts)))
    }
}

/// Normalized `[x, y]` positions of a series, in tick order.
///
/// Cloning restarts the sequence from the same position.
#[derive(Debug, Clone)]
pub struct MappedPoints<'a> {
    points: btree_map::Iter<'a, i64, f64>,
    min_tick: i64,
    x_factor: f64,
    min: f64,
    y_factor: f64,
    origin: [f64; 2],
    ndc: [f64; 2],
}

impl MappedPoints<'_> {
    fn project(&self, tick: i64, value: f64) -> [f32; 2] {
        let x = self.origin[0] + tick_span(self.min_tick, tick) * self.x_factor;
        let y = self.origin[1] + (value - self.min) * self.y_factor;
        [(x * self.ndc[0]) as f32, (y * self.ndc[1]) as f32]
    }
}

impl Iterator for MappedPoints<'_> {
    type Item = [f32; 2];

    fn next(&mut self) -> Option<Self::Item> {
        let (tick, value) = self.points.next()?;
        Some(self.project(*tick, *value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.points.size_hint()
    }
}

impl DoubleEndedIterator for MappedPoints<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (tick, value) = self.points.next_back()?;
        Some(self.project(*tick, *value))
    }
}

impl ExactSizeIterator for MappedPoints<'_> {}
