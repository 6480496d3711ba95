//! egui overlay that draws every numeric series as a polyline.
//!
//! Points come from [`CoordinateMapper`] in normalized device coordinates
//! with the origin at the bottom left; egui's origin is the top left, so the
//! y axis is flipped when converting to screen positions.

use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke};

use crate::data::mapping::{CoordinateMapper, Viewport};
use crate::data::store::SeriesStore;
use crate::data::trace_look::Palette;
use crate::logger::GraphLogger;

pub const DEFAULT_STROKE_WIDTH: f32 = 1.0;

/// Viewport matching an egui rect, for building a mapper.
pub fn viewport_of(rect: Rect) -> Viewport {
    Viewport::new(rect.width(), rect.height())
}

/// Position of a normalized point inside `rect`.
pub fn to_screen(rect: Rect, p: [f32; 2]) -> Pos2 {
    Pos2::new(
        rect.left() + p[0] * rect.width(),
        rect.bottom() - p[1] * rect.height(),
    )
}

/// Line segments between consecutive points of each numeric series,
/// coloured by series index.
pub fn segments(
    rect: Rect,
    store: &SeriesStore,
    mapper: &CoordinateMapper,
    palette: &Palette,
) -> Vec<(Color32, [Pos2; 2])> {
    let mut out = Vec::new();
    for (index, points) in mapper.map_store(store) {
        let color = palette.color(index);
        let mut prev: Option<Pos2> = None;
        for p in points {
            let pos = to_screen(rect, p);
            if let Some(a) = prev {
                out.push((color, [a, pos]));
            }
            prev = Some(pos);
        }
    }
    out
}

/// Paint the store onto `painter`. Returns the number of segments drawn.
pub fn paint_series(
    painter: &Painter,
    store: &SeriesStore,
    mapper: &CoordinateMapper,
    palette: &Palette,
    stroke_width: f32,
) -> usize {
    let segs = segments(painter.clip_rect(), store, mapper, palette);
    let n = segs.len();
    painter.extend(
        segs.into_iter()
            .map(|(color, pts)| Shape::line_segment(pts, Stroke::new(stroke_width, color))),
    );
    n
}

/// Paint a logger's graph over the whole painter area, honouring `graph_on`.
pub fn paint_logger(painter: &Painter, logger: &GraphLogger) -> usize {
    if !logger.graph_on() {
        return 0;
    }
    let mapper = logger.mapper(viewport_of(painter.clip_rect()));
    paint_series(
        painter,
        logger.store(),
        &mapper,
        &logger.palette(),
        DEFAULT_STROKE_WIDTH,
    )
}
