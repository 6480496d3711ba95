//! Line colours for the on-screen graph.

use egui::Color32;

/// Cyan, green, magenta, red, yellow, blue.
pub const DEFAULT_COLORS: [[u8; 3]; 6] = [
    [0, 255, 255],
    [0, 255, 0],
    [255, 0, 255],
    [255, 0, 0],
    [255, 235, 4],
    [0, 0, 255],
];

/// Six-colour palette cycled by series index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    colors: [Color32; 6],
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_rgb(&DEFAULT_COLORS)
    }
}

impl Palette {
    pub fn from_rgb(colors: &[[u8; 3]; 6]) -> Self {
        Self {
            colors: (*colors).map(|[r, g, b]| Color32::from_rgb(r, g, b)),
        }
    }

    /// Colour of the line at `index` (`index mod 6`).
    pub fn color(&self, index: usize) -> Color32 {
        self.colors[index % self.colors.len()]
    }

    pub fn colors(&self) -> &[Color32; 6] {
        &self.colors
    }
}
