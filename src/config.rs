//! Editor configuration.

use crate::animation::DEFAULT_STEP_INTERVAL;
use crate::hit_test::CellGeometry;
use crate::paint::Palette;
use std::time::Duration;

/// Settings for a [`MazeEditorController`](crate::MazeEditorController).
///
/// ```
/// use slint_maze_editor::EditorConfig;
/// use std::time::Duration;
///
/// let config = EditorConfig::default()
///     .with_dimensions(10, 15)
///     .with_step_interval(Duration::from_millis(50));
/// assert_eq!(config.rows, 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub rows: usize,
    pub cols: usize,
    /// Edge length of a cell in logical pixels
    pub cell_size: f32,
    /// Minimum delay between two animated search steps
    pub step_interval: Duration,
    pub palette: Palette,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 30,
            cell_size: 25.0,
            step_interval: DEFAULT_STEP_INTERVAL,
            palette: Palette::default(),
        }
    }
}

impl EditorConfig {
    /// Set grid dimensions. Zero is clamped to 1.
    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows.max(1);
        self.cols = cols.max(1);
        self
    }

    /// Set the cell size. Non-positive values keep the previous size.
    pub fn with_cell_size(mut self, cell_size: f32) -> Self {
        if cell_size > 0.0 {
            self.cell_size = cell_size;
        }
        self
    }

    pub fn with_step_interval(mut self, interval: Duration) -> Self {
        self.step_interval = interval;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn geometry(&self) -> CellGeometry {
        CellGeometry::new(self.rows, self.cols, self.cell_size)
    }
}
