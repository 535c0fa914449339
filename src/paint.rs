//! Cell coloring.
//!
//! The search core never deals in concrete colors. It emits [`PaintEvent`]s
//! carrying a semantic [`ColorClass`] into a [`PaintSink`]; the [`Palette`]
//! maps classes to actual colors only at the rendering boundary, and
//! [`CellPainter`] mirrors the result into a Slint model.

use crate::grid::{CellKind, Coord, Grid};
use slint::{Color, Model, VecModel};
use std::rc::Rc;

/// Semantic color class of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorClass {
    Wall,
    /// Open, walkable cell
    Path,
    Start,
    End,
    /// Discovered and queued, not yet expanded
    Frontier,
    /// Dequeued and expanded
    Visited,
    /// Part of the shortest path
    Final,
}

impl ColorClass {
    /// Base class of a cell when no search coloring is applied.
    pub fn base(kind: CellKind) -> Self {
        match kind {
            CellKind::Empty => ColorClass::Path,
            CellKind::Wall => ColorClass::Wall,
            CellKind::Start => ColorClass::Start,
            CellKind::End => ColorClass::End,
        }
    }

    /// Whether this class only exists while a search result is shown.
    pub fn is_search_overlay(self) -> bool {
        matches!(
            self,
            ColorClass::Frontier | ColorClass::Visited | ColorClass::Final
        )
    }
}

/// A single coloring instruction emitted by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintEvent {
    pub coord: Coord,
    pub class: ColorClass,
}

/// Receiver of coloring events.
///
/// Implement this for whatever renders the maze. `Vec<PaintEvent>` records
/// the events, which is handy for tests and replays.
pub trait PaintSink {
    fn paint(&mut self, coord: Coord, class: ColorClass);
}

impl PaintSink for Vec<PaintEvent> {
    fn paint(&mut self, coord: Coord, class: ColorClass) {
        self.push(PaintEvent { coord, class });
    }
}

/// Sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl PaintSink for NullSink {
    fn paint(&mut self, _coord: Coord, _class: ColorClass) {}
}

/// Concrete colors for each [`ColorClass`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub wall: Color,
    pub path: Color,
    pub start: Color,
    pub end: Color,
    pub frontier: Color,
    pub visited: Color,
    pub final_path: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            wall: Color::from_rgb_u8(0x1E, 0x3A, 0x5F),
            path: Color::from_rgb_u8(0xFF, 0xFF, 0xFF),
            start: Color::from_rgb_u8(0x4C, 0xAF, 0x50),
            end: Color::from_rgb_u8(0xF4, 0x43, 0x36),
            frontier: Color::from_rgb_u8(0xAE, 0xD6, 0xF1),
            visited: Color::from_rgb_u8(0xD6, 0xEA, 0xF8),
            final_path: Color::from_rgb_u8(0xFF, 0xD7, 0x00),
        }
    }
}

impl Palette {
    pub fn color(&self, class: ColorClass) -> Color {
        match class {
            ColorClass::Wall => self.wall,
            ColorClass::Path => self.path,
            ColorClass::Start => self.start,
            ColorClass::End => self.end,
            ColorClass::Frontier => self.frontier,
            ColorClass::Visited => self.visited,
            ColorClass::Final => self.final_path,
        }
    }
}

/// Mirrors per-cell color classes into a row-major Slint color model.
///
/// The painter keeps its own class buffer so callers can inspect what is shown
/// without converting colors back.
pub struct CellPainter {
    cols: usize,
    palette: Palette,
    classes: Vec<ColorClass>,
    model: Rc<VecModel<Color>>,
}

impl CellPainter {
    /// Create a painter showing the base colors of `grid`.
    pub fn new(grid: &Grid, palette: Palette) -> Self {
        let classes: Vec<ColorClass> = grid.cells().map(|(_, k)| ColorClass::base(k)).collect();
        let colors: Vec<Color> = classes.iter().map(|&c| palette.color(c)).collect();
        Self {
            cols: grid.cols(),
            palette,
            classes,
            model: Rc::new(VecModel::from(colors)),
        }
    }

    /// The model to bind to a `[color]` property.
    pub fn model(&self) -> Rc<VecModel<Color>> {
        self.model.clone()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Class currently shown at `coord`.
    pub fn class_at(&self, coord: Coord) -> Option<ColorClass> {
        self.index_of(coord).map(|i| self.classes[i])
    }

    /// Number of cells currently showing `class`.
    pub fn count(&self, class: ColorClass) -> usize {
        self.classes.iter().filter(|&&c| c == class).count()
    }

    /// Repaint every cell with its base color from `grid`.
    pub fn sync_from_grid(&mut self, grid: &Grid) {
        for (coord, kind) in grid.cells() {
            self.paint(coord, ColorClass::base(kind));
        }
    }

    fn index_of(&self, coord: Coord) -> Option<usize> {
        let idx = coord.row * self.cols + coord.col;
        (coord.col < self.cols && idx < self.classes.len()).then_some(idx)
    }
}

impl PaintSink for CellPainter {
    fn paint(&mut self, coord: Coord, class: ColorClass) {
        let Some(idx) = self.index_of(coord) else {
            return;
        };
        if self.classes[idx] == class {
            return;
        }
        self.classes[idx] = class;
        if idx < self.model.row_count() {
            self.model.set_row_data(idx, self.palette.color(class));
        }
    }
}
