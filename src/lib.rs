//! # Slint Maze Editor Library
//!
//! Components for building grid maze editors with an animated breadth-first
//! search visualizer. Users paint walls, a start cell and an end cell, then
//! watch the search expand its frontier step by step and trace the shortest
//! path.
//!
//! ## Features
//!
//! - **Incremental BFS** - One node per step, driven by any timer or loop
//! - **Framework-Free Core** - Grid and search know nothing about rendering;
//!   coloring goes through the [`PaintSink`] trait as semantic [`ColorClass`]es
//! - **Deterministic** - Fixed up/down/left/right expansion order, so runs
//!   and shortest paths are reproducible
//! - **Slint Integration** - [`MazeEditorController`] provides ready-made
//!   callbacks, a color model and the animation timer
//!
//! ## Quick Start
//!
//! ```slint
//! import { MazeCanvas, ToolTypes } from "@slint-maze-editor/maze-editor.slint";
//!
//! export component MainWindow inherits Window {
//!     MazeCanvas {
//!         // Bind rows, cols and cell-colors here
//!     }
//! }
//! ```
//!
//! ## Core Types
//!
//! - [`Grid`] - Cell array with single start/end cells
//! - [`BfsStepper`] - Step-at-a-time search state machine
//! - [`reconstruct`] - Predecessor walk producing a [`Path`]
//! - [`AnimationDriver`] - Paces steps at a fixed minimum interval
//!
//! ## Rust Helpers
//!
//! - [`cell_at`] - Map a canvas position to a cell
//! - [`stroke_cells`] - Interpolate drag strokes between pointer events
//! - [`grid_line_commands`] - Generate SVG path for the cell outlines
//! - [`CellPainter`] - Mirror cell colors into a Slint model

pub mod animation;
pub mod config;
pub mod controller;
pub mod error;
pub mod grid;
pub mod paint;
pub mod path;
pub mod search;

// Re-export core types and helpers
pub use animation::{AnimationDriver, Completion, DriverPoll, DEFAULT_STEP_INTERVAL};
pub use config::EditorConfig;
pub use controller::{MazeEditorController, SearchStatus, Tool};
pub use error::SearchError;
pub use grid::{grid_line_commands, CellKind, Coord, Grid};
pub use hit_test::{cell_at, stroke_cells, CellGeometry};
pub use paint::{CellPainter, ColorClass, NullSink, PaintEvent, PaintSink, Palette};
pub use path::{reconstruct, Path};
pub use search::{BfsStepper, SearchPhase, StepOutcome};
