//! Level 1: Basic Initialization Tests
//!
//! Tests window creation, the initial color model and the grid outline.

mod common;

use common::harness::{MazeTestHarness, ToolTypes, CELL};
use slint::{ComponentHandle, Global, Model};
use slint_maze_editor::{CellKind, ColorClass, Palette, SearchPhase, SearchStatus, Tool};

#[test]
fn test_window_creates_successfully() {
    let harness = MazeTestHarness::new();
    // If we got here, window creation succeeded
    assert!(harness.window.window().size().width > 0);
}

#[test]
fn test_window_dimensions_match_controller() {
    let harness = MazeTestHarness::new();

    assert_eq!(harness.window.get_rows(), 3);
    assert_eq!(harness.window.get_cols(), 3);
    assert_eq!(harness.window.get_cell_size(), CELL);
}

#[test]
fn test_color_model_has_one_entry_per_cell() {
    let harness = MazeTestHarness::new();
    let colors = harness.window.get_cell_colors();

    assert_eq!(colors.row_count(), 9);
    let open = Palette::default().path;
    for i in 0..colors.row_count() {
        assert_eq!(colors.row_data(i), Some(open));
    }
}

#[test]
fn test_grid_starts_empty() {
    let harness = MazeTestHarness::new();
    let grid = harness.ctrl.grid();

    assert_eq!(grid.count(CellKind::Empty), 9);
    assert_eq!(grid.start_pos(), None);
    assert_eq!(grid.end_pos(), None);
    assert_eq!(harness.ctrl.class_count(ColorClass::Path), 9);
}

#[test]
fn test_controller_initializes_with_defaults() {
    let harness = MazeTestHarness::new();

    assert_eq!(harness.ctrl.tool(), Tool::Wall);
    assert_eq!(harness.ctrl.phase(), SearchPhase::Idle);
    assert_eq!(harness.ctrl.status(), SearchStatus::Ready);
    assert!(!harness.ctrl.is_searching());
    assert!(!harness.ctrl.is_animating());
    assert_eq!(harness.window.get_status_text().as_str(), "Ready");
}

#[test]
fn test_grid_commands_outline_every_cell() {
    let harness = MazeTestHarness::new();
    let commands = harness.window.get_grid_commands();

    // 4 vertical + 4 horizontal lines
    assert_eq!(commands.matches('M').count(), 8);
    assert!(commands.as_str().starts_with("M 0 0 L 0 60"));
}

#[test]
fn test_tool_indices_match_slint_global() {
    let harness = MazeTestHarness::new();
    let tools = ToolTypes::get(&harness.window);

    assert_eq!(Tool::from_index(tools.get_wall()), Some(Tool::Wall));
    assert_eq!(Tool::from_index(tools.get_path()), Some(Tool::Path));
    assert_eq!(Tool::from_index(tools.get_start()), Some(Tool::Start));
    assert_eq!(Tool::from_index(tools.get_end()), Some(Tool::End));
}
