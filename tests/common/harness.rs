//! Test harness for the maze editor.
//!
//! Provides a complete setup mirroring `demos/maze/src/main.rs` with
//! callback tracking and helper methods for simulating user interactions.

#![allow(dead_code)]

use super::CallbackTracker;
use slint::{
    platform::{PointerEventButton, WindowEvent},
    ComponentHandle, LogicalPosition,
};
use slint_maze_editor::{EditorConfig, MazeEditorController};
use std::time::Duration;

// Include the compiled UI from build.rs
slint::include_modules!();

/// Cell edge length used by `tests/ui/test.slint`
pub const CELL: f32 = 20.0;

/// Initialize the testing backend for this thread.
/// With init_no_event_loop(), each test thread can have its own backend instance.
/// Uses thread_local to ensure each thread only initializes once.
pub fn init_testing_backend() {
    use std::cell::Cell;
    thread_local! {
        static INITIALIZED: Cell<bool> = const { Cell::new(false) };
    }

    INITIALIZED.with(|init| {
        if !init.get() {
            i_slint_backend_testing::init_no_event_loop();
            init.set(true);
        }
    });
}

/// Test harness for the maze editor window.
///
/// Sets up a 3×3 maze and all callbacks with tracking.
pub struct MazeTestHarness {
    pub window: MainWindow,
    pub ctrl: MazeEditorController,
    pub tracker: CallbackTracker,
}

impl MazeTestHarness {
    /// Create a harness with the 3×3 maze the test window is sized for.
    pub fn new() -> Self {
        Self::with_config(
            EditorConfig::default()
                .with_dimensions(3, 3)
                .with_cell_size(CELL)
                .with_step_interval(Duration::from_millis(30)),
        )
    }

    pub fn with_config(config: EditorConfig) -> Self {
        init_testing_backend();
        let window = MainWindow::new().unwrap();
        let ctrl = MazeEditorController::with_config(config);
        let tracker = CallbackTracker::new();
        let w = window.as_weak();

        window.set_rows(ctrl.rows() as i32);
        window.set_cols(ctrl.cols() as i32);
        window.set_cell_size(ctrl.cell_size());
        window.set_cell_colors(ctrl.cell_colors());
        window.set_grid_commands(ctrl.grid_lines());

        // Painting - controller handles the logic
        window.on_pointer_pressed(ctrl.pointer_pressed_callback());
        window.on_pointer_moved(ctrl.pointer_moved_callback());
        window.on_pointer_released(ctrl.pointer_released_callback());

        window.on_tool_selected({
            let select = ctrl.select_tool_callback();
            let tracker = tracker.clone();
            let w = w.clone();
            move |index| {
                select(index);
                tracker.tool_selected.borrow_mut().push(index);
                if let Some(w) = w.upgrade() {
                    w.set_current_tool(index);
                }
            }
        });

        // Search controls
        window.on_start_search({
            let start = ctrl.start_search_callback();
            let tracker = tracker.clone();
            move || {
                *tracker.start_search.borrow_mut() += 1;
                start();
            }
        });

        window.on_reset_search({
            let reset = ctrl.reset_search_callback();
            let tracker = tracker.clone();
            move || {
                *tracker.reset_search.borrow_mut() += 1;
                reset();
            }
        });

        window.on_clear_maze({
            let clear = ctrl.clear_maze_callback();
            let tracker = tracker.clone();
            move || {
                *tracker.clear_maze.borrow_mut() += 1;
                clear();
            }
        });

        // Status line and control locking
        ctrl.set_status_handler({
            let tracker = tracker.clone();
            move |status| {
                tracker.statuses.borrow_mut().push(status.clone());
                if let Some(w) = w.upgrade() {
                    w.set_status_text(status.message().into());
                    w.set_searching(status.is_searching());
                }
            }
        });

        Self {
            window,
            ctrl,
            tracker,
        }
    }

    /// Process pending timers and animations.
    pub fn pump_events(&self) {
        slint::platform::update_timers_and_animations();
    }

    /// Center of a cell in window coordinates.
    pub fn cell_center(&self, row: usize, col: usize) -> (f32, f32) {
        let size = self.ctrl.cell_size();
        (
            col as f32 * size + size / 2.0,
            row as f32 * size + size / 2.0,
        )
    }

    /// Select a tool through the window callback, as a toolbar would.
    pub fn select_tool(&self, index: i32) {
        self.window.invoke_tool_selected(index);
    }

    // === Mouse event helpers ===

    /// Simulate mouse down at the given position.
    pub fn mouse_down(&self, x: f32, y: f32) {
        self.window
            .window()
            .dispatch_event(WindowEvent::PointerPressed {
                position: LogicalPosition::new(x, y),
                button: PointerEventButton::Left,
            });
        self.pump_events();
    }

    /// Simulate mouse move to the given position.
    pub fn mouse_move(&self, x: f32, y: f32) {
        self.window
            .window()
            .dispatch_event(WindowEvent::PointerMoved {
                position: LogicalPosition::new(x, y),
            });
        self.pump_events();
    }

    /// Simulate mouse up at the given position.
    pub fn mouse_up(&self, x: f32, y: f32) {
        self.window
            .window()
            .dispatch_event(WindowEvent::PointerReleased {
                position: LogicalPosition::new(x, y),
                button: PointerEventButton::Left,
            });
        self.pump_events();
    }

    /// Simulate a complete click (down + up) at the given position.
    pub fn click(&self, x: f32, y: f32) {
        self.mouse_down(x, y);
        self.mouse_up(x, y);
    }

    /// Click the center of a cell.
    pub fn click_cell(&self, row: usize, col: usize) {
        let (x, y) = self.cell_center(row, col);
        self.click(x, y);
    }

    /// Simulate a complete drag from start to end.
    pub fn drag(&self, start_x: f32, start_y: f32, end_x: f32, end_y: f32) {
        self.mouse_down(start_x, start_y);
        self.mouse_move(end_x, end_y);
        self.mouse_up(end_x, end_y);
    }
}

impl Default for MazeTestHarness {
    fn default() -> Self {
        Self::new()
    }
}
