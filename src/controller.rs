//! High-level controller for maze editor applications.
//!
//! The [`MazeEditorController`] owns the grid, the search, the animation timer
//! and the cell color model, and hands out ready-made Slint callbacks.
//!
//! # Example
//!
//! ```ignore
//! use slint_maze_editor::{EditorConfig, MazeEditorController};
//!
//! slint::include_modules!();
//!
//! fn main() {
//!     let window = MainWindow::new().unwrap();
//!     let ctrl = MazeEditorController::with_config(EditorConfig::default());
//!     let w = window.as_weak();
//!
//!     window.set_rows(ctrl.rows() as i32);
//!     window.set_cols(ctrl.cols() as i32);
//!     window.set_cell_colors(ctrl.cell_colors());
//!
//!     // Painting
//!     window.on_pointer_pressed(ctrl.pointer_pressed_callback());
//!     window.on_pointer_moved(ctrl.pointer_moved_callback());
//!     window.on_pointer_released(ctrl.pointer_released_callback());
//!     window.on_tool_selected(ctrl.select_tool_callback());
//!
//!     // Search buttons
//!     window.on_start_search(ctrl.start_search_callback());
//!     window.on_reset_search(ctrl.reset_search_callback());
//!     window.on_clear_maze(ctrl.clear_maze_callback());
//!
//!     // Status line and control locking
//!     ctrl.set_status_handler(move |status| {
//!         if let Some(w) = w.upgrade() {
//!             w.set_status_text(status.message().into());
//!             w.set_searching(status.is_searching());
//!         }
//!     });
//!
//!     window.run().unwrap();
//! }
//! ```

use crate::animation::{AnimationDriver, Completion, DriverPoll};
use crate::config::EditorConfig;
use crate::error::SearchError;
use crate::grid::{grid_line_commands, CellKind, Coord, Grid};
use crate::hit_test::{stroke_cells, CellGeometry};
use crate::paint::{CellPainter, ColorClass, PaintSink};
use crate::search::{BfsStepper, SearchPhase};
use slint::{Color, ModelRc, SharedString, Timer, TimerMode};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Painting tool selected in the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Wall,
    /// Erase back to an open cell
    Path,
    Start,
    End,
}

impl Tool {
    /// Cell kind written by this tool.
    pub fn kind(self) -> CellKind {
        match self {
            Tool::Wall => CellKind::Wall,
            Tool::Path => CellKind::Empty,
            Tool::Start => CellKind::Start,
            Tool::End => CellKind::End,
        }
    }

    /// Tool from its index in the `ToolTypes` Slint global.
    pub fn from_index(index: i32) -> Option<Tool> {
        match index {
            0 => Some(Tool::Wall),
            1 => Some(Tool::Path),
            2 => Some(Tool::Start),
            3 => Some(Tool::End),
            _ => None,
        }
    }

    pub fn index(self) -> i32 {
        match self {
            Tool::Wall => 0,
            Tool::Path => 1,
            Tool::Start => 2,
            Tool::End => 3,
        }
    }
}

/// User-facing state of the search, reported through the status handler
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchStatus {
    #[default]
    Ready,
    Searching,
    PathFound { length: usize },
    NoPath,
    MissingEndpoints,
    /// Internal consistency fault; carries the error message
    Fault(String),
}

impl SearchStatus {
    pub fn message(&self) -> String {
        match self {
            SearchStatus::Ready => "Ready".to_string(),
            SearchStatus::Searching => "Searching...".to_string(),
            SearchStatus::PathFound { length } => format!("Path found ({} cells)", length),
            SearchStatus::NoPath => "No path found".to_string(),
            SearchStatus::MissingEndpoints => {
                "Place a start and an end cell before searching".to_string()
            }
            SearchStatus::Fault(msg) => format!("Internal error: {}", msg),
        }
    }

    /// Controls should be locked while this is true.
    pub fn is_searching(&self) -> bool {
        matches!(self, SearchStatus::Searching)
    }
}

type StatusHandler = Rc<RefCell<Option<Box<dyn Fn(&SearchStatus)>>>>;

struct Session {
    geometry: CellGeometry,
    step_interval: Duration,
    grid: Grid,
    stepper: BfsStepper,
    driver: AnimationDriver,
    painter: CellPainter,
    tool: Tool,
    /// Last cell painted by the current pointer stroke
    stroke: Option<Coord>,
    status: SearchStatus,
}

impl Session {
    fn new(config: &EditorConfig) -> Self {
        let grid = Grid::new(config.rows, config.cols);
        let painter = CellPainter::new(&grid, config.palette);
        Self {
            geometry: CellGeometry::new(grid.rows(), grid.cols(), config.cell_size),
            step_interval: config.step_interval,
            grid,
            stepper: BfsStepper::new(),
            driver: AnimationDriver::new(config.step_interval),
            painter,
            tool: Tool::default(),
            stroke: None,
            status: SearchStatus::Ready,
        }
    }

    /// Apply the current tool at `coord`. Returns `false` if rejected.
    fn edit(&mut self, coord: Coord, tool: Tool) -> bool {
        if self.stepper.is_running() {
            debug!(%coord, "edit rejected while searching");
            return false;
        }
        let old_start = self.grid.start_pos();
        let old_end = self.grid.end_pos();
        if self.grid.set_cell(coord.row, coord.col, tool.kind()).is_none() {
            return false;
        }

        let mut touched = vec![coord];
        touched.extend(old_start.filter(|&c| Some(c) != self.grid.start_pos()));
        touched.extend(old_end.filter(|&c| Some(c) != self.grid.end_pos()));
        for c in touched {
            if let Some(kind) = self.grid.kind(c) {
                self.painter.paint(c, ColorClass::base(kind));
            }
        }
        true
    }

    fn advance(&mut self, now: Instant) -> (DriverPoll, Option<SearchStatus>) {
        let poll = self.driver.poll(now, &mut self.stepper, &mut self.painter);
        let status = match &poll {
            DriverPoll::Finished(done) => Some(status_for(done)),
            DriverPoll::Failed(err) => Some(status_for_error(err)),
            DriverPoll::Inactive | DriverPoll::Waiting | DriverPoll::Stepped => None,
        };
        if let Some(status) = &status {
            self.status = status.clone();
        }
        (poll, status)
    }

    fn reset_search(&mut self) {
        self.driver.reset();
        self.stepper.reset(&self.grid, &mut self.painter);
        self.status = SearchStatus::Ready;
    }
}

fn status_for(done: &Completion) -> SearchStatus {
    match done {
        Completion::Found(path) => SearchStatus::PathFound { length: path.len() },
        Completion::Exhausted => SearchStatus::NoPath,
        Completion::Cancelled => SearchStatus::Ready,
    }
}

fn status_for_error(err: &SearchError) -> SearchStatus {
    if !err.is_recoverable() {
        error!(%err, "search aborted");
    }
    match err {
        SearchError::MissingEndpoints => SearchStatus::MissingEndpoints,
        other => SearchStatus::Fault(other.to_string()),
    }
}

fn notify(handler: &StatusHandler, status: &SearchStatus) {
    if let Some(handler) = handler.borrow().as_ref() {
        handler(status);
    }
}

/// Controller that manages maze editor state and provides callback implementations.
///
/// This provides a high-level API that handles:
/// - The maze [`Grid`] and tool-based editing (rejected while searching)
/// - Pointer-to-cell mapping with interpolated drag strokes
/// - The [`BfsStepper`] and its [`AnimationDriver`], ticked by a Slint timer
/// - The row-major cell color model bound to the canvas
///
/// All state lives behind a single `Rc<RefCell<_>>`, so steps and edits can
/// never interleave. Clone this controller to share it across callbacks.
#[derive(Clone)]
pub struct MazeEditorController {
    session: Rc<RefCell<Session>>,
    timer: Rc<Timer>,
    status_handler: StatusHandler,
}

impl Default for MazeEditorController {
    fn default() -> Self {
        Self::new()
    }
}

impl MazeEditorController {
    /// Create a controller with default settings (20×30 cells, 30 ms steps).
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            session: Rc::new(RefCell::new(Session::new(&config))),
            timer: Rc::new(Timer::default()),
            status_handler: Rc::new(RefCell::new(None)),
        }
    }

    // === Accessors ===

    pub fn rows(&self) -> usize {
        self.session.borrow().grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.session.borrow().grid.cols()
    }

    pub fn cell_size(&self) -> f32 {
        self.session.borrow().geometry.cell_size
    }

    /// Copy of the current grid.
    pub fn grid(&self) -> Grid {
        self.session.borrow().grid.clone()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<CellKind> {
        self.session.borrow().grid.at(row, col)
    }

    /// Color class currently shown at a cell.
    pub fn cell_class(&self, row: usize, col: usize) -> Option<ColorClass> {
        self.session.borrow().painter.class_at(Coord::new(row, col))
    }

    /// Number of cells currently showing `class`.
    pub fn class_count(&self, class: ColorClass) -> usize {
        self.session.borrow().painter.count(class)
    }

    /// Row-major color model for the canvas.
    pub fn cell_colors(&self) -> ModelRc<Color> {
        ModelRc::from(self.session.borrow().painter.model())
    }

    /// SVG path commands for the cell outlines.
    pub fn grid_lines(&self) -> SharedString {
        let geometry = self.session.borrow().geometry;
        grid_line_commands(geometry.rows, geometry.cols, geometry.cell_size).into()
    }

    pub fn tool(&self) -> Tool {
        self.session.borrow().tool
    }

    pub fn set_tool(&self, tool: Tool) {
        self.session.borrow_mut().tool = tool;
    }

    pub fn status(&self) -> SearchStatus {
        self.session.borrow().status.clone()
    }

    pub fn phase(&self) -> SearchPhase {
        self.session.borrow().stepper.phase()
    }

    /// Whether a search is running. Edits are rejected meanwhile.
    pub fn is_searching(&self) -> bool {
        self.session.borrow().stepper.is_running()
    }

    /// Whether the animation timer is scheduled.
    pub fn is_animating(&self) -> bool {
        self.timer.running()
    }

    /// Cells of the last path found, start to end.
    pub fn last_path(&self) -> Option<Vec<Coord>> {
        self.session
            .borrow()
            .stepper
            .path()
            .map(|p| p.cells().to_vec())
    }

    pub fn steps_taken(&self) -> usize {
        self.session.borrow().stepper.steps_taken()
    }

    /// Install the status callback, invoked on every status change.
    pub fn set_status_handler<F>(&self, handler: F)
    where
        F: Fn(&SearchStatus) + 'static,
    {
        *self.status_handler.borrow_mut() = Some(Box::new(handler));
    }

    // === Editing ===

    /// Apply the current tool to a cell. Returns `false` if the edit was
    /// rejected (out of bounds or searching).
    pub fn edit_cell(&self, row: usize, col: usize) -> bool {
        let mut session = self.session.borrow_mut();
        let tool = session.tool;
        session.edit(Coord::new(row, col), tool)
    }

    /// Set a cell to a specific kind regardless of the current tool.
    pub fn set_cell(&self, row: usize, col: usize, kind: CellKind) -> bool {
        let tool = match kind {
            CellKind::Empty => Tool::Path,
            CellKind::Wall => Tool::Wall,
            CellKind::Start => Tool::Start,
            CellKind::End => Tool::End,
        };
        self.session.borrow_mut().edit(Coord::new(row, col), tool)
    }

    /// Begin a paint stroke at a canvas position.
    pub fn handle_pointer_pressed(&self, x: f32, y: f32) {
        let mut session = self.session.borrow_mut();
        let Some(coord) = session.geometry.cell_at(x, y) else {
            return;
        };
        let tool = session.tool;
        session.edit(coord, tool);
        session.stroke = Some(coord);
    }

    /// Continue a paint stroke; cells between events are filled in.
    pub fn handle_pointer_moved(&self, x: f32, y: f32) {
        let mut session = self.session.borrow_mut();
        let Some(last) = session.stroke else {
            return;
        };
        let Some(coord) = session.geometry.cell_at(x, y) else {
            return;
        };
        if coord == last {
            return;
        }
        let tool = session.tool;
        for c in stroke_cells(last, coord).into_iter().skip(1) {
            session.edit(c, tool);
        }
        session.stroke = Some(coord);
    }

    pub fn handle_pointer_released(&self) {
        self.session.borrow_mut().stroke = None;
    }

    // === Search ===

    /// Start an animated search.
    ///
    /// On [`SearchError::MissingEndpoints`] the status handler is told so the
    /// user can fix the maze; nothing else changes.
    pub fn start_search(&self) -> Result<(), SearchError> {
        let result = {
            let mut guard = self.session.borrow_mut();
            let session = &mut *guard;
            session.stroke = None;
            session
                .stepper
                .start(&session.grid, &mut session.painter)
                .map(|()| {
                    session.driver.begin();
                    session.status = SearchStatus::Searching;
                    session.step_interval
                })
        };

        match result {
            Ok(interval) => {
                self.schedule(interval);
                notify(&self.status_handler, &SearchStatus::Searching);
                Ok(())
            }
            Err(SearchError::MissingEndpoints) => {
                let status = SearchStatus::MissingEndpoints;
                self.session.borrow_mut().status = status.clone();
                notify(&self.status_handler, &status);
                Err(SearchError::MissingEndpoints)
            }
            // A search is already underway; its status stands
            Err(err) => Err(err),
        }
    }

    /// Advance the animation as if the timer fired at `now`.
    pub fn tick(&self, now: Instant) -> DriverPoll {
        let poll = advance(&self.session, &self.status_handler, now);
        if !self.session.borrow().driver.is_active() {
            self.timer.stop();
        }
        poll
    }

    /// Run the current search to its end without waiting for the timer.
    pub fn finish_search(&self) -> Option<SearchStatus> {
        self.timer.stop();
        let status = {
            let mut guard = self.session.borrow_mut();
            let session = &mut *guard;
            if !session.stepper.is_running() {
                return None;
            }
            session.driver.cancel();
            let status = match AnimationDriver::run_to_completion(
                &mut session.stepper,
                &mut session.painter,
            ) {
                Ok(done) => status_for(&done),
                Err(err) => status_for_error(&err),
            };
            session.status = status.clone();
            status
        };
        notify(&self.status_handler, &status);
        Some(status)
    }

    /// Soft reset: stop the animation and revert search colors. Walls,
    /// start and end stay as they are.
    pub fn reset_search(&self) {
        self.timer.stop();
        self.session.borrow_mut().reset_search();
        notify(&self.status_handler, &SearchStatus::Ready);
    }

    /// Hard reset: stop the animation and wipe the whole maze.
    pub fn clear_maze(&self) {
        self.timer.stop();
        {
            let mut guard = self.session.borrow_mut();
            let session = &mut *guard;
            session.driver.reset();
            session.stepper.discard();
            session.grid.reset();
            session.painter.sync_from_grid(&session.grid);
            session.stroke = None;
            session.status = SearchStatus::Ready;
        }
        notify(&self.status_handler, &SearchStatus::Ready);
    }

    fn schedule(&self, interval: Duration) {
        // Timer ticks are the clock: each tick advances time by one interval,
        // so jitter in timer delivery never makes the driver skip a beat.
        let period = interval.max(Duration::from_millis(1));
        let origin = Instant::now();
        let ticks = Cell::new(0u32);
        let session = self.session.clone();
        let handler = self.status_handler.clone();
        let timer = Rc::downgrade(&self.timer);
        self.timer.start(TimerMode::Repeated, period, move || {
            let now = origin + period * ticks.get();
            ticks.set(ticks.get().saturating_add(1));
            advance(&session, &handler, now);
            if !session.borrow().driver.is_active() {
                if let Some(timer) = timer.upgrade() {
                    timer.stop();
                }
            }
        });
    }

    // === Callback factories ===

    /// Returns a callback for `pointer-pressed(x, y)`.
    pub fn pointer_pressed_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |x, y| ctrl.handle_pointer_pressed(x, y)
    }

    /// Returns a callback for `pointer-moved(x, y)`.
    pub fn pointer_moved_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |x, y| ctrl.handle_pointer_moved(x, y)
    }

    /// Returns a callback for `pointer-released()`.
    pub fn pointer_released_callback(&self) -> impl Fn() {
        let ctrl = self.clone();
        move || ctrl.handle_pointer_released()
    }

    /// Returns a callback for `tool-selected(index)`. Unknown indices are ignored.
    pub fn select_tool_callback(&self) -> impl Fn(i32) {
        let ctrl = self.clone();
        move |index| {
            if let Some(tool) = Tool::from_index(index) {
                ctrl.set_tool(tool);
            }
        }
    }

    /// Returns a callback for `start-search()`.
    pub fn start_search_callback(&self) -> impl Fn() {
        let ctrl = self.clone();
        move || {
            // Failures are reported through the status handler
            let _ = ctrl.start_search();
        }
    }

    /// Returns a callback for `reset-search()`.
    pub fn reset_search_callback(&self) -> impl Fn() {
        let ctrl = self.clone();
        move || ctrl.reset_search()
    }

    /// Returns a callback for `clear-maze()`.
    pub fn clear_maze_callback(&self) -> impl Fn() {
        let ctrl = self.clone();
        move || ctrl.clear_maze()
    }
}

fn advance(session: &RefCell<Session>, handler: &StatusHandler, now: Instant) -> DriverPoll {
    let (poll, status) = session.borrow_mut().advance(now);
    if let Some(status) = status {
        notify(handler, &status);
    }
    poll
}
