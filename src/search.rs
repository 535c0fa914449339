//! Incremental breadth-first search.
//!
//! [`BfsStepper`] expands exactly one queued cell per [`BfsStepper::step`]
//! call, so a timer or animation loop can drive it and render the progress
//! in between. All coloring goes through a [`PaintSink`].
//!
//! ```
//! use slint_maze_editor::{BfsStepper, CellKind, Grid, PaintEvent, StepOutcome};
//!
//! let mut grid = Grid::new(3, 3);
//! grid.set_cell(0, 0, CellKind::Start);
//! grid.set_cell(2, 2, CellKind::End);
//!
//! let mut events: Vec<PaintEvent> = Vec::new();
//! let mut stepper = BfsStepper::new();
//! stepper.start(&grid, &mut events).unwrap();
//!
//! let path = loop {
//!     match stepper.step(&mut events).unwrap() {
//!         StepOutcome::Continue => continue,
//!         StepOutcome::Found(path) => break Some(path),
//!         StepOutcome::Exhausted => break None,
//!     }
//! };
//! assert_eq!(path.map(|p| p.len()), Some(5));
//! ```

use crate::error::SearchError;
use crate::grid::{Coord, Grid};
use crate::paint::{ColorClass, PaintSink};
use crate::path::{reconstruct, Path};
use std::collections::{BTreeSet, VecDeque};
use tracing::{debug, error, trace, warn};

/// Lifecycle of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Running,
    Found,
    Exhausted,
    Cancelled,
    /// Path reconstruction hit an inconsistent predecessor chain
    Faulted,
}

impl SearchPhase {
    /// Found, Exhausted, Cancelled or Faulted.
    pub fn is_terminal(self) -> bool {
        !matches!(self, SearchPhase::Idle | SearchPhase::Running)
    }
}

/// Result of a single [`BfsStepper::step`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// More cells remain queued
    Continue,
    /// The end cell was discovered
    Found(Path),
    /// Queue ran dry without reaching the end cell
    Exhausted,
}

/// Per-run search data. Lives independently of the [`Grid`]: walls are
/// snapshotted when the run starts.
#[derive(Debug, Clone)]
struct SearchState {
    rows: usize,
    cols: usize,
    start: Coord,
    end: Coord,
    blocked: Vec<bool>,
    queue: VecDeque<Coord>,
    /// Discovered cells, whether still queued or already expanded
    visited: Vec<bool>,
    predecessors: Vec<Option<Coord>>,
    marked: BTreeSet<Coord>,
}

impl SearchState {
    fn new(grid: &Grid, start: Coord, end: Coord) -> Self {
        let len = grid.len();
        let blocked = grid.cells().map(|(_, k)| k.is_blocked()).collect();
        let mut state = Self {
            rows: grid.rows(),
            cols: grid.cols(),
            start,
            end,
            blocked,
            queue: VecDeque::from([start]),
            visited: vec![false; len],
            predecessors: vec![None; len],
            marked: BTreeSet::new(),
        };
        if let Some(i) = state.index_of(start) {
            state.visited[i] = true;
        }
        state
    }

    fn index_of(&self, coord: Coord) -> Option<usize> {
        (coord.row < self.rows && coord.col < self.cols).then(|| coord.row * self.cols + coord.col)
    }

    fn is_visited(&self, coord: Coord) -> bool {
        self.index_of(coord).is_some_and(|i| self.visited[i])
    }

    fn predecessor(&self, coord: Coord) -> Option<Coord> {
        self.index_of(coord).and_then(|i| self.predecessors[i])
    }

    fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> {
        let Coord { row, col } = coord;
        let (rows, cols) = (self.rows, self.cols);
        [
            row.checked_sub(1).map(|r| Coord::new(r, col)),
            (row + 1 < rows).then(|| Coord::new(row + 1, col)),
            col.checked_sub(1).map(|c| Coord::new(row, c)),
            (col + 1 < cols).then(|| Coord::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }

    fn mark(&mut self, coord: Coord, class: ColorClass, sink: &mut dyn PaintSink) {
        sink.paint(coord, class);
        self.marked.insert(coord);
    }

    fn is_endpoint(&self, coord: Coord) -> bool {
        coord == self.start || coord == self.end
    }
}

/// Step-at-a-time BFS state machine.
///
/// Phases: `Idle → Running → {Found, Exhausted}`; a running search can be
/// cancelled at any time, and [`BfsStepper::reset`] brings any phase back to
/// `Idle`.
#[derive(Debug, Default)]
pub struct BfsStepper {
    phase: SearchPhase,
    state: Option<SearchState>,
    steps: usize,
    path: Option<Path>,
}

impl BfsStepper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == SearchPhase::Running
    }

    /// Number of `step` calls that dequeued a cell in the current run.
    pub fn steps_taken(&self) -> usize {
        self.steps
    }

    /// Path of the last successful run.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    pub fn queue_len(&self) -> usize {
        self.state.as_ref().map_or(0, |s| s.queue.len())
    }

    /// Queued cells, front first.
    pub fn frontier(&self) -> impl Iterator<Item = Coord> + '_ {
        self.state.iter().flat_map(|s| s.queue.iter().copied())
    }

    pub fn is_visited(&self, coord: Coord) -> bool {
        self.state.as_ref().is_some_and(|s| s.is_visited(coord))
    }

    pub fn predecessor(&self, coord: Coord) -> Option<Coord> {
        self.state.as_ref().and_then(|s| s.predecessor(coord))
    }

    /// Cells colored away from their base color by the current run.
    pub fn marked(&self) -> impl Iterator<Item = Coord> + '_ {
        self.state.iter().flat_map(|s| s.marked.iter().copied())
    }

    /// Begin a new search over `grid`.
    ///
    /// Fails with [`SearchError::MissingEndpoints`] if start or end is not
    /// placed, leaving the stepper untouched. Marks left over from a previous
    /// run are reverted through `sink` first.
    pub fn start(&mut self, grid: &Grid, sink: &mut dyn PaintSink) -> Result<(), SearchError> {
        if self.is_running() {
            return Err(SearchError::AlreadyRunning);
        }
        let (Some(start), Some(end)) = (grid.start_pos(), grid.end_pos()) else {
            warn!("search requested without both endpoints");
            return Err(SearchError::MissingEndpoints);
        };

        self.revert_marks(grid, sink);
        self.state = Some(SearchState::new(grid, start, end));
        self.steps = 0;
        self.path = None;
        self.phase = SearchPhase::Running;
        debug!(%start, %end, rows = grid.rows(), cols = grid.cols(), "search started");
        Ok(())
    }

    /// Expand one queued cell.
    pub fn step(&mut self, sink: &mut dyn PaintSink) -> Result<StepOutcome, SearchError> {
        if !self.is_running() {
            return Err(SearchError::NotRunning);
        }
        let Some(state) = self.state.as_mut() else {
            return Err(SearchError::NotRunning);
        };

        let Some(cur) = state.queue.pop_front() else {
            self.phase = SearchPhase::Exhausted;
            debug!(steps = self.steps, "search exhausted, no path");
            return Ok(StepOutcome::Exhausted);
        };
        self.steps += 1;
        trace!(%cur, queued = state.queue.len(), "expanding");

        if !state.is_endpoint(cur) {
            state.mark(cur, ColorClass::Visited, sink);
        }

        let neighbors: Vec<Coord> = state.neighbors(cur).collect();
        for next in neighbors {
            let Some(i) = state.index_of(next) else {
                continue;
            };
            if state.visited[i] || state.blocked[i] {
                continue;
            }
            state.predecessors[i] = Some(cur);
            state.visited[i] = true;

            if next == state.end {
                return self.finish_found(sink);
            }
            if next != state.start {
                state.mark(next, ColorClass::Frontier, sink);
            }
            state.queue.push_back(next);
        }

        Ok(StepOutcome::Continue)
    }

    /// Stop a running search. The partial state stays for inspection but is
    /// never resumed.
    pub fn cancel(&mut self) {
        if self.is_running() {
            debug!(steps = self.steps, "search cancelled");
            self.phase = SearchPhase::Cancelled;
        }
    }

    /// Soft reset: revert every marked cell to its base color from `grid`,
    /// drop the search state and return to `Idle`. The grid is not modified.
    pub fn reset(&mut self, grid: &Grid, sink: &mut dyn PaintSink) {
        self.cancel();
        self.revert_marks(grid, sink);
        self.state = None;
        self.steps = 0;
        self.path = None;
        self.phase = SearchPhase::Idle;
    }

    /// Forget the search without repainting, for when the grid itself is
    /// about to be wiped.
    pub fn discard(&mut self) {
        self.state = None;
        self.steps = 0;
        self.path = None;
        self.phase = SearchPhase::Idle;
    }

    fn finish_found(&mut self, sink: &mut dyn PaintSink) -> Result<StepOutcome, SearchError> {
        let Some(state) = self.state.as_mut() else {
            return Err(SearchError::NotRunning);
        };
        let max_hops = state.rows * state.cols;
        let path = match reconstruct(state.start, state.end, max_hops, |c| state.predecessor(c)) {
            Ok(path) => path,
            Err(err) => {
                error!(%err, "path reconstruction failed");
                self.phase = SearchPhase::Faulted;
                return Err(err);
            }
        };

        for &coord in path.interior() {
            state.mark(coord, ColorClass::Final, sink);
        }
        self.phase = SearchPhase::Found;
        self.path = Some(path.clone());
        debug!(steps = self.steps, length = path.len(), "path found");
        Ok(StepOutcome::Found(path))
    }

    fn revert_marks(&mut self, grid: &Grid, sink: &mut dyn PaintSink) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        for coord in std::mem::take(&mut state.marked) {
            if let Some(kind) = grid.kind(coord) {
                sink.paint(coord, ColorClass::base(kind));
            }
        }
    }

    #[cfg(test)]
    fn corrupt_predecessor(&mut self, coord: Coord, parent: Option<Coord>) {
        if let Some(state) = self.state.as_mut() {
            if let Some(i) = state.index_of(coord) {
                state.predecessors[i] = parent;
            }
        }
    }
}
