//! Common test utilities for integration tests.

#![allow(dead_code)]

pub mod harness;

use slint_maze_editor::{CellKind, Coord, Grid, SearchStatus};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Tracks callback invocations for testing.
///
/// Each field records calls to the corresponding callback with their arguments.
#[derive(Default, Clone)]
pub struct CallbackTracker {
    /// Every status reported by the controller, in order
    pub statuses: Rc<RefCell<Vec<SearchStatus>>>,
    /// (tool_index,)
    pub tool_selected: Rc<RefCell<Vec<i32>>>,
    /// Count of start_search calls
    pub start_search: Rc<RefCell<usize>>,
    /// Count of reset_search calls
    pub reset_search: Rc<RefCell<usize>>,
    /// Count of clear_maze calls
    pub clear_maze: Rc<RefCell<usize>>,
}

impl CallbackTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_status(&self) -> Option<SearchStatus> {
        self.statuses.borrow().last().cloned()
    }

    /// Clear all recorded callbacks.
    pub fn clear(&self) {
        self.statuses.borrow_mut().clear();
        self.tool_selected.borrow_mut().clear();
        *self.start_search.borrow_mut() = 0;
        *self.reset_search.borrow_mut() = 0;
        *self.clear_maze.borrow_mut() = 0;
    }
}

// ============================================================================
// Maze fixtures
// ============================================================================

/// Build a grid from rows of characters.
///
/// `#` wall, `S` start, `E` end, anything else open.
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    let cols = rows.iter().map(|r| r.len()).max().unwrap_or(1);
    let mut grid = Grid::new(rows.len(), cols);
    for (r, line) in rows.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            let kind = match ch {
                '#' => CellKind::Wall,
                'S' => CellKind::Start,
                'E' => CellKind::End,
                _ => continue,
            };
            grid.set_cell(r, c, kind);
        }
    }
    grid
}

/// Shortest distance from start to every cell, computed with a plain
/// whole-grid BFS independent of the stepper.
pub fn reference_distances(grid: &Grid) -> Vec<Option<usize>> {
    let mut dist = vec![None; grid.len()];
    let Some(start) = grid.start_pos() else {
        return dist;
    };
    let idx = |c: Coord| c.row * grid.cols() + c.col;
    dist[idx(start)] = Some(0);
    let mut queue = VecDeque::from([start]);
    while let Some(cell) = queue.pop_front() {
        let d = dist[idx(cell)].unwrap();
        let (r, c) = (cell.row as i64, cell.col as i64);
        for (nr, nc) in [(r - 1, c), (r + 1, c), (r, c - 1), (r, c + 1)] {
            if nr < 0 || nc < 0 {
                continue;
            }
            let next = Coord::new(nr as usize, nc as usize);
            if !grid.contains(next) || grid.kind(next) == Some(CellKind::Wall) {
                continue;
            }
            if dist[idx(next)].is_none() {
                dist[idx(next)] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

/// Shortest start-to-end distance in hops, if reachable.
pub fn reference_distance_to_end(grid: &Grid) -> Option<usize> {
    let end = grid.end_pos()?;
    reference_distances(grid)[end.row * grid.cols() + end.col]
}
