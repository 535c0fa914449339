//! Shortest path reconstruction from BFS predecessor links.

use crate::error::SearchError;
use crate::grid::Coord;

/// Ordered sequence of cells from start to end, both inclusive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Coord>,
}

impl Path {
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Number of cells, including start and end.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> Option<Coord> {
        self.cells.first().copied()
    }

    pub fn end(&self) -> Option<Coord> {
        self.cells.last().copied()
    }

    /// Cells strictly between start and end. These get the final-path color;
    /// start and end keep their own.
    pub fn interior(&self) -> &[Coord] {
        match self.cells.len() {
            0..=2 => &[],
            n => &self.cells[1..n - 1],
        }
    }

    /// Every consecutive pair shares an edge.
    pub fn is_connected(&self) -> bool {
        self.cells.windows(2).all(|w| w[0].is_adjacent(&w[1]))
    }

    pub fn into_cells(self) -> Vec<Coord> {
        self.cells
    }
}

/// Walk predecessor links from `end` back to `start`.
///
/// `predecessor` returns the discovery parent of a cell. The walk fails with
/// [`SearchError::PathInconsistency`] if a link is missing or `start` is not
/// reached within `max_hops` hops, which would mean the search state is
/// corrupt.
///
/// # Example
///
/// ```
/// use slint_maze_editor::{reconstruct, Coord};
///
/// let a = Coord::new(0, 0);
/// let b = Coord::new(0, 1);
/// let path = reconstruct(a, b, 4, |c| (c == b).then_some(a)).unwrap();
/// assert_eq!(path.cells(), &[a, b]);
/// ```
pub fn reconstruct<F>(
    start: Coord,
    end: Coord,
    max_hops: usize,
    predecessor: F,
) -> Result<Path, SearchError>
where
    F: Fn(Coord) -> Option<Coord>,
{
    let mut cells = vec![end];
    let mut node = end;
    let mut hops = 0;

    while node != start {
        if hops >= max_hops {
            return Err(SearchError::PathInconsistency { hops });
        }
        node = predecessor(node).ok_or(SearchError::PathInconsistency { hops })?;
        cells.push(node);
        hops += 1;
    }

    cells.reverse();
    Ok(Path { cells })
}
