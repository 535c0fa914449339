//! Maze grid model.
//!
//! [`Grid`] owns the rectangular array of [`CellKind`] values together with the
//! denormalized start and end pointers. Every mutation goes through
//! [`Grid::set_cell`] or [`Grid::reset`], which keep the array and the pointers
//! in sync: at most one `Start` and at most one `End` exist at any time.

use std::fmt;

/// State of a single maze cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    #[default]
    Empty,
    Wall,
    Start,
    End,
}

impl CellKind {
    /// Walls are the only cells a search cannot enter.
    pub fn is_blocked(self) -> bool {
        matches!(self, CellKind::Wall)
    }
}

/// Row/column position of a cell.
///
/// Ordering is row-major, which keeps iteration over coordinate sets
/// deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether `other` shares an edge with this cell.
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Fixed-size maze grid with single start and end cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellKind>,
    start: Option<Coord>,
    end: Option<Coord>,
}

impl Grid {
    /// Create an empty grid. Zero dimensions are clamped to 1.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            rows,
            cols,
            cells: vec![CellKind::Empty; rows * cols],
            start: None,
            end: None,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A grid always has at least one cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Row-major index of `coord`, or `None` if out of bounds.
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| coord.row * self.cols + coord.col)
    }

    /// Cell kind at the given position, or `None` if out of bounds.
    pub fn at(&self, row: usize, col: usize) -> Option<CellKind> {
        self.kind(Coord::new(row, col))
    }

    pub fn kind(&self, coord: Coord) -> Option<CellKind> {
        self.index_of(coord).map(|i| self.cells[i])
    }

    pub fn start_pos(&self) -> Option<Coord> {
        self.start
    }

    pub fn end_pos(&self) -> Option<Coord> {
        self.end
    }

    /// Out-of-bounds cells count as blocked.
    pub fn is_blocked(&self, coord: Coord) -> bool {
        self.kind(coord).map_or(true, CellKind::is_blocked)
    }

    /// Set a cell, enforcing start/end exclusivity.
    ///
    /// Returns the previous kind at that cell, or `None` (and does nothing)
    /// when the position is out of bounds.
    ///
    /// Placing `Start` clears the previous start cell back to `Empty`; likewise
    /// for `End`. Overwriting the current start or end cell with any other kind
    /// clears the corresponding pointer.
    pub fn set_cell(&mut self, row: usize, col: usize, kind: CellKind) -> Option<CellKind> {
        let coord = Coord::new(row, col);
        let idx = self.index_of(coord)?;
        let previous = self.cells[idx];

        match previous {
            CellKind::Start => self.start = None,
            CellKind::End => self.end = None,
            CellKind::Empty | CellKind::Wall => {}
        }

        match kind {
            CellKind::Start => {
                if let Some(old) = self.start.replace(coord) {
                    self.clear_at(old);
                }
            }
            CellKind::End => {
                if let Some(old) = self.end.replace(coord) {
                    self.clear_at(old);
                }
            }
            CellKind::Empty | CellKind::Wall => {}
        }

        self.cells[idx] = kind;
        Some(previous)
    }

    /// Clear every cell to `Empty` and forget start and end.
    pub fn reset(&mut self) {
        self.cells.fill(CellKind::Empty);
        self.start = None;
        self.end = None;
    }

    /// In-bounds orthogonal neighbors in the fixed order up, down, left, right.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        let Coord { row, col } = coord;
        [
            row.checked_sub(1).map(|r| Coord::new(r, col)),
            Some(Coord::new(row + 1, col)),
            col.checked_sub(1).map(|c| Coord::new(row, c)),
            Some(Coord::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
        .filter(move |c| self.contains(*c))
    }

    /// Iterate all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, CellKind)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &kind)| (Coord::new(i / cols, i % cols), kind))
    }

    /// Number of cells of the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    fn clear_at(&mut self, coord: Coord) {
        if let Some(i) = self.index_of(coord) {
            self.cells[i] = CellKind::Empty;
        }
    }
}

/// Generate SVG path commands for the cell outlines of a maze.
///
/// # Arguments
/// * `rows` - Number of grid rows
/// * `cols` - Number of grid columns
/// * `cell_size` - Edge length of one cell in pixels
///
/// # Returns
/// SVG path commands string (e.g., "M 0 0 L 0 75 M 25 0 L 25 75...")
pub fn grid_line_commands(rows: usize, cols: usize, cell_size: f32) -> String {
    // Lines closer than this are unreadable
    if cell_size < 4.0 || rows == 0 || cols == 0 {
        return String::new();
    }

    let width = cols as f32 * cell_size;
    let height = rows as f32 * cell_size;
    let mut commands = String::with_capacity((rows + cols + 2) * 24);

    // Vertical lines
    for c in 0..=cols {
        let x = c as f32 * cell_size;
        if !commands.is_empty() {
            commands.push(' ');
        }
        commands.push_str(&format!("M {} 0 L {} {}", x, x, height));
    }

    // Horizontal lines
    for r in 0..=rows {
        let y = r as f32 * cell_size;
        commands.push(' ');
        commands.push_str(&format!("M 0 {} L {} {}", y, width, y));
    }

    commands
}
