use std::cmp::Ordering;

/// A cell coordinate on the rectangular grid.
///
/// Ordered row-major: by row first, then by column. Sorting a player's moves
/// with this order is what lets the line scanner extend runs with
/// forward-only searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridIndex {
    pub row: i32,
    pub col: i32,
}

impl GridIndex {
    pub fn new(row: i32, col: i32) -> Self {
        GridIndex { row, col }
    }

    /// The coordinate one step away along a `(d_row, d_col)` direction.
    pub fn offset(self, d_row: i32, d_col: i32) -> Self {
        GridIndex {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

impl Ord for GridIndex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl PartialOrd for GridIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Endpoints of a detected winning run.
///
/// The run is the inclusive set of equally-spaced coordinates between `start`
/// and `end` along one of the four scan directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WinLine {
    pub start: GridIndex,
    pub end: GridIndex,
}
