//! Grid geometry for the presentation layer.
//!
//! Pure math only: maps cells to world-space centers, pointer positions back
//! to cells, and produces the board's line segments for rendering. The engine
//! itself never consumes these values.

use crate::error::{BoundsError, ConfigError};
use crate::game::GridIndex;

/// A rectangular grid laid out over a world-space viewport.
///
/// Rows grow along the y axis and columns along the x axis, starting from the
/// bottom-left corner of the extents.
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    rows: u32,
    cols: u32,
    bottom_left: (f32, f32),
    cell: (f32, f32),
}

impl GridLayout {
    pub fn new(
        rows: u32,
        cols: u32,
        bottom_left: (f32, f32),
        top_right: (f32, f32),
    ) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::Validation(
                "layout needs at least one row and one column".into(),
            ));
        }
        let width = top_right.0 - bottom_left.0;
        let height = top_right.1 - bottom_left.1;
        if width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "degenerate layout extents: {width}x{height}"
            )));
        }
        Ok(GridLayout {
            rows,
            cols,
            bottom_left,
            cell: (width / cols as f32, height / rows as f32),
        })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// World-space size of one cell.
    pub fn cell_size(&self) -> (f32, f32) {
        self.cell
    }

    /// World-space center of a cell. Out-of-range cells are an error, never
    /// a fallback position.
    pub fn cell_center(&self, row: i32, col: i32) -> Result<(f32, f32), BoundsError> {
        if row < 0 || col < 0 || row as u32 >= self.rows || col as u32 >= self.cols {
            return Err(BoundsError {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok((
            self.bottom_left.0 + (col as f32 + 0.5) * self.cell.0,
            self.bottom_left.1 + (row as f32 + 0.5) * self.cell.1,
        ))
    }

    /// Map a world-space position (e.g. a pointer) to the cell containing it.
    /// Positions outside the extents map to `None`.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<GridIndex> {
        let col = ((x - self.bottom_left.0) / self.cell.0).floor();
        let row = ((y - self.bottom_left.1) / self.cell.1).floor();
        if row < 0.0 || col < 0.0 || row >= self.rows as f32 || col >= self.cols as f32 {
            return None;
        }
        Some(GridIndex::new(row as i32, col as i32))
    }

    /// The board's grid lines as world-space segments: `rows + 1` horizontal
    /// and `cols + 1` vertical.
    pub fn grid_segments(&self) -> Vec<[(f32, f32); 2]> {
        let (x0, y0) = self.bottom_left;
        let x1 = x0 + self.cell.0 * self.cols as f32;
        let y1 = y0 + self.cell.1 * self.rows as f32;

        let mut segments = Vec::with_capacity((self.rows + self.cols + 2) as usize);
        for row in 0..=self.rows {
            let y = y0 + self.cell.1 * row as f32;
            segments.push([(x0, y), (x1, y)]);
        }
        for col in 0..=self.cols {
            let x = x0 + self.cell.0 * col as f32;
            segments.push([(x, y0), (x, y1)]);
        }
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_layout() -> GridLayout {
        // 3x3 over a 3.0 x 3.0 viewport: cells are exactly 1.0 x 1.0.
        GridLayout::new(3, 3, (0.0, 0.0), (3.0, 3.0)).unwrap()
    }

    #[test]
    fn test_cell_size() {
        let layout = GridLayout::new(2, 4, (0.0, 0.0), (8.0, 4.0)).unwrap();
        assert_eq!(layout.cell_size(), (2.0, 2.0));
    }

    #[test]
    fn test_cell_center() {
        let layout = unit_layout();
        assert_eq!(layout.cell_center(0, 0).unwrap(), (0.5, 0.5));
        assert_eq!(layout.cell_center(2, 1).unwrap(), (1.5, 2.5));
    }

    #[test]
    fn test_cell_center_out_of_range_is_an_error() {
        let layout = unit_layout();
        let err = layout.cell_center(3, 0).unwrap_err();
        assert_eq!(
            err,
            BoundsError {
                row: 3,
                col: 0,
                rows: 3,
                cols: 3,
            }
        );
        assert!(layout.cell_center(0, -1).is_err());
        assert!(layout.cell_center(-2, 5).is_err());
    }

    #[test]
    fn test_cell_at_maps_pointer_positions() {
        let layout = unit_layout();
        assert_eq!(layout.cell_at(0.1, 0.1), Some(GridIndex::new(0, 0)));
        assert_eq!(layout.cell_at(2.9, 0.5), Some(GridIndex::new(0, 2)));
        assert_eq!(layout.cell_at(1.5, 2.2), Some(GridIndex::new(2, 1)));
    }

    #[test]
    fn test_cell_at_outside_extents() {
        let layout = unit_layout();
        assert_eq!(layout.cell_at(-0.1, 1.0), None);
        assert_eq!(layout.cell_at(1.0, 3.1), None);
    }

    #[test]
    fn test_cell_at_roundtrips_cell_center() {
        let layout = GridLayout::new(4, 6, (-2.0, 1.0), (10.0, 9.0)).unwrap();
        for row in 0..4 {
            for col in 0..6 {
                let (x, y) = layout.cell_center(row, col).unwrap();
                assert_eq!(layout.cell_at(x, y), Some(GridIndex::new(row, col)));
            }
        }
    }

    #[test]
    fn test_grid_segments_count() {
        let layout = GridLayout::new(2, 5, (0.0, 0.0), (5.0, 2.0)).unwrap();
        // (rows + 1) + (cols + 1) segments.
        assert_eq!(layout.grid_segments().len(), 9);
    }

    #[test]
    fn test_degenerate_layouts_rejected() {
        assert!(GridLayout::new(0, 3, (0.0, 0.0), (1.0, 1.0)).is_err());
        assert!(GridLayout::new(3, 3, (0.0, 0.0), (0.0, 1.0)).is_err());
        assert!(GridLayout::new(3, 3, (1.0, 1.0), (0.0, 0.0)).is_err());
    }
}
