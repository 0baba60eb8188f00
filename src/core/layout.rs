//! Grid description of a sprite sheet and the cell rectangles derived from it.
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Pixel rectangle with exclusive right/bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Cell {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    pub fn overlaps(&self, other: &Cell) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }

    /// Shrink by `margin` on all four sides.
    pub fn shrink(&self, margin: u32) -> Result<Cell> {
        let twice = margin.saturating_mul(2);
        if self.width() <= twice || self.height() <= twice {
            return Err(Error::geometry(format!(
                "margin {} collapses {}x{} cell",
                margin,
                self.width(),
                self.height()
            )));
        }
        Ok(Cell::new(
            self.left + margin,
            self.top + margin,
            self.right - margin,
            self.bottom - margin,
        ))
    }
}

/// How a sheet subdivides into equal cells, plus one optional label per slot
/// in row-major order. A missing or empty label skips the cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetLayout {
    pub rows: u32,
    pub columns: u32,
    #[serde(default)]
    pub labels: Vec<Option<String>>,
}

impl SheetLayout {
    pub fn new<I, S>(rows: u32, columns: u32, labels: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            rows,
            columns,
            labels: labels.into_iter().map(|l| l.map(Into::into)).collect(),
        }
    }

    pub fn slots(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    pub fn label_at(&self, index: usize) -> Option<&str> {
        if index >= self.slots() {
            return None;
        }
        self.labels
            .get(index)
            .and_then(|l| l.as_deref())
            .filter(|l| !l.is_empty())
    }

    /// Slots that will produce an icon, as `(index, label)` in row-major order.
    pub fn labeled(&self) -> impl Iterator<Item = (usize, &str)> {
        (0..self.slots()).filter_map(|i| self.label_at(i).map(|label| (i, label)))
    }

    /// Number of cells that will produce an icon.
    pub fn labeled_count(&self) -> usize {
        self.labeled().count()
    }

    /// Floor-divided cell size for a sheet of `width`x`height`.
    pub fn cell_size(&self, width: u32, height: u32) -> Result<(u32, u32)> {
        if self.rows == 0 || self.columns == 0 {
            return Err(Error::geometry(format!(
                "grid must have at least one row and column, got {}x{}",
                self.rows, self.columns
            )));
        }
        let cell_w = width / self.columns;
        let cell_h = height / self.rows;
        if cell_w == 0 || cell_h == 0 {
            return Err(Error::geometry(format!(
                "{}x{} sheet is too small for a {}x{} grid",
                width, height, self.rows, self.columns
            )));
        }
        Ok((cell_w, cell_h))
    }

    /// Unshrunk rectangle of slot `index` for the given cell size.
    pub fn cell_at(&self, index: usize, cell_w: u32, cell_h: u32) -> Cell {
        let row = index as u32 / self.columns;
        let col = index as u32 % self.columns;
        let left = col * cell_w;
        let top = row * cell_h;
        Cell::new(left, top, left + cell_w, top + cell_h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_size_drops_remainder_pixels() {
        let layout = SheetLayout::new(2, 4, Vec::<Option<String>>::new());
        assert_eq!(layout.cell_size(403, 201).unwrap(), (100, 100));
    }

    #[test]
    fn zero_grid_is_invalid() {
        let layout = SheetLayout::new(0, 3, Vec::<Option<String>>::new());
        assert!(matches!(
            layout.cell_size(300, 300),
            Err(Error::InvalidGeometry(_))
        ));
    }

    #[test]
    fn sheet_smaller_than_grid_is_invalid() {
        let layout = SheetLayout::new(1, 8, Vec::<Option<String>>::new());
        assert!(layout.cell_size(7, 10).is_err());
    }

    #[test]
    fn labels_past_grid_and_empty_labels_are_skipped() {
        let layout = SheetLayout::new(1, 2, vec![Some("a"), Some(""), Some("c")]);
        assert_eq!(layout.label_at(0), Some("a"));
        assert_eq!(layout.label_at(1), None);
        assert_eq!(layout.label_at(2), None);
        assert_eq!(layout.labeled_count(), 1);
        assert_eq!(layout.labeled().collect::<Vec<_>>(), vec![(0, "a")]);
    }

    #[test]
    fn cells_tile_row_major() {
        let layout = SheetLayout::new(2, 2, Vec::<Option<String>>::new());
        let (cell_w, cell_h) = layout.cell_size(20, 10).unwrap();
        let cells: Vec<_> = (0..layout.slots())
            .map(|i| layout.cell_at(i, cell_w, cell_h))
            .collect();
        assert_eq!(cells[1], Cell::new(10, 0, 20, 5));
        assert_eq!(cells[2], Cell::new(0, 5, 10, 10));
        for (i, a) in cells.iter().enumerate() {
            for b in &cells[i + 1..] {
                assert!(!a.overlaps(b));
            }
        }
    }

    #[test]
    fn shrink_rejects_collapsing_margin() {
        let cell = Cell::new(0, 0, 40, 40);
        assert_eq!(cell.shrink(5).unwrap(), Cell::new(5, 5, 35, 35));
        assert!(cell.shrink(20).is_err());
    }

    #[test]
    fn layout_reads_null_labels_from_json() {
        let layout: SheetLayout =
            serde_json::from_str(r#"{"rows":1,"columns":3,"labels":["a",null,"c"]}"#).unwrap();
        assert_eq!(layout.labeled_count(), 2);
        assert_eq!(layout.label_at(1), None);
    }
}
