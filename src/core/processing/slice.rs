use image::{RgbaImage, imageops};
use tracing::debug;

use crate::core::layout::{Cell, SheetLayout};
use crate::error::Result;

/// One labeled icon cut out of a sheet
#[derive(Debug, Clone)]
pub struct SheetSlice {
    /// Row-major slot index in the grid
    pub index: usize,
    pub label: String,
    /// Sheet rectangle the pixels were taken from, after the margin
    pub cell: Cell,
    pub image: RgbaImage,
}

/// Lazy row-major iterator over the labeled cells of a sheet.
///
/// Geometry is validated in [`slice_sheet`], so iteration itself cannot fail.
pub struct SheetSlices<'a> {
    sheet: &'a RgbaImage,
    layout: &'a SheetLayout,
    cell_w: u32,
    cell_h: u32,
    margin: u32,
    next: usize,
}

impl SheetSlices<'_> {
    /// Cell size before the margin is applied.
    pub fn cell_size(&self) -> (u32, u32) {
        (self.cell_w, self.cell_h)
    }
}

impl Iterator for SheetSlices<'_> {
    type Item = SheetSlice;

    fn next(&mut self) -> Option<Self::Item> {
        let slots = self.layout.slots();
        while self.next < slots {
            let index = self.next;
            self.next += 1;

            let Some(label) = self.layout.label_at(index) else {
                continue;
            };

            // every cell has the size checked in `slice_sheet`
            let cell = self
                .layout
                .cell_at(index, self.cell_w, self.cell_h)
                .shrink(self.margin)
                .ok()?;
            let image =
                imageops::crop_imm(self.sheet, cell.left, cell.top, cell.width(), cell.height())
                    .to_image();

            return Some(SheetSlice {
                index,
                label: label.to_string(),
                cell,
                image,
            });
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.layout.slots().saturating_sub(self.next)))
    }
}

/// Partition `sheet` into the grid described by `layout` and yield one
/// sub-image per labeled cell, each shrunk by `margin` on every side.
pub fn slice_sheet<'a>(
    sheet: &'a RgbaImage,
    layout: &'a SheetLayout,
    margin: u32,
) -> Result<SheetSlices<'a>> {
    let (width, height) = sheet.dimensions();
    let (cell_w, cell_h) = layout.cell_size(width, height)?;

    layout.cell_at(0, cell_w, cell_h).shrink(margin)?;

    debug!(
        "Slicing {}x{} sheet into {}x{} grid: cell={}x{}, margin={}, labeled={}",
        width,
        height,
        layout.rows,
        layout.columns,
        cell_w,
        cell_h,
        margin,
        layout.labeled_count()
    );

    Ok(SheetSlices {
        sheet,
        layout,
        cell_w,
        cell_h,
        margin,
        next: 0,
    })
}
