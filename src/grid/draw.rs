use super::BitGrid;
use crate::error::{GridError, Result};
use crate::glyph::{Glyph, GlyphTable};
use crate::models::{GridEvent, Position, Region};

impl BitGrid {
    /// Set one cell. Out-of-bounds coordinates are ignored.
    pub fn set_bit(&mut self, row: i32, column: i32, on: bool) {
        if let Err(err) = self.try_set_bit(row, column, on) {
            log::trace!("set_bit clipped: {err}");
        }
    }

    /// Set one cell, reporting out-of-bounds coordinates
    ///
    /// Returns whether the value changed. A change notification is sent only
    /// when it did.
    pub fn try_set_bit(&mut self, row: i32, column: i32, on: bool) -> Result<bool> {
        let offset = self.checked_offset(row as i64, column as i64)?;
        if self.bits[offset] == on {
            return Ok(false);
        }
        self.bits[offset] = on;
        self.emit(GridEvent::CellsChanged(Region::Point {
            row: row as usize,
            column: column as usize,
        }));
        Ok(true)
    }

    /// Invert one cell. Out-of-bounds coordinates are ignored.
    pub fn toggle_bit(&mut self, row: i32, column: i32) {
        if let Ok(offset) = self.checked_offset(row as i64, column as i64) {
            let value = self.bits[offset];
            self.set_bit(row, column, !value);
        }
    }

    /// Set a list of `(row, column)` cells
    ///
    /// Pairs are applied in order and independently; out-of-bounds pairs are
    /// skipped. One notification covers every cell that changed.
    pub fn set_bits<I>(&mut self, cells: I, on: bool)
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        let mut touched: Option<Region> = None;
        for (row, column) in cells {
            let Ok(offset) = self.checked_offset(row as i64, column as i64) else {
                continue;
            };
            if self.bits[offset] == on {
                continue;
            }
            self.bits[offset] = on;
            let point = Region::Point {
                row: row as usize,
                column: column as usize,
            };
            touched = Some(touched.map_or(point, |region| region.union(&point)));
        }
        if let Some(region) = touched {
            self.emit(GridEvent::CellsChanged(region));
        }
    }

    /// Set every addressable cell of a row
    pub fn set_row(&mut self, row: i32, on: bool) {
        let last = self.active_width() as i64 - 1;
        self.fill_clipped(row as i64, 0, row as i64, last, on);
    }

    /// Set every cell of a column
    pub fn set_column(&mut self, column: i32, on: bool) {
        let last = self.height as i64 - 1;
        self.fill_clipped(0, column as i64, last, column as i64, on);
    }

    /// Draw a horizontal or vertical line, endpoints included
    ///
    /// Diagonal lines are rejected with [`GridError::InvalidArgument`] before
    /// anything is written.
    pub fn draw_line(&mut self, column0: i32, row0: i32, column1: i32, row1: i32, on: bool) -> Result<()> {
        if row0 != row1 && column0 != column1 {
            return Err(GridError::invalid(format!(
                "line ({column0}, {row0}) -> ({column1}, {row1}) is not axis-aligned"
            )));
        }
        self.fill_clipped(
            row0.min(row1) as i64,
            column0.min(column1) as i64,
            row0.max(row1) as i64,
            column0.max(column1) as i64,
            on,
        );
        Ok(())
    }

    /// Fill the rectangle between two corners, both included
    pub fn draw_rect(&mut self, top_left: impl Into<Position>, bottom_right: impl Into<Position>, on: bool) {
        let (a, b) = (top_left.into(), bottom_right.into());
        self.fill_clipped(
            a.row.min(b.row) as i64,
            a.column.min(b.column) as i64,
            a.row.max(b.row) as i64,
            a.column.max(b.column) as i64,
            on,
        );
    }

    /// Stamp the glyph for `char_code` with its top-left corner at the given cell
    ///
    /// The whole glyph box is written: set glyph pixels become `on`, clear
    /// ones become `!on`. Cells falling off the grid are dropped.
    pub fn stamp_glyph<T>(&mut self, table: &T, char_code: u32, at_column: i32, at_row: i32, on: bool) -> Result<()>
    where
        T: GlyphTable + ?Sized,
    {
        let glyph = table.glyph(char_code).ok_or(GridError::UnknownGlyph(char_code))?;
        if let Some(region) = self.write_glyph(&glyph, at_column as i64, at_row as i64, on) {
            self.emit(GridEvent::CellsChanged(region));
        }
        Ok(())
    }

    /// Stamp `text` left to right, one glyph per character
    ///
    /// Every character is looked up before the first write, so an unknown one
    /// leaves the grid untouched. Returns the column right of the last glyph.
    pub fn draw_text<T>(&mut self, table: &T, text: &str, at_column: i32, at_row: i32, on: bool) -> Result<i32>
    where
        T: GlyphTable + ?Sized,
    {
        let glyphs = text
            .chars()
            .map(|ch| table.glyph(ch as u32).ok_or(GridError::UnknownGlyph(ch as u32)))
            .collect::<Result<Vec<_>>>()?;

        let mut column = at_column as i64;
        let mut touched: Option<Region> = None;
        for glyph in &glyphs {
            if let Some(region) = self.write_glyph(glyph, column, at_row as i64, on) {
                touched = Some(touched.map_or(region, |acc| acc.union(&region)));
            }
            column += glyph.width() as i64;
        }
        if let Some(region) = touched {
            self.emit(GridEvent::CellsChanged(region));
        }
        Ok(column.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
    }

    /// Intersect an inclusive box with the active area
    fn clip(&self, top: i64, left: i64, bottom: i64, right: i64) -> Option<(usize, usize, usize, usize)> {
        if self.is_empty() {
            return None;
        }
        let top = top.max(0);
        let left = left.max(0);
        let bottom = bottom.min(self.height as i64 - 1);
        let right = right.min(self.active_width() as i64 - 1);
        if top > bottom || left > right {
            return None;
        }
        Some((top as usize, left as usize, bottom as usize, right as usize))
    }

    fn fill_clipped(&mut self, top: i64, left: i64, bottom: i64, right: i64, on: bool) {
        let Some((top, left, bottom, right)) = self.clip(top, left, bottom, right) else {
            log::trace!("fill ({top}, {left})..=({bottom}, {right}) lies outside the grid");
            return;
        };
        for row in top..=bottom {
            let start = row * self.storage_width;
            self.bits[start + left..=start + right].fill(on);
        }
        self.emit(GridEvent::CellsChanged(Region::from_bounds(top, left, bottom, right)));
    }

    /// Write a glyph box without notifying; returns the clipped region
    fn write_glyph(&mut self, glyph: &Glyph<'_>, at_column: i64, at_row: i64, on: bool) -> Option<Region> {
        let (top, left, bottom, right) = self.clip(
            at_row,
            at_column,
            at_row + glyph.height() as i64 - 1,
            at_column + glyph.width() as i64 - 1,
        )?;
        for row in top..=bottom {
            let y = (row as i64 - at_row) as usize;
            let start = row * self.storage_width;
            for column in left..=right {
                let x = (column as i64 - at_column) as usize;
                self.bits[start + column] = glyph.bit(x, y) == on;
            }
        }
        Some(Region::from_bounds(top, left, bottom, right))
    }
}
