use super::BitGrid;
use crate::error::{GridError, Result};
use crate::models::GridEvent;

impl BitGrid {
    /// Insert `count` cleared rows before `at_row`
    ///
    /// Rows at or below `at_row` move down by `count` and keep their content.
    /// Returns the new number of rows.
    pub fn insert_rows(&mut self, at_row: usize, count: usize) -> Result<usize> {
        if count == 0 {
            return Err(GridError::invalid("row count must be positive"));
        }
        if self.storage_width == 0 {
            return Err(GridError::invalid("cannot insert rows into a grid without columns"));
        }
        if at_row > self.height {
            return Err(GridError::invalid(format!(
                "row {at_row} is past the end of a grid with {} rows",
                self.height
            )));
        }

        let width = self.storage_width;
        let old_rows = self.height;
        let new_len = old_rows
            .checked_add(count)
            .and_then(|rows| cell_count(rows, width))
            .ok_or_else(|| GridError::invalid(format!("inserting {count} rows overflows the grid size")))?;
        self.bits.resize(new_len, false);

        // Bottom row first so no row is overwritten before it has been moved.
        for row in (at_row..old_rows).rev() {
            let src = row * width;
            self.bits.copy_within(src..src + width, src + count * width);
        }
        self.bits[at_row * width..(at_row + count) * width].fill(false);

        self.height += count;
        self.debug_check_invariants();
        log::debug!("inserted {count} row(s) at {at_row}, now {} rows", self.height);

        self.emit(GridEvent::RowsInserted { at: at_row, count });
        self.emit(GridEvent::RowsChanged(self.height));
        Ok(self.height)
    }

    /// Insert `count` cleared columns before storage column `at_column`
    ///
    /// Every row's tail from `at_column` shifts right. Inserting at or before
    /// the visible edge widens the visible area as well; inserting further
    /// right only adds virtual columns. Returns the new active width.
    pub fn insert_columns(&mut self, at_column: usize, count: usize) -> Result<usize> {
        if count == 0 {
            return Err(GridError::invalid("column count must be positive"));
        }
        if self.height == 0 {
            return Err(GridError::invalid("cannot insert columns into a grid without rows"));
        }
        if at_column > self.storage_width {
            return Err(GridError::invalid(format!(
                "column {at_column} is past the end of a grid with {} stored columns",
                self.storage_width
            )));
        }

        let old_width = self.storage_width;
        let (new_width, new_len) = old_width
            .checked_add(count)
            .and_then(|width| Some((width, cell_count(self.height, width)?)))
            .ok_or_else(|| GridError::invalid(format!("inserting {count} columns overflows the grid size")))?;
        self.bits.resize(new_len, false);

        // Last row first: a row only ever moves right, onto storage that
        // earlier rows no longer need.
        for row in (0..self.height).rev() {
            let src = row * old_width;
            let dst = row * new_width;
            self.bits.copy_within(src + at_column..src + old_width, dst + at_column + count);
            self.bits.copy_within(src..src + at_column, dst);
            self.bits[dst + at_column..dst + at_column + count].fill(false);
        }

        let old_visible = self.visible_width;
        if at_column <= self.visible_width {
            self.visible_width += count;
        }
        self.storage_width = new_width;
        self.debug_check_invariants();
        log::debug!(
            "inserted {count} column(s) at {at_column}, now {}({}) columns",
            self.visible_width,
            self.storage_width
        );

        self.emit(GridEvent::ColumnsInserted { at: at_column, count });
        if self.visible_width != old_visible {
            self.emit(GridEvent::ColumnsChanged(self.visible_width));
        }
        self.emit(GridEvent::StorageWidthChanged(self.storage_width));
        Ok(self.active_width())
    }

    /// Append `count` cleared rows below the last row
    pub fn append_rows(&mut self, count: usize) -> Result<usize> {
        self.insert_rows(self.height, count)
    }

    /// Append `count` cleared columns right of the last addressable column
    pub fn append_columns(&mut self, count: usize) -> Result<usize> {
        self.insert_columns(self.active_width(), count)
    }

    /// Remove `count` rows starting at `at_row`
    ///
    /// Rows below the removed range move up and keep their content. Removing
    /// every row collapses the grid. Returns the new number of rows.
    pub fn remove_rows(&mut self, at_row: usize, count: usize) -> Result<usize> {
        if count == 0 {
            return Err(GridError::invalid("row count must be positive"));
        }
        let end = at_row
            .checked_add(count)
            .filter(|end| *end <= self.height)
            .ok_or_else(|| {
                GridError::invalid(format!(
                    "rows {at_row}..{at_row}+{count} exceed a grid with {} rows",
                    self.height
                ))
            })?;

        if count == self.height {
            self.collapse(GridEvent::RowsRemoved { at: at_row, count });
            return Ok(0);
        }

        let width = self.storage_width;
        self.bits.drain(at_row * width..end * width);
        self.height -= count;
        self.debug_check_invariants();
        log::debug!("removed {count} row(s) at {at_row}, now {} rows", self.height);

        self.emit(GridEvent::RowsRemoved { at: at_row, count });
        self.emit(GridEvent::RowsChanged(self.height));
        Ok(self.height)
    }

    /// Remove `count` storage columns starting at `at_column`
    ///
    /// Columns right of the removed range move left and keep their content.
    /// Removing every stored column collapses the grid; removing all visible
    /// columns while virtual ones remain is rejected. Returns the new active
    /// width.
    pub fn remove_columns(&mut self, at_column: usize, count: usize) -> Result<usize> {
        if count == 0 {
            return Err(GridError::invalid("column count must be positive"));
        }
        let end = at_column
            .checked_add(count)
            .filter(|end| *end <= self.storage_width)
            .ok_or_else(|| {
                GridError::invalid(format!(
                    "columns {at_column}..{at_column}+{count} exceed a grid with {} stored columns",
                    self.storage_width
                ))
            })?;

        if count == self.storage_width {
            self.collapse(GridEvent::ColumnsRemoved { at: at_column, count });
            return Ok(0);
        }

        let visible_removed = end.min(self.visible_width).saturating_sub(at_column.min(self.visible_width));
        if visible_removed == self.visible_width {
            return Err(GridError::invalid(
                "cannot remove every visible column while virtual columns remain",
            ));
        }

        let old_width = self.storage_width;
        let new_width = old_width - count;
        // Top row first: a row only ever moves left.
        for row in 0..self.height {
            let src = row * old_width;
            let dst = row * new_width;
            self.bits.copy_within(src..src + at_column, dst);
            self.bits.copy_within(src + end..src + old_width, dst + at_column);
        }
        self.bits.truncate(new_width * self.height);

        self.storage_width = new_width;
        self.visible_width -= visible_removed;
        self.debug_check_invariants();
        log::debug!(
            "removed {count} column(s) at {at_column}, now {}({}) columns",
            self.visible_width,
            self.storage_width
        );

        self.emit(GridEvent::ColumnsRemoved { at: at_column, count });
        if visible_removed > 0 {
            self.emit(GridEvent::ColumnsChanged(self.visible_width));
        }
        self.emit(GridEvent::StorageWidthChanged(self.storage_width));
        Ok(self.active_width())
    }

    /// Empty the grid after a removal that took every row or column
    ///
    /// Events follow the same order as a partial removal: the removal first,
    /// then each size that changed.
    fn collapse(&mut self, removed: GridEvent) {
        self.bits = Vec::new();
        self.visible_width = 0;
        self.storage_width = 0;
        self.height = 0;
        self.debug_check_invariants();
        log::debug!("removal emptied the grid");

        self.emit(removed);
        self.emit(GridEvent::ColumnsChanged(0));
        self.emit(GridEvent::RowsChanged(0));
        self.emit(GridEvent::StorageWidthChanged(0));
    }
}

/// Cell count of a `rows` x `width` grid, `None` if it cannot be allocated
fn cell_count(rows: usize, width: usize) -> Option<usize> {
    rows.checked_mul(width).filter(|len| *len <= isize::MAX as usize)
}
