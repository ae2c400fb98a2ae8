use super::BitGrid;
use crate::models::GridEvent;

impl BitGrid {
    /// Set all three size parameters at once
    ///
    /// `storage_width` of `None` means no virtual columns, the storage width
    /// follows `visible_width`. A storage width below `visible_width` is
    /// raised to it, and a zero `visible_width`
    /// or `height` collapses the grid to 0 x 0.
    ///
    /// The backing storage is rebuilt. Cells whose coordinates stay inside
    /// both the old and the new size keep their value, everything else starts
    /// cleared. Use [`BitGrid::insert_rows`] / [`BitGrid::insert_columns`] to
    /// grow a grid at a position other than its end.
    pub fn set_dimensions(&mut self, visible_width: usize, height: usize, storage_width: Option<usize>) {
        let mut storage = storage_width.unwrap_or(visible_width).max(visible_width);
        let (mut visible, mut rows) = (visible_width, height);
        if visible == 0 || rows == 0 {
            visible = 0;
            rows = 0;
            storage = 0;
        }

        let old_visible = self.visible_width;
        let old_storage = self.storage_width;
        let old_rows = self.height;
        if visible == old_visible && storage == old_storage && rows == old_rows {
            return;
        }

        let mut bits = vec![false; storage * rows];
        let keep_columns = storage.min(old_storage);
        for row in 0..rows.min(old_rows) {
            let src = row * old_storage;
            let dst = row * storage;
            bits[dst..dst + keep_columns].copy_from_slice(&self.bits[src..src + keep_columns]);
        }

        self.bits = bits;
        self.visible_width = visible;
        self.storage_width = storage;
        self.height = rows;
        self.debug_check_invariants();

        log::debug!(
            "resized grid {}({})x{} -> {}({})x{}",
            old_visible,
            old_storage,
            old_rows,
            visible,
            storage,
            rows
        );

        if visible != old_visible {
            self.emit(GridEvent::ColumnsChanged(visible));
        }
        if rows != old_rows {
            self.emit(GridEvent::RowsChanged(rows));
        }
        if storage != old_storage {
            self.emit(GridEvent::StorageWidthChanged(storage));
        }
    }

    /// Set the number of visible columns
    ///
    /// An empty grid gets one row so the result is usable. The storage width
    /// is kept unless `columns` exceeds it.
    pub fn set_columns(&mut self, columns: usize) {
        let mut rows = self.height;
        if columns > 0 && rows == 0 {
            rows = 1;
        }
        self.set_dimensions(columns, rows, Some(self.storage_width));
    }

    /// Set the number of rows
    ///
    /// An empty grid gets one column so the result is usable.
    pub fn set_rows(&mut self, rows: usize) {
        let mut columns = self.visible_width;
        if rows > 0 && columns == 0 {
            columns = 1;
        }
        self.set_dimensions(columns, rows, Some(self.storage_width));
    }

    /// Set the number of stored columns, including virtual ones
    pub fn set_storage_width(&mut self, storage_width: usize) {
        let mut columns = self.visible_width;
        let mut rows = self.height;
        if storage_width > 0 && columns == 0 {
            columns = 1;
        }
        if storage_width > 0 && rows == 0 {
            rows = 1;
        }
        self.set_dimensions(columns, rows, Some(storage_width));
    }

    /// Show or hide the virtual columns
    ///
    /// Changes [`BitGrid::len`] and the meaning of list positions; cell values
    /// are untouched.
    pub fn set_show_virtual(&mut self, show: bool) {
        if self.show_virtual == show {
            return;
        }
        self.show_virtual = show;
        log::debug!("show_virtual = {show}, {} addressable cells", self.len());
        self.emit(GridEvent::ShowVirtualChanged(show));
    }
}
