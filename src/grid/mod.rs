//! The bit grid engine
//!
//! [`BitGrid`] stores its cells row-major in a single `Vec<bool>` that is
//! `storage_width` cells wide. Only the first `visible_width` columns of each
//! row are addressable unless virtual columns are shown, in which case all
//! stored columns are.
//!
//! Two flat indices exist and are kept apart:
//! - the storage offset ([`BitGrid::index`]), `row * storage_width + column`
//! - the list position ([`BitGrid::list_index`]), `row * active_width + column`,
//!   which is what a list-style view iterates over.

mod dimensions;
mod draw;
mod edit;
mod notify;


pub use notify::SubscriptionId;

use crate::error::{GridError, Result};
use crate::models::{CellView, GridEvent};
use notify::Subscribers;
use std::fmt;
use std::sync::mpsc;

/// Dynamically resizable grid of boolean cells
#[derive(Default)]
pub struct BitGrid {
    bits: Vec<bool>,
    visible_width: usize,
    storage_width: usize,
    height: usize,
    show_virtual: bool,
    subscribers: Subscribers,
}

impl BitGrid {
    /// Create an empty grid (0 x 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid with the given visible width and height
    ///
    /// The storage width equals the visible width. A zero dimension yields
    /// the empty grid.
    pub fn with_size(columns: usize, rows: usize) -> Self {
        let mut grid = Self::new();
        grid.set_dimensions(columns, rows, None);
        grid
    }

    /// Number of visible columns
    pub fn columns(&self) -> usize {
        self.visible_width
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.height
    }

    /// Number of stored columns, including the virtual ones
    pub fn storage_width(&self) -> usize {
        self.storage_width
    }

    /// Whether virtual columns are addressable
    pub fn show_virtual(&self) -> bool {
        self.show_virtual
    }

    /// Column count used for addressing and iteration
    pub fn active_width(&self) -> usize {
        if self.show_virtual {
            self.storage_width
        } else {
            self.visible_width
        }
    }

    /// Number of addressable cells (`rows * active_width`)
    pub fn len(&self) -> usize {
        self.height * self.active_width()
    }

    /// True when no cell is addressable
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Storage offset of a cell, or `None` when it is outside the active area
    pub fn index(&self, row: usize, column: usize) -> Option<usize> {
        self.checked_offset(row as i64, column as i64).ok()
    }

    /// List position of a cell, or `None` when it is outside the active area
    pub fn list_index(&self, row: usize, column: usize) -> Option<usize> {
        self.checked_offset(row as i64, column as i64)
            .ok()
            .map(|_| row * self.active_width() + column)
    }

    /// Row and column of a list position
    ///
    /// The result depends on the active width at the time of the call, so the
    /// same list position maps to a different cell after toggling
    /// [`BitGrid::set_show_virtual`].
    pub fn coordinates(&self, list_index: usize) -> Option<(usize, usize)> {
        if list_index >= self.len() {
            return None;
        }
        let width = self.active_width();
        Some((list_index / width, list_index % width))
    }

    /// Value of a cell, `None` when outside the active area
    pub fn bit(&self, row: usize, column: usize) -> Option<bool> {
        self.index(row, column).map(|offset| self.bits[offset])
    }

    /// Cell at a list position
    pub fn cell(&self, list_index: usize) -> Option<CellView> {
        let (row, column) = self.coordinates(list_index)?;
        let offset = row * self.storage_width + column;
        Some(CellView {
            row,
            column,
            value: self.bits[offset],
        })
    }

    /// Iterate over all addressable cells in list order
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        let width = self.active_width();
        (0..self.height).flat_map(move |row| {
            let start = row * self.storage_width;
            self.bits[start..start + width]
                .iter()
                .enumerate()
                .map(move |(column, &value)| CellView { row, column, value })
        })
    }

    /// Addressable part of one row
    pub fn row_bits(&self, row: usize) -> Option<&[bool]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.storage_width;
        Some(&self.bits[start..start + self.active_width()])
    }

    /// Backing storage in storage order, including hidden virtual columns
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Number of set cells in the active area
    pub fn count_ones(&self) -> usize {
        self.cells().filter(|cell| cell.value).count()
    }

    /// Register a callback receiving every [`GridEvent`]
    ///
    /// Callbacks run synchronously, in subscription order, before the
    /// mutating call returns.
    pub fn subscribe<F>(&mut self, mut callback: F) -> SubscriptionId
    where
        F: FnMut(&GridEvent) + Send + 'static,
    {
        self.subscribers.add(Box::new(move |event: &GridEvent| {
            callback(event);
            true
        }))
    }

    /// Remove a subscription. Returns false if the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    /// Subscribe through a channel instead of a callback
    ///
    /// The subscription is dropped by the first event sent after the receiver
    /// goes away; calling [`BitGrid::unsubscribe`] is optional.
    pub fn event_channel(&mut self) -> (SubscriptionId, mpsc::Receiver<GridEvent>) {
        let (tx, rx) = mpsc::channel();
        let id = self
            .subscribers
            .add(Box::new(move |event: &GridEvent| tx.send(*event).is_ok()));
        (id, rx)
    }

    /// Reset to the empty grid. Subscribers are kept.
    pub fn clear(&mut self) {
        self.set_dimensions(0, 0, Some(0));
        self.set_show_virtual(false);
        log::debug!("grid cleared");
        self.emit(GridEvent::Reset);
    }

    /// Storage offset for a signed coordinate
    ///
    /// This is the single place that reports [`GridError::OutOfBounds`]; the
    /// drawing primitives turn it into clipping.
    pub(crate) fn checked_offset(&self, row: i64, column: i64) -> Result<usize> {
        if row < 0 || column < 0 || row as u64 >= self.height as u64 || column as u64 >= self.active_width() as u64 {
            return Err(GridError::OutOfBounds { row, column });
        }
        Ok(row as usize * self.storage_width + column as usize)
    }

    pub(crate) fn emit(&mut self, event: GridEvent) {
        self.subscribers.notify(&event);
    }

    #[cfg(debug_assertions)]
    fn debug_check_invariants(&self) {
        debug_assert!(self.storage_width >= self.visible_width);
        debug_assert_eq!(self.bits.len(), self.storage_width * self.height);
        debug_assert!(
            (self.visible_width == 0) == (self.height == 0) && (self.storage_width == 0) == (self.height == 0),
            "dimensions must be all zero or all non-zero"
        );
    }

    #[cfg(not(debug_assertions))]
    fn debug_check_invariants(&self) {}
}

impl fmt::Debug for BitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitGrid")
            .field("visible_width", &self.visible_width)
            .field("storage_width", &self.storage_width)
            .field("height", &self.height)
            .field("show_virtual", &self.show_virtual)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl fmt::Display for BitGrid {
    /// Active area as `#` / `.` rows, one line per row
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            if let Some(bits) = self.row_bits(row) {
                for &bit in bits {
                    f.write_str(if bit { "#" } else { "." })?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
