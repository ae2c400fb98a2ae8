/// Minimal bounding region touched by a single mutation
///
/// All bounds are inclusive. [`Region::from_bounds`] picks the most specific
/// variant, so a one-row rectangle is reported as a [`Region::RowSpan`] and a
/// single cell as a [`Region::Point`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Single cell
    Point {
        /// Row of the cell
        row: usize,
        /// Column of the cell
        column: usize,
    },
    /// Horizontal run of cells in one row
    RowSpan {
        /// Row of the span
        row: usize,
        /// First column (inclusive)
        first_column: usize,
        /// Last column (inclusive)
        last_column: usize,
    },
    /// Vertical run of cells in one column
    ColumnSpan {
        /// Column of the span
        column: usize,
        /// First row (inclusive)
        first_row: usize,
        /// Last row (inclusive)
        last_row: usize,
    },
    /// Rectangle spanning several rows and columns
    Rect {
        /// Top row (inclusive)
        top: usize,
        /// Left column (inclusive)
        left: usize,
        /// Bottom row (inclusive)
        bottom: usize,
        /// Right column (inclusive)
        right: usize,
    },
}

impl Region {
    /// Build the most specific region covering `top..=bottom` x `left..=right`
    ///
    /// Swapped bounds are normalised.
    pub fn from_bounds(top: usize, left: usize, bottom: usize, right: usize) -> Self {
        let (top, bottom) = (top.min(bottom), top.max(bottom));
        let (left, right) = (left.min(right), left.max(right));
        match (top == bottom, left == right) {
            (true, true) => Region::Point { row: top, column: left },
            (true, false) => Region::RowSpan {
                row: top,
                first_column: left,
                last_column: right,
            },
            (false, true) => Region::ColumnSpan {
                column: left,
                first_row: top,
                last_row: bottom,
            },
            (false, false) => Region::Rect {
                top,
                left,
                bottom,
                right,
            },
        }
    }

    /// Inclusive bounds as `(top, left, bottom, right)`
    pub fn bounds(&self) -> (usize, usize, usize, usize) {
        match *self {
            Region::Point { row, column } => (row, column, row, column),
            Region::RowSpan {
                row,
                first_column,
                last_column,
            } => (row, first_column, row, last_column),
            Region::ColumnSpan {
                column,
                first_row,
                last_row,
            } => (first_row, column, last_row, column),
            Region::Rect {
                top,
                left,
                bottom,
                right,
            } => (top, left, bottom, right),
        }
    }

    /// Check whether the cell lies inside the region
    pub fn contains(&self, row: usize, column: usize) -> bool {
        let (top, left, bottom, right) = self.bounds();
        (top..=bottom).contains(&row) && (left..=right).contains(&column)
    }

    /// Number of cells covered
    pub fn cell_count(&self) -> usize {
        let (top, left, bottom, right) = self.bounds();
        (bottom - top + 1) * (right - left + 1)
    }

    /// Smallest region covering both
    pub fn union(&self, other: &Region) -> Region {
        let (t0, l0, b0, r0) = self.bounds();
        let (t1, l1, b1, r1) = other.bounds();
        Region::from_bounds(t0.min(t1), l0.min(l1), b0.max(b1), r0.max(r1))
    }
}

/// Notification delivered to grid subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    /// Cell values inside the region may have changed
    CellsChanged(Region),
    /// New number of visible columns
    ColumnsChanged(usize),
    /// New number of rows
    RowsChanged(usize),
    /// New number of stored (virtual) columns
    StorageWidthChanged(usize),
    /// Virtual columns were shown or hidden
    ShowVirtualChanged(bool),
    /// `count` rows were inserted before row `at`
    RowsInserted {
        /// First inserted row
        at: usize,
        /// Number of rows
        count: usize,
    },
    /// `count` rows starting at `at` were removed
    RowsRemoved {
        /// First removed row
        at: usize,
        /// Number of rows
        count: usize,
    },
    /// `count` storage columns were inserted before column `at`
    ColumnsInserted {
        /// First inserted column
        at: usize,
        /// Number of columns
        count: usize,
    },
    /// `count` storage columns starting at `at` were removed
    ColumnsRemoved {
        /// First removed column
        at: usize,
        /// Number of columns
        count: usize,
    },
    /// The grid was cleared back to the empty state
    Reset,
}
