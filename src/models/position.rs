/// Signed grid coordinate used by the drawing primitives
///
/// Drawing accepts positions outside the grid (including negative ones) and
/// clips them, so rows and columns are signed here while dimensions are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Row (y)
    pub row: i32,
    /// Column (x)
    pub column: i32,
}

impl Position {
    /// Create a new position
    pub fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, column): (i32, i32)) -> Self {
        Self { row, column }
    }
}

/// One cell as seen through the flat list view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Row of the cell
    pub row: usize,
    /// Column of the cell
    pub column: usize,
    /// Cell state
    pub value: bool,
}
