use thiserror::Error;

/// Errors reported by grid, glyph and raster operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A count or size parameter violates its precondition
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Coordinate outside the active area of the grid
    #[error("cell ({row}, {column}) is out of bounds")]
    OutOfBounds {
        /// Requested row
        row: i64,
        /// Requested column
        column: i64,
    },

    /// The glyph table has no entry for the character code
    #[error("no glyph for character code {0:#x}")]
    UnknownGlyph(u32),

    /// A glyph sheet image can not be sliced into glyphs
    #[error("invalid glyph sheet: {0}")]
    InvalidGlyphSheet(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, GridError>;

impl GridError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        GridError::InvalidArgument(msg.into())
    }
}
