//! bitgrid - resizable grid of single-bit cells
//!
//! A two-dimensional bitmap that is addressable both by `(row, column)` and
//! by a flat list position, so it can back a list-style view while being
//! edited as an image. Rows and columns can be inserted and removed without
//! losing content, a wider "virtual" storage width can be hidden or shown,
//! and drawing primitives (point, line, rectangle, glyph, text) report the
//! region they touched to subscribers as a single typed event.
//!
//! ```
//! use bitgrid::{BitGrid, GridEvent, Region};
//!
//! let mut grid = BitGrid::with_size(5, 5);
//! let (_, events) = grid.event_channel();
//! grid.draw_rect((0, 0), (2, 2), true);
//! assert_eq!(grid.count_ones(), 9);
//! assert_eq!(
//!     events.try_recv().unwrap(),
//!     GridEvent::CellsChanged(Region::Rect { top: 0, left: 0, bottom: 2, right: 2 })
//! );
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

mod config;
/// Error type shared by all operations
pub mod error;
/// Glyph tables used for character stamping
pub mod glyph;
/// The grid engine
pub mod grid;
/// Core data structures (Position, Region, GridEvent, CellView)
pub mod models;
/// Utility functions (raster conversion)
pub mod utils;

pub use error::{GridError, Result};
pub use glyph::{BitOrder, Glyph, GlyphTable, PackedGlyphTable};
pub use grid::{BitGrid, SubscriptionId};
pub use models::{CellView, GridEvent, Position, Region};
