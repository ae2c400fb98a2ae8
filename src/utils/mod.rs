//! Utility functions around the grid
//!
//! - Raster conversion (grid to grayscale image and back)

pub mod raster;
