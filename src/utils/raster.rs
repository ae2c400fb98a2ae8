//! Conversion between a [`BitGrid`] and 8-bit grayscale images
//!
//! Only the active area is rendered, so hidden virtual columns do not show up
//! unless [`BitGrid::set_show_virtual`] is on.

use crate::grid::BitGrid;
use image::{GrayImage, Luma};
use rayon::prelude::*;

/// Render the active area, one pixel per cell
pub fn render_luma(grid: &BitGrid, on_level: u8, off_level: u8) -> GrayImage {
    let width = grid.active_width();
    let height = grid.rows();
    if width == 0 {
        return GrayImage::new(0, 0);
    }

    let mut pixels = vec![off_level; width * height];
    // The grid itself is not Sync (subscriber callbacks), so rows are read
    // straight from the backing storage.
    let bits = grid.as_slice();
    let stride = grid.storage_width();

    if grid.len() >= crate::config::parallel_min_cells() {
        pixels.par_chunks_mut(width).enumerate().for_each(|(row, out)| {
            fill_row(&bits[row * stride..row * stride + width], out, on_level, off_level);
        });
    } else {
        for (row, out) in pixels.chunks_mut(width).enumerate() {
            fill_row(&bits[row * stride..row * stride + width], out, on_level, off_level);
        }
    }

    // Buffer length always matches width * height
    GrayImage::from_raw(width as u32, height as u32, pixels).unwrap_or_else(|| GrayImage::new(0, 0))
}

fn fill_row(bits: &[bool], out: &mut [u8], on_level: u8, off_level: u8) {
    for (pixel, &bit) in out.iter_mut().zip(bits) {
        *pixel = if bit { on_level } else { off_level };
    }
}

/// Build a grid from an image; pixels at or above `threshold` become set cells
pub fn from_luma(image: &GrayImage, threshold: u8) -> BitGrid {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let mut grid = BitGrid::with_size(width, height);
    let cells = image
        .enumerate_pixels()
        .filter(|(_, _, Luma([luma]))| *luma >= threshold)
        .map(|(x, y, _)| (y as i32, x as i32));
    grid.set_bits(cells, true);
    grid
}

/// [`from_luma`] with the configured default threshold (`BITGRID_LUMA_THRESHOLD`)
pub fn from_luma_default(image: &GrayImage) -> BitGrid {
    from_luma(image, crate::config::luma_threshold())
}
