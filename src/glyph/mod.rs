//! Fixed-size glyph tables
//!
//! The grid never owns font data. It reads glyphs through [`GlyphTable`],
//! which maps a character code to a `width x height` bit pattern. Tables in
//! use are 4x7, 5x8, 7x9 and 8x8.

mod sheet;

use crate::error::{GridError, Result};
use std::borrow::Cow;

/// Order of pixels inside each packed byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitOrder {
    /// Bit 7 is the leftmost pixel (1-bit mono image layout)
    #[default]
    MsbFirst,
    /// Bit 0 is the leftmost pixel (font8x8 layout)
    LsbFirst,
}

/// Borrowed view of one glyph bitmap
#[derive(Debug, Clone, Copy)]
pub struct Glyph<'a> {
    width: usize,
    height: usize,
    order: BitOrder,
    rows: &'a [u8],
}

impl<'a> Glyph<'a> {
    /// Wrap packed row data, `ceil(width / 8)` bytes per row
    ///
    /// Returns `None` if `rows` is too short for the given size.
    pub fn new(width: usize, height: usize, order: BitOrder, rows: &'a [u8]) -> Option<Self> {
        if rows.len() < width.div_ceil(8) * height {
            return None;
        }
        Some(Self {
            width,
            height,
            order,
            rows,
        })
    }

    /// Glyph width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Glyph height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at (x, y); false outside the glyph
    pub fn bit(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let byte = self.rows[y * self.width.div_ceil(8) + x / 8];
        let shift = match self.order {
            BitOrder::MsbFirst => 7 - (x % 8),
            BitOrder::LsbFirst => x % 8,
        };
        (byte >> shift) & 1 == 1
    }
}

/// Lookup from character code to glyph bitmap
pub trait GlyphTable {
    /// Width in pixels of every glyph in the table
    fn glyph_width(&self) -> usize;

    /// Height in pixels of every glyph in the table
    fn glyph_height(&self) -> usize;

    /// Glyph for `code`, `None` if the table has no entry
    fn glyph(&self, code: u32) -> Option<Glyph<'_>>;
}

/// Glyph table over a contiguous run of packed bitmaps
///
/// Glyph `n` covers character code `first_code + n`. Data may be borrowed
/// from a `static` table or owned.
#[derive(Debug, Clone)]
pub struct PackedGlyphTable {
    width: usize,
    height: usize,
    first_code: u32,
    order: BitOrder,
    data: Cow<'static, [u8]>,
}

impl PackedGlyphTable {
    /// Build a table from packed glyph data
    pub fn new(
        width: usize,
        height: usize,
        first_code: u32,
        order: BitOrder,
        data: impl Into<Cow<'static, [u8]>>,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::invalid(format!("glyph size {width}x{height} is empty")));
        }
        let data = data.into();
        let glyph_bytes = width.div_ceil(8) * height;
        if data.len() % glyph_bytes != 0 {
            return Err(GridError::invalid(format!(
                "{} bytes is not a whole number of {width}x{height} glyphs",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            first_code,
            order,
            data,
        })
    }

    /// First character code in the table
    pub fn first_code(&self) -> u32 {
        self.first_code
    }

    /// Number of glyphs
    pub fn len(&self) -> usize {
        self.data.len() / self.glyph_bytes()
    }

    /// True when the table holds no glyphs
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bit order of the packed rows
    pub fn bit_order(&self) -> BitOrder {
        self.order
    }

    fn glyph_bytes(&self) -> usize {
        self.width.div_ceil(8) * self.height
    }
}

impl GlyphTable for PackedGlyphTable {
    fn glyph_width(&self) -> usize {
        self.width
    }

    fn glyph_height(&self) -> usize {
        self.height
    }

    fn glyph(&self, code: u32) -> Option<Glyph<'_>> {
        let slot = code.checked_sub(self.first_code)? as usize;
        if slot >= self.len() {
            return None;
        }
        let size = self.glyph_bytes();
        Glyph::new(self.width, self.height, self.order, &self.data[slot * size..(slot + 1) * size])
    }
}
