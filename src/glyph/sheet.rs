use super::{BitOrder, PackedGlyphTable};
use crate::error::{GridError, Result};
use image::GrayImage;

impl PackedGlyphTable {
    /// Slice a glyph sheet into a table
    ///
    /// Glyphs are laid out left to right, top to bottom, each
    /// `glyph_width x glyph_height` pixels. Pixels at or above the configured
    /// luma threshold (`BITGRID_LUMA_THRESHOLD`, default 128) are set.
    pub fn from_sheet(sheet: &GrayImage, glyph_width: usize, glyph_height: usize, first_code: u32) -> Result<Self> {
        Self::from_sheet_with_threshold(sheet, glyph_width, glyph_height, first_code, crate::config::luma_threshold())
    }

    /// Same as [`PackedGlyphTable::from_sheet`] with an explicit threshold
    pub fn from_sheet_with_threshold(
        sheet: &GrayImage,
        glyph_width: usize,
        glyph_height: usize,
        first_code: u32,
        threshold: u8,
    ) -> Result<Self> {
        if glyph_width == 0 || glyph_height == 0 {
            return Err(GridError::InvalidGlyphSheet(format!(
                "glyph size {glyph_width}x{glyph_height} is empty"
            )));
        }
        let (sheet_width, sheet_height) = (sheet.width() as usize, sheet.height() as usize);
        if sheet_width % glyph_width != 0 || sheet_height % glyph_height != 0 {
            return Err(GridError::InvalidGlyphSheet(format!(
                "sheet {sheet_width}x{sheet_height} is not a multiple of {glyph_width}x{glyph_height}"
            )));
        }

        let per_row = sheet_width / glyph_width;
        let glyph_rows = sheet_height / glyph_height;
        let bytes_per_row = glyph_width.div_ceil(8);
        let mut data = vec![0u8; per_row * glyph_rows * bytes_per_row * glyph_height];

        for slot in 0..per_row * glyph_rows {
            let origin_x = (slot % per_row) * glyph_width;
            let origin_y = (slot / per_row) * glyph_height;
            let base = slot * bytes_per_row * glyph_height;
            for y in 0..glyph_height {
                for x in 0..glyph_width {
                    let luma = sheet.get_pixel((origin_x + x) as u32, (origin_y + y) as u32).0[0];
                    if luma >= threshold {
                        data[base + y * bytes_per_row + x / 8] |= 0x80 >> (x % 8);
                    }
                }
            }
        }

        log::debug!(
            "sliced {} glyph(s) of {glyph_width}x{glyph_height} from a {sheet_width}x{sheet_height} sheet",
            per_row * glyph_rows
        );
        Self::new(glyph_width, glyph_height, first_code, BitOrder::MsbFirst, data)
    }
}
