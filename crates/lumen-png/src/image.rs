/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use lumen_core::pixel::PixelScheme;

/// A fully decoded image
///
/// Pixels are stored top to bottom, `row_stride` bytes per row with
/// no padding. Indexed images carry palette indices, the palette
/// and transparency tables are kept as found in the file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Image {
    width:          u32,
    height:         u32,
    pixel_scheme:   PixelScheme,
    bits_per_pixel: u8,
    row_stride:     u32,
    pixels:         Vec<u8>,
    data_length:    u64,
    palette:        Option<Vec<u8>>,
    transparency:   Option<Vec<u8>>
}

impl Image {
    pub(crate) fn new(
        width: u32, height: u32, pixel_scheme: PixelScheme, row_stride: u32, pixels: Vec<u8>,
        palette: Option<Vec<u8>>, transparency: Option<Vec<u8>>
    ) -> Image {
        let data_length = u64::from(row_stride) * u64::from(height);

        debug_assert_eq!(data_length, pixels.len() as u64);

        Image {
            width,
            height,
            pixel_scheme,
            bits_per_pixel: pixel_scheme.bits_per_pixel(),
            row_stride,
            pixels,
            data_length,
            palette,
            transparency
        }
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub const fn pixel_scheme(&self) -> PixelScheme {
        self.pixel_scheme
    }

    /// 8 for indexed, 24 for RGB and 32 for RGBA
    pub const fn bits_per_pixel(&self) -> u8 {
        self.bits_per_pixel
    }

    /// Bytes per row, always `width * bits_per_pixel / 8`
    pub const fn row_stride(&self) -> u32 {
        self.row_stride
    }

    /// Total pixel bytes, `row_stride * height`
    pub const fn data_length(&self) -> u64 {
        self.data_length
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Raw PLTE payload if the file had one
    pub fn palette(&self) -> Option<&[u8]> {
        self.palette.as_deref()
    }

    /// Raw tRNS payload if the file had one
    pub fn transparency(&self) -> Option<&[u8]> {
        self.transparency.as_deref()
    }

    /// Return row `y`, or `None` if it's past the last row
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.row_stride as usize;
        let start = y as usize * stride;

        self.pixels.get(start..start + stride)
    }
}
