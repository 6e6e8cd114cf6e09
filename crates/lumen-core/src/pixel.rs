/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel layouts produced by the decoders

/// Layout of a single pixel in a decoded buffer.
///
/// Every supported layout uses 8 bits per sample, so
/// a pixel always occupies a whole number of bytes.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PixelScheme {
    /// One byte per pixel, an index into a palette
    ///
    /// The palette itself is carried alongside the pixels,
    /// indices are not expanded.
    Indexed,
    /// Red, Green, Blue
    RGB24,
    /// Red, Green, Blue, Alpha
    RGBA32
}

impl PixelScheme {
    /// Resolve a PNG colour type into a pixel scheme
    ///
    /// Returns `None` for colour types without a supported layout
    /// (greyscale and greyscale with alpha).
    pub const fn from_png_color_type(color_type: u8) -> Option<PixelScheme> {
        match color_type {
            2 => Some(Self::RGB24),
            3 => Some(Self::Indexed),
            6 => Some(Self::RGBA32),
            _ => None
        }
    }

    /// Number of bits a single pixel occupies
    pub const fn bits_per_pixel(self) -> u8 {
        match self {
            Self::Indexed => 8,
            Self::RGB24 => 24,
            Self::RGBA32 => 32
        }
    }

    /// Number of bytes a single pixel occupies
    pub const fn bytes_per_pixel(self) -> usize {
        (self.bits_per_pixel() / 8) as usize
    }

    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::RGBA32)
    }
}
