/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Global Decoder options

/// Decoder options
///
/// Options are set builder style, each setter consumes
/// and returns the options.
///
/// ```
/// use lumen_core::options::DecoderOptions;
///
/// let options = DecoderOptions::default()
///     .set_max_width(4096)
///     .png_set_confirm_crc(false);
///
/// assert_eq!(options.get_max_width(), 4096);
/// assert!(!options.png_get_confirm_crc());
/// ```
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    max_width:             usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    max_height:            usize,
    /// Whether the png decoder should confirm chunk crc's
    ///
    /// - Default value: true
    png_confirm_crc:       bool,
    /// Maximum number of IDAT chunks a png image may be split into
    ///
    /// - Default value: 256
    png_max_idat:          usize,
    /// Whether inflate should confirm the adler32 checksum
    /// at the end of a zlib stream
    ///
    /// - Default value: true
    inflate_confirm_adler: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:             1 << 14,
            max_height:            1 << 14,
            png_confirm_crc:       true,
            png_max_idat:          256,
            inflate_confirm_adler: true
        }
    }
}

/// Initializers
impl DecoderOptions {
    /// Create options where checksums are not confirmed and
    /// size limits are lifted.
    ///
    /// Useful for tooling that wants to look at damaged files.
    pub fn new_cmd() -> DecoderOptions {
        DecoderOptions::default()
            .png_set_confirm_crc(false)
            .inflate_set_confirm_adler(false)
            .set_max_width(usize::MAX)
            .set_max_height(usize::MAX)
    }
}

/// Global options respected by all decoders
impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }
}

/// PNG specific options
impl DecoderOptions {
    /// Whether the png decoder confirms the crc of every chunk
    pub const fn png_get_confirm_crc(&self) -> bool {
        self.png_confirm_crc
    }

    /// Set whether the png decoder should confirm chunk crc's
    ///
    /// When false, a crc mismatch is ignored
    pub fn png_set_confirm_crc(mut self, yes: bool) -> Self {
        self.png_confirm_crc = yes;
        self
    }

    /// Maximum number of IDAT chunks accepted before the
    /// decoder gives up on the image
    pub const fn png_get_max_idat_chunks(&self) -> usize {
        self.png_max_idat
    }

    /// Set the maximum number of IDAT chunks accepted
    pub fn png_set_max_idat_chunks(mut self, chunks: usize) -> Self {
        self.png_max_idat = chunks;
        self
    }
}

/// Inflate specific options
impl DecoderOptions {
    /// Whether the inflate decoder confirms the adler32 checksum
    pub const fn inflate_get_confirm_adler(&self) -> bool {
        self.inflate_confirm_adler
    }

    pub fn inflate_set_confirm_adler(mut self, yes: bool) -> Self {
        self.inflate_confirm_adler = yes;
        self
    }
}
