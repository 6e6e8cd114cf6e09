/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A strict png decoder
//!
//! This decodes the subset of PNG used by game and texture pipelines,
//! and rejects everything else with a classified error.
//!
//! # Supported images
//! - Bit depth 8 only
//! - Colour types 2 (RGB), 3 (indexed) and 6 (RGBA)
//! - Non interlaced only
//!
//! Ancillary chunks `gAMA`, `sRGB`, `pHYs`, `cHRM`, `PLTE` and `tRNS` are parsed
//! and exposed, `tEXt`, `iTXt`, `iCCP` and `tIME` are skipped, any other chunk is an error.
//!
//! # Usage
//!
//! ```no_run
//! use lumen_png::decode_file;
//!
//! let image = decode_file("texture.png").unwrap();
//!
//! assert_eq!(image.data_length(), u64::from(image.row_stride()) * u64::from(image.height()));
//! ```
//!
//! # Classifying errors
//!
//! Every error maps to an [`ErrorKind`], which is what callers
//! usually want to branch on.
//!
//! ```no_run
//! use lumen_png::{decode_bytes, ErrorKind};
//!
//! match decode_bytes(&[0; 16]) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => assert_eq!(e.kind(), ErrorKind::Signature)
//! }
//! ```
//!
//! # Extracting metadata
//!
//! Headers can be decoded without inflating anything using [`PngDecoder::decode_headers`],
//! after which [`PngDecoder::get_info`] and [`PngDecoder::get_ancillary`] return what was found.
//!
//! # Alternatives
//! - [png](https://crates.io/crates/png) crate
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;

pub use decoder::{AncillaryInfo, Chromaticities, PhysicalDimensions, PngDecoder, PngInfo};
pub use error::{ErrorKind, PngDecodeErrors};
pub use image::Image;
pub use lumen_core;

mod constants;
mod crc;
mod decoder;
mod enums;
pub mod error;
mod filters;
mod headers;
mod idat;
mod image;

/// Open and decode the png at `path`
///
/// # Errors
/// [`ErrorKind::FileOpen`] if the file can't be opened, otherwise
/// whatever [`PngDecoder::decode`] returns.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<Image, PngDecodeErrors> {
    let file = File::open(path).map_err(PngDecodeErrors::FileOpen)?;

    PngDecoder::new(BufReader::new(file)).decode()
}

/// Decode a png held in memory
pub fn decode_bytes(data: &[u8]) -> Result<Image, PngDecodeErrors> {
    PngDecoder::new(Cursor::new(data)).decode()
}
