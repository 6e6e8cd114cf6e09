/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the lumen decoders
//!
//! It currently contains
//!
//! - A seekable bytestream reader with big endian aware reads
//! - Pixel layouts produced by the decoders
//! - Decoder options
//!
//! # Features
//!  - `serde`: Enables serializing of [`PixelScheme`](pixel::PixelScheme)

pub mod bytestream;
pub mod options;
pub mod pixel;
mod serde;
