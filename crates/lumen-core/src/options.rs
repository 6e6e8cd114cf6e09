/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options
//!
//! This module exposes a struct holding the options shared by the
//! decoders, the defaults are the strict ones, i.e all checksums
//! are confirmed.
pub use decoder::DecoderOptions;

mod decoder;
