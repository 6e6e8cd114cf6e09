/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A seekable, position tracking byte reader
//!
//! The decoders read chunk headers field by field and jump around
//! the underlying source (e.g. to gather compressed data after the
//! chunk walk), so the reader works on anything that is [`Read`](std::io::Read)
//! and [`Seek`](std::io::Seek), in memory buffers via [`Cursor`](std::io::Cursor)
//! and files via [`BufReader`](std::io::BufReader) alike.
pub use reader::{ByteIoError, ByteReader};
pub use traits::ByteSource;

mod reader;
mod traits;
