/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Chunk crc computation
//!
//! The crc of a chunk covers the chunk type and the chunk data,
//! but not the length.
use crc32fast::Hasher;
use lumen_core::bytestream::{ByteIoError, ByteReader, ByteSource};

use crate::error::PngDecodeErrors;

/// Size of the block used when streaming chunks we don't keep
const STREAM_BLOCK: usize = 4096;

pub(crate) fn chunk_crc(chunk: &[u8; 4], data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(chunk);
    hasher.update(data);
    hasher.finalize()
}

/// Compute the crc of a chunk whose data starts at the current
/// position of `stream`, consuming `length` bytes.
///
/// Data is hashed in small blocks and thrown away.
pub(crate) fn stream_chunk_crc<T: ByteSource>(
    stream: &mut ByteReader<T>, chunk: &[u8; 4], length: u32
) -> Result<u32, ByteIoError> {
    let mut hasher = Hasher::new();
    hasher.update(chunk);

    let mut block = [0_u8; STREAM_BLOCK];
    let mut remaining = length as usize;

    while remaining > 0 {
        let size = remaining.min(STREAM_BLOCK);
        stream.read_exact_bytes(&mut block[..size])?;
        hasher.update(&block[..size]);
        remaining -= size;
    }
    Ok(hasher.finalize())
}

pub(crate) fn confirm_crc(chunk: [u8; 4], stored: u32, computed: u32) -> Result<(), PngDecodeErrors> {
    if stored != computed {
        return Err(PngDecodeErrors::BadCrc(chunk, stored, computed));
    }
    Ok(())
}
