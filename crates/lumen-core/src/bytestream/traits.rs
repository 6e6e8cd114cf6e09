/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for sources the lumen decoders read from

use std::io::{Read, Seek, SeekFrom};

use crate::bytestream::reader::ByteIoError;

/// The input trait implemented for readers.
///
/// This is the minimal surface the decoders need, exact reads, seeking,
/// and querying position and size.
///
/// It is implemented for everything that is `Read + Seek`, for in memory
/// buffers wrap them in a [`Cursor`](std::io::Cursor).
pub trait ByteSource {
    /// Read exact bytes required to fill `buf` or return an error if that isn't possible
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError>;
    /// Seek into a new position, returning the new position from the start
    fn seek_bytes(&mut self, from: SeekFrom) -> Result<u64, ByteIoError>;
    /// Return the current position of the source from the start.
    fn byte_position(&mut self) -> Result<u64, ByteIoError>;
    /// Return the total size of the source in bytes.
    ///
    /// ## Warning
    /// For files this involves seeking to the end and back, so
    /// callers should cache it.
    fn byte_len(&mut self) -> Result<u64, ByteIoError>;
}

impl<T: Read + Seek> ByteSource for T {
    #[inline]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        self.read_exact(buf).map_err(ByteIoError::from)
    }

    #[inline]
    fn seek_bytes(&mut self, from: SeekFrom) -> Result<u64, ByteIoError> {
        self.seek(from).map_err(ByteIoError::from)
    }

    #[inline]
    fn byte_position(&mut self) -> Result<u64, ByteIoError> {
        self.stream_position().map_err(ByteIoError::from)
    }

    fn byte_len(&mut self) -> Result<u64, ByteIoError> {
        let old_pos = self.stream_position()?;
        let len = self.seek(SeekFrom::End(0))?;

        // Avoid seeking a third time when we were already at the end of the
        // stream.
        if old_pos != len {
            self.seek(SeekFrom::Start(old_pos))?;
        }
        Ok(len)
    }
}
