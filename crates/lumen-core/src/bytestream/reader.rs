/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use std::fmt::{Debug, Display, Formatter};
use std::io::SeekFrom;

use crate::bytestream::ByteSource;

/// Errors produced by the byte reader
pub enum ByteIoError {
    StdIoError(std::io::Error),
    TryFromIntError(std::num::TryFromIntError),
    // requested, remaining
    NotEnoughBytes(u64, u64),
    SeekError(&'static str)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {err}")
            }
            ByteIoError::TryFromIntError(err) => {
                writeln!(f, "Cannot convert to int {err}")
            }
            ByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ByteIoError::SeekError(err) => {
                writeln!(f, "Seek error: {err}")
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ByteIoError {}

impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

impl From<std::num::TryFromIntError> for ByteIoError {
    fn from(value: std::num::TryFromIntError) -> Self {
        ByteIoError::TryFromIntError(value)
    }
}

/// A sequential reader over a finite byte source
///
/// The reader tracks its own position and knows the size of
/// the source, so skips past the end are reported as errors instead
/// of silently landing beyond the data like a plain `Seek` would.
pub struct ByteReader<T: ByteSource> {
    inner: T,
    len:   Option<u64>
}

impl<T: ByteSource> ByteReader<T> {
    pub fn new(source: T) -> ByteReader<T> {
        ByteReader {
            inner: source,
            len:   None
        }
    }
    /// Destroy this reader returning
    /// the underlying source of the bytes
    #[inline]
    pub fn consume(self) -> T {
        self.inner
    }

    /// Total size of the underlying source
    ///
    /// Queried once and cached, the source is assumed not to
    /// change size while we are reading from it.
    pub fn len(&mut self) -> Result<u64, ByteIoError> {
        match self.len {
            Some(len) => Ok(len),
            None => {
                let len = self.inner.byte_len()?;
                self.len = Some(len);
                Ok(len)
            }
        }
    }

    pub fn is_empty(&mut self) -> Result<bool, ByteIoError> {
        Ok(self.len()? == 0)
    }

    #[inline]
    pub fn position(&mut self) -> Result<u64, ByteIoError> {
        self.inner.byte_position()
    }

    /// Number of bytes between the current position and the end
    pub fn remaining(&mut self) -> Result<u64, ByteIoError> {
        let len = self.len()?;
        let pos = self.position()?;
        Ok(len.saturating_sub(pos))
    }

    #[inline]
    pub fn eof(&mut self) -> Result<bool, ByteIoError> {
        Ok(self.remaining()? == 0)
    }

    /// Skip `num` bytes forward
    ///
    /// Returns an error if that would move the position past
    /// the end of the source, the position is unchanged in that case.
    pub fn skip(&mut self, num: u64) -> Result<u64, ByteIoError> {
        let remaining = self.remaining()?;

        if num > remaining {
            return Err(ByteIoError::NotEnoughBytes(num, remaining));
        }
        let offset = i64::try_from(num)?;
        self.inner.seek_bytes(SeekFrom::Current(offset))
    }

    /// Move to an absolute position from the start of the source
    pub fn set_position(&mut self, position: u64) -> Result<(), ByteIoError> {
        if position > self.len()? {
            return Err(ByteIoError::SeekError("Position lies beyond the end of the stream"));
        }
        self.inner.seek_bytes(SeekFrom::Start(position))?;
        Ok(())
    }

    #[inline]
    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        self.inner.read_exact_bytes(buf)
    }

    #[inline]
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ByteIoError> {
        let mut byte_store: [u8; N] = [0; N];
        self.inner.read_exact_bytes(&mut byte_store)?;
        Ok(byte_store)
    }

    #[inline]
    pub fn get_u8_err(&mut self) -> Result<u8, ByteIoError> {
        let [byte] = self.read_fixed_bytes_or_error::<1>()?;
        Ok(byte)
    }
}

macro_rules! get_big_endian {
    ($name:tt,$int_type:tt) => {
        impl<T: ByteSource> ByteReader<T> {
            #[doc=concat!("Read ",stringify!($int_type)," as a big endian integer")]
            #[doc=concat!("Returning an error if the underlying source cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name(&mut self) -> Result<$int_type, ByteIoError> {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let space = self.read_fixed_bytes_or_error::<SIZE_OF_VAL>()?;

                Ok($int_type::from_be_bytes(space))
            }
        }
    };
}

get_big_endian!(get_u16_be_err, u16);
get_big_endian!(get_u32_be_err, u32);
