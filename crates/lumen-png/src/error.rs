/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during png decoding
use std::fmt::{Debug, Display, Formatter};

use lumen_core::bytestream::ByteIoError;
use zune_inflate::errors::InflateDecodeErrors;

/// Coarse classification of a decoding failure
///
/// The ordinals are stable and can be handed across an ffi or
/// logging boundary, `Ok` exists so that zero means success there.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    Ok = 0,
    FileOpen = 1,
    FileRead = 2,
    Signature = 3,
    Format = 4,
    Crc = 5,
    Unzip = 6
}

impl ErrorKind {
    /// Human readable description of this kind
    pub const fn message(self) -> &'static str {
        match self {
            ErrorKind::Ok => "OK",
            ErrorKind::FileOpen => "Could not open image file",
            ErrorKind::FileRead => "Could not read image file",
            ErrorKind::Signature => "Invalid image signature",
            ErrorKind::Format => "Invalid file format",
            ErrorKind::Crc => "CRC failed",
            ErrorKind::Unzip => "Unzip failed"
        }
    }

    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Errors returned by the png decoder
pub enum PngDecodeErrors {
    /// The file could not be opened
    FileOpen(std::io::Error),
    /// The source is empty or the next chunk length could not be read
    FileRead(ByteIoError),
    /// The first eight bytes are not a png signature
    BadSignature,
    /// The stream ended inside a chunk or a seek failed
    Truncated(ByteIoError),
    GenericStatic(&'static str),
    Generic(String),
    /// The crc field of a chunk could not be read
    MissingCrc(ByteIoError),
    /// Stored crc, computed crc
    BadCrc([u8; 4], u32, u32),
    ZlibDecodeErrors(InflateDecodeErrors)
}

impl PngDecodeErrors {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::FileOpen(_) => ErrorKind::FileOpen,
            Self::FileRead(_) => ErrorKind::FileRead,
            Self::BadSignature => ErrorKind::Signature,
            Self::Truncated(_) | Self::GenericStatic(_) | Self::Generic(_) => ErrorKind::Format,
            Self::MissingCrc(_) | Self::BadCrc(..) => ErrorKind::Crc,
            Self::ZlibDecodeErrors(_) => ErrorKind::Unzip
        }
    }
}

impl Debug for PngDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileOpen(err) => writeln!(f, "Could not open image file: {err}"),
            Self::FileRead(err) => writeln!(f, "Could not read image file: {err:?}"),
            Self::BadSignature => writeln!(f, "Bad PNG signature, not a png"),
            Self::Truncated(err) => writeln!(f, "Truncated chunk: {err:?}"),
            Self::GenericStatic(val) => writeln!(f, "{val:?}"),
            Self::Generic(val) => writeln!(f, "{val:?}"),
            Self::MissingCrc(err) => writeln!(f, "Could not read chunk crc: {err:?}"),
            Self::BadCrc(chunk, expected, found) => {
                let chunk_name = std::str::from_utf8(chunk).unwrap_or("XXXX");
                writeln!(
                    f,
                    "CRC does not match for chunk {chunk_name}, expected {expected:#010X} but found {found:#010X}"
                )
            }
            Self::ZlibDecodeErrors(err) => writeln!(f, "Error decoding idat chunks {err:?}")
        }
    }
}

impl Display for PngDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {self:?}", self.kind())
    }
}

impl std::error::Error for PngDecodeErrors {}

impl From<&'static str> for PngDecodeErrors {
    fn from(val: &'static str) -> Self {
        Self::GenericStatic(val)
    }
}

impl From<String> for PngDecodeErrors {
    fn from(val: String) -> Self {
        Self::Generic(val)
    }
}

impl From<InflateDecodeErrors> for PngDecodeErrors {
    fn from(val: InflateDecodeErrors) -> Self {
        Self::ZlibDecodeErrors(val)
    }
}
