/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![allow(clippy::upper_case_acronyms, non_camel_case_types)]

/// Chunk types the decoder knows about.
///
/// Anything not listed here is rejected, see table 5.3 of
/// the PNG standard, <https://www.w3.org/TR/2003/REC-PNG-20031110/>
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PngChunkType {
    IHDR,
    PLTE,
    IDAT,
    IEND,
    cHRM,
    gAMA,
    iCCP,
    sRGB,
    tRNS,
    pHYs,
    tIME,
    iTXt,
    tEXt
}

impl PngChunkType {
    pub fn from_tag(tag: &[u8; 4]) -> Option<PngChunkType> {
        let chunk_type = match tag {
            b"IHDR" => Self::IHDR,
            b"PLTE" => Self::PLTE,
            b"IDAT" => Self::IDAT,
            b"IEND" => Self::IEND,
            b"cHRM" => Self::cHRM,
            b"gAMA" => Self::gAMA,
            b"iCCP" => Self::iCCP,
            b"sRGB" => Self::sRGB,
            b"tRNS" => Self::tRNS,
            b"pHYs" => Self::pHYs,
            b"tIME" => Self::tIME,
            b"iTXt" => Self::iTXt,
            b"tEXt" => Self::tEXt,
            _ => return None
        };
        Some(chunk_type)
    }

    /// Return true if a chunk must appear
    /// before the first IDAT chunk
    pub const fn should_appear_before_idat(self) -> bool {
        matches!(
            self,
            Self::PLTE | Self::cHRM | Self::gAMA | Self::sRGB | Self::tRNS | Self::pHYs
        )
    }

    /// Return true for chunks whose contents we do not use
    /// and only skip over
    pub const fn is_ignorable(self) -> bool {
        matches!(self, Self::iCCP | Self::tIME | Self::iTXt | Self::tEXt)
    }
}

/// Position of the decoder in the chunk stream
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DecoderState {
    /// Nothing read after the signature, the next chunk must be IHDR
    AwaitingFirstChunk,
    /// IHDR seen, waiting for IEND
    InBody,
    /// IEND seen, the chunk walk is over
    Terminated
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FilterMethod {
    None,
    Sub,
    Up,
    Average,
    Paeth,
    // First scanline, special
    AvgFirst
}

impl FilterMethod {
    pub fn from_int(int: u8) -> Option<FilterMethod> {
        match int {
            0 => Some(FilterMethod::None),
            1 => Some(FilterMethod::Sub),
            2 => Some(FilterMethod::Up),
            3 => Some(FilterMethod::Average),
            4 => Some(FilterMethod::Paeth),
            _ => None
        }
    }

    /// The filter to run on the first scanline
    ///
    /// The row above the first one is treated as zeroes, so
    /// up becomes a copy and paeth, whose predictor `paeth(a, 0, 0)` is
    /// always `a`, becomes sub.
    pub fn for_first_row(self) -> FilterMethod {
        match self {
            FilterMethod::Up => FilterMethod::None,
            FilterMethod::Paeth => FilterMethod::Sub,
            FilterMethod::Average => FilterMethod::AvgFirst,
            other => other
        }
    }
}
