/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::{debug, trace};
use lumen_core::bytestream::{ByteIoError, ByteReader, ByteSource};
use lumen_core::options::DecoderOptions;
use lumen_core::pixel::PixelScheme;

use crate::constants::{MAX_CHUNK_LENGTH, PNG_SIGNATURE_HI, PNG_SIGNATURE_LO};
use crate::enums::{DecoderState, PngChunkType};
use crate::error::PngDecodeErrors;
use crate::filters::unfilter_scanlines;
use crate::image::Image;

/// A chunk header, the payload and crc
/// have not been read yet
#[derive(Copy, Clone, Debug)]
pub(crate) struct PngChunk {
    pub length:     u32,
    pub chunk_type: PngChunkType,
    pub chunk:      [u8; 4]
}

/// Location of one IDAT payload inside the source
///
/// Payloads are not copied during the chunk walk, only
/// remembered and gathered once IEND is reached.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct CompressedSpan {
    pub offset: u64,
    pub length: u32,
    pub crc:    u32
}

/// Image header information, as stored in the IHDR chunk
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub struct PngInfo {
    pub width:              u32,
    pub height:             u32,
    pub bit_depth:          u8,
    pub color_type:         u8,
    pub compression_method: u8,
    pub filter_method:      u8,
    pub interlace_method:   u8
}

/// Physical pixel dimensions, from the pHYs chunk
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub struct PhysicalDimensions {
    /// Pixels per unit, x axis
    pub ppu_x: u32,
    /// Pixels per unit, y axis
    pub ppu_y: u32,
    /// 0 for an unknown unit (aspect ratio only), 1 for the metre
    pub unit:  u8
}

/// Primary chromaticities and white point from the cHRM chunk
///
/// Values are stored as in the file, i.e scaled by 100000.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub struct Chromaticities {
    pub white_x: u32,
    pub white_y: u32,
    pub red_x:   u32,
    pub red_y:   u32,
    pub green_x: u32,
    pub green_y: u32,
    pub blue_x:  u32,
    pub blue_y:  u32
}

/// Ancillary information gathered while walking the chunks.
///
/// When a chunk appears more than once, the last one wins.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct AncillaryInfo {
    /// Rendering intent from sRGB
    pub rendering_intent:    Option<u8>,
    /// Image gamma times 100000 from gAMA
    pub gamma:               Option<u32>,
    pub physical_dimensions: Option<PhysicalDimensions>,
    pub chromaticities:      Option<Chromaticities>,
    /// Raw PLTE payload, three bytes per entry
    pub palette:             Option<Vec<u8>>,
    /// Raw tRNS payload
    pub transparency:        Option<Vec<u8>>
}

/// A png decoder for 8 bit, non interlaced RGB, RGBA and indexed images
///
/// The decoder reads from any [`ByteSource`], i.e anything that is `Read + Seek`.
///
/// ```no_run
/// use std::io::Cursor;
/// use lumen_png::PngDecoder;
///
/// let data = std::fs::read("texture.png").unwrap();
/// let mut decoder = PngDecoder::new(Cursor::new(data));
/// let image = decoder.decode().unwrap();
///
/// println!("{}x{} {:?}", image.width(), image.height(), image.pixel_scheme());
/// ```
pub struct PngDecoder<T: ByteSource> {
    pub(crate) stream:      ByteReader<T>,
    pub(crate) options:     DecoderOptions,
    pub(crate) state:       DecoderState,
    pub(crate) chunks_seen: usize,
    pub(crate) png_info:    PngInfo,
    pub(crate) ancillary:   AncillaryInfo,
    pub(crate) idat_spans:  Vec<CompressedSpan>
}

impl<T: ByteSource> PngDecoder<T> {
    pub fn new(source: T) -> PngDecoder<T> {
        PngDecoder::new_with_options(source, DecoderOptions::default())
    }

    pub fn new_with_options(source: T, options: DecoderOptions) -> PngDecoder<T> {
        PngDecoder {
            stream: ByteReader::new(source),
            options,
            state: DecoderState::AwaitingFirstChunk,
            chunks_seen: 0,
            png_info: PngInfo::default(),
            ancillary: AncillaryInfo::default(),
            idat_spans: Vec::new()
        }
    }

    /// Return the image header, or `None` if headers haven't been decoded
    pub fn get_info(&self) -> Option<&PngInfo> {
        if self.state == DecoderState::AwaitingFirstChunk {
            return None;
        }
        Some(&self.png_info)
    }

    /// Return ancillary chunk information, or `None` if headers haven't been
    /// decoded
    pub fn get_ancillary(&self) -> Option<&AncillaryInfo> {
        if self.state != DecoderState::Terminated {
            return None;
        }
        Some(&self.ancillary)
    }

    /// Return the image `(width, height)`
    pub const fn get_dimensions(&self) -> Option<(u32, u32)> {
        match self.state {
            DecoderState::AwaitingFirstChunk => None,
            _ => Some((self.png_info.width, self.png_info.height))
        }
    }

    /// Return the pixel layout the decoded image will have
    pub const fn get_pixel_scheme(&self) -> Option<PixelScheme> {
        match self.state {
            DecoderState::AwaitingFirstChunk => None,
            _ => PixelScheme::from_png_color_type(self.png_info.color_type)
        }
    }

    /// Return the options this decoder runs with
    pub const fn get_options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Consume the decoder, returning the source it read from
    pub fn into_inner(self) -> T {
        self.stream.consume()
    }

    fn reset(&mut self) -> Result<(), PngDecodeErrors> {
        self.stream
            .set_position(0)
            .map_err(PngDecodeErrors::FileRead)?;

        self.state = DecoderState::AwaitingFirstChunk;
        self.chunks_seen = 0;
        self.png_info = PngInfo::default();
        self.ancillary = AncillaryInfo::default();
        self.idat_spans.clear();

        Ok(())
    }

    fn read_signature(&mut self) -> Result<(), PngDecodeErrors> {
        let hi = self.stream.get_u32_be_err();
        let lo = self.stream.get_u32_be_err();

        match (hi, lo) {
            (Ok(PNG_SIGNATURE_HI), Ok(PNG_SIGNATURE_LO)) => Ok(()),
            _ => Err(PngDecodeErrors::BadSignature)
        }
    }

    fn read_chunk_header(&mut self) -> Result<PngChunk, PngDecodeErrors> {
        // Format is length - chunk type - [data] -  crc chunk
        let length = self
            .stream
            .get_u32_be_err()
            .map_err(PngDecodeErrors::FileRead)?;

        let chunk = self
            .stream
            .read_fixed_bytes_or_error::<4>()
            .map_err(PngDecodeErrors::Truncated)?;

        let chunk_name = std::str::from_utf8(&chunk).unwrap_or("XXXX");

        if length > MAX_CHUNK_LENGTH {
            return Err(PngDecodeErrors::Generic(format!(
                "Chunk {chunk_name} has length {length} larger than the allowed {MAX_CHUNK_LENGTH}"
            )));
        }

        let first_chunk = self.state == DecoderState::AwaitingFirstChunk;

        // only IEND may be empty, and never as the first chunk
        if length == 0 && (first_chunk || &chunk != b"IEND") {
            return Err(PngDecodeErrors::Generic(format!(
                "Chunk {chunk_name} is empty, corrupt PNG"
            )));
        }

        let chunk_type = PngChunkType::from_tag(&chunk).ok_or_else(|| {
            PngDecodeErrors::Generic(format!("Unsupported chunk {chunk_name}"))
        })?;

        if first_chunk && chunk_type != PngChunkType::IHDR {
            return Err(PngDecodeErrors::GenericStatic(
                "First chunk not IHDR, Corrupt PNG"
            ));
        }

        let remaining = self.stream.remaining().map_err(PngDecodeErrors::Truncated)?;

        if u64::from(length) > remaining {
            return Err(PngDecodeErrors::Truncated(ByteIoError::NotEnoughBytes(
                u64::from(length),
                remaining
            )));
        }

        trace!("Chunk {chunk_name}, length {length}");

        Ok(PngChunk {
            length,
            chunk_type,
            chunk
        })
    }

    /// Walk the chunks up to and including IEND.
    ///
    /// This validates chunk order and sizes, fills in the header and
    /// ancillary information and records where IDAT data lives, but doesn't
    /// decompress anything.
    ///
    /// Calling it again after it succeeded does nothing, calling it again
    /// after it failed walks the chunks again from the start.
    pub fn decode_headers(&mut self) -> Result<(), PngDecodeErrors> {
        if self.state == DecoderState::Terminated {
            return Ok(());
        }
        // An earlier walk may have failed part way, so
        // start over from the first byte with nothing recorded.
        self.reset()?;

        if self.stream.is_empty().map_err(PngDecodeErrors::FileRead)? {
            return Err(PngDecodeErrors::FileRead(ByteIoError::NotEnoughBytes(8, 0)));
        }

        self.read_signature()?;

        while self.state != DecoderState::Terminated {
            let chunk = self.read_chunk_header()?;

            if chunk.chunk_type.should_appear_before_idat() && !self.idat_spans.is_empty() {
                return Err(PngDecodeErrors::Generic(format!(
                    "Chunk {:?} appears after IDAT, corrupt PNG",
                    chunk.chunk_type
                )));
            }

            match chunk.chunk_type {
                PngChunkType::IHDR => self.parse_ihdr(chunk)?,
                PngChunkType::sRGB => self.parse_srgb(chunk)?,
                PngChunkType::gAMA => self.parse_gama(chunk)?,
                PngChunkType::pHYs => self.parse_phys(chunk)?,
                PngChunkType::cHRM => self.parse_chrm(chunk)?,
                PngChunkType::PLTE => self.parse_plte(chunk)?,
                PngChunkType::tRNS => self.parse_trns(chunk)?,
                PngChunkType::IDAT => self.parse_idat(chunk)?,
                PngChunkType::IEND => self.parse_iend(chunk)?,
                PngChunkType::tEXt
                | PngChunkType::iTXt
                | PngChunkType::iCCP
                | PngChunkType::tIME => self.skip_chunk(chunk)?
            }
            self.chunks_seen += 1;
        }
        debug!(
            "Walked {} chunks, {} of them IDAT",
            self.chunks_seen,
            self.idat_spans.len()
        );

        Ok(())
    }

    /// Decode the png into an [`Image`]
    ///
    /// Either the whole image is returned or an error, scratch
    /// buffers never outlive this call.
    pub fn decode(&mut self) -> Result<Image, PngDecodeErrors> {
        self.decode_headers()?;

        let info = self.png_info;
        let scheme = PixelScheme::from_png_color_type(info.color_type)
            .ok_or(PngDecodeErrors::GenericStatic("Unsupported colour type"))?;

        let width = usize::try_from(info.width)
            .map_err(|_| PngDecodeErrors::GenericStatic("Image width too large"))?;
        let height = usize::try_from(info.height)
            .map_err(|_| PngDecodeErrors::GenericStatic("Image height too large"))?;

        // 8 bit depth only, so a row is a whole number of bytes
        let width_stride = width
            .checked_mul(scheme.bytes_per_pixel())
            .ok_or(PngDecodeErrors::GenericStatic("Image row too large"))?;
        let row_stride = u32::try_from(width_stride)
            .map_err(|_| PngDecodeErrors::GenericStatic("Image row too large"))?;
        // plus filter byte
        let filtered_stride = width_stride + 1;

        let image_len = width_stride
            .checked_mul(height)
            .ok_or(PngDecodeErrors::GenericStatic("Image too large"))?;
        let filtered_len = filtered_stride
            .checked_mul(height)
            .ok_or(PngDecodeErrors::GenericStatic("Image too large"))?;

        let compressed = self.gather_idat()?;
        let filtered = self.inflate(&compressed, filtered_len, filtered_stride)?;
        drop(compressed);

        let mut pixels = vec![0_u8; image_len];

        unfilter_scanlines(
            &filtered[..filtered_len],
            &mut pixels,
            width_stride,
            scheme.bytes_per_pixel()
        )?;

        Ok(Image::new(
            info.width,
            info.height,
            scheme,
            row_stride,
            pixels,
            self.ancillary.palette.clone(),
            self.ancillary.transparency.clone()
        ))
    }
}
