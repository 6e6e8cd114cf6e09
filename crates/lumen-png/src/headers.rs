/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Per chunk handlers
//!
//! Each handler is entered with the stream pointing at the chunk data
//! and leaves it pointing after the chunk crc.
use std::io::Cursor;

use log::{info, trace};
use lumen_core::bytestream::{ByteIoError, ByteReader, ByteSource};

use crate::constants::{CHRM_LENGTH, GAMA_LENGTH, IHDR_LENGTH, PHYS_LENGTH, SRGB_LENGTH};
use crate::crc::{chunk_crc, confirm_crc, stream_chunk_crc};
use crate::decoder::{Chromaticities, CompressedSpan, PhysicalDimensions, PngChunk};
use crate::enums::DecoderState;
use crate::error::PngDecodeErrors;
use crate::PngDecoder;

/// Field reader over an already loaded chunk payload
type FieldReader<'a> = ByteReader<Cursor<&'a [u8]>>;

// Payload lengths are checked before fields are read, so running
// out of bytes here means the length check is wrong.
fn field_err(err: ByteIoError) -> PngDecodeErrors {
    PngDecodeErrors::Truncated(err)
}

impl<T: ByteSource> PngDecoder<T> {
    fn read_crc(&mut self) -> Result<u32, PngDecodeErrors> {
        self.stream
            .get_u32_be_err()
            .map_err(PngDecodeErrors::MissingCrc)
    }

    /// Read a whole chunk payload plus its crc, confirming
    /// the crc if asked to.
    fn read_chunk_data(&mut self, chunk: &PngChunk) -> Result<Vec<u8>, PngDecodeErrors> {
        // length was checked against the remaining bytes when reading the header
        let mut data = vec![0_u8; chunk.length as usize];

        self.stream
            .read_exact_bytes(&mut data)
            .map_err(PngDecodeErrors::Truncated)?;

        let crc = self.read_crc()?;

        if self.options.png_get_confirm_crc() {
            confirm_crc(chunk.chunk, crc, chunk_crc(&chunk.chunk, &data))?;
        }
        Ok(data)
    }

    fn expect_length(chunk: &PngChunk, length: u32) -> Result<(), PngDecodeErrors> {
        if chunk.length != length {
            return Err(PngDecodeErrors::Generic(format!(
                "Bad {:?} length, expected {length} but found {}, corrupt PNG",
                chunk.chunk_type, chunk.length
            )));
        }
        Ok(())
    }

    pub(crate) fn parse_ihdr(&mut self, chunk: PngChunk) -> Result<(), PngDecodeErrors> {
        if self.state != DecoderState::AwaitingFirstChunk {
            return Err(PngDecodeErrors::GenericStatic("Multiple IHDR, corrupt PNG"));
        }
        Self::expect_length(&chunk, IHDR_LENGTH)?;

        let data = self.read_chunk_data(&chunk)?;
        let mut fields: FieldReader = ByteReader::new(Cursor::new(data.as_slice()));

        let info = &mut self.png_info;

        info.width = fields.get_u32_be_err().map_err(field_err)?;
        info.height = fields.get_u32_be_err().map_err(field_err)?;
        info.bit_depth = fields.get_u8_err().map_err(field_err)?;
        info.color_type = fields.get_u8_err().map_err(field_err)?;
        info.compression_method = fields.get_u8_err().map_err(field_err)?;
        info.filter_method = fields.get_u8_err().map_err(field_err)?;
        info.interlace_method = fields.get_u8_err().map_err(field_err)?;

        if info.width == 0 || info.height == 0 {
            return Err(PngDecodeErrors::GenericStatic("Width or height cannot be zero"));
        }

        if info.width as usize > self.options.get_max_width() {
            return Err(PngDecodeErrors::Generic(format!(
                "Image width {}, larger than maximum configured width {}, aborting",
                info.width,
                self.options.get_max_width()
            )));
        }

        if info.height as usize > self.options.get_max_height() {
            return Err(PngDecodeErrors::Generic(format!(
                "Image height {}, larger than maximum configured height {}, aborting",
                info.height,
                self.options.get_max_height()
            )));
        }

        if info.bit_depth != 8 {
            return Err(PngDecodeErrors::Generic(format!(
                "Unsupported bit depth {}, only 8 bit images can be decoded",
                info.bit_depth
            )));
        }

        if !matches!(info.color_type, 2 | 3 | 6) {
            return Err(PngDecodeErrors::Generic(format!(
                "Unsupported colour type {}, only RGB, RGBA and indexed images can be decoded",
                info.color_type
            )));
        }

        if info.compression_method != 0 {
            return Err(PngDecodeErrors::GenericStatic("Unknown compression method"));
        }

        if info.filter_method != 0 {
            return Err(PngDecodeErrors::Generic(format!(
                "Unknown filter method {}",
                info.filter_method
            )));
        }

        if info.interlace_method != 0 {
            return Err(PngDecodeErrors::Generic(format!(
                "Unsupported interlace method {}, only non interlaced images can be decoded",
                info.interlace_method
            )));
        }

        info!("Width: {}", info.width);
        info!("Height: {}", info.height);
        info!("Color type: {}", info.color_type);
        info!("Depth: {}", info.bit_depth);

        self.state = DecoderState::InBody;

        Ok(())
    }

    pub(crate) fn parse_srgb(&mut self, chunk: PngChunk) -> Result<(), PngDecodeErrors> {
        Self::expect_length(&chunk, SRGB_LENGTH)?;

        let data = self.read_chunk_data(&chunk)?;

        self.ancillary.rendering_intent = Some(data[0]);

        Ok(())
    }

    pub(crate) fn parse_gama(&mut self, chunk: PngChunk) -> Result<(), PngDecodeErrors> {
        Self::expect_length(&chunk, GAMA_LENGTH)?;

        let data = self.read_chunk_data(&chunk)?;
        let mut fields: FieldReader = ByteReader::new(Cursor::new(data.as_slice()));

        let gamma = fields.get_u32_be_err().map_err(field_err)?;

        if self.ancillary.gamma.is_some() {
            trace!("Repeated gAMA chunk, overwriting previous value");
        }
        self.ancillary.gamma = Some(gamma);

        Ok(())
    }

    pub(crate) fn parse_phys(&mut self, chunk: PngChunk) -> Result<(), PngDecodeErrors> {
        Self::expect_length(&chunk, PHYS_LENGTH)?;

        let data = self.read_chunk_data(&chunk)?;
        let mut fields: FieldReader = ByteReader::new(Cursor::new(data.as_slice()));

        let dimensions = PhysicalDimensions {
            ppu_x: fields.get_u32_be_err().map_err(field_err)?,
            ppu_y: fields.get_u32_be_err().map_err(field_err)?,
            unit:  fields.get_u8_err().map_err(field_err)?
        };

        self.ancillary.physical_dimensions = Some(dimensions);

        Ok(())
    }

    pub(crate) fn parse_chrm(&mut self, chunk: PngChunk) -> Result<(), PngDecodeErrors> {
        Self::expect_length(&chunk, CHRM_LENGTH)?;

        let data = self.read_chunk_data(&chunk)?;
        let mut fields: FieldReader = ByteReader::new(Cursor::new(data.as_slice()));

        let mut values = [0_u32; 8];

        for value in values.iter_mut() {
            *value = fields.get_u32_be_err().map_err(field_err)?;
        }
        let [white_x, white_y, red_x, red_y, green_x, green_y, blue_x, blue_y] = values;

        self.ancillary.chromaticities = Some(Chromaticities {
            white_x,
            white_y,
            red_x,
            red_y,
            green_x,
            green_y,
            blue_x,
            blue_y
        });

        Ok(())
    }

    pub(crate) fn parse_plte(&mut self, chunk: PngChunk) -> Result<(), PngDecodeErrors> {
        let data = self.read_chunk_data(&chunk)?;

        trace!("Palette with {} bytes", data.len());

        self.ancillary.palette = Some(data);

        Ok(())
    }

    pub(crate) fn parse_trns(&mut self, chunk: PngChunk) -> Result<(), PngDecodeErrors> {
        let data = self.read_chunk_data(&chunk)?;

        trace!("Transparency with {} bytes", data.len());

        self.ancillary.transparency = Some(data);

        Ok(())
    }

    /// Skip a chunk whose contents we don't use
    pub(crate) fn skip_chunk(&mut self, chunk: PngChunk) -> Result<(), PngDecodeErrors> {
        debug_assert!(chunk.chunk_type.is_ignorable());

        trace!("Skipping {:?} chunk, {} bytes", chunk.chunk_type, chunk.length);

        if self.options.png_get_confirm_crc() {
            let computed = stream_chunk_crc(&mut self.stream, &chunk.chunk, chunk.length)
                .map_err(PngDecodeErrors::Truncated)?;

            let crc = self.read_crc()?;

            return confirm_crc(chunk.chunk, crc, computed);
        }

        self.stream
            .skip(u64::from(chunk.length))
            .map_err(PngDecodeErrors::Truncated)?;

        self.read_crc()?;

        Ok(())
    }

    pub(crate) fn parse_idat(&mut self, chunk: PngChunk) -> Result<(), PngDecodeErrors> {
        let max_chunks = self.options.png_get_max_idat_chunks();

        if self.idat_spans.len() >= max_chunks {
            return Err(PngDecodeErrors::Generic(format!(
                "Too many IDAT chunks, at most {max_chunks} are supported"
            )));
        }

        // Remember where the data lives and jump over it, it is
        // gathered in one go once we reach IEND.
        let offset = self.stream.position().map_err(PngDecodeErrors::Truncated)?;

        self.stream
            .skip(u64::from(chunk.length))
            .map_err(PngDecodeErrors::Truncated)?;

        // crc is confirmed when the data is gathered
        let crc = self.read_crc()?;

        self.idat_spans.push(CompressedSpan {
            offset,
            length: chunk.length,
            crc
        });

        Ok(())
    }

    pub(crate) fn parse_iend(&mut self, chunk: PngChunk) -> Result<(), PngDecodeErrors> {
        if chunk.length != 0 {
            return Err(PngDecodeErrors::GenericStatic("IEND chunk is not empty"));
        }
        if self.idat_spans.is_empty() {
            return Err(PngDecodeErrors::GenericStatic("No IDAT chunk before IEND"));
        }

        self.read_chunk_data(&chunk)?;

        self.state = DecoderState::Terminated;

        Ok(())
    }
}
