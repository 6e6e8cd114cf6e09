/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Gathering and inflating IDAT data
use log::debug;
use lumen_core::bytestream::ByteSource;
use zune_inflate::{DeflateDecoder, DeflateOptions};

use crate::crc::{chunk_crc, confirm_crc};
use crate::error::PngDecodeErrors;
use crate::PngDecoder;

impl<T: ByteSource> PngDecoder<T> {
    /// Concatenate the data of all IDAT chunks, in file order
    ///
    /// Chunk crc's are confirmed here since this is the first time
    /// the data is actually read.
    pub(crate) fn gather_idat(&mut self) -> Result<Vec<u8>, PngDecodeErrors> {
        let total = self
            .idat_spans
            .iter()
            .try_fold(0_usize, |acc, span| acc.checked_add(span.length as usize))
            .ok_or(PngDecodeErrors::GenericStatic("IDAT data too large"))?;

        let confirm = self.options.png_get_confirm_crc();
        let mut compressed = vec![0_u8; total];
        let mut start = 0;

        for span in &self.idat_spans {
            let end = start + span.length as usize;
            let region = &mut compressed[start..end];

            self.stream
                .set_position(span.offset)
                .map_err(PngDecodeErrors::Truncated)?;
            self.stream
                .read_exact_bytes(region)
                .map_err(PngDecodeErrors::Truncated)?;

            if confirm {
                confirm_crc(*b"IDAT", span.crc, chunk_crc(b"IDAT", region))?;
            }
            start = end;
        }
        debug!(
            "Gathered {total} bytes from {} IDAT chunks",
            self.idat_spans.len()
        );

        Ok(compressed)
    }

    /// Undo deflate decoding
    ///
    /// `expected` is the size of all filtered scanlines, filter bytes included.
    /// Output beyond that is allowed up to one extra scanline and ignored,
    /// output below it is an error.
    pub(crate) fn inflate(
        &self, compressed: &[u8], expected: usize, filtered_stride: usize
    ) -> Result<Vec<u8>, PngDecodeErrors> {
        let options = DeflateOptions::default()
            .set_size_hint(expected)
            .set_limit(expected.saturating_add(filtered_stride))
            .set_confirm_checksum(self.options.inflate_get_confirm_adler());

        let mut decoder = DeflateDecoder::new_with_options(compressed, options);

        let data = decoder.decode_zlib()?;

        debug!("Inflated {} bytes into {}", compressed.len(), data.len());

        if data.len() < expected {
            return Err(PngDecodeErrors::Generic(format!(
                "Not enough pixels, expected {expected} but found {}",
                data.len()
            )));
        }
        Ok(data)
    }
}
