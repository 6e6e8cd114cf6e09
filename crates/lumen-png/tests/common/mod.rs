/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Helpers for building png files in tests
#![allow(dead_code)]

use std::io::Write;

use nanorand::Rng;

pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Build a chunk with a correct crc
pub fn chunk(tag: &[u8; 4], data: &[u8]) -> Vec<u8> {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(tag);
    hasher.update(data);

    let mut out = Vec::with_capacity(data.len() + 12);
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(data);
    out.extend_from_slice(&hasher.finalize().to_be_bytes());
    out
}

pub fn ihdr_with(width: u32, height: u32, depth: u8, color_type: u8, interlace: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(13);
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&[depth, color_type, 0, 0, interlace]);

    chunk(b"IHDR", &data)
}

pub fn ihdr(width: u32, height: u32, color_type: u8) -> Vec<u8> {
    ihdr_with(width, height, 8, color_type, 0)
}

pub fn iend() -> Vec<u8> {
    chunk(b"IEND", &[])
}

pub fn zlib(data: &[u8]) -> Vec<u8> {
    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Signature followed by `chunks`, in order
pub fn png_file(chunks: &[Vec<u8>]) -> Vec<u8> {
    let mut out = SIGNATURE.to_vec();

    for chunk in chunks {
        out.extend_from_slice(chunk);
    }
    out
}

/// A complete png with a single IDAT holding `filtered`
pub fn simple_png(width: u32, height: u32, color_type: u8, filtered: &[u8]) -> Vec<u8> {
    png_file(&[
        ihdr(width, height, color_type),
        chunk(b"IDAT", &zlib(filtered)),
        iend()
    ])
}

/// Flip a bit in the crc of the first chunk with tag `tag`
pub fn corrupt_crc(file: &mut [u8], tag: &[u8; 4]) {
    let mut pos = SIGNATURE.len();

    while pos + 8 <= file.len() {
        let length = u32::from_be_bytes(file[pos..pos + 4].try_into().unwrap()) as usize;

        if &file[pos + 4..pos + 8] == tag {
            file[pos + 8 + length] ^= 0x01;
            return;
        }
        pos += length + 12;
    }
    panic!("No {tag:?} chunk found");
}

pub fn random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rand = nanorand::WyRand::new_seed(seed);

    (0..len).map(|_| rand.generate::<u8>()).collect()
}

/// Encode with the png crate, every row using `filter`
pub fn encode_ref(
    width: u32, height: u32, color: png::ColorType, filter: png::FilterType, pixels: &[u8],
    palette: Option<Vec<u8>>
) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_filter(filter);
        encoder.set_adaptive_filter(png::AdaptiveFilterType::NonAdaptive);

        if let Some(palette) = palette {
            encoder.set_palette(palette);
        }
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(pixels).unwrap();
        writer.finish().unwrap();
    }
    out
}

/// Decode with the png crate, no transformations applied
pub fn decode_ref(data: &[u8]) -> Vec<u8> {
    let mut decoder = png::Decoder::new(data);
    decoder.set_transformations(png::Transformations::IDENTITY);

    let mut reader = decoder.read_info().unwrap();

    // Allocate the output buffer.
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());

    buf
}
