/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Cursor;

use lumen_png::lumen_core::options::DecoderOptions;
use lumen_png::{decode_bytes, decode_file, ErrorKind, PngDecoder};

mod common;

use common::*;

fn decode_kind(data: &[u8]) -> ErrorKind {
    decode_bytes(data).unwrap_err().kind()
}

fn decode_with_options(data: &[u8], options: DecoderOptions) -> Result<Vec<u8>, ErrorKind> {
    PngDecoder::new_with_options(Cursor::new(data), options)
        .decode()
        .map(|image| image.into_pixels())
        .map_err(|e| e.kind())
}

/// A valid 1x1 RGB image
fn tiny_idat() -> Vec<u8> {
    chunk(b"IDAT", &zlib(&[0, 1, 2, 3]))
}

#[test]
fn test_error_kind_ordinals() {
    assert_eq!(ErrorKind::Ok.ordinal(), 0);
    assert_eq!(ErrorKind::FileOpen.ordinal(), 1);
    assert_eq!(ErrorKind::FileRead.ordinal(), 2);
    assert_eq!(ErrorKind::Signature.ordinal(), 3);
    assert_eq!(ErrorKind::Format.ordinal(), 4);
    assert_eq!(ErrorKind::Crc.ordinal(), 5);
    assert_eq!(ErrorKind::Unzip.ordinal(), 6);

    assert_eq!(ErrorKind::Crc.to_string(), "CRC failed");
}

#[test]
fn test_bad_signature() {
    let mut file = simple_png(1, 1, 2, &[0, 1, 2, 3]);
    file[1] = b'J';

    assert_eq!(decode_kind(&file), ErrorKind::Signature);
    assert_eq!(decode_kind(b"GIF89a\x01\x00\x01\x00"), ErrorKind::Signature);
    // shorter than a signature
    assert_eq!(decode_kind(&SIGNATURE[..5]), ErrorKind::Signature);
}

#[test]
fn test_empty_source() {
    assert_eq!(decode_kind(&[]), ErrorKind::FileRead);
}

#[test]
fn test_missing_chunks_after_signature() {
    assert_eq!(decode_kind(&SIGNATURE), ErrorKind::FileRead);

    // stream ends before IEND
    let file = png_file(&[ihdr(1, 1, 2), tiny_idat()]);

    assert_eq!(decode_kind(&file), ErrorKind::FileRead);
}

#[test]
fn test_missing_file() {
    let err = decode_file("/this/path/does/not/exist.png").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::FileOpen);
}

#[test]
fn test_zero_length_first_chunk() {
    let file = png_file(&[chunk(b"IHDR", &[]), tiny_idat(), iend()]);

    assert_eq!(decode_kind(&file), ErrorKind::Format);
}

#[test]
fn test_first_chunk_must_be_ihdr() {
    let file = png_file(&[
        chunk(b"gAMA", &45455_u32.to_be_bytes()),
        ihdr(1, 1, 2),
        tiny_idat(),
        iend()
    ]);

    assert_eq!(decode_kind(&file), ErrorKind::Format);
}

#[test]
fn test_iend_rules() {
    // IEND as the first chunk
    assert_eq!(decode_kind(&png_file(&[iend()])), ErrorKind::Format);
    // no IDAT
    assert_eq!(decode_kind(&png_file(&[ihdr(1, 1, 2), iend()])), ErrorKind::Format);
    // payload on IEND
    let file = png_file(&[ihdr(1, 1, 2), tiny_idat(), chunk(b"IEND", &[0])]);

    assert_eq!(decode_kind(&file), ErrorKind::Format);
}

#[test]
fn test_missing_iend_crc() {
    let mut file = png_file(&[ihdr(1, 1, 2), tiny_idat(), iend()]);
    file.truncate(file.len() - 4);

    assert_eq!(decode_kind(&file), ErrorKind::Crc);
}

#[test]
fn test_truncated_chunk_data() {
    let mut file = png_file(&[ihdr(1, 1, 2), tiny_idat(), iend()]);
    // cut inside the IHDR payload
    file.truncate(SIGNATURE.len() + 8 + 5);

    assert_eq!(decode_kind(&file), ErrorKind::Format);
}

#[test]
fn test_unknown_chunk() {
    let file = png_file(&[
        ihdr(1, 1, 2),
        chunk(b"bKGD", &[0, 0, 0, 0, 0, 0]),
        tiny_idat(),
        iend()
    ]);

    assert_eq!(decode_kind(&file), ErrorKind::Format);
}

#[test]
fn test_repeated_ihdr() {
    let file = png_file(&[ihdr(1, 1, 2), ihdr(1, 1, 2), tiny_idat(), iend()]);

    assert_eq!(decode_kind(&file), ErrorKind::Format);
}

#[test]
fn test_ancillary_after_idat() {
    let file = png_file(&[
        ihdr(1, 1, 2),
        tiny_idat(),
        chunk(b"gAMA", &45455_u32.to_be_bytes()),
        iend()
    ]);

    assert_eq!(decode_kind(&file), ErrorKind::Format);
}

#[test]
fn test_unsupported_headers() {
    let idat = tiny_idat();

    // 16 bit depth
    let file = png_file(&[ihdr_with(1, 1, 16, 2, 0), idat.clone(), iend()]);
    assert_eq!(decode_kind(&file), ErrorKind::Format);

    // interlaced
    let file = png_file(&[ihdr_with(1, 1, 8, 2, 1), idat.clone(), iend()]);
    assert_eq!(decode_kind(&file), ErrorKind::Format);

    // grayscale
    let file = png_file(&[ihdr(1, 1, 0), idat.clone(), iend()]);
    assert_eq!(decode_kind(&file), ErrorKind::Format);

    // zero width
    let file = png_file(&[ihdr(0, 1, 2), idat.clone(), iend()]);
    assert_eq!(decode_kind(&file), ErrorKind::Format);

    // wrong IHDR length
    let file = png_file(&[chunk(b"IHDR", &[0; 12]), idat, iend()]);
    assert_eq!(decode_kind(&file), ErrorKind::Format);
}

#[test]
fn test_max_dimensions() {
    let file = simple_png(3, 1, 2, &[0; 10]);

    let options = DecoderOptions::default().set_max_width(2);
    assert_eq!(decode_with_options(&file, options), Err(ErrorKind::Format));

    let options = DecoderOptions::default().set_max_width(3).set_max_height(1);
    assert_eq!(decode_with_options(&file, options), Ok(vec![0; 9]));
}

#[test]
fn test_too_many_idat_chunks() {
    let mut chunks = vec![ihdr(1, 1, 2)];
    chunks.extend((0..257).map(|_| chunk(b"IDAT", &[0])));
    chunks.push(iend());

    assert_eq!(decode_kind(&png_file(&chunks)), ErrorKind::Format);
}

#[test]
fn test_max_idat_chunks_allowed() {
    // random pixels don't compress, so there's enough data to split
    let pixels = random_bytes(64 * 64 * 3, 7);
    let mut filtered = Vec::new();

    for row in pixels.chunks_exact(64 * 3) {
        filtered.push(0);
        filtered.extend_from_slice(row);
    }
    let compressed = zlib(&filtered);
    let len = compressed.len();

    let mut chunks = vec![ihdr(64, 64, 2)];
    // exactly 256 non empty pieces
    chunks.extend((0..256).map(|i| chunk(b"IDAT", &compressed[i * len / 256..(i + 1) * len / 256])));
    chunks.push(iend());

    assert_eq!(chunks.len(), 258);
    assert_eq!(decode_bytes(&png_file(&chunks)).unwrap().pixels(), &pixels[..]);

    let options = DecoderOptions::default().png_set_max_idat_chunks(255);
    assert_eq!(
        decode_with_options(&png_file(&chunks), options),
        Err(ErrorKind::Format)
    );
}

#[test]
fn test_crc_mismatch() {
    let mut file = png_file(&[
        ihdr(1, 1, 2),
        chunk(b"gAMA", &45455_u32.to_be_bytes()),
        tiny_idat(),
        iend()
    ]);
    corrupt_crc(&mut file, b"gAMA");

    assert_eq!(decode_kind(&file), ErrorKind::Crc);

    let err = decode_bytes(&file).unwrap_err();
    assert!(err.to_string().starts_with("CRC failed"));
}

#[test]
fn test_crc_mismatch_in_idat() {
    let mut file = simple_png(1, 1, 2, &[0, 1, 2, 3]);
    corrupt_crc(&mut file, b"IDAT");

    // headers don't read idat data, so they succeed
    let mut decoder = PngDecoder::new(Cursor::new(&file));
    decoder.decode_headers().unwrap();

    assert_eq!(decoder.decode().unwrap_err().kind(), ErrorKind::Crc);
}

#[test]
fn test_crc_mismatch_in_skipped_chunk() {
    let mut file = png_file(&[
        ihdr(1, 1, 2),
        chunk(b"tEXt", b"Comment\0hello"),
        tiny_idat(),
        iend()
    ]);
    corrupt_crc(&mut file, b"tEXt");

    assert_eq!(decode_kind(&file), ErrorKind::Crc);
}

#[test]
fn test_crc_not_confirmed() {
    let mut file = png_file(&[
        ihdr(1, 1, 2),
        chunk(b"tEXt", b"Comment\0hello"),
        tiny_idat(),
        iend()
    ]);
    corrupt_crc(&mut file, b"IHDR");
    corrupt_crc(&mut file, b"tEXt");
    corrupt_crc(&mut file, b"IDAT");
    corrupt_crc(&mut file, b"IEND");

    let options = DecoderOptions::default().png_set_confirm_crc(false);

    assert_eq!(decode_with_options(&file, options), Ok(vec![1, 2, 3]));
}

#[test]
fn test_bad_filter_byte() {
    let file = simple_png(1, 1, 2, &[5, 1, 2, 3]);

    assert_eq!(decode_kind(&file), ErrorKind::Format);
}

#[test]
fn test_short_inflate_output() {
    // two rows declared, one provided
    let file = simple_png(1, 2, 2, &[0, 1, 2, 3]);

    assert_eq!(decode_kind(&file), ErrorKind::Format);
}

#[test]
fn test_extra_inflate_output_is_ignored() {
    let file = simple_png(1, 1, 2, &[0, 1, 2, 3, 9, 9]);

    assert_eq!(decode_bytes(&file).unwrap().pixels(), &[1, 2, 3]);
}

#[test]
fn test_corrupt_zlib() {
    let file = png_file(&[ihdr(1, 1, 2), chunk(b"IDAT", &[0xFF; 16]), iend()]);

    assert_eq!(decode_kind(&file), ErrorKind::Unzip);
}

#[test]
fn test_adler_mismatch() {
    let mut compressed = zlib(&[0, 1, 2, 3]);
    let last = compressed.len() - 1;
    compressed[last] ^= 0xFF;

    let file = png_file(&[ihdr(1, 1, 2), chunk(b"IDAT", &compressed), iend()]);

    assert_eq!(decode_kind(&file), ErrorKind::Unzip);

    let options = DecoderOptions::default().inflate_set_confirm_adler(false);

    assert_eq!(decode_with_options(&file, options), Ok(vec![1, 2, 3]));
}

#[test]
fn test_zero_length_body_chunk() {
    for tag in [b"IDAT", b"tEXt", b"PLTE", b"gAMA"] {
        let file = png_file(&[ihdr(1, 1, 2), chunk(tag, &[]), tiny_idat(), iend()]);

        assert_eq!(
            decode_kind(&file),
            ErrorKind::Format,
            "{}",
            String::from_utf8_lossy(tag)
        );
    }
}

#[test]
fn test_decode_again_after_failure() {
    let file = png_file(&[ihdr(1, 1, 2), tiny_idat(), iend()]);
    let mut decoder = PngDecoder::new(Cursor::new(&file[..20]));

    // cut inside IHDR, both attempts see the same truncated chunk
    assert_eq!(decoder.decode().unwrap_err().kind(), ErrorKind::Format);
    assert_eq!(decoder.decode().unwrap_err().kind(), ErrorKind::Format);
    assert_eq!(decoder.decode_headers().unwrap_err().kind(), ErrorKind::Format);
}

#[test]
fn test_failed_walk_is_repeated_from_the_start() {
    // a bad chunk after the first IDAT
    let file = png_file(&[
        ihdr(2, 1, 2),
        tiny_idat(),
        chunk(b"bKGD", &[0; 6]),
        iend()
    ]);
    let mut decoder = PngDecoder::new(Cursor::new(&file));

    assert_eq!(decoder.decode_headers().unwrap_err().kind(), ErrorKind::Format);
    assert_eq!(decoder.decode_headers().unwrap_err().kind(), ErrorKind::Format);
    assert!(decoder.get_ancillary().is_none());
    assert_eq!(decoder.get_dimensions(), Some((2, 1)));
}
