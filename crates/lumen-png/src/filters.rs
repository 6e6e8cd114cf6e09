/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Scanline de-filtering
//!
//! Every scanline carries a filter byte followed by the filtered
//! row. Rows are reconstructed top to bottom, each one only reading
//! its own earlier bytes and the row above, which are already final.
use crate::enums::FilterMethod;
use crate::error::PngDecodeErrors;

/// Reconstruct raw pixels from filtered scanlines.
///
/// - `filtered`: filtered scanlines, `width_stride + 1` bytes each
/// - `out`: output, `width_stride` bytes per row, its length decides the row count
/// - `components`: bytes per pixel, the distance to the left neighbour
pub(crate) fn unfilter_scanlines(
    filtered: &[u8], out: &mut [u8], width_stride: usize, components: usize
) -> Result<(), PngDecodeErrors> {
    if width_stride == 0 || out.len() % width_stride != 0 {
        return Err(PngDecodeErrors::GenericStatic("Bad scanline stride"));
    }
    let height = out.len() / width_stride;
    let in_stride = width_stride + 1;

    if filtered.len() < in_stride * height {
        let msg = format!(
            "Not enough pixels, expected {} but found {}",
            in_stride * height,
            filtered.len()
        );
        return Err(PngDecodeErrors::Generic(msg));
    }

    for (row, in_row) in filtered.chunks_exact(in_stride).take(height).enumerate() {
        let row_start = row * width_stride;
        // prev is all rows we already wrote output to,
        // current is where this row goes.
        let (prev, rest) = out.split_at_mut(row_start);
        let current = &mut rest[..width_stride];

        let filter_byte = in_row[0];
        let raw = &in_row[1..];

        let mut filter = FilterMethod::from_int(filter_byte).ok_or_else(|| {
            PngDecodeErrors::Generic(format!("Unknown filter {filter_byte} on row {row}"))
        })?;

        let prev_row: &[u8] = if row == 0 {
            filter = filter.for_first_row();
            &[]
        } else {
            &prev[row_start - width_stride..]
        };

        match filter {
            FilterMethod::None => current.copy_from_slice(raw),

            FilterMethod::Sub => handle_sub(raw, current, components),

            FilterMethod::Up => handle_up(prev_row, raw, current),

            FilterMethod::Average => handle_avg(prev_row, raw, current, components),

            FilterMethod::Paeth => handle_paeth(prev_row, raw, current, components),

            FilterMethod::AvgFirst => handle_avg_first(raw, current, components)
        }
    }
    Ok(())
}

pub fn handle_sub(raw: &[u8], current: &mut [u8], components: usize) {
    // raw length is one row, so always keep it in check
    let end = current.len().min(raw.len());
    let start = components.min(end);

    // leftmost pixel has nothing to its left
    current[..start].copy_from_slice(&raw[..start]);

    for i in start..end {
        let a = current[i - components];
        current[i] = raw[i].wrapping_add(a);
    }
}

pub fn handle_up(prev_row: &[u8], raw: &[u8], current: &mut [u8]) {
    for ((filt, recon), up) in raw.iter().zip(current).zip(prev_row) {
        *recon = (*filt).wrapping_add(*up)
    }
}

pub fn handle_avg(prev_row: &[u8], raw: &[u8], current: &mut [u8], components: usize) {
    let end = current.len().min(raw.len()).min(prev_row.len());
    let start = components.min(end);

    // handle leftmost pixel explicitly, a is zero
    for i in 0..start {
        current[i] = raw[i].wrapping_add(prev_row[i] >> 1);
    }

    for i in start..end {
        let a = current[i - components];
        let b = prev_row[i];

        // floor((a + b) / 2) without leaving 8 bits,
        // from the stanford bit-hacks.
        let avg = (a & b) + ((a ^ b) >> 1);

        current[i] = raw[i].wrapping_add(avg);
    }
}

/// Average filter for the first scanline
///
/// The row above is treated as zero, so this is half of the left pixel
pub fn handle_avg_first(raw: &[u8], current: &mut [u8], components: usize) {
    let end = current.len().min(raw.len());
    let start = components.min(end);

    current[..start].copy_from_slice(&raw[..start]);

    for i in start..end {
        let avg = current[i - components] >> 1;
        current[i] = raw[i].wrapping_add(avg)
    }
}

pub fn handle_paeth(prev_row: &[u8], raw: &[u8], current: &mut [u8], components: usize) {
    let end = current.len().min(raw.len()).min(prev_row.len());
    let start = components.min(end);

    // leftmost pixel, a and c are zero so paeth picks b
    for i in 0..start {
        current[i] = raw[i].wrapping_add(paeth(0, prev_row[i], 0));
    }

    for i in start..end {
        let predictor = paeth(
            current[i - components],
            prev_row[i],
            prev_row[i - components]
        );
        current[i] = raw[i].wrapping_add(predictor)
    }
}

/// The paeth predictor
///
/// Picks whichever of `a` (left), `b` (above) and `c` (upper left) is closest to
/// `a + b - c`, preferring `a`, then `b` on ties.
#[inline(always)]
pub fn paeth(a: u8, b: u8, c: u8) -> u8 {
    let a = i16::from(a);
    let b = i16::from(b);
    let c = i16::from(c);
    let p = a + b - c;
    let pa = (p - a).abs();
    let pb = (p - b).abs();
    let pc = (p - c).abs();

    if pa <= pb && pa <= pc {
        return a as u8;
    }
    if pb <= pc {
        return b as u8;
    }
    c as u8
}
