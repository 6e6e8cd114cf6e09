/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::info;
use lumen_core::options::DecoderOptions;

pub mod global_options;

/// Build decoder options from the command line
///
/// Starts from the permissive command line options and turns
/// checks back on unless asked not to.
pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let defaults = DecoderOptions::default();

    let max_width = options
        .get_one::<usize>("max-width")
        .copied()
        .unwrap_or(defaults.get_max_width());
    let max_height = options
        .get_one::<usize>("max-height")
        .copied()
        .unwrap_or(defaults.get_max_height());
    let confirm_crc = !options.get_flag("no-crc");
    let confirm_adler = !options.get_flag("no-adler");

    info!("Max width: {max_width}, max height: {max_height}");
    info!("Confirm crc: {confirm_crc}, confirm adler: {confirm_adler}");

    DecoderOptions::new_cmd()
        .set_max_width(max_width)
        .set_max_height(max_height)
        .png_set_confirm_crc(confirm_crc)
        .inflate_set_confirm_adler(confirm_adler)
}
