/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::BufReader;

use clap::ArgMatches;
use log::{info, trace};
use lumen_core::options::DecoderOptions;
use lumen_png::{PngDecodeErrors, PngDecoder};

use crate::errors::CmdErrors;
use crate::serde::Metadata;

/// Decode the input file, print its metadata to standard output
/// and optionally dump the pixels.
pub fn probe_input_file(args: &ArgMatches, options: DecoderOptions) -> Result<(), CmdErrors> {
    let in_file = args
        .get_one::<String>("in")
        .ok_or(CmdErrors::Generic("No input file given"))?;

    let file = File::open(in_file).map_err(PngDecodeErrors::FileOpen)?;
    let size = file.metadata()?.len();

    trace!("Opened {in_file}, {size} bytes");

    let mut decoder = PngDecoder::new_with_options(BufReader::new(file), options);

    decoder.decode_headers()?;

    let ancillary = decoder.get_ancillary().cloned().unwrap_or_default();
    let image = decoder.decode()?;

    let metadata = Metadata::new(in_file, size, &image, &ancillary);

    println!("{}", serde_json::to_string_pretty(&metadata)?);

    if let Some(out_file) = args.get_one::<String>("out") {
        std::fs::write(out_file, image.pixels())?;

        info!("Wrote {} bytes to {out_file}", image.data_length());
    }
    Ok(())
}
