/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use log::error;

use crate::errors::CmdErrors;
use crate::probe::probe_input_file;

mod cmd_args;
mod cmd_parsers;
mod errors;
mod probe;
mod serde;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    if let Err(err) = cmd_parsers::global_options::setup_logger(&options) {
        eprintln!("{err:?}");
        exit(-1);
    }

    let decoder_options = cmd_parsers::get_decoder_options(&options);

    if let Err(err) = probe_input_file(&options, decoder_options) {
        println!();
        error!(" Could not decode image, reason {err:?}");
        println!();

        exit(exit_code(&err));
    }
}

/// Decode failures exit with the ordinal of their error kind
fn exit_code(err: &CmdErrors) -> i32 {
    match err {
        CmdErrors::Decode(e) => i32::from(e.kind().ordinal()),
        _ => -1
    }
}
