/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};

use lumen_png::PngDecodeErrors;

pub enum CmdErrors {
    Decode(PngDecodeErrors),
    Io(std::io::Error),
    Json(serde_json::Error),
    Logger(log::SetLoggerError),
    Generic(&'static str)
}

impl Debug for CmdErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(err) => writeln!(f, "{err}"),
            Self::Io(err) => writeln!(f, "I/O error: {err}"),
            Self::Json(err) => writeln!(f, "Could not serialize metadata: {err}"),
            Self::Logger(err) => writeln!(f, "Could not set up logger: {err}"),
            Self::Generic(err) => writeln!(f, "{err}")
        }
    }
}

impl From<PngDecodeErrors> for CmdErrors {
    fn from(value: PngDecodeErrors) -> Self {
        Self::Decode(value)
    }
}

impl From<std::io::Error> for CmdErrors {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CmdErrors {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<log::SetLoggerError> for CmdErrors {
    fn from(value: log::SetLoggerError) -> Self {
        Self::Logger(value)
    }
}
