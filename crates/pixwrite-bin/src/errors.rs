/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};
use std::path::PathBuf;

use pixwrite_bmp::BmpEncodeErrors;
use pixwrite_core::bit_depth::BitDepth;

/// Errors that stop the command line workflow
pub enum CliErrors {
    Encode(BmpEncodeErrors),
    Io(std::io::Error),
    Json(serde_json::Error),
    /// The output exists and overwriting was not allowed
    FileExists(PathBuf),
    /// The requested dimensions can't be stored in a BMP file
    ImageTooLarge {
        width:  usize,
        height: usize,
        depth:  BitDepth
    }
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CliErrors::Encode(err) => write!(f, "{err:?}"),
            CliErrors::Io(err) => writeln!(f, "I/O error {err}"),
            CliErrors::Json(err) => writeln!(f, "Could not serialize summary {err}"),
            CliErrors::FileExists(path) => {
                writeln!(
                    f,
                    "Output file {path:?} exists, pass --yes to overwrite it"
                )
            }
            CliErrors::ImageTooLarge {
                width,
                height,
                depth
            } => {
                writeln!(
                    f,
                    "A {width}x{height} image at {depth} does not fit in a BMP file"
                )
            }
        }
    }
}

impl From<BmpEncodeErrors> for CliErrors {
    fn from(value: BmpEncodeErrors) -> Self {
        CliErrors::Encode(value)
    }
}

impl From<std::io::Error> for CliErrors {
    fn from(value: std::io::Error) -> Self {
        CliErrors::Io(value)
    }
}

impl From<serde_json::Error> for CliErrors {
    fn from(value: serde_json::Error) -> Self {
        CliErrors::Json(value)
    }
}
