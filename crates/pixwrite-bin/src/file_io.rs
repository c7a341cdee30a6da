/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::OpenOptions;
use std::io::BufWriter;
use std::path::Path;

use log::{info, warn};
use pixwrite_bmp::BmpEncoder;
use pixwrite_core::color::Pixel;

use crate::errors::CliErrors;

/// Refuse to clobber an existing file unless asked to
pub fn verify_output_path(path: &Path, override_files: bool) -> Result<(), CliErrors> {
    if path.exists() {
        if !override_files {
            return Err(CliErrors::FileExists(path.to_path_buf()));
        }
        warn!("Overwriting existing file {:?}", path);
    }
    Ok(())
}

/// Encode straight into the file at `path`, returning the bytes written.
///
/// The image is validated before the file is created, so a rejected
/// image leaves nothing behind.
pub fn write_bmp_file<P: Pixel, R: AsRef<[P]>>(
    path: &Path, encoder: &BmpEncoder<'_, P, R>
) -> Result<usize, CliErrors> {
    let expected = encoder.encoded_size()?;

    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;

    info!("Writing {} bytes to {:?}", expected, path);

    let mut writer = BufWriter::new(file);
    let written = encoder.encode(&mut writer)?;

    Ok(written)
}
