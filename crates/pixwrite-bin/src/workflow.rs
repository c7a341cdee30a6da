/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::info;
use pixwrite_bmp::{encoded_size, BmpEncoder};
use pixwrite_core::bit_depth::BitDepth;
use pixwrite_core::options::RowOrder;
use serde::Serialize;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CliErrors;
use crate::file_io::{verify_output_path, write_bmp_file};
use crate::patterns::{assign_indices, palette_for, render};

/// Printed with `--summary`
#[derive(Serialize)]
struct EncodeSummary<'a> {
    output:          &'a str,
    pattern:         &'static str,
    width:           usize,
    height:          usize,
    depth:           BitDepth,
    row_order:       RowOrder,
    palette_entries: usize,
    file_size:       usize
}

/// Size of the output file, checked before any pixel is allocated
fn check_dimensions(width: usize, height: usize, depth: BitDepth) -> Result<usize, CliErrors> {
    encoded_size(width, height, depth).ok_or(CliErrors::ImageTooLarge {
        width,
        height,
        depth
    })
}

pub(crate) fn create_and_exec_workflow_from_cmd(cmd_opts: &CmdOptions) -> Result<(), CliErrors> {
    info!("Creating workflow from input");

    verify_output_path(&cmd_opts.output, cmd_opts.override_files)?;

    let depth = cmd_opts.encoder.depth();

    let file_size = check_dimensions(cmd_opts.width, cmd_opts.height, depth)?;
    info!("Output will be {} bytes", file_size);

    let mut rows = render(
        cmd_opts.pattern,
        cmd_opts.width,
        cmd_opts.height,
        cmd_opts.iterations
    );
    assign_indices(&mut rows, depth);

    let palette = palette_for(depth);

    let mut encoder = BmpEncoder::new(&rows, cmd_opts.encoder);
    if depth.requires_palette() {
        encoder.set_palette(&palette);
    }

    let written = write_bmp_file(&cmd_opts.output, &encoder)?;

    info!("Wrote {} bytes to {:?}", written, cmd_opts.output);

    if cmd_opts.summary {
        let output = cmd_opts.output.to_string_lossy();
        let summary = EncodeSummary {
            output: &output,
            pattern: cmd_opts.pattern.name(),
            width: cmd_opts.width,
            height: cmd_opts.height,
            depth,
            row_order: cmd_opts.encoder.row_order(),
            palette_entries: palette.len(),
            file_size: written
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}
