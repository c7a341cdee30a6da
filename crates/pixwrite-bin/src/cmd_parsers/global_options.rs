/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::ArgMatches;
use log::{info, Level, SetLoggerError};
use pixwrite_core::bit_depth::BitDepth;
use pixwrite_core::options::{EncoderOptions, RowOrder};

use crate::cmd_args::{DepthArg, Pattern};

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub output:         PathBuf,
    pub width:          usize,
    pub height:         usize,
    pub pattern:        Pattern,
    pub iterations:     u32,
    pub encoder:        EncoderOptions,
    pub summary:        bool,
    pub override_files: bool
}

/// Collect the parsed arguments.
///
/// Every argument read here is either required or has a default value,
/// so clap has already rejected invocations where one is absent.
pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let depth = options
        .get_one::<DepthArg>("depth")
        .map_or(BitDepth::Rgb565, |depth| depth.0);

    let mut encoder = EncoderOptions::new(depth);

    if options.get_flag("bottom-up") {
        info!("Storing rows bottom up");
        encoder = encoder.set_row_order(RowOrder::BottomUp);
    }
    let cmd_options = CmdOptions {
        output: options.get_one::<PathBuf>("out").cloned().unwrap_or_default(),
        width: options.get_one::<usize>("width").copied().unwrap_or(128),
        height: options.get_one::<usize>("height").copied().unwrap_or(128),
        pattern: options
            .get_one::<Pattern>("pattern")
            .copied()
            .unwrap_or(Pattern::Gradient),
        iterations: options.get_one::<u32>("iterations").copied().unwrap_or(64),
        encoder,
        summary: options.get_flag("summary"),
        override_files: options.get_flag("all-yes")
    };
    if cmd_options.override_files {
        info!("Setting all commands to yes");
    }
    info!("Encoding at {}", depth);

    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) -> Result<(), SetLoggerError> {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    simple_logger::init_with_level(log_level)?;

    info!("Initialized logger");
    info!("Log level :{}", log_level);

    Ok(())
}
