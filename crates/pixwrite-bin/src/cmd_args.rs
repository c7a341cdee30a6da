/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::{value_parser, Arg, ArgAction, Command, ValueEnum};
use pixwrite_core::bit_depth::BitDepth;

/// Synthetic images the driver can render
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Pattern {
    Gradient,
    Mandelbrot,
    Checkerboard
}

impl Pattern {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gradient => "gradient",
            Self::Mandelbrot => "mandelbrot",
            Self::Checkerboard => "checkerboard"
        }
    }
}

impl ValueEnum for Pattern {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Gradient, Self::Mandelbrot, Self::Checkerboard]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.name()))
    }
}

/// Bit depth as accepted on the command line, e.g `--depth 24`
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DepthArg(pub BitDepth);

impl ValueEnum for DepthArg {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self(BitDepth::Monochrome),
            Self(BitDepth::Palette4),
            Self(BitDepth::Palette8),
            Self(BitDepth::Rgb565),
            Self(BitDepth::Rgb888),
            Self(BitDepth::Rgba8888)
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self.0 {
            BitDepth::Monochrome => PossibleValue::new("1").help("monochrome, 2 color palette"),
            BitDepth::Palette4 => PossibleValue::new("4").help("16 color palette"),
            BitDepth::Palette8 => PossibleValue::new("8").help("256 color palette"),
            BitDepth::Rgb565 => PossibleValue::new("16").help("RGB565"),
            BitDepth::Rgb888 => PossibleValue::new("24").help("RGB888"),
            BitDepth::Rgba8888 => PossibleValue::new("32").help("RGBA8888")
        })
    }
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("pixwrite")
        .about("Render a test pattern and write it as an uncompressed BMP")
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output file to write the bitmap to")
            .value_parser(value_parser!(std::path::PathBuf))
            .required(true))
        .arg(Arg::new("width")
            .long("width")
            .help("Image width in pixels")
            .value_parser(value_parser!(usize))
            .default_value("128"))
        .arg(Arg::new("height")
            .long("height")
            .help("Image height in pixels")
            .value_parser(value_parser!(usize))
            .default_value("128"))
        .arg(Arg::new("depth")
            .long("depth")
            .help("Bits per pixel of the output")
            .value_parser(value_parser!(DepthArg))
            .default_value("16"))
        .arg(Arg::new("pattern")
            .long("pattern")
            .help("Image to render")
            .value_parser(value_parser!(Pattern))
            .default_value("gradient"))
        .arg(Arg::new("iterations")
            .long("iterations")
            .help_heading("PATTERNS")
            .help("Escape iterations for the mandelbrot pattern")
            .value_parser(value_parser!(u32).range(1..))
            .default_value("64"))
        .arg(Arg::new("bottom-up")
            .long("bottom-up")
            .action(ArgAction::SetTrue)
            .help("Store the last row first, as most viewers expect")
            .long_help("Store the last row first, as most viewers expect.\nBy default row 0 is stored first, which viewers show upside down."))
        .arg(Arg::new("summary")
            .long("summary")
            .action(ArgAction::SetTrue)
            .help("Print a JSON summary of the written file to stdout"))
        .arg(Arg::new("all-yes")
            .short('y')
            .long("yes")
            .action(ArgAction::SetTrue)
            .help("Overwrite the output file if it exists"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the encoding options"))
}
