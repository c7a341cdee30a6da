/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by the pixwrite encoders
//!
//! It currently contains
//!
//! - A color model with on demand RGB565, RGB888 and RGBA8888 packing
//! - The closed set of supported bit depths and their scanline geometry
//! - Encoder options
//! - A byte sink trait and an endian aware writer on top of it
//! - A logging shim which forwards to the `log` crate when enabled
//!
//! This library is `#[no_std]` with the `alloc` crate needed for `Vec`
//! backed sinks.
//!
//! # Features
//!  - `std`: Allows any [`std::io::Write`] to be used as a byte sink
//!
//!  - `log`: Forward the logging macros to the `log` crate
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![macro_use]
extern crate alloc;

pub mod bit_depth;
pub mod bytestream;
pub mod color;
pub mod log;
pub mod options;
pub mod serde;
