/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Encoder options
//!
//! To remove the annoyance of reaching into the encoder, everything
//! that influences the output layout lives in [`EncoderOptions`]

use crate::bit_depth::BitDepth;

/// Order in which the rows of the pixel buffer are stored
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum RowOrder {
    /// Row 0 of the buffer is the first scanline in the file.
    ///
    /// With a positive height most viewers treat the first scanline as
    /// the bottom of the image, so the picture shows upside down.
    #[default]
    FirstRowFirst,
    /// The last row of the buffer is the first scanline in the file,
    /// the usual bottom-up convention
    BottomUp
}

/// Options shared by the pixwrite encoders
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct EncoderOptions {
    depth:     BitDepth,
    row_order: RowOrder
}

impl EncoderOptions {
    /// Create options for encoding at `depth`
    pub const fn new(depth: BitDepth) -> EncoderOptions {
        EncoderOptions {
            depth,
            row_order: RowOrder::FirstRowFirst
        }
    }
    /// Get the depth for which the image will be encoded in
    pub const fn depth(&self) -> BitDepth {
        self.depth
    }
    /// Get the order in which rows will be stored
    pub const fn row_order(&self) -> RowOrder {
        self.row_order
    }
    /// Set depth for the image to be encoded
    #[must_use]
    pub const fn set_depth(mut self, depth: BitDepth) -> Self {
        self.depth = depth;
        self
    }
    /// Set the order in which rows are stored
    #[must_use]
    pub const fn set_row_order(mut self, order: RowOrder) -> Self {
        self.row_order = order;
        self
    }
}
