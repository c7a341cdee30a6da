/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(feature = "serde")]

use alloc::format;

use serde::ser::*;

use crate::bit_depth::BitDepth;
use crate::options::RowOrder;

impl Serialize for BitDepth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // same text as the Display impl, e.g "24-bit rgb888"
        serializer.serialize_str(&format!("{}", self))
    }
}

impl Serialize for RowOrder {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(&format!("{:?}", self))
    }
}
