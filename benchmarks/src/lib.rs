/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Width and height of the benchmark images
pub const BENCH_DIMENSIONS: usize = 1024;
