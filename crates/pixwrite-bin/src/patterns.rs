/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Synthetic images fed to the encoder

use log::debug;
use pixwrite_core::bit_depth::BitDepth;
use pixwrite_core::color::Color;

use crate::cmd_args::Pattern;

const CHECKER_CELL: usize = 8;

pub fn render(pattern: Pattern, width: usize, height: usize, iterations: u32) -> Vec<Vec<Color>> {
    debug!("Rendering {}x{} {}", width, height, pattern.name());
    match pattern {
        Pattern::Gradient => gradient(width, height),
        Pattern::Mandelbrot => mandelbrot(width, height, iterations),
        Pattern::Checkerboard => checkerboard(width, height)
    }
}

/// Red grows to the right and green grows downward
pub fn gradient(width: usize, height: usize) -> Vec<Vec<Color>> {
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| Color::new(x as f32 / width as f32, y as f32 / height as f32, 0.0))
                .collect()
        })
        .collect()
}

/// The mandelbrot set over `[-2.5, 1] x [-1, 1]`, colored by escape time
pub fn mandelbrot(width: usize, height: usize, iterations: u32) -> Vec<Vec<Color>> {
    (0..height)
        .map(|y| {
            let ci = (y as f64 / height as f64) * 2.0 - 1.0;
            (0..width)
                .map(|x| {
                    let cr = (x as f64 / width as f64) * 3.5 - 2.5;
                    escape_color(escape_time(cr, ci, iterations), iterations)
                })
                .collect()
        })
        .collect()
}

fn escape_time(cr: f64, ci: f64, iterations: u32) -> u32 {
    let (mut zr, mut zi) = (0.0_f64, 0.0_f64);

    for i in 0..iterations {
        if zr * zr + zi * zi > 4.0 {
            return i;
        }
        let t = zr * zr - zi * zi + cr;
        zi = 2.0 * zr * zi + ci;
        zr = t;
    }
    iterations
}

fn escape_color(n: u32, iterations: u32) -> Color {
    if n >= iterations {
        // inside the set
        return Color::BLACK;
    }
    let t = n as f32 / iterations as f32;
    Color::new(t.sqrt(), t, 1.0 - t)
}

pub fn checkerboard(width: usize, height: usize) -> Vec<Vec<Color>> {
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    if ((x / CHECKER_CELL) + (y / CHECKER_CELL)) % 2 == 0 {
                        Color::WHITE
                    } else {
                        Color::BLACK
                    }
                })
                .collect()
        })
        .collect()
}

/// Palette used for `depth`, black and white for monochrome and a
/// gray ramp otherwise.
///
/// Empty for depths that do not need a palette
pub fn palette_for(depth: BitDepth) -> Vec<Color> {
    match depth.palette_len() {
        0 => vec![],
        2 => vec![Color::BLACK, Color::WHITE],
        len => (0..len)
            .map(|i| Color::gray(i as f32 / (len - 1) as f32))
            .collect()
    }
}

/// Assign every pixel the palette index closest to its brightness
///
/// Monochrome uses [`Color::enabled`], other palette depths use the
/// average of the channels on the gray ramp from [`palette_for`].
/// Depths without a palette leave the image untouched.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn assign_indices(rows: &mut [Vec<Color>], depth: BitDepth) {
    let len = depth.palette_len();

    if len == 0 {
        return;
    }
    let max_index = (len - 1) as f32;

    for pixel in rows.iter_mut().flatten() {
        pixel.value = if len == 2 {
            u32::from(pixel.enabled())
        } else {
            let luma = ((pixel.r + pixel.g + pixel.b) / 3.0).clamp(0.0, 1.0);
            (luma * max_index) as u32
        };
    }
}

#[cfg(test)]
mod tests {
    use pixwrite_core::bit_depth::BitDepth;
    use pixwrite_core::color::Color;

    use crate::patterns::{assign_indices, checkerboard, gradient, mandelbrot, palette_for};

    #[test]
    fn test_gradient_matches_rgb565_demo() {
        let rows = gradient(128, 128);
        assert_eq!(rows.len(), 128);
        assert!(rows.iter().all(|row| row.len() == 128));

        // red = x / width * 31 and green = y / height * 63, truncated
        let pixel = rows[64][32];
        assert_eq!(pixel.to_rgb565(), (7 << 11) | (31 << 5));
    }

    #[test]
    fn test_mandelbrot_dimensions_and_interior() {
        let rows = mandelbrot(35, 20, 32);
        assert_eq!(rows.len(), 20);
        assert!(rows.iter().all(|row| row.len() == 35));
        // x = 25 maps to cr = 0, y = 10 maps to ci = 0, the origin is in the set
        assert_eq!(rows[10][25], Color::BLACK);
        // the top left corner escapes immediately
        assert_ne!(rows[0][0], Color::BLACK);
    }

    #[test]
    fn test_palettes() {
        assert!(palette_for(BitDepth::Rgb888).is_empty());
        assert_eq!(palette_for(BitDepth::Monochrome), [Color::BLACK, Color::WHITE]);
        let palette = palette_for(BitDepth::Palette4);
        assert_eq!(palette.len(), 16);
        assert_eq!(palette[15], Color::WHITE);
        assert_eq!(palette_for(BitDepth::Palette8).len(), 256);
    }

    #[test]
    fn test_assign_indices() {
        let mut rows = checkerboard(16, 1);
        assign_indices(&mut rows, BitDepth::Monochrome);
        assert_eq!(rows[0][0].value, 1);
        assert_eq!(rows[0][8].value, 0);

        let mut rows = vec![vec![Color::WHITE, Color::BLACK, Color::gray(0.5)]];
        assign_indices(&mut rows, BitDepth::Palette8);
        let values: Vec<u32> = rows[0].iter().map(|p| p.value).collect();
        assert_eq!(values, [255, 0, 127]);
    }
}
