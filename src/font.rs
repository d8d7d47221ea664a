//! Built-in 5x7 pixel font for stamp captions.
//!
//! Glyphs are 5 columns by 7 rows, stored as one row bitmask per row with
//! bit 4 as the leftmost column. Drawing scales each font unit to
//! `size / 7` pixels with nearest-neighbor cells, so captions keep crisp
//! pixel edges at any size. Lowercase folds to uppercase; characters
//! without a glyph draw as a hollow box.

use image::{Rgba, RgbaImage};

/// Glyph cell width in font units.
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph cell height in font units; a glyph spans the full cell, so this is
/// also the cap height.
pub const GLYPH_HEIGHT: u32 = 7;
/// Blank columns between glyphs, in font units.
const GLYPH_SPACING: u32 = 1;

/// Width in pixels of `text` drawn at `size`.
///
/// The advance per character is `GLYPH_WIDTH + GLYPH_SPACING` font units;
/// the trailing spacing is not counted. Empty text measures zero.
///
/// # Examples
///
/// ```
/// use stampgen::font::measure_text;
///
/// assert_eq!(measure_text("", 7), 0.0);
/// assert_eq!(measure_text("A", 7), 5.0);
/// assert_eq!(measure_text("HI", 7), 11.0);
/// assert_eq!(measure_text("HI", 14), 22.0);
/// ```
pub fn measure_text(text: &str, size: u32) -> f64 {
    let count = text.chars().count() as u32;
    if count == 0 {
        return 0.0;
    }
    let units = count * (GLYPH_WIDTH + GLYPH_SPACING) - GLYPH_SPACING;
    units as f64 * scale(size)
}

/// Draw `text` with its left edge at `x` and its baseline at `baseline`.
///
/// Glyphs extend `size` pixels above the baseline (the full cell height).
/// Fractional positions are fine; cell edges are rounded from cumulative
/// coordinates so scaled glyphs tile without seams. Pixels outside the
/// image clip silently.
pub fn draw_text(
    image: &mut RgbaImage,
    text: &str,
    x: f64,
    baseline: f64,
    size: u32,
    color: Rgba<u8>,
) {
    let scale = scale(size);
    let top = baseline - size as f64;
    let mut pen_x = x;

    for ch in text.chars() {
        let rows = glyph(ch);
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (0x10 >> col) == 0 {
                    continue;
                }
                let x0 = (pen_x + col as f64 * scale).round() as i64;
                let x1 = (pen_x + (col + 1) as f64 * scale).round() as i64;
                let y0 = (top + row as f64 * scale).round() as i64;
                let y1 = (top + (row + 1) as f64 * scale).round() as i64;
                fill_cell(image, x0, y0, x1, y1, color);
            }
        }
        pen_x += (GLYPH_WIDTH + GLYPH_SPACING) as f64 * scale;
    }
}

/// Pixels per font unit at the given caption size.
fn scale(size: u32) -> f64 {
    size as f64 / GLYPH_HEIGHT as f64
}

fn fill_cell(image: &mut RgbaImage, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgba<u8>) {
    let (iw, ih) = image.dimensions();
    for py in y0.max(0)..y1.min(ih as i64) {
        for px in x0.max(0)..x1.min(iw as i64) {
            image.put_pixel(px as u32, py as u32, color);
        }
    }
}

/// Row bitmasks for a character, top row first.
fn glyph(ch: char) -> [u8; 7] {
    match ch.to_ascii_uppercase() {
        ' ' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x10, 0x13, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x01, 0x01, 0x01, 0x01, 0x01, 0x11, 0x0E],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '?' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '+' => [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '\'' => [0x04, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00],
        '(' => [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02],
        ')' => [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08],
        '/' => [0x01, 0x01, 0x02, 0x04, 0x08, 0x10, 0x10],
        '#' => [0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A],
        // Hollow box for anything we have no glyph for
        _ => [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F],
    }
}
