//! Stamp rendering to image buffers.
//!
//! [`render_stamp`] is a stateless, total function of (inputs, index): it
//! allocates its own surface and fully determines every pixel, so identical
//! arguments produce byte-identical output and batch items can render
//! independently.

use std::f64::consts::PI;

use image::{Rgba, RgbaImage};

use crate::color::{shift_hue, Rgb};
use crate::font;
use crate::models::{Inputs, Shape};
use crate::shapes;

/// Checkerboard tile colors, the transparent-background placeholder.
const CHECKER_DARK: Rgba<u8> = Rgba([0x77, 0x77, 0x77, 255]);
const CHECKER_LIGHT: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 255]);
/// Checkerboard tile edge in pixels.
const CHECKER_TILE: u32 = 10;

/// Wrap a batch index into `0..length`.
///
/// A zero batch length is treated as one so the wrap is always defined.
pub fn wrap_index(index: u32, length: u32) -> u32 {
    index % length.max(1)
}

/// Hue-rotation angle in degrees for the item at `index` in a batch of
/// `length`: the index's position in the batch, mapped onto the color wheel
/// and floored to a whole degree.
///
/// # Examples
///
/// ```
/// use stampgen::renderer::hue_angle;
///
/// assert_eq!(hue_angle(0, 10), 0.0);
/// assert_eq!(hue_angle(1, 2), 180.0);
/// assert_eq!(hue_angle(1, 3), 120.0);
/// assert_eq!(hue_angle(2, 3), 240.0);
/// ```
pub fn hue_angle(index: u32, length: u32) -> f32 {
    // f64: f32 division lands some exact multiples just below the integer
    // and the floor drops a degree
    let length = length.max(1) as f64;
    ((index as f64 / length) * 360.0).floor() as f32
}

/// Select the caption line for a wrapped batch index.
///
/// The caption splits on newlines (CRLF folded to LF first) and the batch
/// cycles through the lines in order.
pub fn select_line(text: &str, index: u32) -> String {
    let normalized = text.replace("\r\n", "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();
    let count = lines.len().max(1);
    lines
        .get(index as usize % count)
        .copied()
        .unwrap_or("")
        .to_string()
}

/// Render the stamp at `index` of the batch described by `inputs`.
///
/// Paints, in order: the checkerboard placeholder, the filled background
/// shape in the (possibly hue-rotated) background color, and one caption
/// line in the (possibly hue-rotated) text color. The hue rotation angle is
/// proportional to the index's position in the batch; indices beyond the
/// batch wrap.
pub fn render_stamp(inputs: &Inputs, index: u32) -> RgbaImage {
    let mut image = RgbaImage::new(inputs.width, inputs.height);
    clear_checkerboard(&mut image);

    let index = wrap_index(index, inputs.length);
    let angle = hue_angle(index, inputs.length);

    let background = if inputs.background_color_shift_hue {
        shift_hue(inputs.background_color, angle)
    } else {
        inputs.background_color
    };
    draw_shape(&mut image, inputs.shape, background);

    let text_color = if inputs.text_color_shift_hue {
        shift_hue(inputs.text_color, angle)
    } else {
        inputs.text_color
    };
    let line = select_line(&inputs.text, index);
    let x = (inputs.width as f64 - font::measure_text(&line, inputs.text_size)) / 2.0;
    let baseline = inputs.height as f64 / 2.0 + inputs.text_size as f64 / 3.0;
    font::draw_text(
        &mut image,
        &line,
        x,
        baseline,
        inputs.text_size,
        text_color.to_rgba(),
    );

    image
}

/// Render the whole batch, indices `0..length`.
pub fn render_batch(inputs: &Inputs) -> Vec<RgbaImage> {
    (0..inputs.length).map(|i| render_stamp(inputs, i)).collect()
}

/// Paint the 10px checkerboard over the whole surface, partial edge tiles
/// included.
fn clear_checkerboard(image: &mut RgbaImage) {
    let (w, h) = image.dimensions();
    for column in 0..w.div_ceil(CHECKER_TILE) {
        for row in 0..h.div_ceil(CHECKER_TILE) {
            let color = if (column + row) % 2 == 0 {
                CHECKER_DARK
            } else {
                CHECKER_LIGHT
            };
            shapes::fill_rect(
                image,
                (column * CHECKER_TILE) as i64,
                (row * CHECKER_TILE) as i64,
                CHECKER_TILE as i64,
                CHECKER_TILE as i64,
                color,
            );
        }
    }
}

fn draw_shape(image: &mut RgbaImage, shape: Shape, color: Rgb) {
    let w = image.width() as f64;
    let h = image.height() as f64;
    let color = color.to_rgba();

    match shape {
        Shape::Circle => shapes::fill_ellipse(image, w / 2.0, h / 2.0, w / 2.0, h / 2.0, color),
        Shape::Rect => shapes::fill_rect(image, 0, 0, w as i64, h as i64, color),
        Shape::Pentagon => shapes::fill_polygon(image, &pentagon_vertices(w, h), color),
        Shape::Star => shapes::fill_polygon(image, &star_vertices(w, h), color),
    }
}

/// Scale factors for a non-square surface (shorter axis fixed at 1, longer
/// axis stretched by its ratio to the shorter) and the radius of the circle
/// inscribed in the shorter-dimension square.
fn aspect(w: f64, h: f64) -> (f64, f64, f64) {
    let x_ratio = if w > h { w / h } else { 1.0 };
    let y_ratio = if w < h { h / w } else { 1.0 };
    let radius = if w > h { h } else { w } / 2.0;
    (x_ratio, y_ratio, radius)
}

/// Vertices of the regular pentagon inscribed in the shorter-dimension
/// square: first vertex at the top (-90 degrees), spaced 72 degrees apart,
/// aspect-scaled onto the full surface.
fn pentagon_vertices(w: f64, h: f64) -> Vec<(f64, f64)> {
    let (x_ratio, y_ratio, radius) = aspect(w, h);
    (0..5)
        .map(|i| {
            let theta = i as f64 * 2.0 * PI / 5.0 - PI / 2.0;
            (
                (radius + radius * theta.cos()) * x_ratio,
                (radius + radius * theta.sin()) * y_ratio,
            )
        })
        .collect()
}

/// Vertices of the 10-point star path: the pentagon's outer vertices
/// alternating with inner vertices at half the radius, each inner vertex
/// 36 degrees past its outer neighbor.
fn star_vertices(w: f64, h: f64) -> Vec<(f64, f64)> {
    let (x_ratio, y_ratio, radius) = aspect(w, h);
    let short_radius = radius / 2.0;

    let mut vertices = Vec::with_capacity(10);
    for i in 0..5 {
        let outer = i as f64 * 2.0 * PI / 5.0 - PI / 2.0;
        let inner = outer + PI / 5.0;
        vertices.push((
            (radius + radius * outer.cos()) * x_ratio,
            (radius + radius * outer.sin()) * y_ratio,
        ));
        vertices.push((
            (radius + short_radius * inner.cos()) * x_ratio,
            (radius + short_radius * inner.sin()) * y_ratio,
        ));
    }
    vertices
}
