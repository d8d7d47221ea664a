//! Scanline rasterization of filled shapes onto RGBA buffers.
//!
//! Geometry is computed in f64 and filled one scanline at a time; pixels are
//! sampled at their centers, so non-integer radii and aspect-scaled vertices
//! land without distortion. All fills clip to the image bounds.

use image::{Rgba, RgbaImage};

/// Fill the axis-aligned rectangle `[x, x+w) x [y, y+h)`, clipped to the
/// image.
///
/// # Examples
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use stampgen::shapes::fill_rect;
///
/// let mut image = RgbaImage::new(4, 4);
/// fill_rect(&mut image, 1, 1, 2, 2, Rgba([255, 0, 0, 255]));
/// assert_eq!(*image.get_pixel(1, 1), Rgba([255, 0, 0, 255]));
/// assert_eq!(*image.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
/// ```
pub fn fill_rect(image: &mut RgbaImage, x: i64, y: i64, w: i64, h: i64, color: Rgba<u8>) {
    if w <= 0 || h <= 0 {
        return;
    }

    let (iw, ih) = image.dimensions();
    let x_start = x.max(0);
    let y_start = y.max(0);
    let x_end = (x + w).min(iw as i64);
    let y_end = (y + h).min(ih as i64);

    for py in y_start..y_end {
        for px in x_start..x_end {
            image.put_pixel(px as u32, py as u32, color);
        }
    }
}

/// Fill an ellipse centered at `(cx, cy)` with radii `(rx, ry)`.
///
/// Each scanline solves the ellipse equation for its horizontal span; a
/// pixel is covered when its center lies inside.
pub fn fill_ellipse(image: &mut RgbaImage, cx: f64, cy: f64, rx: f64, ry: f64, color: Rgba<u8>) {
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }

    let (iw, ih) = image.dimensions();
    for py in 0..ih {
        let dy = (py as f64 + 0.5 - cy) / ry;
        let rest = 1.0 - dy * dy;
        if rest < 0.0 {
            continue;
        }
        let half = rx * rest.sqrt();
        fill_span(image, cx - half, cx + half, py, iw, color);
    }
}

/// Fill a polygon using scanline even-odd filling.
///
/// Vertices are in order (closed implicitly); fewer than 3 vertices fill
/// nothing. Each scanline collects edge crossings at the pixel-center height,
/// sorts them, and fills between pairs.
///
/// # Examples
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use stampgen::shapes::fill_polygon;
///
/// let mut image = RgbaImage::new(8, 8);
/// let triangle = [(0.0, 0.0), (8.0, 0.0), (4.0, 8.0)];
/// fill_polygon(&mut image, &triangle, Rgba([0, 0, 255, 255]));
/// assert_eq!(*image.get_pixel(4, 4), Rgba([0, 0, 255, 255]));
/// assert_eq!(*image.get_pixel(0, 7), Rgba([0, 0, 0, 0]));
/// ```
pub fn fill_polygon(image: &mut RgbaImage, vertices: &[(f64, f64)], color: Rgba<u8>) {
    if vertices.len() < 3 {
        return;
    }

    let (iw, ih) = image.dimensions();

    // Rows the polygon can touch, clipped to the image
    let min_y = vertices.iter().map(|v| v.1).fold(f64::INFINITY, f64::min);
    let max_y = vertices.iter().map(|v| v.1).fold(f64::NEG_INFINITY, f64::max);
    let y_start = (min_y.floor().max(0.0)) as u32;
    let y_end = (max_y.ceil().min(ih as f64)) as u32;

    let mut crossings: Vec<f64> = Vec::with_capacity(vertices.len());
    for py in y_start..y_end.min(ih) {
        let sample = py as f64 + 0.5;
        crossings.clear();

        for i in 0..vertices.len() {
            let (x1, y1) = vertices[i];
            let (x2, y2) = vertices[(i + 1) % vertices.len()];

            // Half-open crossing test; horizontal edges never cross and
            // shared vertices count once
            if (y1 <= sample) != (y2 <= sample) {
                let t = (sample - y1) / (y2 - y1);
                crossings.push(x1 + t * (x2 - x1));
            }
        }

        crossings.sort_by(|a, b| a.total_cmp(b));

        for pair in crossings.chunks(2) {
            if let [left, right] = pair {
                fill_span(image, *left, *right, py, iw, color);
            }
        }
    }
}

/// Fill the pixels of row `py` whose centers lie in `[left, right]`.
fn fill_span(image: &mut RgbaImage, left: f64, right: f64, py: u32, width: u32, color: Rgba<u8>) {
    // Pixel x is covered when x + 0.5 is inside the span
    let x_start = (left - 0.5).ceil().max(0.0) as i64;
    let x_end = (right - 0.5).floor().min(width as f64 - 1.0) as i64;
    for px in x_start..=x_end {
        if px >= 0 {
            image.put_pixel(px as u32, py, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLANK: Rgba<u8> = Rgba([0, 0, 0, 0]);

    fn count_filled(image: &RgbaImage) -> usize {
        image.pixels().filter(|p| **p == INK).count()
    }

    #[test]
    fn test_fill_rect_exact() {
        let mut image = RgbaImage::new(5, 4);
        fill_rect(&mut image, 1, 1, 3, 2, INK);
        assert_eq!(count_filled(&image), 6);
        assert_eq!(*image.get_pixel(1, 1), INK);
        assert_eq!(*image.get_pixel(3, 2), INK);
        assert_eq!(*image.get_pixel(0, 0), BLANK);
        assert_eq!(*image.get_pixel(4, 3), BLANK);
    }

    #[test]
    fn test_fill_rect_clips_to_image() {
        let mut image = RgbaImage::new(4, 4);
        fill_rect(&mut image, -2, -2, 100, 100, INK);
        assert_eq!(count_filled(&image), 16);
    }

    #[test]
    fn test_fill_rect_zero_size() {
        let mut image = RgbaImage::new(4, 4);
        fill_rect(&mut image, 0, 0, 0, 4, INK);
        fill_rect(&mut image, 0, 0, 4, 0, INK);
        fill_rect(&mut image, 0, 0, -1, -1, INK);
        assert_eq!(count_filled(&image), 0);
    }

    #[test]
    fn test_fill_ellipse_covers_center_not_corners() {
        let mut image = RgbaImage::new(20, 20);
        fill_ellipse(&mut image, 10.0, 10.0, 10.0, 10.0, INK);
        assert_eq!(*image.get_pixel(10, 10), INK);
        assert_eq!(*image.get_pixel(0, 10), INK);
        assert_eq!(*image.get_pixel(10, 0), INK);
        assert_eq!(*image.get_pixel(0, 0), BLANK);
        assert_eq!(*image.get_pixel(19, 19), BLANK);
    }

    #[test]
    fn test_fill_ellipse_full_surface() {
        // The stamp circle: radii of exactly half the surface
        let mut image = RgbaImage::new(30, 20);
        fill_ellipse(&mut image, 15.0, 10.0, 15.0, 10.0, INK);
        // Midpoints of each edge are covered, corners are not
        assert_eq!(*image.get_pixel(0, 10), INK);
        assert_eq!(*image.get_pixel(29, 10), INK);
        assert_eq!(*image.get_pixel(15, 0), INK);
        assert_eq!(*image.get_pixel(15, 19), INK);
        assert_eq!(*image.get_pixel(0, 0), BLANK);
        assert_eq!(*image.get_pixel(29, 19), BLANK);
    }

    #[test]
    fn test_fill_ellipse_zero_radius() {
        let mut image = RgbaImage::new(4, 4);
        fill_ellipse(&mut image, 2.0, 2.0, 0.0, 2.0, INK);
        fill_ellipse(&mut image, 2.0, 2.0, 2.0, 0.0, INK);
        assert_eq!(count_filled(&image), 0);
    }

    #[test]
    fn test_fill_polygon_triangle() {
        let mut image = RgbaImage::new(8, 8);
        fill_polygon(&mut image, &[(0.0, 0.0), (8.0, 0.0), (4.0, 8.0)], INK);
        assert_eq!(*image.get_pixel(4, 1), INK);
        assert_eq!(*image.get_pixel(4, 6), INK);
        assert_eq!(*image.get_pixel(0, 7), BLANK);
        assert_eq!(*image.get_pixel(7, 7), BLANK);
    }

    #[test]
    fn test_fill_polygon_square_covers_everything() {
        let mut image = RgbaImage::new(6, 6);
        fill_polygon(
            &mut image,
            &[(0.0, 0.0), (6.0, 0.0), (6.0, 6.0), (0.0, 6.0)],
            INK,
        );
        assert_eq!(count_filled(&image), 36);
    }

    #[test]
    fn test_fill_polygon_too_few_vertices() {
        let mut image = RgbaImage::new(4, 4);
        fill_polygon(&mut image, &[(0.0, 0.0), (4.0, 4.0)], INK);
        assert_eq!(count_filled(&image), 0);
    }

    #[test]
    fn test_fill_polygon_clips_to_image() {
        let mut image = RgbaImage::new(4, 4);
        fill_polygon(
            &mut image,
            &[(-10.0, -10.0), (20.0, -10.0), (20.0, 20.0), (-10.0, 20.0)],
            INK,
        );
        assert_eq!(count_filled(&image), 16);
    }

    #[test]
    fn test_fill_polygon_concave() {
        // A "V" shape: the notch between the arms stays empty
        let mut image = RgbaImage::new(10, 10);
        fill_polygon(
            &mut image,
            &[(0.0, 0.0), (4.0, 8.0), (5.0, 4.0), (6.0, 8.0), (10.0, 0.0)],
            INK,
        );
        assert_eq!(*image.get_pixel(1, 1), INK);
        assert_eq!(*image.get_pixel(8, 1), INK);
        // Below the notch vertex, between the arms
        assert_eq!(*image.get_pixel(5, 6), BLANK);
        assert_eq!(*image.get_pixel(5, 9), BLANK);
    }
}
