//! Software raster canvas.
//!
//! Primitives are evaluated as 2-D signed distance fields: for each pixel
//! inside a primitive's bounding box we compute the distance to the stroke
//! (or fill) and turn it into coverage with a one-pixel ramp. Rows are
//! rasterized in parallel; each row owns a disjoint slice of the buffer,
//! so the result is deterministic regardless of scheduling.

use image::RgbaImage;
use rayon::prelude::*;

use crate::config::Rgba;
use crate::render::{Canvas, Point};

/// CPU canvas over an RGBA pixel buffer.
pub struct RasterCanvas {
    image: RgbaImage,
    side: u32,
    stroke: Rgba,
    half_width: f32,
}

impl RasterCanvas {
    /// Square canvas of `side × side` pixels filled with `background`.
    pub fn new(side: u32, stroke: Rgba, thickness: f32, background: Rgba) -> Self {
        let image = RgbaImage::from_pixel(
            side.max(1),
            side.max(1),
            image::Rgba([background.r, background.g, background.b, background.a]),
        );
        Self {
            image,
            side: side.max(1),
            stroke,
            half_width: thickness / 2.0,
        }
    }

    /// Finish drawing and hand back the pixel buffer.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Rasterize one primitive: `distance` maps a pixel center to signed
    /// distance from the shape edge (negative inside for fills, distance
    /// from the spine for strokes minus the half width handled by the
    /// caller). Coverage ramps over one pixel around zero.
    fn composite<D>(&mut self, min: Point, max: Point, distance: D)
    where
        D: Fn(f32, f32) -> f32 + Sync,
    {
        let side = self.side as i64;
        let x0 = (min.x.floor() as i64 - 1).clamp(0, side) as usize;
        let x1 = (max.x.ceil() as i64 + 2).clamp(0, side) as usize;
        let y0 = (min.y.floor() as i64 - 1).clamp(0, side) as usize;
        let y1 = (max.y.ceil() as i64 + 2).clamp(0, side) as usize;
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let stride = self.side as usize * 4;
        let stroke = self.stroke;
        let samples: &mut [u8] = &mut self.image;
        let buf = &mut samples[y0 * stride..y1 * stride];

        // Parallel row rendering; rows are independent slices.
        buf.par_chunks_exact_mut(stride)
            .enumerate()
            .for_each(|(row, row_buf)| {
                let py = (y0 + row) as f32 + 0.5;
                for px in x0..x1 {
                    let d = distance(px as f32 + 0.5, py);
                    let coverage = (0.5 - d).clamp(0.0, 1.0);
                    if !(coverage > 0.0) {
                        continue;
                    }
                    blend(&mut row_buf[px * 4..px * 4 + 4], stroke, coverage);
                }
            });
    }
}

/// Source-over blend of `color` scaled by `coverage` onto one pixel.
fn blend(dst: &mut [u8], color: Rgba, coverage: f32) {
    let alpha = coverage * color.a as f32 / 255.0;
    if alpha <= 0.0 {
        return;
    }
    let inv = 1.0 - alpha;
    dst[0] = (color.r as f32 * alpha + dst[0] as f32 * inv) as u8;
    dst[1] = (color.g as f32 * alpha + dst[1] as f32 * inv) as u8;
    dst[2] = (color.b as f32 * alpha + dst[2] as f32 * inv) as u8;
    dst[3] = (255.0 * alpha + dst[3] as f32 * inv) as u8;
}

/// Distance from a point to a segment.
fn segment_distance(px: f32, py: f32, a: Point, b: Point) -> f32 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let apx = px - a.x;
    let apy = py - a.y;
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq > 0.0 {
        ((apx * abx + apy * aby) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let dx = apx - t * abx;
    let dy = apy - t * aby;
    (dx * dx + dy * dy).sqrt()
}

/// Whether `deg` lies inside the arc sector `[start, start + sweep]`,
/// either sweep direction, everything taken mod 360.
fn in_sector(deg: f32, start_deg: f32, sweep_deg: f32) -> bool {
    if sweep_deg.abs() >= 360.0 {
        return true;
    }
    let from = if sweep_deg >= 0.0 { start_deg } else { start_deg + sweep_deg };
    let rel = (deg - from).rem_euclid(360.0);
    rel <= sweep_deg.abs()
}

impl Canvas for RasterCanvas {
    fn draw_line(&mut self, p1: Point, p2: Point) {
        let hw = self.half_width;
        let min = Point::new(p1.x.min(p2.x) - hw, p1.y.min(p2.y) - hw);
        let max = Point::new(p1.x.max(p2.x) + hw, p1.y.max(p2.y) + hw);
        self.composite(min, max, move |x, y| segment_distance(x, y, p1, p2) - hw);
    }

    fn draw_arc(&mut self, center: Point, radius: f32, start_deg: f32, sweep_deg: f32) {
        if !radius.is_finite() || radius <= 0.0 {
            return;
        }
        let hw = self.half_width;
        let reach = radius + hw;
        let min = Point::new(center.x - reach, center.y - reach);
        let max = Point::new(center.x + reach, center.y + reach);
        let start = start_deg.rem_euclid(360.0);
        let end_rad = (start_deg + sweep_deg).to_radians();
        let start_rad = start_deg.to_radians();
        let cap_a = center.polar(radius, start_rad);
        let cap_b = center.polar(radius, end_rad);
        self.composite(min, max, move |x, y| {
            let dx = x - center.x;
            let dy = y - center.y;
            let deg = dy.atan2(dx).to_degrees().rem_euclid(360.0);
            if in_sector(deg, start, sweep_deg) {
                ((dx * dx + dy * dy).sqrt() - radius).abs() - hw
            } else {
                // Round caps close the gap where chained arcs meet.
                let da = ((x - cap_a.x).powi(2) + (y - cap_a.y).powi(2)).sqrt();
                let db = ((x - cap_b.x).powi(2) + (y - cap_b.y).powi(2)).sqrt();
                da.min(db) - hw
            }
        });
    }

    fn draw_circle(&mut self, center: Point, radius: f32) {
        if !radius.is_finite() || radius <= 0.0 {
            return;
        }
        let hw = self.half_width;
        let reach = radius + hw;
        let min = Point::new(center.x - reach, center.y - reach);
        let max = Point::new(center.x + reach, center.y + reach);
        self.composite(min, max, move |x, y| {
            let dx = x - center.x;
            let dy = y - center.y;
            ((dx * dx + dy * dy).sqrt() - radius).abs() - hw
        });
    }

    fn fill_pie(&mut self, center: Point, radii: (f32, f32), start_deg: f32, sweep_deg: f32) {
        let (rx, ry) = radii;
        if !(rx.is_finite() && ry.is_finite()) || rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let min = Point::new(center.x - rx, center.y - ry);
        let max = Point::new(center.x + rx, center.y + ry);
        let scale = rx.min(ry);
        self.composite(min, max, move |x, y| {
            let dx = x - center.x;
            let dy = y - center.y;
            let deg = dy.atan2(dx).to_degrees().rem_euclid(360.0);
            if !in_sector(deg, start_deg.rem_euclid(360.0), sweep_deg) {
                return f32::MAX;
            }
            // Scaled-space distance; exact for circles, which is all the
            // glyph marks ever use.
            let norm = ((dx / rx).powi(2) + (dy / ry).powi(2)).sqrt();
            (norm - 1.0) * scale
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> RasterCanvas {
        RasterCanvas::new(64, Rgba::BLACK, 2.0, Rgba::WHITE)
    }

    fn dark_count(img: &RgbaImage) -> usize {
        img.pixels().filter(|p| p.0[0] < 128).count()
    }

    #[test]
    fn starts_blank() {
        let img = canvas().into_image();
        assert_eq!(dark_count(&img), 0);
        assert_eq!(img.dimensions(), (64, 64));
    }

    #[test]
    fn line_marks_pixels() {
        let mut c = canvas();
        c.draw_line(Point::new(8.0, 32.0), Point::new(56.0, 32.0));
        let img = c.into_image();
        assert!(dark_count(&img) > 40);
        // The line's own row is dark, far rows are untouched.
        assert!(img.get_pixel(32, 32).0[0] < 128);
        assert_eq!(img.get_pixel(32, 8).0[0], 255);
    }

    #[test]
    fn circle_is_hollow() {
        let mut c = canvas();
        c.draw_circle(Point::new(32.0, 32.0), 20.0);
        let img = c.into_image();
        assert!(img.get_pixel(52, 32).0[0] < 128); // on the ring
        assert_eq!(img.get_pixel(32, 32).0[0], 255); // center untouched
    }

    #[test]
    fn pie_is_filled() {
        let mut c = canvas();
        c.fill_pie(Point::new(32.0, 32.0), (10.0, 10.0), 0.0, 360.0);
        let img = c.into_image();
        assert!(img.get_pixel(32, 32).0[0] < 128);
        assert!(img.get_pixel(36, 32).0[0] < 128);
        assert_eq!(img.get_pixel(50, 32).0[0], 255);
    }

    #[test]
    fn negative_sweep_covers_other_side() {
        let mut c = canvas();
        // Quarter arc from 0° sweeping −90°: passes through 315°, not 45°.
        c.draw_arc(Point::new(32.0, 32.0), 20.0, 0.0, -90.0);
        let img = c.into_image();
        let up = Point::new(32.0 + 20.0 * 0.7071, 32.0 - 20.0 * 0.7071);
        let down = Point::new(32.0 + 20.0 * 0.7071, 32.0 + 20.0 * 0.7071);
        assert!(img.get_pixel(up.x as u32, up.y as u32).0[0] < 128);
        assert_eq!(img.get_pixel(down.x as u32, down.y as u32).0[0], 255);
    }

    #[test]
    fn sector_membership() {
        assert!(in_sector(10.0, 0.0, 90.0));
        assert!(!in_sector(100.0, 0.0, 90.0));
        assert!(in_sector(350.0, 0.0, -90.0));
        assert!(in_sector(5.0, 0.0, 720.0));
        assert!(in_sector(123.0, 0.0, -720.0));
    }

    #[test]
    fn degenerate_radius_is_ignored() {
        let mut c = canvas();
        c.draw_arc(Point::new(32.0, 32.0), f32::NAN, 0.0, 360.0);
        c.draw_circle(Point::new(32.0, 32.0), -5.0);
        assert_eq!(dark_count(&c.into_image()), 0);
    }
}
