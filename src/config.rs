//! Render parameter snapshot.
//!
//! All knobs that shape a render live in one immutable value that is passed
//! by reference through layout and geometry. Two renders with the same
//! options and input produce identical images; renders with different
//! options can run concurrently because nothing here is shared or mutable.

use std::f32::consts::FRAC_PI_2;

/// Root scale factor for nested circles.
pub const SCALE_FACTOR: f32 = 0.4;

/// Background-to-glyph diameter ratio for the text renderer.
const BACKGROUND_RATIO: f32 = 4.2;

/// Straight (non-premultiplied) RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Rgba = Rgba { r: 255, g: 255, b: 255, a: 255 };
}

/// Parameters for one render. Construct with `Default::default()` and
/// override fields, or feed raw CLI strings through the `set_*` methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Diameter of the largest glyph circle in pixels.
    pub size: u32,
    /// Rotation of the entire image in radians.
    pub angle: f32,
    /// Stroke width in pixels.
    pub thickness: f32,
    /// Stroke and fill color.
    pub color: Rgba,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: 512,
            angle: 0.0,
            thickness: 2.0,
            color: Rgba::BLACK,
        }
    }
}

impl RenderOptions {
    /// Effective rotation of the root node. The glyph wheel reads from the
    /// top of the circle, a quarter turn past the x axis.
    pub fn root_angle(&self) -> f32 {
        self.angle + FRAC_PI_2
    }

    /// Ratio of image side length to base diameter.
    pub fn background_multiplier() -> f32 {
        BACKGROUND_RATIO * SCALE_FACTOR
    }

    /// Side length of the (square) output image in pixels.
    pub fn image_size(&self) -> f32 {
        self.size as f32 * Self::background_multiplier()
    }

    /// Coordinate of the image center on either axis.
    pub fn center(&self) -> f32 {
        self.image_size() / 2.0
    }

    /// Set the base diameter from a raw string. A value that does not parse
    /// leaves the field unchanged; bad fields never block the others.
    pub fn set_size(&mut self, raw: &str) {
        match raw.trim().parse::<u32>() {
            Ok(px) if px > 0 => self.size = px,
            _ => log::warn!("ignoring size {:?}: not a positive integer", raw),
        }
    }

    /// Set the stroke width from a raw string, keeping the old value on a
    /// parse failure.
    pub fn set_thickness(&mut self, raw: &str) {
        match raw.trim().parse::<f32>() {
            Ok(px) if px.is_finite() && px > 0.0 => self.thickness = px,
            _ => log::warn!("ignoring width {:?}: not a positive number", raw),
        }
    }

    /// Set the global rotation (radians) from a raw string, keeping the old
    /// value on a parse failure.
    pub fn set_angle(&mut self, raw: &str) {
        match raw.trim().parse::<f32>() {
            Ok(rad) if rad.is_finite() => self.angle = rad,
            _ => log::warn!("ignoring angle {:?}: not a number", raw),
        }
    }

    /// Set the stroke color from an `R,G,B[,A]` string, keeping the old
    /// value if any component fails to parse.
    pub fn set_color(&mut self, raw: &str) {
        let parts: Vec<_> = raw.split(',').map(|p| p.trim().parse::<u8>()).collect();
        match parts.as_slice() {
            [Ok(r), Ok(g), Ok(b)] => {
                self.color = Rgba { r: *r, g: *g, b: *b, a: self.color.a };
            }
            [Ok(r), Ok(g), Ok(b), Ok(a)] => {
                self.color = Rgba { r: *r, g: *g, b: *b, a: *a };
            }
            _ => log::warn!("ignoring color {:?}: expected R,G,B[,A] bytes", raw),
        }
    }
}
