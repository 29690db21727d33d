//! Drawing surface abstraction and backends.

pub mod adapter;
pub mod decorations;
pub mod raster;

use std::f32::consts::PI;

/// A point in image space, pixels, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point at `radius` along `angle` from this one.
    pub fn polar(self, radius: f32, angle: f32) -> Point {
        Point {
            x: self.x + radius * angle.cos(),
            y: self.y + radius * angle.sin(),
        }
    }
}

/// Drawing capability consumed by the render adapter.
///
/// Angles are in degrees, measured from the x axis toward positive y
/// (clockwise on screen); a negative sweep runs the other way. Stroke and
/// fill color and the stroke width are fixed properties of the canvas.
pub trait Canvas {
    fn draw_line(&mut self, p1: Point, p2: Point);
    fn draw_arc(&mut self, center: Point, radius: f32, start_deg: f32, sweep_deg: f32);
    /// Full stroked circle.
    fn draw_circle(&mut self, center: Point, radius: f32);
    fn fill_pie(&mut self, center: Point, radii: (f32, f32), start_deg: f32, sweep_deg: f32);
}

/// Radian-to-degree conversion. Applied only at the canvas boundary; all
/// internal geometry stays in radians.
pub fn to_degrees(rad: f32) -> f32 {
    rad * 180.0 / PI
}
