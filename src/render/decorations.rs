//! Inner-circle decoration marks.
//!
//! Independent of the arc solver, each phoneme class may put marks on its
//! Inner1 circle: a radial line, a dot cluster, tick lines, or one of the
//! hand-specified vowel/punctuation figures. All coordinates derive from
//! the owning character's bearing and the center-offset geometry; the
//! angle-nudge constants are part of the script.

use std::f32::consts::PI;

use crate::phoneme::{PhonemeClass, SpecialMark};
use crate::render::{Canvas, Point};

/// Everything a mark needs to place itself.
pub struct MarkContext<'a> {
    pub class: &'a PhonemeClass,
    /// Inner1 radius (already shrunk for vowels and punctuation).
    pub radius: f32,
    /// The character's bearing on its word ring.
    pub bearing: f32,
    /// Center of the character's inner circle.
    pub origin: Point,
    /// Center of the character itself (on the word ring).
    pub glyph_center: Point,
    /// Center of the owning word.
    pub ring_center: Point,
    /// Distance between ring center and inner-circle center.
    pub center_offset: f32,
    /// Resolved Inner1 start angle, bearing included (the radial-line
    /// direction for the hairline glyphs).
    pub line_angle: f32,
}

/// Draw the Inner1 marks for one character. The classes are mutually
/// exclusive; at most one branch fires.
pub fn draw_marks(canvas: &mut dyn Canvas, ctx: &MarkContext<'_>) {
    if ctx.class.radial_line {
        canvas.draw_line(
            ctx.glyph_center,
            ctx.glyph_center.polar(ctx.radius, ctx.line_angle),
        );
    } else if ctx.class.dots > 0 {
        draw_dot(canvas, ctx, ctx.bearing + PI - PI / 6.0);
        draw_dot(canvas, ctx, ctx.bearing + PI + PI / 6.0);
        if ctx.class.dots == 3 {
            draw_dot(canvas, ctx, ctx.bearing + PI);
        }
    } else if ctx.class.ticks > 0 {
        if ctx.class.ticks != 2 {
            draw_tick(canvas, ctx, ctx.bearing + PI);
        }
        if ctx.class.ticks >= 2 {
            draw_tick(canvas, ctx, ctx.bearing + PI - PI / 8.0);
            draw_tick(canvas, ctx, ctx.bearing + PI + PI / 8.0);
        }
    } else if let Some(mark) = ctx.class.special {
        draw_special(canvas, ctx, mark);
    }
}

fn draw_special(canvas: &mut dyn Canvas, ctx: &MarkContext<'_>, mark: SpecialMark) {
    let r = ctx.radius;
    let inward = ctx.bearing + PI;

    match mark {
        SpecialMark::InwardStroke => {
            canvas.draw_line(
                ctx.glyph_center.polar(2.0 * r, inward),
                ctx.glyph_center.polar(r, inward),
            );
        }
        SpecialMark::OutwardStroke => {
            canvas.draw_line(
                Point::new(
                    ctx.glyph_center.x - 2.0 * r * inward.cos(),
                    ctx.glyph_center.y - 2.0 * r * inward.sin(),
                ),
                Point::new(
                    ctx.glyph_center.x - r * inward.cos(),
                    ctx.glyph_center.y - r * inward.sin(),
                ),
            );
        }
        SpecialMark::DoubleDot => {
            for nudge in [1.05, 0.95] {
                draw_ring_dot(canvas, ctx, ctx.bearing * nudge, r * 2.0 / 3.0);
            }
        }
        SpecialMark::TripleDot => {
            for nudge in [1.0, 0.98, 1.02] {
                draw_ring_dot(canvas, ctx, ctx.bearing * nudge, r * 2.0 / 3.0);
            }
        }
        SpecialMark::PairedStrokes => {
            for nudge in [0.99, 1.01] {
                draw_ray(canvas, ctx, ctx.bearing * nudge);
            }
        }
        SpecialMark::AngledStrokes => {
            for nudge in [0.98, 1.02] {
                draw_ray(canvas, ctx, ctx.bearing * nudge);
            }
            draw_tether(canvas, ctx);
        }
        SpecialMark::Tether => draw_tether(canvas, ctx),
        SpecialMark::FilledDisc => {
            canvas.fill_pie(ctx.origin, (r, r), 0.0, 360.0);
        }
    }
}

/// One dot of a consonant cluster, corner-anchored on a 0.75-radius ring
/// like the classic rendering.
fn draw_dot(canvas: &mut dyn Canvas, ctx: &MarkContext<'_>, angle: f32) {
    let r = ctx.radius;
    let diameter = 0.25 * r;
    let corner_x = 0.75 * r * angle.cos() + ctx.origin.x - 0.15 * r;
    let corner_y = 0.75 * r * angle.sin() + ctx.origin.y - 0.15 * r;
    canvas.fill_pie(
        Point::new(corner_x + diameter / 2.0, corner_y + diameter / 2.0),
        (diameter / 2.0, diameter / 2.0),
        0.0,
        360.0,
    );
}

/// One radial tick crossing the inner circle from 0.8 to 1.2 radii.
fn draw_tick(canvas: &mut dyn Canvas, ctx: &MarkContext<'_>, angle: f32) {
    let r = ctx.radius;
    canvas.draw_line(ctx.origin.polar(1.2 * r, angle), ctx.origin.polar(0.8 * r, angle));
}

/// Filled punctuation dot, corner-anchored just inside the word ring.
fn draw_ring_dot(canvas: &mut dyn Canvas, ctx: &MarkContext<'_>, angle: f32, size: f32) {
    let corner = Point::new(
        ctx.ring_center.x + (ctx.center_offset - ctx.radius) * angle.cos() - size,
        ctx.ring_center.y + (ctx.center_offset - ctx.radius) * angle.sin() - size,
    );
    canvas.fill_pie(
        Point::new(corner.x + size / 2.0, corner.y + size / 2.0),
        (size / 2.0, size / 2.0),
        0.0,
        360.0,
    );
}

/// Near-radial stroke from the word ring outward by one mark radius.
fn draw_ray(canvas: &mut dyn Canvas, ctx: &MarkContext<'_>, angle: f32) {
    canvas.draw_line(
        ctx.ring_center.polar(ctx.center_offset, angle),
        ctx.ring_center.polar(ctx.center_offset + ctx.radius, angle),
    );
}

/// Stroke tying the word ring to the glyph center.
fn draw_tether(canvas: &mut dyn Canvas, ctx: &MarkContext<'_>) {
    canvas.draw_line(
        ctx.ring_center
            .polar(ctx.center_offset + ctx.radius, ctx.bearing),
        ctx.glyph_center,
    );
}
