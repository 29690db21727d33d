//! Digit-ring variant.
//!
//! A strict subset of the text model: every digit of a number sits on one
//! shared ring, with no word or paragraph nesting. Arc presence is keyed
//! directly on the digit value. Same chord solver as the text glyphs.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::config::RenderOptions;
use crate::geometry::{chord_a, chord_x, ArcKind};
use crate::glyph::Radii;
use crate::render::{to_degrees, Canvas, Point};

/// Ratio of a digit's inner circle to the shared ring.
pub const SMALL_CIRCLE_MULTIPLIER: f32 = 0.4;

/// Background-to-ring diameter ratio for the numeral renderer.
const BACKGROUND_RATIO: f32 = 3.7;

/// One number laid out as glyphs around a shared ring.
#[derive(Debug, Clone)]
pub struct NumeralRing {
    /// Digit values in slot order: index 0 holds position 1, the
    /// rightmost digit of the number.
    digits: Vec<u8>,
    size: f32,
    angle: f32,
}

impl NumeralRing {
    /// Lay out a digit string. Returns `None` if the input is empty or
    /// contains a non-digit.
    pub fn new(text: &str, opts: &RenderOptions) -> Option<NumeralRing> {
        if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let digits = text.chars().rev().map(|c| c as u8 - b'0').collect();
        Some(NumeralRing {
            digits,
            size: opts.size as f32,
            angle: opts.angle,
        })
    }

    pub fn background_multiplier() -> f32 {
        BACKGROUND_RATIO * SMALL_CIRCLE_MULTIPLIER
    }

    /// Side length of the (square) output image in pixels.
    pub fn image_size(&self) -> f32 {
        self.size * Self::background_multiplier()
    }

    fn ring_center(&self) -> Point {
        let c = self.image_size() / 2.0;
        Point::new(c, c)
    }

    fn increment(&self) -> f32 {
        TAU / self.digits.len() as f32
    }

    pub fn radii(&self) -> Radii {
        let outer = self.size / 2.0;
        let inner1 = SMALL_CIRCLE_MULTIPLIER * outer;
        let inner2 = inner1 * 0.7176;
        let inner3 = inner2 * 0.6066;
        Radii { outer, inner1, inner2, inner3 }
    }

    /// Bearing of a digit slot on the ring.
    fn bearing(&self, position: f32) -> f32 {
        (FRAC_PI_2 + position * self.increment() - self.angle) % TAU
    }

    fn glyph_center(&self, position: f32) -> Point {
        self.ring_center()
            .polar(self.radii().outer, self.bearing(position))
    }

    fn radius(&self, kind: ArcKind) -> f32 {
        let r = self.radii();
        match kind {
            ArcKind::Outer => r.outer,
            ArcKind::Inner1 => r.inner1,
            ArcKind::Inner2 => r.inner2,
            ArcKind::Inner3 => r.inner3,
        }
    }

    /// Half the subtended chord angle. Digit circles always sit centered
    /// on the ring, so the center distance equals the ring radius.
    fn arc_angle(&self, kind: ArcKind) -> f32 {
        let r = self.radii();
        let d = r.outer;
        let local_r = if kind == ArcKind::Outer { r.inner1 } else { self.radius(kind) };
        let x = chord_x(d, local_r, r.outer);
        let a = chord_a(d, local_r, r.outer);
        match kind {
            ArcKind::Outer => (x * 2.0 / a).atan(),
            _ => (-(d - x) * 2.0 / a).atan(),
        }
    }

    fn start_angle(&self, digit: u8, kind: ArcKind, position: f32) -> f32 {
        let angle = self.arc_angle(kind);
        let base = match kind {
            ArcKind::Outer => {
                if (2..=4).contains(&digit) {
                    angle
                } else {
                    PI - angle
                }
            }
            ArcKind::Inner1 => match digit {
                0 => PI / 3.0,
                1 => 5.0 * PI / 3.0,
                _ => angle,
            },
            _ => angle,
        };
        (base + position * self.increment() - self.angle) % TAU
    }

    fn sweep(&self, digit: u8, kind: ArcKind) -> f32 {
        let angle = self.arc_angle(kind);
        let count = self.digits.len() as f32;
        match kind {
            ArcKind::Outer => {
                if (2..=4).contains(&digit) {
                    -2.0 * angle - PI + (count - 1.0) * self.increment()
                } else {
                    -TAU + (count - 1.0) * self.increment()
                }
            }
            _ => match digit {
                0 | 1 => 0.001,
                2..=4 => TAU,
                5..=7 => -(PI + 2.0 * angle),
                _ => -2.0 * angle + PI,
            },
        }
    }

    /// Draw the whole ring.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for (i, &digit) in self.digits.iter().enumerate() {
            self.draw_digit(canvas, digit, (i + 1) as f32);
        }
    }

    fn draw_digit(&self, canvas: &mut dyn Canvas, digit: u8, position: f32) {
        let r = self.radii();
        let center = self.glyph_center(position);

        canvas.draw_arc(
            self.ring_center(),
            r.outer,
            to_degrees(self.start_angle(digit, ArcKind::Outer, position)),
            to_degrees(self.sweep(digit, ArcKind::Outer)),
        );

        if digit < 2 {
            // The general arc formula is singular as the sweep collapses;
            // zero and one draw a straight radial line instead.
            let line_angle = self.start_angle(digit, ArcKind::Inner1, position);
            canvas.draw_line(center, center.polar(r.inner1, line_angle));
        } else {
            canvas.draw_arc(
                center,
                r.inner1,
                to_degrees(self.start_angle(digit, ArcKind::Inner1, position)),
                to_degrees(self.sweep(digit, ArcKind::Inner1)),
            );
        }

        if matches!(digit, 3 | 4 | 6 | 7 | 9) {
            canvas.draw_arc(
                center,
                r.inner2,
                to_degrees(self.start_angle(digit, ArcKind::Inner2, position)),
                to_degrees(self.sweep(digit, ArcKind::Inner2)),
            );
        }
        if matches!(digit, 4 | 7) {
            canvas.draw_arc(
                center,
                r.inner3,
                to_degrees(self.start_angle(digit, ArcKind::Inner3, position)),
                to_degrees(self.sweep(digit, ArcKind::Inner3)),
            );
        }
    }
}
