//! Circle-intersection arc solver.
//!
//! Every glyph is built from up to four nested arcs. For each one we need
//! the radius, the start angle and the sweep. The start angle comes from
//! the chord where the glyph circle crosses the word ring: `chord_x`
//! projects the chord onto the line between the two centers, `chord_a`
//! recovers the half-chord height from four times the triangle area
//! (Heron's formula), and `atan` of their ratio gives the half-subtended
//! angle. The sweep tables are fixed per phoneme class; their literal
//! constants are part of the script and are not re-derived here.

use std::f32::consts::{PI, TAU};

use crate::glyph::Radii;
use crate::phoneme::{Inner1Start, InnerSweep, PhonemeClass};

/// The four concentric arcs a glyph may draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcKind {
    Outer,
    Inner1,
    Inner2,
    Inner3,
}

/// Projection of the two-circle intersection chord onto the center line.
/// `d` is the distance between centers, `r` the glyph-circle radius and
/// `outer` the ring radius.
#[inline]
pub fn chord_x(d: f32, r: f32, outer: f32) -> f32 {
    (d * d - r * r + outer * outer) / (d * 2.0)
}

/// Height of the intersection chord: four times the area of the triangle
/// spanned by the two centers and an intersection point, over `d`.
#[inline]
pub fn chord_a(d: f32, r: f32, outer: f32) -> f32 {
    1.0 / d
        * ((r - d - outer) * (outer - r - d) * (outer + r - d) * (d + r + outer)).sqrt()
}

/// Per-character arc solver: one phoneme class against one set of word
/// radius constants. All methods are pure; nothing is cached.
#[derive(Debug, Clone, Copy)]
pub struct ArcSolver {
    class: PhonemeClass,
    radii: Radii,
}

impl ArcSolver {
    pub fn new(class: PhonemeClass, radii: Radii) -> Self {
        Self { class, radii }
    }

    /// Distance between the ring center and the glyph-circle center,
    /// chosen per phoneme class.
    pub fn center_offset(&self) -> f32 {
        use crate::phoneme::CenterOffset::*;
        let r = &self.radii;
        match self.class.offset {
            Ring => r.outer,
            Sunken => r.outer - r.inner1 * 0.9,
            Floating => r.outer - r.inner1 * 1.2,
            Beyond => r.outer * 1.2,
            Within => r.outer * 0.8,
        }
    }

    /// Radius of one arc. Vowels and punctuation shrink Inner1 to a
    /// quarter of the consonant radius.
    pub fn radius(&self, kind: ArcKind) -> f32 {
        match kind {
            ArcKind::Outer => self.radii.outer,
            ArcKind::Inner1 => {
                if self.class.is_punctuation || self.class.is_vowel {
                    self.radii.inner1 * 0.25
                } else {
                    self.radii.inner1
                }
            }
            ArcKind::Inner2 => self.radii.inner2,
            ArcKind::Inner3 => self.radii.inner3,
        }
    }

    /// Inputs to the chord solver. Detached circles never intersect the
    /// ring, so the solver substitutes the standard on-ring configuration
    /// for them; the outer arc always solves against the Inner1 radius.
    fn solver_inputs(&self, kind: ArcKind) -> (f32, f32) {
        let detached = self.class.offset.is_detached();
        let local_d = if detached { self.radii.outer } else { self.center_offset() };
        let local_r = if kind == ArcKind::Outer || detached {
            self.radii.inner1
        } else {
            self.radius(kind)
        };
        (local_d, local_r)
    }

    /// Half the subtended angle of the intersection chord, signed by arc
    /// kind: the outer arc opens away from the ring, inner arcs toward it.
    pub fn angle(&self, kind: ArcKind) -> f32 {
        let (local_d, local_r) = self.solver_inputs(kind);
        let x = chord_x(local_d, local_r, self.radii.outer);
        let a = chord_a(local_d, local_r, self.radii.outer);
        match kind {
            ArcKind::Outer => (x * 2.0 / a).atan(),
            _ => (-(self.center_offset() - x) * 2.0 / a).atan(),
        }
    }

    /// Start angle of an arc, offset by the character's own bearing.
    pub fn start_angle(&self, kind: ArcKind, bearing: f32) -> f32 {
        let angle = self.angle(kind);
        let base = match kind {
            ArcKind::Outer => {
                if self.class.breaks_outer_ring {
                    angle - PI / 2.0
                } else {
                    PI / 2.0 - angle
                }
            }
            ArcKind::Inner1 => match self.class.inner1_start {
                Inner1Start::FixedLow => PI / 3.0 - PI / 2.0,
                Inner1Start::FixedHigh => 5.0 * PI / 3.0 - PI / 2.0,
                Inner1Start::FromChord => angle - PI / 2.0,
            },
            _ => angle - PI / 2.0,
        };
        (base + bearing) % TAU
    }

    /// Sweep of the outer arc. Depends on the sibling count so that all
    /// outer arcs of a word close the ring exactly once, and on the
    /// previous letter's chord angle so adjacent arcs meet without gaps.
    pub fn outer_sweep(&self, letters: usize, increment: f32, previous_angle: f32) -> f32 {
        let angle = self.angle(ArcKind::Outer);
        let base = if self.class.breaks_outer_ring {
            -2.0 * angle - PI + (letters as f32 - 1.0) * increment
        } else {
            -TAU + (letters as f32 - 1.0) * increment
        };
        base + angle - previous_angle
    }

    /// Sweep of an inner arc, from the class table.
    pub fn inner_sweep(&self, kind: ArcKind) -> f32 {
        match self.class.inner_sweep {
            InnerSweep::Hairline => 0.001,
            InnerSweep::BrokenMajor => -(PI + 2.0 * self.angle(kind)),
            InnerSweep::BrokenMinor => -2.0 * self.angle(kind) + PI,
            InnerSweep::Full => TAU,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phoneme::class_of;

    fn word_radii() -> Radii {
        // A five-letter word at the default base diameter.
        Radii {
            outer: 128.0,
            inner1: 31.4,
            inner2: 22.5,
            inner3: 13.7,
        }
    }

    #[test]
    fn chord_projection_symmetric_case() {
        // Equal radii, centers one radius apart: the chord bisects the
        // center line.
        let x = chord_x(100.0, 100.0, 100.0);
        assert!((x - 50.0).abs() < 1e-3);
    }

    #[test]
    fn chord_height_is_positive_for_intersecting_circles() {
        let a = chord_a(128.0, 31.4, 128.0);
        assert!(a.is_finite() && a > 0.0);
    }

    #[test]
    fn vowel_a_center_sits_beyond_ring() {
        let solver = ArcSolver::new(class_of("a"), word_radii());
        assert!((solver.center_offset() - 1.2 * 128.0).abs() < 1e-3);
    }

    #[test]
    fn vowel_inner1_shrinks_to_quarter() {
        let solver = ArcSolver::new(class_of("a"), word_radii());
        assert!((solver.radius(ArcKind::Inner1) - 0.25 * 31.4).abs() < 1e-3);
        let consonant = ArcSolver::new(class_of("t"), word_radii());
        assert!((consonant.radius(ArcKind::Inner1) - 31.4).abs() < 1e-3);
    }

    #[test]
    fn sunken_consonant_offset() {
        let solver = ArcSolver::new(class_of("b"), word_radii());
        assert!((solver.center_offset() - (128.0 - 31.4 * 0.9)).abs() < 1e-3);
    }

    #[test]
    fn inner_radii_strictly_ordered() {
        let solver = ArcSolver::new(class_of("t"), word_radii());
        assert!(solver.radius(ArcKind::Inner1) < solver.radius(ArcKind::Outer));
        assert!(solver.radius(ArcKind::Inner3) < solver.radius(ArcKind::Inner2));
        assert!(solver.radius(ArcKind::Inner2) < solver.radius(ArcKind::Inner1));
    }

    #[test]
    fn angles_are_finite_for_every_drawn_arc() {
        // Letters draw Outer and Inner1 only.
        for token in [
            "a", "b", "ch", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "ng",
            "o", "p", "qu", "r", "s", "sh", "t", "th", "u", "v", "w", "x", "y", "z",
        ] {
            let solver = ArcSolver::new(class_of(token), word_radii());
            for kind in [ArcKind::Outer, ArcKind::Inner1] {
                assert!(
                    solver.angle(kind).is_finite(),
                    "angle for {token:?} {kind:?}"
                );
            }
        }
        // Digits additionally reach Inner2/Inner3 per their class flags.
        for d in 0..=9u32 {
            let token = d.to_string();
            let class = class_of(&token);
            let solver = ArcSolver::new(class, word_radii());
            if class.draws_inner2 {
                assert!(solver.angle(ArcKind::Inner2).is_finite(), "digit {d} inner2");
            }
            if class.draws_inner3 {
                assert!(solver.angle(ArcKind::Inner3).is_finite(), "digit {d} inner3");
            }
        }
    }

    #[test]
    fn hairline_sweep_for_radial_line_glyphs() {
        let solver = ArcSolver::new(class_of("0"), word_radii());
        assert!((solver.inner_sweep(ArcKind::Inner1) - 0.001).abs() < 1e-9);
    }

    #[test]
    fn full_circle_sweep_for_plain_letters() {
        let solver = ArcSolver::new(class_of("th"), word_radii());
        assert!((solver.inner_sweep(ArcKind::Inner1) - TAU).abs() < 1e-6);
    }

    #[test]
    fn single_letter_word_closes_the_ring() {
        // One letter, no ring break: the outer sweep is a full turn.
        let solver = ArcSolver::new(class_of("a"), word_radii());
        let angle = solver.angle(ArcKind::Outer);
        let sweep = solver.outer_sweep(1, TAU, angle);
        assert!((sweep + TAU).abs() < 1e-4);
    }
}
