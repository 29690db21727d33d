//! End-to-end properties of the full pipeline.

use std::f32::consts::TAU;

use gallifreyan::config::{RenderOptions, Rgba};
use gallifreyan::engine::pipeline::GlyphEngine;
use gallifreyan::geometry::{ArcKind, ArcSolver};
use gallifreyan::glyph::GlyphTree;
use gallifreyan::phoneme;

fn dark_count(img: &image::RgbaImage) -> usize {
    img.pixels().filter(|p| p.0[0] < 128).count()
}

#[test]
fn identical_inputs_render_pixel_identical_images() {
    let engine = GlyphEngine::new(RenderOptions::default());
    let first = engine.render("the quick brown fox");
    let second = engine.render("the quick brown fox");
    assert_eq!(first.as_raw(), second.as_raw());
}

#[test]
fn rotation_changes_the_image_deterministically() {
    let engine = GlyphEngine::new(RenderOptions::default());
    let rotated = GlyphEngine::new(RenderOptions {
        angle: 0.7,
        ..RenderOptions::default()
    });
    let a = engine.render("turn");
    let b = rotated.render("turn");
    let b2 = rotated.render("turn");
    assert_ne!(a.as_raw(), b.as_raw());
    assert_eq!(b.as_raw(), b2.as_raw());
}

#[test]
fn single_vowel_geometry() {
    // "a": one character; its circle center sits 1.2 ring radii out, its
    // inner circle shrinks to a quarter, and nothing deeper is drawn.
    let tree = GlyphTree::build("a");
    let opts = RenderOptions::default();
    let root = tree.root();
    assert_eq!(tree.letters(root).len(), 1);

    let class = phoneme::class_of("a");
    let radii = tree.radii(root, &opts);
    let solver = ArcSolver::new(class, radii);
    assert!((solver.center_offset() - 1.2 * radii.outer).abs() < 1e-3);
    assert!((solver.radius(ArcKind::Inner1) - 0.25 * radii.inner1).abs() < 1e-3);
    assert!(!class.draws_inner2);
    assert!(!class.draws_inner3);
}

#[test]
fn angle_slots_always_close_the_circle() {
    let tree = GlyphTree::build("pace is the trick");
    let mut stack = vec![tree.root()];
    while let Some(id) = stack.pop() {
        let letters = tree.letters(id).len();
        if letters > 0 {
            assert!((tree.angle_increment(id) * letters as f32 - TAU).abs() < 1e-3);
        }
        stack.extend(tree.node(id).children.iter().copied());
    }
}

#[test]
fn text_image_has_expected_size_and_content() {
    let opts = RenderOptions::default();
    let img = GlyphEngine::new(opts).render("hello world");
    let expected = opts.image_size() as u32;
    assert_eq!(img.dimensions(), (expected, expected));
    assert!(dark_count(&img) > 500);
}

#[test]
fn numeral_ring_renders_every_digit() {
    let img = GlyphEngine::new(RenderOptions::default()).render("1234567890");
    assert!(dark_count(&img) > 500);
}

#[test]
fn stroke_color_is_respected() {
    let opts = RenderOptions {
        color: Rgba { r: 200, g: 20, b: 20, a: 255 },
        ..RenderOptions::default()
    };
    let img = GlyphEngine::new(opts).render("red");
    let reddish = img
        .pixels()
        .filter(|p| p.0[0] > 150 && p.0[1] < 100)
        .count();
    assert!(reddish > 100);
}

#[test]
fn punctuated_phrase_renders() {
    let engine = GlyphEngine::new(RenderOptions::default());
    let img = engine.render("don't stop! really?");
    assert!(dark_count(&img) > 500);
}

#[test]
fn thin_and_thick_strokes_differ() {
    let thin = GlyphEngine::new(RenderOptions::default()).render("line");
    let thick = GlyphEngine::new(RenderOptions {
        thickness: 6.0,
        ..RenderOptions::default()
    })
    .render("line");
    assert!(dark_count(&thick) > dark_count(&thin));
}
