//! Tree walker that turns layout and geometry into canvas calls.
//!
//! One depth-first pass; nothing is retained. Degrees conversion happens
//! here and nowhere else.

use crate::config::RenderOptions;
use crate::geometry::{ArcKind, ArcSolver};
use crate::glyph::{GlyphTree, NodeId, NodeKind};
use crate::phoneme;
use crate::render::decorations::{self, MarkContext};
use crate::render::{to_degrees, Canvas, Point};

/// Render a whole layout tree onto a canvas.
pub fn render_tree(tree: &GlyphTree, opts: &RenderOptions, canvas: &mut dyn Canvas) {
    draw_node(tree, tree.root(), opts, canvas);
}

fn draw_node(tree: &GlyphTree, id: NodeId, opts: &RenderOptions, canvas: &mut dyn Canvas) {
    match tree.node(id).kind {
        NodeKind::Paragraph => {
            // The paragraph is one large containing circle.
            let c = opts.center();
            canvas.draw_circle(Point::new(c, c), opts.image_size() * 0.4);
            for &child in &tree.node(id).children {
                draw_node(tree, child, opts, canvas);
            }
        }
        NodeKind::Word => {
            for &child in &tree.node(id).children {
                draw_node(tree, child, opts, canvas);
            }
        }
        NodeKind::Character => draw_character(tree, id, opts, canvas),
    }
}

fn draw_character(tree: &GlyphTree, id: NodeId, opts: &RenderOptions, canvas: &mut dyn Canvas) {
    let node = tree.node(id);
    let Some(word_id) = node.owner else { return };

    let class = phoneme::class_of(&node.value);
    let radii = tree.radii(word_id, opts);
    let solver = ArcSolver::new(class, radii);
    let bearing = tree.angle_n(id, opts);
    let glyph_center = tree.center(id, opts);
    let ring_center = tree.center(word_id, opts);
    let offset = solver.center_offset();
    // Center of the glyph's own circle, pushed off the ring by the class
    // offset.
    let origin = glyph_center.polar(offset - radii.outer, bearing);

    let inner1_radius = solver.radius(ArcKind::Inner1);
    decorations::draw_marks(
        canvas,
        &MarkContext {
            class: &class,
            radius: inner1_radius,
            bearing,
            origin,
            glyph_center,
            ring_center,
            center_offset: offset,
            line_angle: solver.start_angle(ArcKind::Inner1, bearing),
        },
    );

    // Punctuation draws marks only; the period keeps its small circle.
    if class.is_punctuation && node.value != "." {
        return;
    }

    canvas.draw_arc(
        origin,
        inner1_radius,
        to_degrees(solver.start_angle(ArcKind::Inner1, bearing)),
        to_degrees(solver.inner_sweep(ArcKind::Inner1)),
    );
    for (kind, drawn) in [
        (ArcKind::Inner2, class.draws_inner2),
        (ArcKind::Inner3, class.draws_inner3),
    ] {
        if drawn {
            canvas.draw_arc(
                origin,
                solver.radius(kind),
                to_degrees(solver.start_angle(kind, bearing)),
                to_degrees(solver.inner_sweep(kind)),
            );
        }
    }

    if !class.is_punctuation {
        let letters = tree.letters(word_id);
        let increment = tree.angle_increment(word_id);
        // The previous letter by position, wrapping to the last one; its
        // chord angle closes the gap between adjacent outer arcs.
        let pos = node.position.floor() as usize;
        let prev_id = if pos > 1 { letters[pos - 2] } else { letters[letters.len() - 1] };
        let prev = ArcSolver::new(phoneme::class_of(&tree.node(prev_id).value), radii);
        let sweep = solver.outer_sweep(letters.len(), increment, prev.angle(ArcKind::Outer));
        canvas.draw_arc(
            ring_center,
            solver.radius(ArcKind::Outer),
            to_degrees(solver.start_angle(ArcKind::Outer, bearing)),
            to_degrees(sweep),
        );
    }
}
