//! Glyph layout tree.
//!
//! The hierarchy is Paragraph → Word → Character, stored as a flat arena
//! with index links. Placement is fully relative: a node's bearing, center
//! and size are derived on demand from its owner's, bottoming out at the
//! root parameters, so rotating or rescaling the whole wheel only means
//! changing `RenderOptions`.

use std::f32::consts::TAU;

use crate::config::{RenderOptions, SCALE_FACTOR};
use crate::phoneme::{self, tokenizer};
use crate::render::Point;

/// Index of a node in its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// Kind discriminant for a glyph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Paragraph,
    Word,
    Character,
}

/// One node of the layout tree.
#[derive(Debug, Clone)]
pub struct GlyphNode {
    pub kind: NodeKind,
    /// The literal text segment this node represents (phrase, word, or
    /// phoneme token).
    pub value: String,
    /// 1-based ordinal slot among siblings. Half-integer positions are
    /// reserved for punctuation interleaved between letters or words.
    pub position: f32,
    /// Non-owning back-reference; `None` for the root.
    pub owner: Option<NodeId>,
    /// Ordered children, owned by index.
    pub children: Vec<NodeId>,
}

/// The four nested radius constants a node offers to its children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Radii {
    pub outer: f32,
    pub inner1: f32,
    pub inner2: f32,
    pub inner3: f32,
}

/// Arena-backed layout tree for one render.
#[derive(Debug)]
pub struct GlyphTree {
    nodes: Vec<GlyphNode>,
    root: NodeId,
}

impl GlyphTree {
    /// Build the tree for an input string. More than one space-separated
    /// word makes the root a Paragraph, otherwise a single Word.
    pub fn build(text: &str) -> GlyphTree {
        let mut tree = GlyphTree { nodes: Vec::new(), root: NodeId(0) };
        let words: Vec<&str> = text.split(' ').collect();
        tree.root = if words.len() > 1 {
            tree.build_paragraph(text)
        } else {
            tree.build_word(None, text, 0.0)
        };
        log::debug!(
            "layout tree for {:?}: {} nodes",
            text,
            tree.nodes.len()
        );
        tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &GlyphNode {
        &self.nodes[id.0]
    }

    fn push(&mut self, node: GlyphNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    fn build_paragraph(&mut self, value: &str) -> NodeId {
        let id = self.push(GlyphNode {
            kind: NodeKind::Paragraph,
            value: value.to_string(),
            position: 1.0,
            owner: None,
            children: Vec::new(),
        });

        let mut count = 1.0f32;
        for word in value.split(' ').rev() {
            // Trailing sentence punctuation becomes its own small glyph
            // half a slot before the word.
            let trailing = word
                .chars()
                .last()
                .filter(|&c| matches!(c, '?' | '.' | '!'));
            if let Some(mark) = trailing {
                let stem = &word[..word.len() - mark.len_utf8()];
                let word_id = self.build_word(Some(id), stem, count);
                self.nodes[id.0].children.push(word_id);
                let punct_id = self.push(GlyphNode {
                    kind: NodeKind::Character,
                    value: mark.to_string(),
                    position: count - 0.5,
                    owner: Some(id),
                    children: Vec::new(),
                });
                self.nodes[id.0].children.push(punct_id);
            } else {
                let word_id = self.build_word(Some(id), word, count);
                self.nodes[id.0].children.push(word_id);
            }
            count += 1.0;
        }
        id
    }

    fn build_word(&mut self, owner: Option<NodeId>, value: &str, position: f32) -> NodeId {
        let id = self.push(GlyphNode {
            kind: NodeKind::Word,
            value: value.to_string(),
            position,
            owner,
            children: Vec::new(),
        });

        let mut tokens = tokenizer::phonemes(value);

        // Pull punctuation out of the stream, scanning from the end, and
        // seat each mark at a half-integer position. The scan index keeps
        // counting over removals, matching the classic layout exactly.
        let mut i = 0;
        while i < tokens.len() {
            let idx = tokens.len() - i - 1;
            if phoneme::is_punctuation(&tokens[idx]) {
                let mark = tokens.remove(idx);
                let punct_id = self.push(GlyphNode {
                    kind: NodeKind::Character,
                    value: mark,
                    position: 0.5 + i as f32,
                    owner: Some(id),
                    children: Vec::new(),
                });
                self.nodes[id.0].children.push(punct_id);
            }
            i += 1;
        }

        // Letters get integer positions, innermost first: position 1 is
        // the rightmost phoneme.
        for (i, token) in tokens.iter().rev().enumerate() {
            let char_id = self.push(GlyphNode {
                kind: NodeKind::Character,
                value: token.clone(),
                position: i as f32 + 1.0,
                owner: Some(id),
                children: Vec::new(),
            });
            self.nodes[id.0].children.push(char_id);
        }
        id
    }

    /// Whether a node is an interleaved punctuation character.
    pub fn is_punctuation(&self, id: NodeId) -> bool {
        let node = self.node(id);
        node.kind == NodeKind::Character && phoneme::is_punctuation(&node.value)
    }

    /// Children that claim an angular slot: Words under a Paragraph,
    /// non-punctuation Characters under a Word.
    pub fn letters(&self, id: NodeId) -> Vec<NodeId> {
        let want_words = self.node(id).kind == NodeKind::Paragraph;
        self.node(id)
            .children
            .iter()
            .copied()
            .filter(|&c| {
                if want_words {
                    self.node(c).kind == NodeKind::Word
                } else {
                    !self.is_punctuation(c)
                }
            })
            .collect()
    }

    /// Angle between slotted children in radians. Infinite for a node with
    /// no slotted children, which is never drawn.
    pub fn angle_increment(&self, id: NodeId) -> f32 {
        TAU / self.letters(id).len() as f32
    }

    /// Bearing of a node relative to the image, in radians.
    ///
    /// Characters sit inside their word's circle while words and
    /// paragraphs are arranged around a shared center, hence the opposite
    /// signs on the owner adjustment.
    pub fn angle_n(&self, id: NodeId, opts: &RenderOptions) -> f32 {
        let node = self.node(id);
        match node.kind {
            NodeKind::Character => {
                let owner = node.owner.expect("characters always have an owner");
                let inc = self.angle_increment(owner);
                let owner_angle = self.angle_n(owner, opts);
                if self.node(owner).owner.is_some() {
                    (node.position * inc + owner_angle) % TAU
                } else {
                    (node.position * inc - owner_angle) % TAU
                }
            }
            NodeKind::Paragraph | NodeKind::Word => {
                let (inc, adjust) = match node.owner {
                    None => (TAU, opts.root_angle()),
                    Some(owner) => (self.angle_increment(owner), self.angle_n(owner, opts)),
                };
                (node.position * inc - adjust) % TAU
            }
        }
    }

    /// Center of a node in image coordinates.
    pub fn center(&self, id: NodeId, opts: &RenderOptions) -> Point {
        match self.node(id).owner {
            None => Point::new(opts.center(), opts.center()),
            Some(owner) => self
                .center(owner, opts)
                .polar(self.radii(owner, opts).outer, self.angle_n(id, opts)),
        }
    }

    /// Diameter of the node's largest circle in pixels.
    pub fn size(&self, id: NodeId, opts: &RenderOptions) -> f32 {
        match self.node(id).owner {
            None => opts.size as f32,
            Some(owner) => self.size(owner, opts) * self.scale_factor(owner),
        }
    }

    /// Shrink factor applied to this node's children. Falls off
    /// logarithmically with the child count so crowded glyphs stay inside
    /// their parent circle.
    pub fn scale_factor(&self, id: NodeId) -> f32 {
        SCALE_FACTOR * 1.1 / ((self.node(id).children.len() + 1) as f32).ln()
    }

    /// Radius constants this node offers to its children (for a Character,
    /// to its arcs).
    pub fn radii(&self, id: NodeId, opts: &RenderOptions) -> Radii {
        let size = self.size(id, opts);
        let scale = self.scale_factor(id);
        let outer = if self.node(id).kind == NodeKind::Paragraph {
            size * 2.8 * scale
        } else {
            size / 2.0
        };
        let inner1 = scale * outer;
        let inner2 = inner1 * 0.7176;
        let inner3 = inner2 * 0.6066;
        Radii { outer, inner1, inner2, inner3 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> RenderOptions {
        RenderOptions::default()
    }

    #[test]
    fn single_word_root() {
        let tree = GlyphTree::build("cat");
        assert_eq!(tree.node(tree.root()).kind, NodeKind::Word);
    }

    #[test]
    fn cat_positions_are_mirrored() {
        let tree = GlyphTree::build("cat");
        let children = &tree.node(tree.root()).children;
        assert_eq!(children.len(), 3);
        // Position 1 is the last phoneme token.
        let by_position: Vec<(String, f32)> = children
            .iter()
            .map(|&c| (tree.node(c).value.clone(), tree.node(c).position))
            .collect();
        assert_eq!(by_position[0], ("t".to_string(), 1.0));
        assert_eq!(by_position[1], ("a".to_string(), 2.0));
        assert_eq!(by_position[2], ("k".to_string(), 3.0));
    }

    #[test]
    fn phrase_reverses_word_order() {
        let tree = GlyphTree::build("hello world");
        let root = tree.root();
        assert_eq!(tree.node(root).kind, NodeKind::Paragraph);
        let words = tree.letters(root);
        assert_eq!(tree.node(words[0]).value, "world");
        assert_eq!(tree.node(words[0]).position, 1.0);
        assert_eq!(tree.node(words[1]).value, "hello");
        assert_eq!(tree.node(words[1]).position, 2.0);
    }

    #[test]
    fn trailing_question_mark_splits_off() {
        let tree = GlyphTree::build("how are you?");
        let root = tree.root();
        let children = &tree.node(root).children;
        // Three words plus one punctuation character.
        assert_eq!(children.len(), 4);
        let punct = children
            .iter()
            .find(|&&c| tree.is_punctuation(c))
            .copied()
            .expect("question mark child");
        assert_eq!(tree.node(punct).value, "?");
        assert_eq!(tree.node(punct).position, 0.5);
        // Punctuation claims no angular slot.
        assert_eq!(tree.letters(root).len(), 3);
    }

    #[test]
    fn embedded_punctuation_gets_half_slot() {
        let tree = GlyphTree::build("don't");
        let root = tree.root();
        let punct: Vec<NodeId> = tree
            .node(root)
            .children
            .iter()
            .copied()
            .filter(|&c| tree.is_punctuation(c))
            .collect();
        assert_eq!(punct.len(), 1);
        assert_eq!(tree.node(punct[0]).value, "'");
        assert!(tree.node(punct[0]).position.fract() == 0.5);
    }

    #[test]
    fn angle_increment_times_count_is_full_turn() {
        let tree = GlyphTree::build("hello there world");
        let root = tree.root();
        let n = tree.letters(root).len();
        assert!((tree.angle_increment(root) * n as f32 - TAU).abs() < 1e-4);
        for &word in &tree.letters(root) {
            let n = tree.letters(word).len();
            if n > 0 {
                assert!((tree.angle_increment(word) * n as f32 - TAU).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn radii_are_strictly_nested() {
        let tree = GlyphTree::build("cat");
        let radii = tree.radii(tree.root(), &opts());
        assert!(radii.inner1 < radii.outer);
        assert!(radii.inner2 < radii.inner1);
        assert!(radii.inner3 < radii.inner2);
    }

    #[test]
    fn empty_input_yields_zero_children() {
        let tree = GlyphTree::build("");
        assert!(tree.node(tree.root()).children.is_empty());
    }

    #[test]
    fn root_center_is_image_center() {
        let tree = GlyphTree::build("cat");
        let o = opts();
        let c = tree.center(tree.root(), &o);
        assert!((c.x - o.center()).abs() < 1e-3);
        assert!((c.y - o.center()).abs() < 1e-3);
    }

    #[test]
    fn child_sits_on_owner_ring() {
        let tree = GlyphTree::build("cat");
        let o = opts();
        let root = tree.root();
        let child = tree.node(root).children[0];
        let rc = tree.center(root, &o);
        let cc = tree.center(child, &o);
        let dist = ((cc.x - rc.x).powi(2) + (cc.y - rc.y).powi(2)).sqrt();
        assert!((dist - tree.radii(root, &o).outer).abs() < 1e-2);
    }
}
