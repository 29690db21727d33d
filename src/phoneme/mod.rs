//! Phoneme classification.
//!
//! Every stage downstream of the tokenizer — the center-offset choice, the
//! arc angle tables, the decoration marks — is keyed on the phoneme class.
//! The classes live in one static table here so the patterns are matched
//! exactly once per token instead of being re-derived in every formula.

pub mod tokenizer;

/// Distance between the word-ring center and a glyph's own circle center,
/// expressed as a rule over the word's radius constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterOffset {
    /// Centered on the ring: `D = outer`.
    Ring,
    /// Pushed inside the ring edge: `D = outer − 0.9·inner1`.
    Sunken,
    /// Fully detached inside the ring: `D = outer − 1.2·inner1`.
    Floating,
    /// Outside the ring: `D = 1.2·outer`.
    Beyond,
    /// Inside the ring, short of the edge: `D = 0.8·outer`.
    Within,
}

impl CenterOffset {
    /// Offsets whose circle does not intersect the word ring. For these the
    /// chord solver substitutes the standard on-ring configuration.
    pub fn is_detached(self) -> bool {
        matches!(self, CenterOffset::Floating | CenterOffset::Beyond | CenterOffset::Within)
    }
}

/// Sweep rule for the Inner1/Inner2/Inner3 arcs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InnerSweep {
    /// Degenerate stub sweep (paired with the radial-line glyphs).
    Hairline,
    /// Large broken arc: `−(π + 2·angle)`.
    BrokenMajor,
    /// Small broken arc: `−2·angle + π`.
    BrokenMinor,
    /// Complete circle: `2π`.
    Full,
}

/// Start-angle rule for the Inner1 arc before the character's own bearing
/// is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inner1Start {
    /// Fixed at `π/3 − π/2`.
    FixedLow,
    /// Fixed at `5π/3 − π/2`.
    FixedHigh,
    /// Solved from the chord: `angle − π/2`.
    FromChord,
}

/// Hand-specified Inner1 marks for vowels and punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialMark {
    /// Radial stroke pointing at the word center (`i`).
    InwardStroke,
    /// Radial stroke pointing away from the word center (`u`).
    OutwardStroke,
    /// Two filled dots straddling the bearing (`?`).
    DoubleDot,
    /// Three filled dots on and around the bearing (`!`).
    TripleDot,
    /// Two near-radial strokes off the word ring (`'`).
    PairedStrokes,
    /// Two splayed strokes plus a tether to the glyph center (`-`).
    AngledStrokes,
    /// Single stroke from the word ring to the glyph center (`"`).
    Tether,
    /// Filled disc of the full Inner1 radius (`,`).
    FilledDisc,
}

/// Per-phoneme rendering flags. One row of the class table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhonemeClass {
    pub is_vowel: bool,
    pub is_punctuation: bool,
    pub offset: CenterOffset,
    /// Whether the glyph interrupts the word's outer ring (flips the outer
    /// start-angle and sweep tables).
    pub breaks_outer_ring: bool,
    pub inner_sweep: InnerSweep,
    pub inner1_start: Inner1Start,
    /// Dot marks on the Inner1 arc (0, 2 or 3).
    pub dots: u8,
    /// Radial tick marks on the Inner1 arc (0 to 3).
    pub ticks: u8,
    pub draws_inner2: bool,
    pub draws_inner3: bool,
    /// Inner1 degenerates from an arc to a straight radial line.
    pub radial_line: bool,
    pub special: Option<SpecialMark>,
}

/// Plain letter row: on the ring, full inner circle, no marks.
const LETTER: PhonemeClass = PhonemeClass {
    is_vowel: false,
    is_punctuation: false,
    offset: CenterOffset::Ring,
    breaks_outer_ring: false,
    inner_sweep: InnerSweep::Full,
    inner1_start: Inner1Start::FromChord,
    dots: 0,
    ticks: 0,
    draws_inner2: false,
    draws_inner3: false,
    radial_line: false,
    special: None,
};

const VOWEL: PhonemeClass = PhonemeClass { is_vowel: true, ..LETTER };
const PUNCTUATION: PhonemeClass = PhonemeClass { is_punctuation: true, ..LETTER };

/// Look up the class row for a phoneme token. Tokens the table does not
/// know (stray symbols in the input) fall back to the plain-letter row and
/// render as an undecorated circle.
pub fn class_of(phoneme: &str) -> PhonemeClass {
    use CenterOffset::*;
    use InnerSweep::*;

    match phoneme {
        // Vowels
        "a" => PhonemeClass { offset: Beyond, ..VOWEL },
        "o" => PhonemeClass { offset: Within, ..VOWEL },
        "e" => VOWEL,
        "i" => PhonemeClass { special: Some(SpecialMark::InwardStroke), ..VOWEL },
        "u" => PhonemeClass { special: Some(SpecialMark::OutwardStroke), ..VOWEL },

        // Sunken consonants
        "b" => PhonemeClass { offset: Sunken, breaks_outer_ring: true, inner_sweep: BrokenMajor, ..LETTER },
        "ch" => PhonemeClass { offset: Sunken, breaks_outer_ring: true, inner_sweep: BrokenMajor, dots: 2, ..LETTER },
        "d" => PhonemeClass { offset: Sunken, breaks_outer_ring: true, inner_sweep: BrokenMajor, dots: 3, ..LETTER },
        "f" => PhonemeClass { offset: Sunken, breaks_outer_ring: true, inner_sweep: BrokenMajor, ticks: 3, ..LETTER },
        "g" => PhonemeClass { offset: Sunken, breaks_outer_ring: true, inner_sweep: BrokenMajor, ticks: 1, ..LETTER },
        "h" => PhonemeClass { offset: Sunken, breaks_outer_ring: true, inner_sweep: BrokenMajor, ticks: 2, ..LETTER },

        // Floating consonants
        "j" => PhonemeClass { offset: Floating, ..LETTER },
        "k" => PhonemeClass { offset: Floating, dots: 2, ..LETTER },
        "l" => PhonemeClass { offset: Floating, dots: 3, ..LETTER },
        "m" => PhonemeClass { offset: Floating, ticks: 3, ..LETTER },
        "n" => PhonemeClass { offset: Floating, ticks: 1, ..LETTER },
        "p" => PhonemeClass { offset: Floating, ticks: 2, ..LETTER },

        // On-ring consonants
        "t" => PhonemeClass { breaks_outer_ring: true, inner_sweep: BrokenMajor, ..LETTER },
        "r" => PhonemeClass { breaks_outer_ring: true, inner_sweep: BrokenMajor, dots: 3, ..LETTER },
        "s" => PhonemeClass { breaks_outer_ring: true, inner_sweep: BrokenMajor, ticks: 3, ..LETTER },
        "v" => PhonemeClass { breaks_outer_ring: true, inner_sweep: BrokenMajor, ticks: 1, ..LETTER },
        "w" => PhonemeClass { breaks_outer_ring: true, inner_sweep: BrokenMajor, ticks: 2, ..LETTER },
        "sh" => PhonemeClass { breaks_outer_ring: true, inner_sweep: BrokenMajor, dots: 2, ..LETTER },
        "th" => LETTER,
        "y" => PhonemeClass { dots: 2, ..LETTER },
        "z" => PhonemeClass { dots: 3, ..LETTER },
        "x" => PhonemeClass { ticks: 2, ..LETTER },
        "ng" => PhonemeClass { ticks: 3, ..LETTER },
        "qu" => PhonemeClass { ticks: 1, ..LETTER },

        // Digits
        "0" => PhonemeClass {
            inner_sweep: Hairline,
            inner1_start: Inner1Start::FixedLow,
            radial_line: true,
            ..LETTER
        },
        "1" => PhonemeClass {
            inner_sweep: Hairline,
            inner1_start: Inner1Start::FixedHigh,
            radial_line: true,
            ..LETTER
        },
        "2" => PhonemeClass { breaks_outer_ring: true, ..LETTER },
        "3" => PhonemeClass { breaks_outer_ring: true, draws_inner2: true, ..LETTER },
        "4" => PhonemeClass { breaks_outer_ring: true, draws_inner2: true, draws_inner3: true, ..LETTER },
        "5" => PhonemeClass { inner_sweep: BrokenMajor, ..LETTER },
        "6" => PhonemeClass { inner_sweep: BrokenMajor, draws_inner2: true, ..LETTER },
        "7" => PhonemeClass { inner_sweep: BrokenMajor, draws_inner2: true, draws_inner3: true, ..LETTER },
        "8" => PhonemeClass { inner_sweep: BrokenMinor, ..LETTER },
        "9" => PhonemeClass { inner_sweep: BrokenMinor, draws_inner2: true, ..LETTER },

        // Punctuation
        "." => PUNCTUATION,
        "?" => PhonemeClass { special: Some(SpecialMark::DoubleDot), ..PUNCTUATION },
        "!" => PhonemeClass { special: Some(SpecialMark::TripleDot), ..PUNCTUATION },
        "'" => PhonemeClass { special: Some(SpecialMark::PairedStrokes), ..PUNCTUATION },
        "-" => PhonemeClass { special: Some(SpecialMark::AngledStrokes), ..PUNCTUATION },
        "\"" => PhonemeClass { special: Some(SpecialMark::Tether), ..PUNCTUATION },
        "," => PhonemeClass { special: Some(SpecialMark::FilledDisc), ..PUNCTUATION },

        _ => LETTER,
    }
}

/// Whether a token is one of the punctuation marks the script can draw.
pub fn is_punctuation(token: &str) -> bool {
    matches!(token, "." | "?" | "!" | "'" | "-" | "," | "\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowels_are_flagged() {
        for v in ["a", "e", "i", "o", "u"] {
            assert!(class_of(v).is_vowel, "{v} should be a vowel");
        }
        assert!(!class_of("b").is_vowel);
    }

    #[test]
    fn detached_offsets() {
        assert!(class_of("a").offset.is_detached());
        assert!(class_of("j").offset.is_detached());
        assert!(!class_of("b").offset.is_detached());
        assert!(!class_of("t").offset.is_detached());
    }

    #[test]
    fn digit_arc_census() {
        // Only 4 and 7 reach the innermost arc; 3/4/6/7/9 reach the second.
        for d in 0..=9u32 {
            let class = class_of(&d.to_string());
            assert_eq!(class.draws_inner3, d == 4 || d == 7, "digit {d}");
            assert_eq!(
                class.draws_inner2,
                matches!(d, 3 | 4 | 6 | 7 | 9),
                "digit {d}"
            );
        }
    }

    #[test]
    fn overlapping_tick_classes_accumulate() {
        // f/m/s and ng sit in both the one-tick and two-tick classes.
        assert_eq!(class_of("f").ticks, 3);
        assert_eq!(class_of("ng").ticks, 3);
        assert_eq!(class_of("g").ticks, 1);
        assert_eq!(class_of("x").ticks, 2);
    }

    #[test]
    fn unknown_token_renders_as_plain_letter() {
        let class = class_of(";");
        assert!(!class.is_punctuation);
        assert_eq!(class, LETTER);
    }
}
