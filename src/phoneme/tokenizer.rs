//! English-spelling phoneme splitter.
//!
//! Scans a word left to right with one character of lookahead and one of
//! lookbehind, collapsing digraphs (`ch`, `sh`, `th`, `ng`, `qu`) and
//! resolving `c` into `k`/`s`/silence. The rules are a fixed table, not a
//! linguistic model.

/// Split a word into lowercase phoneme tokens in reading order.
pub fn phonemes(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut tokens = Vec::with_capacity(chars.len());

    let mut i = 0;
    while i < chars.len() {
        let prev = if i > 0 { Some(chars[i - 1].to_ascii_lowercase()) } else { None };
        let ch = chars[i].to_ascii_lowercase();
        let next = chars.get(i + 1).map(|c| c.to_ascii_lowercase());

        let token = match ch {
            'c' => match next {
                Some('h') => {
                    i += 1;
                    Some("ch".to_string())
                }
                // The c in "ck" is silent; the k stands alone.
                Some('k') => None,
                // Soft c, unless an s already carries the sound.
                Some('e') | Some('i') => {
                    if prev == Some('s') {
                        None
                    } else {
                        Some("s".to_string())
                    }
                }
                _ => Some("k".to_string()),
            },
            'q' => {
                if next == Some('u') {
                    i += 1;
                }
                Some("qu".to_string())
            }
            'n' if next == Some('g') => {
                i += 1;
                Some("ng".to_string())
            }
            't' if next == Some('h') => {
                i += 1;
                Some("th".to_string())
            }
            's' if next == Some('h') => {
                i += 1;
                Some("sh".to_string())
            }
            _ => Some(ch.to_string()),
        };

        if let Some(t) = token {
            tokens.push(t);
        }
        i += 1;
    }

    tokens
}
