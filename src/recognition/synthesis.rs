//! Approximate word geometry for engines that only report text.
//!
//! Lines are laid out on a fixed grid: line `i` occupies
//! `[i * line_height, (i + 1) * line_height)` and each word is
//! `chars * char_width` wide, followed by a one-character gap. The boxes say
//! nothing about where text really is in the image; true engine geometry is
//! always preferred.

use serde::{Deserialize, Serialize};

use crate::spine::bounds::BoundingBox;
use crate::spine::word::Word;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisParams {
    pub char_width: f64,
    pub line_height: f64,
}

impl Default for SynthesisParams {
    fn default() -> Self {
        Self {
            char_width: 10.0,
            line_height: 30.0,
        }
    }
}

/// Lays out `text` on the synthesis grid, giving every word `confidence`.
///
/// Blank lines are skipped without consuming a grid row.
pub fn synthesize_words(text: &str, confidence: f64, params: &SynthesisParams) -> Vec<Word> {
    let mut words = Vec::new();

    let lines = text.lines().filter(|line| !line.trim().is_empty());
    for (line_index, line) in lines.enumerate() {
        let y0 = line_index as f64 * params.line_height;
        let y1 = y0 + params.line_height;
        let mut x = 0.0;

        for token in line.split_whitespace() {
            let width = token.chars().count() as f64 * params.char_width;
            words.push(Word::new(
                token,
                confidence,
                BoundingBox::new(x, y0, x + width, y1),
            ));
            x += width + params.char_width;
        }
    }

    words
}
