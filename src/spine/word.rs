//! Recognized word types and the orientation classifier.
//!
//! This module provides the [`Word`] struct for individual recognition results,
//! the two-valued [`Orientation`] used for regions and spines, and
//! [`determine_orientation`], which scores a set of words as running
//! horizontally or vertically.

use serde::{Deserialize, Serialize};

use crate::spine::bounds::BoundingBox;

/// Default aspect ratio a box must exceed to count toward an orientation.
pub const DEFAULT_ORIENTATION_RATIO: f64 = 1.5;

/// Direction in which text runs across the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Text runs left to right.
    #[default]
    Horizontal,
    /// Text runs top to bottom (or bottom to top), as on most spines.
    Vertical,
}

/// A single word reported by the recognition engine.
///
/// Words are immutable once produced and live for one detection pass. Regions
/// own copies of the words they are built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Recognized text.
    pub text: String,
    /// Recognition confidence (0.0 to 100.0).
    pub confidence: f64,
    /// Bounding box of the word.
    pub bbox: BoundingBox,
}

impl Word {
    /// Creates a new `Word`.
    #[must_use]
    pub fn new(text: impl Into<String>, confidence: f64, bbox: BoundingBox) -> Self {
        Self {
            text: text.into(),
            confidence,
            bbox,
        }
    }
}

/// Classifies a set of words as horizontal or vertical text.
///
/// Equivalent to [`determine_orientation_with_ratio`] with
/// [`DEFAULT_ORIENTATION_RATIO`].
#[must_use]
pub fn determine_orientation<'a, I>(words: I) -> Orientation
where
    I: IntoIterator<Item = &'a Word>,
{
    determine_orientation_with_ratio(words, DEFAULT_ORIENTATION_RATIO)
}

/// Classifies a set of words as horizontal or vertical text.
///
/// Each word whose width exceeds `ratio` times its height adds its confidence
/// to the horizontal score; each word whose height exceeds `ratio` times its
/// width adds to the vertical score. Near-square words contribute to neither.
///
/// # Returns
///
/// [`Orientation::Horizontal`] if the horizontal score is strictly greater than
/// the vertical score, [`Orientation::Vertical`] otherwise. An empty input
/// yields [`Orientation::Horizontal`].
///
/// # Note
///
/// Scores are compared through multiplication only, so a zero-height word
/// with positive width counts as horizontal and a zero-area word counts as
/// neither.
#[must_use]
pub fn determine_orientation_with_ratio<'a, I>(words: I, ratio: f64) -> Orientation
where
    I: IntoIterator<Item = &'a Word>,
{
    let mut seen_any = false;
    let mut horizontal_score = 0.0;
    let mut vertical_score = 0.0;

    for word in words {
        seen_any = true;
        let width = word.bbox.width();
        let height = word.bbox.height();

        if width > ratio * height {
            horizontal_score += word.confidence;
        }
        if height > ratio * width {
            vertical_score += word.confidence;
        }
    }

    if !seen_any || horizontal_score > vertical_score {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}
