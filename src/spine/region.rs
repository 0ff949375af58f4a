use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::spine::bounds::BoundingBox;
use crate::spine::params::GroupingParams;
use crate::spine::word::{determine_orientation_with_ratio, Orientation, Word};
use crate::utils::box_utils::{self, HasBounds};

/// A cluster of nearby words, smaller than a full spine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRegion {
    /// Space-joined word texts, in merge order.
    pub text: String,
    /// Pairwise running average of word confidences.
    pub confidence: f64,
    /// Union of all word boxes.
    pub bbox: BoundingBox,
    pub orientation: Orientation,
    /// Owned copies of the constituent words, in merge order.
    pub words: Vec<Word>,
}

impl TextRegion {
    /// Starts a region from a single seed word.
    pub fn from_seed(seed: &Word, orientation_ratio: f64) -> Self {
        Self {
            text: seed.text.clone(),
            confidence: seed.confidence,
            bbox: seed.bbox,
            orientation: determine_orientation_with_ratio(std::iter::once(seed), orientation_ratio),
            words: vec![seed.clone()],
        }
    }

    fn absorb(&mut self, word: &Word) {
        self.text.push(' ');
        self.text.push_str(&word.text);
        self.bbox.expand_to_include(&word.bbox);
        self.confidence = box_utils::running_confidence(self.confidence, word.confidence);
        self.words.push(word.clone());
    }
}

impl HasBounds for Word {
    fn get_bounds(&self) -> &BoundingBox {
        &self.bbox
    }
}

impl HasBounds for TextRegion {
    fn get_bounds(&self) -> &BoundingBox {
        &self.bbox
    }
}

/// Groups words into text regions using the default thresholds.
#[must_use]
pub fn group_words_into_regions(words: &[Word]) -> Vec<TextRegion> {
    group_words_into_regions_with(words, &GroupingParams::default())
}

/// Groups words into text regions by spatial proximity.
///
/// Every word ends up in exactly one region. Each unused word seeds a region
/// in input order; every later unused word whose center lies closer to the
/// seed's center than `region_distance_factor` times their average height is
/// merged into it. Distances are always measured against the seed word's own
/// box, never against the growing region.
#[must_use]
pub fn group_words_into_regions_with(words: &[Word], params: &GroupingParams) -> Vec<TextRegion> {
    let mut regions = Vec::new();
    let mut used = vec![false; words.len()];

    for i in 0..words.len() {
        if used[i] {
            continue;
        }
        used[i] = true;

        let seed = &words[i];
        let mut region = TextRegion::from_seed(seed, params.orientation_ratio);

        for j in (i + 1)..words.len() {
            if used[j] {
                continue;
            }

            let candidate = &words[j];
            let distance = box_utils::center_distance(&seed.bbox, &candidate.bbox);
            let avg_height = box_utils::average_height(&seed.bbox, &candidate.bbox);

            if distance < params.region_distance_factor * avg_height {
                region.absorb(candidate);
                used[j] = true;
            }
        }

        region.orientation =
            determine_orientation_with_ratio(&region.words, params.orientation_ratio);
        regions.push(region);
    }

    debug!(
        "Grouped {} words into {} text regions",
        words.len(),
        regions.len()
    );

    regions
}
