//! Book spine candidates built from aligned text regions.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::spine::bounds::BoundingBox;
use crate::spine::params::GroupingParams;
use crate::spine::ranking::rank_spines_with;
use crate::spine::region::TextRegion;
use crate::spine::title::clean_book_title;
use crate::spine::word::{determine_orientation_with_ratio, Orientation};
use crate::utils::box_utils::{self, HasBounds};

/// The visible edge of one book, as reconstructed from its text regions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSpine {
    /// Cleaned title, region texts ordered top to bottom.
    pub title: String,
    /// Pairwise running average of region confidences.
    pub confidence: f64,
    /// Union of all region boxes.
    pub bbox: BoundingBox,
    pub orientation: Orientation,
    /// Owned copies of the constituent regions, in merge order.
    pub text_regions: Vec<TextRegion>,
}

impl BookSpine {
    fn from_seed(seed: &TextRegion) -> Self {
        Self {
            title: seed.text.clone(),
            confidence: seed.confidence,
            bbox: seed.bbox,
            orientation: seed.orientation,
            text_regions: vec![seed.clone()],
        }
    }

    /// Merges a region, placing its text above or below the current title
    /// depending on whether it starts above the seed region.
    fn absorb(&mut self, region: &TextRegion, seed_bbox: &BoundingBox) {
        if region.bbox.y0 < seed_bbox.y0 {
            self.title = format!("{} {}", region.text, self.title);
        } else {
            self.title.push(' ');
            self.title.push_str(&region.text);
        }
        self.bbox.expand_to_include(&region.bbox);
        self.confidence = box_utils::running_confidence(self.confidence, region.confidence);
        self.text_regions.push(region.clone());
    }

    /// Every word of every constituent region, in merge order.
    pub fn words(&self) -> impl Iterator<Item = &crate::spine::word::Word> {
        self.text_regions.iter().flat_map(|region| region.words.iter())
    }
}

impl HasBounds for BookSpine {
    fn get_bounds(&self) -> &BoundingBox {
        &self.bbox
    }
}

/// Whether two regions sit in the same vertical column, i.e. on one spine.
fn is_vertically_aligned(a: &BoundingBox, b: &BoundingBox, params: &GroupingParams) -> bool {
    box_utils::center_dx(a, b) < params.spine_alignment_tolerance
}

/// Whether two regions sit on the same row.
fn is_horizontally_aligned(a: &BoundingBox, b: &BoundingBox, params: &GroupingParams) -> bool {
    box_utils::center_dy(a, b) < params.row_alignment_tolerance
}

fn should_merge(seed: &BoundingBox, candidate: &BoundingBox, params: &GroupingParams) -> bool {
    let vertically_aligned = is_vertically_aligned(seed, candidate, params);
    let horizontally_aligned = is_horizontally_aligned(seed, candidate, params);
    let close_enough = box_utils::center_dy(seed, candidate)
        < params.spine_distance_factor * box_utils::average_height(seed, candidate);

    let row_gate = !params.require_row_alignment || horizontally_aligned;

    vertically_aligned && close_enough && row_gate
}

/// Groups text regions into book spine candidates without filtering them.
///
/// Uses the same single-pass partition as the region grouper: each unused
/// region seeds a candidate and absorbs every later unused region that shares
/// its column and lies within `spine_distance_factor` average heights of it
/// vertically. Titles are cleaned; the candidates are returned in seed order.
#[must_use]
pub fn group_regions_into_spines_with(
    regions: &[TextRegion],
    params: &GroupingParams,
) -> Vec<BookSpine> {
    let mut spines = Vec::new();
    let mut used = vec![false; regions.len()];

    for i in 0..regions.len() {
        if used[i] {
            continue;
        }
        used[i] = true;

        let seed = &regions[i];
        let mut spine = BookSpine::from_seed(seed);

        for j in (i + 1)..regions.len() {
            if used[j] {
                continue;
            }

            let candidate = &regions[j];
            if should_merge(&seed.bbox, &candidate.bbox, params) {
                spine.absorb(candidate, &seed.bbox);
                used[j] = true;
            }
        }

        spine.orientation = determine_orientation_with_ratio(spine.words(), params.orientation_ratio);
        spine.title = clean_book_title(&spine.title);
        spines.push(spine);
    }

    debug!(
        "Grouped {} text regions into {} spine candidates",
        regions.len(),
        spines.len()
    );

    spines
}

/// Detects book spines using the default thresholds.
#[must_use]
pub fn detect_book_spines(regions: &[TextRegion]) -> Vec<BookSpine> {
    detect_book_spines_with(regions, &GroupingParams::default())
}

/// Detects book spines: groups regions into candidates, then drops weak
/// candidates and orders the rest top to bottom.
#[must_use]
pub fn detect_book_spines_with(regions: &[TextRegion], params: &GroupingParams) -> Vec<BookSpine> {
    let candidates = group_regions_into_spines_with(regions, params);
    rank_spines_with(candidates, params)
}
