use tracing::trace;

use crate::spine::book_spine::BookSpine;
use crate::spine::params::GroupingParams;
use crate::utils::box_utils;

/// Filters and orders spine candidates using the default thresholds.
#[must_use]
pub fn rank_spines(spines: Vec<BookSpine>) -> Vec<BookSpine> {
    rank_spines_with(spines, &GroupingParams::default())
}

/// Keeps spines whose cleaned title has at least `min_title_length`
/// characters and whose confidence is strictly above `min_spine_confidence`,
/// then sorts them top to bottom by vertical center.
#[must_use]
pub fn rank_spines_with(spines: Vec<BookSpine>, params: &GroupingParams) -> Vec<BookSpine> {
    let mut kept: Vec<BookSpine> = spines
        .into_iter()
        .filter(|spine| {
            let accepted = spine.title.chars().count() >= params.min_title_length
                && spine.confidence > params.min_spine_confidence;
            if !accepted {
                trace!(
                    "Dropping spine candidate {:?} (confidence {:.1})",
                    spine.title,
                    spine.confidence
                );
            }
            accepted
        })
        .collect();

    box_utils::sort_top_to_bottom(&mut kept);
    kept
}
