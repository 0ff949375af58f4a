use serde::{Deserialize, Serialize};

use crate::spine::word::DEFAULT_ORIENTATION_RATIO;

/// Thresholds shared by the region grouper, the spine grouper and the ranker.
///
/// All distances are in source-image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingParams {
    /// Words merge when their center distance is below this multiple of their
    /// average height.
    pub region_distance_factor: f64,
    /// Maximum center x-difference for two regions to sit on the same spine.
    pub spine_alignment_tolerance: f64,
    /// Regions merge when their vertical center distance is below this
    /// multiple of their average height.
    pub spine_distance_factor: f64,
    /// Also require the row-alignment test before merging regions.
    pub require_row_alignment: bool,
    /// Maximum center y-difference for two regions to count as one row.
    pub row_alignment_tolerance: f64,
    /// Aspect ratio used by the orientation classifier.
    pub orientation_ratio: f64,
    /// Minimum number of characters in a cleaned title.
    pub min_title_length: usize,
    /// Spines must score strictly above this confidence.
    pub min_spine_confidence: f64,
}

impl Default for GroupingParams {
    fn default() -> Self {
        Self {
            region_distance_factor: 2.0,
            spine_alignment_tolerance: 50.0,
            spine_distance_factor: 3.0,
            require_row_alignment: false,
            row_alignment_tolerance: 50.0,
            orientation_ratio: DEFAULT_ORIENTATION_RATIO,
            min_title_length: 3,
            min_spine_confidence: 30.0,
        }
    }
}
