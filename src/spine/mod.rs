pub mod analysis;
pub mod book_spine;
pub mod bounds;
pub mod error;
pub mod params;
pub mod ranking;
pub mod region;
pub mod title;
pub mod word;

pub use analysis::{DetectionResult, SpinePipeline, WordSource};
pub use book_spine::{
    detect_book_spines, detect_book_spines_with, group_regions_into_spines_with, BookSpine,
};
pub use bounds::BoundingBox;
pub use error::SpineError;
pub use params::GroupingParams;
pub use ranking::{rank_spines, rank_spines_with};
pub use region::{group_words_into_regions, group_words_into_regions_with, TextRegion};
pub use title::clean_book_title;
pub use word::{determine_orientation, determine_orientation_with_ratio, Orientation, Word};
