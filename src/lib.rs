pub mod recognition;
pub mod spine;
pub mod utils;

pub use recognition::{Recognition, RecognitionEngine, RecognitionError, TesseractCliEngine};
pub use spine::{
    clean_book_title, detect_book_spines, determine_orientation, group_words_into_regions,
    BookSpine, BoundingBox, DetectionResult, GroupingParams, Orientation, SpineError,
    SpinePipeline, TextRegion, Word, WordSource,
};
pub use utils::config::AppConfig;
