pub mod engine;
pub mod error;
pub mod synthesis;
pub mod tesseract;

pub use engine::{EngineProgress, Recognition, RecognitionEngine};
pub use error::RecognitionError;
pub use synthesis::{synthesize_words, SynthesisParams};
pub use tesseract::TesseractCliEngine;
