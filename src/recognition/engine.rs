//! Recognition engine abstraction.
//!
//! The engine is the only asynchronous collaborator of the detection pipeline:
//! it turns image bytes into recognized text, ideally with per-word geometry.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::RecognitionError;
use crate::spine::word::Word;

/// Progress sink handed to an engine; values run from 0.0 to 1.0.
pub type EngineProgress<'a> = &'a (dyn Fn(f32) + Send + Sync);

/// Raw output of one recognition call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recognition {
    /// Full recognized text, lines separated by `\n`.
    pub text: String,
    /// Overall confidence (0-100).
    pub confidence: f64,
    /// Per-word results, if the engine reports geometry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<Word>>,
}

impl Recognition {
    /// A recognition result that carries true word boxes.
    pub fn with_words(words: Vec<Word>) -> Self {
        let text = words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let confidence = if words.is_empty() {
            0.0
        } else {
            words.iter().map(|w| w.confidence).sum::<f64>() / words.len() as f64
        };
        Self {
            text,
            confidence,
            words: Some(words),
        }
    }

    /// A recognition result with text only.
    pub fn text_only(text: impl Into<String>, confidence: f64) -> Self {
        Self {
            text: text.into(),
            confidence,
            words: None,
        }
    }
}

/// Text recognition backend.
#[async_trait]
pub trait RecognitionEngine: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Recognize text in a PNG-encoded image.
    ///
    /// `language` is an engine-specific hint (e.g. `"eng"`). Implementations
    /// may call `progress` any number of times with values in `[0, 1]`.
    async fn recognize(
        &self,
        image_png: &[u8],
        language: &str,
        progress: EngineProgress<'_>,
    ) -> Result<Recognition, RecognitionError>;
}
