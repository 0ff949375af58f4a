use serde::{Deserialize, Serialize};

use crate::spine::book_spine::BookSpine;
use crate::spine::region::TextRegion;
use crate::spine::word::Word;

/// Where the word boxes of a detection pass came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordSource {
    /// True per-word geometry reported by the engine.
    Engine,
    /// Grid-synthesized boxes built from plain engine text.
    Synthesized,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub api_version: String,
    pub word_source: WordSource,
    pub words: Vec<Word>,
    /// Text regions before spine grouping, in seed order.
    pub regions: Vec<TextRegion>,
    /// Accepted spines, top of the image first.
    pub spines: Vec<BookSpine>,
    /// PNG overlay as a data URL, when rendering succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visualization: Option<String>,
}

impl DetectionResult {
    pub fn new(word_source: WordSource, words: Vec<Word>) -> Self {
        Self {
            api_version: env!("CARGO_PKG_VERSION").to_string(),
            word_source,
            words,
            regions: Vec::new(),
            spines: Vec::new(),
            visualization: None,
        }
    }

    pub fn with_regions(mut self, regions: Vec<TextRegion>) -> Self {
        self.regions = regions;
        self
    }

    pub fn with_spines(mut self, spines: Vec<BookSpine>) -> Self {
        self.spines = spines;
        self
    }

    pub fn set_visualization(&mut self, data_url: String) {
        self.visualization = Some(data_url);
    }

    /// Spine titles in output order.
    pub fn titles(&self) -> Vec<&str> {
        self.spines.iter().map(|s| s.title.as_str()).collect()
    }
}
