use ab_glyph::FontArc;
use image::RgbaImage;
use tracing::{debug, info, instrument, warn};

use crate::recognition::{synthesize_words, Recognition, RecognitionEngine};
use crate::spine::analysis::progress::{ProgressCallback, ProgressReporter};
use crate::spine::analysis::result::{DetectionResult, WordSource};
use crate::spine::book_spine::detect_book_spines_with;
use crate::spine::error::SpineError;
use crate::spine::params::GroupingParams;
use crate::spine::region::group_words_into_regions_with;
use crate::spine::word::Word;
use crate::utils::config::AppConfig;
use crate::utils::error::ImageError;
use crate::utils::{image_utils, visualization};

const PREPROCESS_DONE: f32 = 30.0;
const RECOGNITION_DONE: f32 = 80.0;
const REGIONS_DONE: f32 = 85.0;
const SPINES_DONE: f32 = 90.0;
const COMPLETE: f32 = 100.0;

/// Runs a full detection pass: preprocessing, recognition, grouping, ranking
/// and overlay rendering.
///
/// A pipeline holds only read-only configuration, so one instance can serve
/// any number of sequential or concurrent calls.
pub struct SpinePipeline {
    config: AppConfig,
    font: Option<FontArc>,
}

impl SpinePipeline {
    /// Creates a pipeline.
    ///
    /// Overlay labels use the font at `label_font_path` when one is configured
    /// and loads, and the embedded font otherwise.
    pub fn new(config: AppConfig) -> Self {
        let configured = match config.load_label_font() {
            Ok(Some(bytes)) => match visualization::load_font(bytes) {
                Ok(font) => Some(font),
                Err(e) => {
                    warn!("Falling back to the embedded label font: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Falling back to the embedded label font: {}", e);
                None
            }
        };

        let font = configured.or_else(|| match visualization::embedded_font() {
            Ok(font) => Some(font),
            Err(e) => {
                warn!("Overlay labels disabled: {}", e);
                None
            }
        });

        Self { config, font }
    }

    /// Builds a pipeline from the global configuration.
    pub fn from_global() -> Self {
        Self::new(AppConfig::get().clone())
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn params(&self) -> GroupingParams {
        GroupingParams::from(&self.config)
    }

    /// Detects book spines in an encoded image.
    ///
    /// `language` falls back to the configured default. Progress is reported
    /// as a non-decreasing percentage: 30 after preprocessing, 30-80 while
    /// the engine runs, then 85, 90 and 100.
    ///
    /// # Errors
    ///
    /// - [`SpineError::ImageLoad`] if `image_bytes` cannot be decoded.
    /// - [`SpineError::ProcessingFailed`] if recognition fails; no partial
    ///   result is returned.
    #[instrument(skip(self, engine, image_bytes, progress), fields(engine = engine.name(), bytes = image_bytes.len()))]
    pub async fn process_image(
        &self,
        engine: &dyn RecognitionEngine,
        image_bytes: &[u8],
        language: Option<&str>,
        progress: Option<ProgressCallback<'_>>,
    ) -> Result<DetectionResult, SpineError> {
        let reporter = ProgressReporter::new(progress);

        let source = image::load_from_memory(image_bytes)
            .map_err(|source| SpineError::ImageLoad { source })?
            .to_rgba8();
        debug!("Decoded {}x{} image", source.width(), source.height());

        let prepared = image_utils::preprocess_image(&source);
        let png = image_utils::encode_png(&prepared)?;
        reporter.report(PREPROCESS_DONE);

        let language = language.unwrap_or(&*self.config.language);
        let engine_progress =
            |fraction: f32| reporter.report_scaled(fraction, PREPROCESS_DONE, RECOGNITION_DONE);

        let recognition = engine
            .recognize(&png, language, &engine_progress)
            .await
            .map_err(|e| {
                warn!("Recognition with {} failed: {}", engine.name(), e);
                SpineError::from(e)
            })?;
        reporter.report(RECOGNITION_DONE);

        let (word_source, words) = self.resolve_words(recognition);
        let mut result = self.analyze(word_source, words, &reporter);

        if self.config.render_visualization {
            match self.render_overlay(&source, &result, source.width(), source.height()) {
                Ok(data_url) => result.set_visualization(data_url),
                Err(e) => warn!("Skipping visualization: {}", e),
            }
        }

        reporter.report(COMPLETE);
        info!(
            "Detected {} spines from {} regions",
            result.spines.len(),
            result.regions.len()
        );

        Ok(result)
    }

    /// Groups already-recognized words into regions and spines.
    pub fn detect_words(&self, words: Vec<Word>) -> DetectionResult {
        self.analyze(WordSource::Engine, words, &ProgressReporter::new(None))
    }

    /// Renders the result's spines over `source` as a PNG data URL.
    pub fn render_overlay(
        &self,
        source: &RgbaImage,
        result: &DetectionResult,
        width: u32,
        height: u32,
    ) -> Result<String, ImageError> {
        let overlay = visualization::render_visualization(
            source,
            &result.spines,
            width,
            height,
            &self.config.render,
            self.font.as_ref(),
        )?;
        let png = image_utils::encode_png(&overlay)?;
        Ok(image_utils::to_data_url(&png))
    }

    fn resolve_words(&self, recognition: Recognition) -> (WordSource, Vec<Word>) {
        match recognition.words {
            Some(words) if !words.is_empty() => {
                info!("Using {} engine-reported word boxes", words.len());
                (WordSource::Engine, words)
            }
            _ => {
                let words = synthesize_words(
                    &recognition.text,
                    recognition.confidence,
                    &self.config.synthesis,
                );
                info!(
                    "Engine reported no word geometry, synthesized {} word boxes",
                    words.len()
                );
                (WordSource::Synthesized, words)
            }
        }
    }

    #[instrument(skip(self, words, reporter), fields(word_count = words.len()))]
    fn analyze(
        &self,
        word_source: WordSource,
        words: Vec<Word>,
        reporter: &ProgressReporter<'_>,
    ) -> DetectionResult {
        let params = self.params();

        let regions = group_words_into_regions_with(&words, &params);
        reporter.report(REGIONS_DONE);

        let spines = detect_book_spines_with(&regions, &params);
        reporter.report(SPINES_DONE);

        DetectionResult::new(word_source, words)
            .with_regions(regions)
            .with_spines(spines)
    }
}

impl Default for SpinePipeline {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
