//! Tesseract command-line engine.
//!
//! Runs the `tesseract` executable in TSV mode so every recognized word comes
//! back with its own bounding box and confidence.

use async_trait::async_trait;
use tracing::debug;

use super::engine::{EngineProgress, Recognition, RecognitionEngine};
use super::error::RecognitionError;
use crate::spine::bounds::BoundingBox;
use crate::spine::word::Word;
use crate::utils::config::AppConfig;

/// TSV row level that denotes a single word.
const WORD_LEVEL: &str = "5";
const TSV_COLUMNS: usize = 12;

pub struct TesseractCliEngine {
    binary: String,
}

impl TesseractCliEngine {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.tesseract_binary.as_ref())
    }
}

impl Default for TesseractCliEngine {
    fn default() -> Self {
        Self::new("tesseract")
    }
}

#[async_trait]
impl RecognitionEngine for TesseractCliEngine {
    fn name(&self) -> &str {
        "tesseract"
    }

    async fn recognize(
        &self,
        image_png: &[u8],
        language: &str,
        progress: EngineProgress<'_>,
    ) -> Result<Recognition, RecognitionError> {
        progress(0.0);

        let input = tempfile::Builder::new()
            .prefix("spinescan_")
            .suffix(".png")
            .tempfile()?;
        tokio::fs::write(input.path(), image_png).await?;

        let mut command = tokio::process::Command::new(&self.binary);
        command.arg(input.path()).arg("stdout");
        if !language.is_empty() {
            command.arg("-l").arg(language);
        }
        command.arg("tsv");

        debug!("Running {} on {}", self.binary, input.path().display());
        let output = command.output().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RecognitionError::EngineUnavailable {
                    message: format!("'{}' not found", self.binary),
                }
            } else {
                RecognitionError::Io { source: e }
            }
        })?;

        if !output.status.success() {
            return Err(RecognitionError::EngineFailed {
                operation: "tesseract".to_string(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout =
            String::from_utf8(output.stdout).map_err(|e| RecognitionError::InvalidOutput {
                message: e.to_string(),
            })?;
        let words = parse_tsv(&stdout)?;
        debug!("Tesseract reported {} words", words.len());

        progress(1.0);
        Ok(Recognition::with_words(words))
    }
}

fn parse_field(value: &str, column: &str, line: usize) -> Result<f64, RecognitionError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| RecognitionError::InvalidOutput {
            message: format!("line {}: bad {} value {:?}", line, column, value),
        })
}

/// Parses Tesseract TSV output into words.
///
/// Only word-level rows are kept; rows with a negative confidence or blank
/// text are skipped.
///
/// # Errors
///
/// Returns [`RecognitionError::InvalidOutput`] for truncated rows or
/// non-numeric geometry.
pub fn parse_tsv(tsv: &str) -> Result<Vec<Word>, RecognitionError> {
    let mut words = Vec::new();

    for (index, line) in tsv.lines().enumerate() {
        let line_number = index + 1;
        if line.is_empty() || line.starts_with("level") {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < TSV_COLUMNS - 1 {
            return Err(RecognitionError::InvalidOutput {
                message: format!(
                    "line {}: expected {} columns, got {}",
                    line_number,
                    TSV_COLUMNS,
                    fields.len()
                ),
            });
        }

        if fields[0] != WORD_LEVEL {
            continue;
        }

        let text = fields.get(11).map(|t| t.trim()).unwrap_or_default();
        let confidence = parse_field(fields[10], "conf", line_number)?;
        if text.is_empty() || confidence < 0.0 {
            continue;
        }

        let left = parse_field(fields[6], "left", line_number)?;
        let top = parse_field(fields[7], "top", line_number)?;
        let width = parse_field(fields[8], "width", line_number)?;
        let height = parse_field(fields[9], "height", line_number)?;

        words.push(Word::new(
            text,
            confidence,
            BoundingBox::new(left, top, left + width, top + height),
        ));
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext
1\t1\t0\t0\t0\t0\t0\t0\t640\t480\t-1\t
4\t1\t1\t1\t1\t0\t10\t20\t120\t22\t-1\t
5\t1\t1\t1\t1\t1\t10\t20\t50\t22\t96.5\tHarry
5\t1\t1\t1\t1\t2\t65\t20\t65\t22\t91.25\tPotter
5\t1\t1\t1\t1\t3\t140\t20\t5\t22\t-1\t
5\t1\t1\t1\t1\t4\t150\t20\t10\t22\t40\t
";

    #[test]
    fn test_parse_tsv_keeps_words_only() {
        let words = parse_tsv(SAMPLE).unwrap();
        assert_eq!(words.len(), 2);

        assert_eq!(words[0].text, "Harry");
        assert_eq!(words[0].confidence, 96.5);
        assert_eq!(words[0].bbox, BoundingBox::new(10.0, 20.0, 60.0, 42.0));

        assert_eq!(words[1].text, "Potter");
        assert_eq!(words[1].bbox, BoundingBox::new(65.0, 20.0, 130.0, 42.0));
    }

    #[test]
    fn test_parse_tsv_empty() {
        assert!(parse_tsv("").unwrap().is_empty());
        assert!(parse_tsv("level\tpage_num\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_tsv_truncated_row() {
        let result = parse_tsv("5\t1\t1\n");
        assert!(matches!(
            result,
            Err(RecognitionError::InvalidOutput { .. })
        ));
    }

    #[test]
    fn test_parse_tsv_bad_geometry() {
        let result = parse_tsv("5\t1\t1\t1\t1\t1\tx\t20\t50\t22\t96\tWord\n");
        assert!(matches!(
            result,
            Err(RecognitionError::InvalidOutput { .. })
        ));
    }
}
