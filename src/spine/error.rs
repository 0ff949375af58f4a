use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpineError {
    #[error("Failed to load image content")]
    ImageLoad {
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to prepare image for recognition")]
    ImagePrepare {
        #[from]
        source: crate::utils::error::ImageError,
    },

    #[error("Processing failed")]
    ProcessingFailed {
        #[source]
        source: crate::recognition::RecognitionError,
    },
}

impl From<crate::recognition::RecognitionError> for SpineError {
    fn from(source: crate::recognition::RecognitionError) -> Self {
        SpineError::ProcessingFailed { source }
    }
}
