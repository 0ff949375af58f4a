use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecognitionError {
    #[error("Recognition engine unavailable: {message}")]
    EngineUnavailable { message: String },

    #[error("Recognition failed: {operation}")]
    EngineFailed { operation: String, message: String },

    #[error("Recognition engine I/O error")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Unreadable engine output: {message}")]
    InvalidOutput { message: String },
}
