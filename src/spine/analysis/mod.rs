pub mod pipeline;
pub mod progress;
pub mod result;

pub use pipeline::SpinePipeline;
pub use progress::{ProgressCallback, ProgressReporter};
pub use result::{DetectionResult, WordSource};
