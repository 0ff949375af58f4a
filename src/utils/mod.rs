pub mod box_utils;
pub mod config;
pub mod error;
pub mod image_utils;
pub mod visualization;
