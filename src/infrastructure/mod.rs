//! Infrastructure layer - Input sources, configuration and logging

pub mod config;
pub mod logging;
pub mod source;

pub use config::RotationConfig;
pub use logging::init_logging;
pub use source::{CandidateSource, Delimiter, DirectorySource, ReaderSource};
