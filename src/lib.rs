pub mod cli;
pub mod config;
pub mod core;
pub mod extractors;
pub mod utils;

pub use crate::core::{DownloadOrchestrator, DownloadTarget, PageDescriptor, StreamingMetadata};
pub use extractors::InfoExtractor;
