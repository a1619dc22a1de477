pub mod downloader;
pub mod error;
pub mod extractor;
pub mod metadata;
pub mod reporter;
pub mod transfer;

pub use downloader::{DownloadOptions, DownloadOrchestrator};
pub use error::{DownloadError, Error, ExtractionError, Result};
pub use extractor::{Fetcher, HttpFetcher};
pub use metadata::{
    CosmeticMetadata, DownloadTarget, PageDescriptor, StreamSource, StreamingMetadata,
    ViewPageInfo,
};
pub use reporter::{Console, Quiet, Reporter};
pub use transfer::{RtmpDump, TransferProcess, TransferRequest, TransferTool};
