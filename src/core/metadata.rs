use serde::Serialize;
use std::path::PathBuf;

/// What the view page tells us before the host is prepended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewPageInfo {
    pub default_filename: String,
    pub xhr_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageDescriptor {
    pub default_filename: String,
    pub xhr_path: String,
    pub metadata_url: String,
}

/// The three values `rtmpdump` needs. Either all are found or none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamSource {
    pub ext: String,
    pub streamer: String,
    pub source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CosmeticMetadata {
    pub title: Option<String>,
    pub date: Option<String>,
    pub part: Option<String>,
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StreamingMetadata {
    pub stream: Option<StreamSource>,
    pub title: Option<String>,
    pub date: Option<String>,
    pub part: Option<String>,
    pub content_type: Option<String>,
}

impl StreamingMetadata {
    pub fn new(stream: Option<StreamSource>, cosmetic: CosmeticMetadata) -> Self {
        Self {
            stream,
            title: cosmetic.title,
            date: cosmetic.date,
            part: cosmetic.part,
            content_type: cosmetic.content_type,
        }
    }
}

/// Everything a single download needs, fixed once the filename is resolved.
#[derive(Debug, Clone, Serialize)]
pub struct DownloadTarget {
    pub page: PageDescriptor,
    pub metadata: StreamingMetadata,
    pub stream: StreamSource,
    pub filename: PathBuf,
}
