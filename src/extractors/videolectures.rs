use crate::config::SITE_ROOT;
use crate::core::error::ExtractionError;
use crate::core::{
    CosmeticMetadata, Fetcher, PageDescriptor, StreamSource, StreamingMetadata, ViewPageInfo,
};
use crate::extractors::rules::{
    META_DATE, META_PART, META_TITLE, META_TYPE, STREAMING_SOURCE, XHR_REQUEST_PATH,
};
use crate::utils::decode_lenient;
use std::sync::Arc;

/// Extracts video information from videolectures.net pages.
///
/// Holds no state between calls apart from the shared fetcher.
pub struct InfoExtractor {
    fetcher: Arc<dyn Fetcher>,
}

impl InfoExtractor {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    /// Literal prefix check. `https://` or another TLD is not accepted.
    pub fn is_eligible(&self, url: &str) -> bool {
        url.starts_with(SITE_ROOT)
    }

    pub async fn fetch_view_page(&self, url: &str) -> Result<String, ExtractionError> {
        self.fetch(url).await
    }

    pub async fn fetch_streaming_meta(&self, meta_url: &str) -> Result<String, ExtractionError> {
        self.fetch(meta_url).await
    }

    async fn fetch(&self, url: &str) -> Result<String, ExtractionError> {
        let bytes = self
            .fetcher
            .fetch(url)
            .await
            .map_err(|e| ExtractionError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        Ok(decode_lenient(&bytes))
    }

    pub fn parse_view_page(&self, body: &str) -> Result<ViewPageInfo, ExtractionError> {
        let xhr_path = XHR_REQUEST_PATH
            .first(body)
            .filter(|path| path.ends_with("xml"))
            .ok_or(ExtractionError::MissingDefaultFilename)?;

        // "/<name>/video/1/smil.xml" -> "<name>"
        let default_filename = xhr_path
            .split('/')
            .nth(1)
            .filter(|name| !name.is_empty())
            .ok_or(ExtractionError::MissingDefaultFilename)?
            .to_string();

        Ok(ViewPageInfo {
            default_filename,
            xhr_path,
        })
    }

    /// Absolute metadata URL. A page without the xhr marker is an error
    /// rather than a URL ending in a placeholder.
    pub fn parse_streaming_path_only(&self, body: &str) -> Result<String, ExtractionError> {
        let xhr_path = XHR_REQUEST_PATH
            .first(body)
            .ok_or(ExtractionError::MissingMetadataPath)?;
        Ok(format!("{}{}", SITE_ROOT, xhr_path))
    }

    pub fn parse_streaming_source(&self, meta_body: &str) -> Option<StreamSource> {
        let captures = STREAMING_SOURCE.captures(meta_body)?;
        Some(StreamSource {
            ext: captures[1].to_string(),
            streamer: captures[2].to_string(),
            source: captures[3].to_string(),
        })
    }

    pub fn parse_cosmetic_metadata(&self, meta_body: &str) -> CosmeticMetadata {
        CosmeticMetadata {
            title: META_TITLE.first(meta_body),
            date: META_DATE.first(meta_body),
            part: META_PART.first(meta_body),
            content_type: META_TYPE.first(meta_body),
        }
    }

    /// `Ok(None)` for a URL outside the site; nothing is fetched in that case.
    pub async fn get_view_info(
        &self,
        url: &str,
    ) -> Result<Option<PageDescriptor>, ExtractionError> {
        if !self.is_eligible(url) {
            tracing::debug!("Not a videolectures.net URL: {}", url);
            return Ok(None);
        }

        let body = self.fetch_view_page(url).await?;
        let info = self.parse_view_page(&body)?;
        let metadata_url = self.parse_streaming_path_only(&body)?;

        Ok(Some(PageDescriptor {
            default_filename: info.default_filename,
            xhr_path: info.xhr_path,
            metadata_url,
        }))
    }

    pub async fn get_streaming_meta(
        &self,
        meta_url: &str,
    ) -> Result<StreamingMetadata, ExtractionError> {
        let body = self.fetch_streaming_meta(meta_url).await?;
        let stream = self.parse_streaming_source(&body);
        let cosmetic = self.parse_cosmetic_metadata(&body);
        Ok(StreamingMetadata::new(stream, cosmetic))
    }
}
