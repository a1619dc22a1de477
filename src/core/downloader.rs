use crate::config::Config;
use crate::core::error::{DownloadError, Error, ExtractionError, Result};
use crate::core::reporter::Reporter;
use crate::core::transfer::{TransferRequest, TransferTool};
use crate::core::{DownloadTarget, PageDescriptor, StreamSource, StreamingMetadata};
use crate::extractors::InfoExtractor;
use crate::utils::{format_display_size, sanitize_filename};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

const CLEAR_LINE: &str = "\r                                ";

#[derive(Debug, Clone, Default)]
pub struct DownloadOptions {
    pub overwrite: bool,
    pub resume: bool,
    /// Name the file after the metadata title instead of the page slug.
    pub use_title: bool,
    pub output: Option<PathBuf>,
    /// Print the resolved target as JSON and stop before downloading.
    pub dump_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validating,
    FetchingView,
    FetchingMeta,
    ResolvingFilename,
    Downloading,
    Complete,
}

pub struct DownloadOrchestrator {
    extractor: InfoExtractor,
    tool: Arc<dyn TransferTool>,
    reporter: Arc<dyn Reporter>,
    options: DownloadOptions,
    app_name: String,
    poll_interval: Duration,
}

impl DownloadOrchestrator {
    pub fn new(
        config: &Config,
        extractor: InfoExtractor,
        tool: Arc<dyn TransferTool>,
        reporter: Arc<dyn Reporter>,
        options: DownloadOptions,
    ) -> Self {
        Self {
            extractor,
            tool,
            reporter,
            options,
            app_name: config.app_name.clone(),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
        }
    }

    /// Reports the error on the error stream and hands it back for returning.
    pub fn fail(&self, err: impl Into<Error>) -> Error {
        let err = err.into();
        self.reporter.error(&format!("ERROR: {}", err));
        err
    }

    fn enter(&self, stage: Stage) {
        debug!("Stage: {:?}", stage);
    }

    pub async fn run(&self, url: &str) -> Result<DownloadTarget> {
        // --dump-json never starts the tool, so it does not need one
        if !self.options.dump_json && !self.tool.probe().await {
            return Err(self.fail(DownloadError::ToolUnavailable(self.tool.name().to_string())));
        }

        let target = self.extract(url).await?;
        self.show_video_detail(&target);

        if self.options.dump_json {
            let json = serde_json::to_string_pretty(&target)
                .map_err(|e| self.fail(DownloadError::Io(e.into())))?;
            self.reporter.line(&json);
            return Ok(target);
        }

        self.dump_video(&target).await?;
        self.enter(Stage::Complete);
        self.reporter.line("download complete");
        Ok(target)
    }

    /// Both fetches plus filename resolution.
    pub async fn extract(&self, url: &str) -> Result<DownloadTarget> {
        self.enter(Stage::Validating);
        if !self.extractor.is_eligible(url) {
            return Err(self.fail(ExtractionError::NoVideoInfo));
        }

        self.enter(Stage::FetchingView);
        let page = self
            .extractor
            .get_view_info(url)
            .await
            .map_err(|e| self.fail(e))?
            .ok_or_else(|| self.fail(ExtractionError::NoVideoInfo))?;
        info!("Metadata document: {}", page.metadata_url);

        self.enter(Stage::FetchingMeta);
        let metadata = self
            .extractor
            .get_streaming_meta(&page.metadata_url)
            .await
            .map_err(|e| self.fail(e))?;
        let stream = metadata
            .stream
            .clone()
            .ok_or_else(|| self.fail(ExtractionError::NoStream))?;

        self.enter(Stage::ResolvingFilename);
        let filename = self.resolve_filename(&page, &metadata, &stream);

        Ok(DownloadTarget {
            page,
            metadata,
            stream,
            filename,
        })
    }

    pub fn resolve_filename(
        &self,
        page: &PageDescriptor,
        metadata: &StreamingMetadata,
        stream: &StreamSource,
    ) -> PathBuf {
        if let Some(output) = &self.options.output {
            return output.clone();
        }

        let name = if self.options.use_title {
            let title = metadata
                .title
                .as_deref()
                .map(str::trim)
                .filter(|title| !title.is_empty());
            match title {
                Some(title) => sanitize_filename(title),
                None => {
                    warn!("No title in metadata, using {}", page.default_filename);
                    page.default_filename.clone()
                }
            }
        } else {
            page.default_filename.clone()
        };

        PathBuf::from(format!("{}.{}", name, stream.ext))
    }

    pub fn show_video_detail(&self, target: &DownloadTarget) {
        let meta = &target.metadata;
        let field = |value: &Option<String>| value.clone().unwrap_or_else(|| "unknown".to_string());

        self.reporter
            .line(&format!("File name: {}", target.filename.display()));
        self.reporter.line(&format!("Title: {}", field(&meta.title)));
        self.reporter.line(&format!("Date: {}", field(&meta.date)));
        self.reporter
            .line(&format!("Type: {}", field(&meta.content_type)));
        self.reporter.line(&format!("Part: {}", field(&meta.part)));
    }

    /// Applies the existing-file policy. Resume keeps the file as is.
    async fn prepare_destination(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Ok(());
        }

        if self.options.resume {
            info!("Resuming into existing file {}", path.display());
            return Ok(());
        }

        if self.options.overwrite {
            info!("Removing existing file {}", path.display());
            tokio::fs::remove_file(path)
                .await
                .map_err(|e| self.fail(DownloadError::Io(e)))?;
            return Ok(());
        }

        Err(self.fail(DownloadError::FileExists(path.to_path_buf())))
    }

    fn show_progress(&self, size: u64, done: bool) {
        let line = format!("\r[{}] {}", self.tool.name(), format_display_size(size));
        self.reporter.transient(CLEAR_LINE);
        if done {
            self.reporter.line(&line);
        } else {
            self.reporter.transient(&line);
        }
    }

    pub async fn dump_video(&self, target: &DownloadTarget) -> Result<()> {
        self.enter(Stage::Downloading);
        self.prepare_destination(&target.filename).await?;

        let request = TransferRequest {
            streamer: target.stream.streamer.clone(),
            source: target.stream.source.clone(),
            app: self.app_name.clone(),
            output: target.filename.clone(),
            resume: self.options.resume,
        };
        let mut process = self.tool.spawn(&request).map_err(|e| self.fail(e))?;

        loop {
            match process.try_wait() {
                Ok(Some(_)) => break,
                Ok(None) => {}
                Err(e) => return Err(self.fail(DownloadError::Io(e))),
            }
            if let Some(size) = file_size(&target.filename).await {
                self.show_progress(size, false);
            }
            tokio::time::sleep(self.poll_interval).await;
        }

        let code = process
            .wait()
            .await
            .map_err(|e| self.fail(DownloadError::Io(e)))?;
        if code != 0 {
            return Err(self.fail(DownloadError::Incomplete { code }));
        }

        if let Some(size) = file_size(&target.filename).await {
            self.show_progress(size, true);
        }
        Ok(())
    }
}

async fn file_size(path: &Path) -> Option<u64> {
    tokio::fs::metadata(path).await.ok().map(|m| m.len())
}
