use crate::config::{Config, SITE_HOST};
use crate::core::{Console, DownloadOptions, DownloadOrchestrator, HttpFetcher, RtmpDump};
use crate::extractors::InfoExtractor;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "videolectures-dl")]
#[command(about = "A command-line program to download videos from videolectures.net")]
#[command(version)]
pub struct Cli {
    /// URL of the video page
    #[arg(value_name = "URL")]
    pub url: String,

    /// Overwrite an existing file
    #[arg(short = 'w', long)]
    pub overwrite: bool,

    /// Resume a partially downloaded file
    #[arg(short = 'c', long = "continue")]
    pub resume: bool,

    /// Use the video title as the filename
    #[arg(short, long)]
    pub title: bool,

    /// Video filename
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the resolved video information as JSON without downloading
    #[arg(long)]
    pub dump_json: bool,

    /// Path to the rtmpdump binary
    #[arg(long, value_name = "PATH")]
    pub rtmpdump: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Cheap filter before any network call: anything not longer than the
    /// bare host name cannot be a video page.
    pub fn url_is_plausible(&self) -> bool {
        self.url.len() > SITE_HOST.len()
    }

    pub fn options(&self) -> DownloadOptions {
        DownloadOptions {
            overwrite: self.overwrite,
            resume: self.resume,
            use_title: self.title,
            output: self.output.clone(),
            dump_json: self.dump_json,
        }
    }

    pub fn config(&self) -> Result<Config> {
        let mut config = Config::load()?;
        if let Some(path) = &self.rtmpdump {
            config.rtmpdump_path = path.clone();
        }
        Ok(config)
    }

    pub async fn run(&self) -> Result<()> {
        let config = self.config()?;

        let fetcher = Arc::new(HttpFetcher::new(&config)?);
        let orchestrator = DownloadOrchestrator::new(
            &config,
            InfoExtractor::new(fetcher),
            Arc::new(RtmpDump::new(config.rtmpdump_path.clone())),
            Arc::new(Console),
            self.options(),
        );

        orchestrator.run(&self.url).await?;
        Ok(())
    }
}
