use crate::core::error::DownloadError;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use tokio::process::{Child, Command};

/// Arguments for one stream transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub streamer: String,
    pub source: String,
    pub app: String,
    pub output: PathBuf,
    pub resume: bool,
}

impl TransferRequest {
    /// Command line in rtmpdump's argument convention. The output path is
    /// passed through unchanged, even when it is not valid UTF-8.
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-q".into(),
            "-r".into(),
            self.streamer.clone().into(),
            "-y".into(),
            self.source.clone().into(),
            "-a".into(),
            self.app.clone().into(),
            "-o".into(),
            self.output.clone().into_os_string(),
        ];
        if self.resume {
            args.push("-e".into());
        }
        args
    }
}

/// Something able to pull an RTMP stream to a file.
#[async_trait]
pub trait TransferTool: Send + Sync {
    fn name(&self) -> &str;

    /// True if the tool can be started at all.
    async fn probe(&self) -> bool;

    fn spawn(&self, request: &TransferRequest) -> Result<Box<dyn TransferProcess>, DownloadError>;
}

/// A running transfer. Exit codes follow the process convention, 0 is success.
#[async_trait]
pub trait TransferProcess: Send {
    fn try_wait(&mut self) -> std::io::Result<Option<i32>>;

    async fn wait(&mut self) -> std::io::Result<i32>;
}

pub struct RtmpDump {
    path: PathBuf,
}

impl RtmpDump {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TransferTool for RtmpDump {
    fn name(&self) -> &str {
        "rtmpdump"
    }

    async fn probe(&self) -> bool {
        // rtmpdump -h may exit non-zero; being able to start it is enough
        let status = Command::new(&self.path)
            .arg("-h")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match status {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("Probe of {} failed: {}", self.path.display(), e);
                false
            }
        }
    }

    fn spawn(&self, request: &TransferRequest) -> Result<Box<dyn TransferProcess>, DownloadError> {
        let args = request.args();
        tracing::debug!("Running {} {:?}", self.path.display(), args);

        let child = Command::new(&self.path)
            .args(&args)
            .stdin(Stdio::null())
            .spawn()
            .map_err(|e| DownloadError::Spawn(format!("{}: {}", self.path.display(), e)))?;

        Ok(Box::new(ChildProcess { child }))
    }
}

struct ChildProcess {
    child: Child,
}

fn exit_code(status: ExitStatus) -> i32 {
    // killed by a signal
    status.code().unwrap_or(-1)
}

#[async_trait]
impl TransferProcess for ChildProcess {
    fn try_wait(&mut self) -> std::io::Result<Option<i32>> {
        Ok(self.child.try_wait()?.map(exit_code))
    }

    async fn wait(&mut self) -> std::io::Result<i32> {
        Ok(exit_code(self.child.wait().await?))
    }
}
