use std::ffi::OsString;
use std::path::PathBuf;

pub const SITE_ROOT: &str = "http://videolectures.net";
pub const SITE_HOST: &str = "videolectures.net";

/// Overrides the `rtmpdump` binary location.
pub const RTMPDUMP_ENV: &str = "VIDEOLECTURES_RTMPDUMP";

#[derive(Debug, Clone)]
pub struct Config {
    pub site_root: String,
    pub user_agent: String,
    pub timeout: u64,
    pub rtmpdump_path: PathBuf,
    pub app_name: String,
    pub poll_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_root: SITE_ROOT.to_string(),
            user_agent: format!("videolectures-dl/{}", env!("CARGO_PKG_VERSION")),
            timeout: 30,
            rtmpdump_path: PathBuf::from("rtmpdump"),
            app_name: "vod".to_string(),
            poll_interval_ms: 2000,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self::default().with_rtmpdump_override(std::env::var_os(RTMPDUMP_ENV)))
    }

    /// An unset or empty value keeps the current path.
    pub fn with_rtmpdump_override(mut self, value: Option<OsString>) -> Self {
        if let Some(path) = value.filter(|path| !path.is_empty()) {
            self.rtmpdump_path = PathBuf::from(path);
        }
        self
    }
}
