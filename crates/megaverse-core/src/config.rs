//! megaverse.toml configuration parser.
//!
//! Values come from an optional TOML file, then environment variables
//! (`CANDIDATE_ID`, `MEGAVERSE_API`, `MAKE_REQUEST`) override them.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const ENV_CANDIDATE_ID: &str = "CANDIDATE_ID";
pub const ENV_API: &str = "MEGAVERSE_API";
pub const ENV_MAKE_REQUEST: &str = "MAKE_REQUEST";

pub const DEFAULT_BASE_URL: &str = "https://challenge.crossmint.com/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MegaverseConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    pub make_requests: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub candidate_id: Option<String>,
    pub timeout: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchedulerConfig {
    pub max_concurrency: Option<usize>,
    pub base_delay: Option<String>,
    pub max_delay: Option<String>,
    pub max_transient_attempts: Option<u32>,
    pub max_rate_limit_retries: Option<u32>,
    pub jitter: Option<bool>,
}

impl MegaverseConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: MegaverseConfig = toml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Apply overrides from the process environment.
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(id) = non_empty(ENV_CANDIDATE_ID) {
            self.api.candidate_id = Some(id);
        }
        if let Some(url) = non_empty(ENV_API) {
            self.api.base_url = Some(url);
        }
        if let Some(flag) = non_empty(ENV_MAKE_REQUEST) {
            self.make_requests = Some(parse_flag(&flag));
        }
        self
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> String {
        self.api
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }

    pub fn candidate_id(&self) -> anyhow::Result<&str> {
        self.api
            .candidate_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .with_context(|| format!("candidate id not configured (set {ENV_CANDIDATE_ID})"))
    }

    pub fn request_timeout(&self) -> anyhow::Result<Duration> {
        duration_or(self.api.timeout.as_deref(), Duration::from_secs(10), "api.timeout")
    }

    pub fn make_requests(&self) -> bool {
        self.make_requests.unwrap_or(true)
    }
}

impl SchedulerConfig {
    pub fn base_delay(&self) -> anyhow::Result<Duration> {
        duration_or(self.base_delay.as_deref(), Duration::from_secs(1), "scheduler.base_delay")
    }

    pub fn max_delay(&self) -> anyhow::Result<Duration> {
        duration_or(self.max_delay.as_deref(), Duration::from_secs(30), "scheduler.max_delay")
    }
}

fn duration_or(value: Option<&str>, default: Duration, field: &str) -> anyhow::Result<Duration> {
    match value {
        None => Ok(default),
        Some(s) => parse_duration(s).with_context(|| format!("invalid duration for {field}: {s:?}")),
    }
}

/// Parse a duration string like "5s", "500ms", "1m".
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        ms.parse::<u64>().ok().map(Duration::from_millis)
    } else if let Some(secs) = s.strip_suffix('s') {
        secs.parse::<u64>().ok().map(Duration::from_secs)
    } else if let Some(mins) = s.strip_suffix('m') {
        mins.parse::<u64>().ok().map(|m| Duration::from_secs(m * 60))
    } else {
        s.parse::<u64>().ok().map(Duration::from_secs)
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
