use std::time::Duration;

use cepfinder_lookup::provider::{apicep, viacep};
use cepfinder_lookup::{AllFailedPolicy, DEFAULT_DEADLINE};

use crate::cli::Cli;

/// Log output format for the tracing subscriber.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

pub struct Config {
    pub timeout: Duration,
    pub viacep_url: String,
    pub apicep_url: String,
    pub all_failed: AllFailedPolicy,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_DEADLINE,
            viacep_url: viacep::BASE_URL.to_string(),
            apicep_url: apicep::BASE_URL.to_string(),
            all_failed: AllFailedPolicy::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from any variable source; unset or unparsable values keep the default.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let timeout = var("CEPFINDER_TIMEOUT_MS")
            .and_then(|ms| ms.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.timeout);
        let viacep_url = var("CEPFINDER_VIACEP_URL").unwrap_or(defaults.viacep_url);
        let apicep_url = var("CEPFINDER_APICEP_URL").unwrap_or(defaults.apicep_url);
        let all_failed = match var("CEPFINDER_FAIL_FAST") {
            Some(flag) if is_truthy(&flag) => AllFailedPolicy::FailFast,
            _ => defaults.all_failed,
        };
        let log_format = match var("CEPFINDER_LOG_FORMAT") {
            Some(format) if format.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => defaults.log_format,
        };

        Self {
            timeout,
            viacep_url,
            apicep_url,
            all_failed,
            log_format,
        }
    }

    /// Command-line flags win over the environment.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(ms) = cli.timeout_ms {
            self.timeout = Duration::from_millis(ms);
        }
        if cli.fail_fast {
            self.all_failed = AllFailedPolicy::FailFast;
        }
        self
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
