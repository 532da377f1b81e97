use crate::domain::ports::ProbeTarget;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use clap::Parser;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.github.com";
pub const DEFAULT_LABEL: &str = "GitHub";

#[derive(Debug, Clone, Parser)]
#[command(name = "env-probe")]
#[command(about = "Print the running executable and check outbound HTTPS connectivity")]
#[command(version)]
pub struct ProbeConfig {
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, default_value = DEFAULT_LABEL, help = "Name shown on the status line")]
    pub label: String,

    #[arg(long, help = "Request timeout in seconds (library default when omitted)")]
    pub timeout_secs: Option<u64>,

    #[arg(long, help = "Enable verbose output on stderr")]
    pub verbose: bool,
}

impl ProbeConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            label: DEFAULT_LABEL.to_string(),
            timeout_secs: None,
            verbose: false,
        }
    }
}

impl Validate for ProbeConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_non_empty_string("label", &self.label)?;
        if let Some(secs) = self.timeout_secs {
            validate_positive_number("timeout_secs", secs, 1)?;
        }
        Ok(())
    }
}

impl ProbeTarget for ProbeConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn label(&self) -> &str {
        &self.label
    }
}
