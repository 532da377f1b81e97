use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const SUCCESS_MESSAGE: &str = "Success! Request library is working.";

/// Location of the executable running this process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutableReport {
    pub path: PathBuf,
}

impl ExecutableReport {
    /// Reads the path from the runtime, falling back to `argv[0]` when the
    /// platform cannot report it.
    pub fn capture() -> Self {
        Self::resolve(std::env::current_exe(), std::env::args_os().next())
    }

    pub fn resolve(current_exe: std::io::Result<PathBuf>, argv0: Option<OsString>) -> Self {
        let path = match current_exe {
            Ok(path) if !path.as_os_str().is_empty() => path,
            Ok(_) => Self::fallback(argv0),
            Err(e) => {
                tracing::warn!("current_exe unavailable ({}), falling back to argv[0]", e);
                Self::fallback(argv0)
            }
        };
        Self { path }
    }

    fn fallback(argv0: Option<OsString>) -> PathBuf {
        argv0
            .filter(|arg| !arg.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("<unknown>"))
    }
}

impl fmt::Display for ExecutableReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Executable: {}", self.path.display())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// A response arrived. Any status counts, including 4xx and 5xx.
    Reachable { status: u16 },
    Failed { message: String },
}

impl ProbeOutcome {
    pub fn is_reachable(&self) -> bool {
        matches!(self, ProbeOutcome::Reachable { .. })
    }

    pub fn render(&self, label: &str) -> Vec<String> {
        match self {
            ProbeOutcome::Reachable { status } => vec![
                format!("{} Status: {}", label, status),
                SUCCESS_MESSAGE.to_string(),
            ],
            ProbeOutcome::Failed { message } => vec![message.clone()],
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProbeReport {
    pub executable: ExecutableReport,
    pub outcome: ProbeOutcome,
    pub elapsed: Duration,
}
