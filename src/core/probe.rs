use crate::core::{ExecutableReport, HttpProbe, ProbeOutcome, ProbeReport, ProbeTarget, Result};
use std::io::Write;
use std::time::Instant;

pub struct ConnectivityProbe<H: HttpProbe, T: ProbeTarget> {
    http: H,
    target: T,
}

impl<H: HttpProbe, T: ProbeTarget> ConnectivityProbe<H, T> {
    pub fn new(http: H, target: T) -> Self {
        Self { http, target }
    }

    pub fn report_environment<W: Write>(&self, out: &mut W) -> Result<ExecutableReport> {
        let executable = ExecutableReport::capture();
        tracing::debug!("Executable path: {}", executable.path.display());
        writeln!(out, "{}", executable)?;
        Ok(executable)
    }

    /// Runs the GET. Every failure is captured into the outcome; nothing escapes.
    pub async fn probe(&self) -> ProbeOutcome {
        let endpoint = self.target.endpoint();
        tracing::debug!("Sending GET to: {}", endpoint);

        match self.http.fetch_status(endpoint).await {
            Ok(status) => {
                if (200..300).contains(&status) {
                    tracing::info!("✅ {} answered with status {}", endpoint, status);
                } else {
                    tracing::warn!("{} answered with non-success status {}", endpoint, status);
                }
                ProbeOutcome::Reachable { status }
            }
            Err(e) => {
                tracing::warn!(
                    "❌ Probe of {} failed (Category: {:?}): {}",
                    endpoint,
                    e.category(),
                    e
                );
                ProbeOutcome::Failed {
                    message: e.user_friendly_message(),
                }
            }
        }
    }

    /// Only failures writing to `out` are returned as errors.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<ProbeReport> {
        let start = Instant::now();

        let executable = self.report_environment(out)?;
        let outcome = self.probe().await;

        for line in outcome.render(self.target.label()) {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;

        let elapsed = start.elapsed();
        tracing::debug!("Probe finished in {:?}", elapsed);

        Ok(ProbeReport {
            executable,
            outcome,
            elapsed,
        })
    }

    /// Like `run`, but a failed write (e.g. a closed stdout pipe) is logged
    /// instead of returned, so the caller can still exit normally.
    pub async fn run_or_log<W: Write>(&self, out: &mut W) -> Option<ProbeReport> {
        match self.run(out).await {
            Ok(report) => Some(report),
            Err(e) => {
                tracing::warn!(
                    "Could not write probe report (Category: {:?}): {}",
                    e.category(),
                    e
                );
                None
            }
        }
    }
}
