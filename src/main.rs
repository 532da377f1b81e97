use clap::Parser;
use env_probe::utils::{logger, validation::Validate};
use env_probe::{ConnectivityProbe, ProbeConfig, ReqwestProbe};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = ProbeConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting env-probe");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let http = ReqwestProbe::new(config.timeout());
    let probe = ConnectivityProbe::new(http, config);

    let mut stdout = std::io::stdout().lock();

    // Probe failures and stdout write errors are both logged; the exit code stays 0.
    if let Some(report) = probe.run_or_log(&mut stdout).await {
        tracing::info!(
            "Probe completed in {:?} (reachable: {})",
            report.elapsed,
            report.outcome.is_reachable()
        );
    }

    Ok(())
}
