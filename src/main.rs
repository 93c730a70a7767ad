use booker_contract::config::Config;
use booker_contract::fixtures::ApiFixtures;
use booker_contract::suite::{default_scenarios, Runner};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("booker_contract={}", config.app.log_level).into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.app.json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Restful Booker contract suite");
    tracing::info!("Target: {}", config.service.base_url);
    tracing::info!(
        "Workers: {}, retries: {}",
        config.run.workers,
        config.run.retries
    );

    // Optional scenario names from the command line narrow the run
    let selected: Vec<String> = std::env::args().skip(1).collect();
    let scenarios: Vec<_> = default_scenarios()
        .into_iter()
        .filter(|s| selected.is_empty() || selected.iter().any(|name| name == s.name()))
        .collect();
    if scenarios.is_empty() {
        anyhow::bail!("no scenario matches {:?}", selected);
    }

    let runner = Runner::new(ApiFixtures::new(config)?);
    let report = runner.run(scenarios).await?;

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(()) => tracing::info!(
                "PASS {} ({} attempt(s), {:?})",
                outcome.name,
                outcome.attempts,
                outcome.elapsed
            ),
            Err(e) => tracing::error!("FAIL {} ({} attempt(s)): {}", outcome.name, outcome.attempts, e),
        }
    }
    tracing::info!(
        "{} passed, {} failed in {:?}",
        report.passed(),
        report.failed(),
        report.elapsed
    );

    if !report.is_success() {
        anyhow::bail!("{} of {} scenarios failed", report.failed(), report.outcomes.len());
    }
    Ok(())
}
