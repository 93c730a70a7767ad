use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use super::Scenario;
use crate::config::RunConfig;
use crate::core::{AppError, Result};
use crate::fixtures::ApiFixtures;

/// Result of one scenario after all of its attempts
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub name: &'static str,
    pub attempts: u32,
    pub elapsed: Duration,
    pub result: Result<()>,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a whole run, in scenario order
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<ScenarioOutcome>,
    pub elapsed: Duration,
}

impl RunReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Runs scenarios with bounded parallelism, per-scenario and global time budgets
/// and a whole-scenario retry count for transient failures
pub struct Runner {
    fixtures: Arc<ApiFixtures>,
    run: RunConfig,
}

impl Runner {
    pub fn new(fixtures: ApiFixtures) -> Self {
        let run = fixtures.config.run.clone();
        Self {
            fixtures: Arc::new(fixtures),
            run,
        }
    }

    /// Outcomes come back in scenario order. On global timeout every unfinished
    /// scenario is aborted before the error is returned.
    pub async fn run(&self, scenarios: Vec<Arc<dyn Scenario>>) -> Result<RunReport> {
        let start = Instant::now();
        let total = scenarios.len();
        let semaphore = Arc::new(Semaphore::new(self.run.workers));
        let mut tasks = JoinSet::new();

        for (index, scenario) in scenarios.into_iter().enumerate() {
            let semaphore = semaphore.clone();
            let fixtures = self.fixtures.clone();
            let run = self.run.clone();

            tasks.spawn(async move {
                // Closed semaphore only happens on shutdown; run anyway
                let _permit = semaphore.acquire_owned().await.ok();
                (index, run_scenario(scenario.as_ref(), &fixtures, &run).await)
            });
        }

        let mut slots: Vec<Option<ScenarioOutcome>> = (0..total).map(|_| None).collect();
        let collected = tokio::time::timeout(self.run.global_timeout, async {
            while let Some(joined) = tasks.join_next().await {
                let (index, outcome) = joined
                    .map_err(|e| AppError::setup(format!("scenario task panicked: {}", e)))?;
                slots[index] = Some(outcome);
            }
            Ok::<(), AppError>(())
        })
        .await;

        match collected {
            Ok(result) => result?,
            Err(_) => {
                tasks.abort_all();
                while tasks.join_next().await.is_some() {}

                let finished = slots.iter().flatten().count();
                tracing::error!(finished, total, "global timeout reached, remaining scenarios aborted");
                return Err(AppError::Timeout(format!(
                    "run exceeded global timeout of {:?} ({} of {} scenarios finished)",
                    self.run.global_timeout, finished, total
                )));
            }
        }

        Ok(RunReport {
            outcomes: slots.into_iter().flatten().collect(),
            elapsed: start.elapsed(),
        })
    }
}

async fn run_scenario(
    scenario: &dyn Scenario,
    fixtures: &ApiFixtures,
    run: &RunConfig,
) -> ScenarioOutcome {
    let start = Instant::now();
    let mut attempts = 0;

    let result = loop {
        attempts += 1;
        tracing::info!(scenario = scenario.name(), attempt = attempts, "running scenario");

        let result = match tokio::time::timeout(run.test_timeout, scenario.run(fixtures)).await {
            Ok(result) => result,
            Err(_) => Err(AppError::Timeout(format!(
                "{} exceeded {:?}",
                scenario.name(),
                run.test_timeout
            ))),
        };

        match result {
            Err(e) if e.is_transient() && attempts < run.max_attempts() => {
                tracing::warn!(scenario = scenario.name(), error = %e, "transient failure, retrying");
            }
            other => break other,
        }
    };

    match &result {
        Ok(()) => tracing::info!(scenario = scenario.name(), attempts, "scenario passed"),
        Err(e) => tracing::error!(scenario = scenario.name(), attempts, error = %e, "scenario failed"),
    }

    ScenarioOutcome {
        name: scenario.name(),
        attempts,
        elapsed: start.elapsed(),
        result,
    }
}
