// Contract smoke suite
//
// A fixed set of scenarios the `booker-contract` binary runs against the
// configured service, with the run configuration's time budgets, worker
// count and retry policy applied.

use async_trait::async_trait;

use crate::core::Result;
use crate::fixtures::ApiFixtures;

pub mod runner;
pub mod scenarios;

pub use runner::{RunReport, Runner, ScenarioOutcome};
pub use scenarios::default_scenarios;

/// Named async contract check
#[async_trait]
pub trait Scenario: Send + Sync {
    fn name(&self) -> &'static str;

    async fn run(&self, fixtures: &ApiFixtures) -> Result<()>;
}
