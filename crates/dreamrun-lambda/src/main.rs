//! Lambda entrypoint: wire configuration and the ECS orchestrator into the
//! launcher once at cold start, then serve invocations.

use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::info;

use dreamrun_core::{EcsOrchestrator, JobEvent, JobLauncher, LauncherConfig};

async fn handler(
    launcher: Arc<JobLauncher<EcsOrchestrator>>,
    event: LambdaEvent<JobEvent>,
) -> Result<Value, Error> {
    let enriched = launcher.invoke(event.payload).await?;
    Ok(enriched.into_value())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::tracing::init_default_subscriber();

    let config = LauncherConfig::from_env()?;
    info!(family = config.family_prefix(), "launcher configured");

    let orchestrator = EcsOrchestrator::from_env().await;
    let launcher = Arc::new(JobLauncher::new(config, orchestrator));

    run(service_fn(move |event| handler(launcher.clone(), event))).await
}
