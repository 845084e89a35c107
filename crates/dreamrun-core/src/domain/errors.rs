//! Launcher error type.

use thiserror::Error;

/// LaunchError covers everything that can abort an invocation.
///
/// Nothing is retried or translated here; a failed step fails the whole
/// invocation and the caller's runtime decides what to do with it.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The event had no usable `imagePath`. Raised before any network call.
    #[error("Missing `imagePath` property")]
    MissingImagePath,

    /// The task-definition lookup matched nothing for the configured family.
    #[error("no active task definition found for family {0}")]
    NoActiveTaskDefinition(String),

    /// The run request was accepted but started zero tasks.
    #[error("run request for {0} started no tasks")]
    NoTasksStarted(String),

    /// Required configuration missing from the environment.
    #[error("missing environment variable {0}")]
    MissingConfig(&'static str),

    /// The orchestration control plane rejected or failed a call.
    #[error("orchestrator call failed: {0}")]
    Orchestrator(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl LaunchError {
    /// Wrap an upstream service error, preserving it as the source.
    pub fn orchestrator(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Orchestrator(Box::new(err))
    }
}
