//! Launcher configuration.
//!
//! Built once at process start and handed to [`JobLauncher`] by value, so
//! tests construct it directly and never touch the process environment.
//!
//! [`JobLauncher`]: crate::app::JobLauncher

use crate::domain::LaunchError;

/// Environment variable naming the task-definition family to launch.
pub const TASK_DEFINITION_NAME: &'static str = "TASK_DEFINITION_NAME";

/// Environment variables naming the two subnets tasks are placed in.
pub const FARGATE_EXEC_SUBNET_ONE: &'static str = "FARGATE_EXEC_SUBNET_ONE";
pub const FARGATE_EXEC_SUBNET_TWO: &'static str = "FARGATE_EXEC_SUBNET_TWO";

/// LauncherConfig carries everything `invoke` needs besides the event.
///
/// The cluster and task count are fixed for this deployment; only the
/// family and subnets come from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    family_prefix: String,
    subnets: [String; 2],
}

impl LauncherConfig {
    /// Cluster every task is launched on.
    pub const CLUSTER: &'static str = "serverless-deep-dream-dev";

    /// Tasks started per invocation.
    pub const TASK_COUNT: i32 = 1;

    pub fn new(family_prefix: impl Into<String>, subnets: [String; 2]) -> Self {
        Self {
            family_prefix: family_prefix.into(),
            subnets,
        }
    }

    /// Read the configuration from the process environment.
    ///
    /// Fails fast on the first missing variable instead of letting an
    /// undefined subnet reach the run request.
    pub fn from_env() -> Result<Self, LaunchError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but over an injectable lookup.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, LaunchError> {
        let require = |key: &'static str| lookup(key).ok_or(LaunchError::MissingConfig(key));

        Ok(Self {
            family_prefix: require(TASK_DEFINITION_NAME)?,
            subnets: [
                require(FARGATE_EXEC_SUBNET_ONE)?,
                require(FARGATE_EXEC_SUBNET_TWO)?,
            ],
        })
    }

    pub fn family_prefix(&self) -> &str {
        &self.family_prefix
    }

    pub fn subnets(&self) -> &[String; 2] {
        &self.subnets
    }
}
