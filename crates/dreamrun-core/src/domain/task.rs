//! Strongly-typed task identifiers.
//!
//! ARNs are opaque handles minted by the orchestration control plane. We
//! never parse them, only carry them, but distinct newtypes keep a task
//! definition revision from being confused with a running task.

use serde::{Deserialize, Serialize};
use std::fmt;

/// TaskDefinitionArn names one revision of a job's run specification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskDefinitionArn(String);

impl TaskDefinitionArn {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskDefinitionArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// TaskArn is the unique handle of one live task run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskArn(String);

impl TaskArn {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One task entry from a run response.
///
/// The control plane returns more per-task detail than we consume; the
/// launcher only needs the handle, so that is all we model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartedTask {
    task_arn: TaskArn,
}

impl StartedTask {
    pub fn new(task_arn: TaskArn) -> Self {
        Self { task_arn }
    }

    pub fn task_arn(&self) -> &TaskArn {
        &self.task_arn
    }

    pub fn into_task_arn(self) -> TaskArn {
        self.task_arn
    }
}
