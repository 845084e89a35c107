//! TaskOrchestrator port - the container-orchestration control plane.
//!
//! The trait mirrors the two control-plane calls the launcher makes, with
//! explicit request structs so tests can capture and assert every argument
//! that goes over the wire.

use async_trait::async_trait;

use crate::domain::{LaunchError, StartedTask, TaskDefinitionArn};

/// Revision status filter for task-definition lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionStatus {
    Active,
    Inactive,
}

/// Sort direction for task-definition lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Arguments of a task-definition lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDefinitionQuery {
    pub family_prefix: String,
    pub status: DefinitionStatus,
    pub sort: SortOrder,
    pub max_results: i32,
}

impl TaskDefinitionQuery {
    /// Query for the single newest active revision of a family.
    pub fn latest_active(family_prefix: impl Into<String>) -> Self {
        Self {
            family_prefix: family_prefix.into(),
            status: DefinitionStatus::Active,
            sort: SortOrder::Descending,
            max_results: 1,
        }
    }
}

/// Task networking: subnets plus public-IP assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    pub subnets: Vec<String>,
    pub assign_public_ip: bool,
}

/// Arguments of a run-task request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTaskRequest {
    pub task_definition: TaskDefinitionArn,
    pub cluster: String,
    pub count: i32,
    pub network: NetworkConfig,
}

/// TaskOrchestrator resolves task definitions and starts task runs.
///
/// Both calls surface control-plane failures as
/// [`LaunchError::Orchestrator`] with the underlying error as the source;
/// nothing is retried at this layer.
#[async_trait]
pub trait TaskOrchestrator: Send + Sync {
    /// List task-definition ARNs matching the query, in query order.
    async fn list_task_definitions(
        &self,
        query: &TaskDefinitionQuery,
    ) -> Result<Vec<TaskDefinitionArn>, LaunchError>;

    /// Start task instances per the request, returning one entry per
    /// task the control plane actually placed.
    async fn run_task(&self, request: &RunTaskRequest) -> Result<Vec<StartedTask>, LaunchError>;
}
