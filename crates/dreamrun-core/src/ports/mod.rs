//! Ports - abstraction layer.
//!
//! Hexagonal seam between the launcher and the container-orchestration
//! control plane. Production uses the ECS implementation in `impls`; tests
//! substitute a recording fake.

pub mod orchestrator;

pub use self::orchestrator::{
    DefinitionStatus, NetworkConfig, RunTaskRequest, SortOrder, TaskDefinitionQuery,
    TaskOrchestrator,
};
