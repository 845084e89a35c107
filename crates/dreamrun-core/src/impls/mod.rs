//! Impls - port implementations.
//!
//! Production implementation of the orchestrator port lives here; the
//! recording fake used by launcher tests lives beside those tests.

pub mod ecs;

pub use self::ecs::EcsOrchestrator;
