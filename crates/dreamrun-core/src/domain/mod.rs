//! Domain model (events, ARNs, errors).

pub mod errors;
pub mod event;
pub mod task;

pub use self::errors::LaunchError;
pub use self::event::JobEvent;
pub use self::task::{StartedTask, TaskArn, TaskDefinitionArn};
