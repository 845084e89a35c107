//! dreamrun-core
//!
//! Core building blocks for the dreamrun job launcher: resolve the newest
//! active task definition for a configured family and start one Fargate task
//! for an incoming image-processing event.
//!
//! # Module layout
//! - **domain**: domain model (JobEvent, ARN newtypes, LaunchError)
//! - **config**: launcher configuration, built once at startup and injected
//! - **ports**: abstraction layer (TaskOrchestrator)
//! - **impls**: implementations (EcsOrchestrator for the AWS control plane)
//! - **app**: application logic (JobLauncher)

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;

pub use self::app::JobLauncher;
pub use self::config::LauncherConfig;
pub use self::domain::{JobEvent, LaunchError, StartedTask, TaskArn, TaskDefinitionArn};
pub use self::impls::EcsOrchestrator;
pub use self::ports::TaskOrchestrator;
