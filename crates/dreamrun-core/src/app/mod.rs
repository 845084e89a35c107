//! App - application logic.

pub mod launcher;

pub use self::launcher::JobLauncher;
