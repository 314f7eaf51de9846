//! Viewer processes: launching, exit watching, termination and on-disk cleanup.

pub mod cleanup;
mod handle;
mod launcher;

pub use handle::ProcessHandle;
pub use launcher::{ChildProcess, LaunchCommand, Launcher, TokioLauncher};
