//! The embedding host.
//!
//! Owns the tab strip and the session registry and drives every session from
//! the thread that owns the host window. Background work (exit watching,
//! window resolution, termination, directory cleanup) runs on the tokio
//! runtime and reports back through a channel drained by
//! [`EmbeddingHost::pump`].

mod close;
mod core;
mod events;
mod geometry;
mod input;
mod open;
mod selection;
mod shutdown;
mod types;


pub use core::EmbeddingHost;
pub use types::{EmbedSettings, HostEvent, OpenOutcome};
