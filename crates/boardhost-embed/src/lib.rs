//! Foreign-process window embedding.
//!
//! Launches external viewer executables, finds their windows and makes them
//! behave like tab content of the host: re-parented child windows or owned
//! overlays kept on top of the tab's content region.

pub mod collaborators;
pub mod focus;
pub mod geometry;
pub mod host;
pub mod keys;
pub mod process;
pub mod resolver;
pub mod session;
pub mod strategy;
pub mod tabs;
pub mod viewer;

#[cfg(test)]
mod testing;

pub use collaborators::{DiscoveryLocator, ExecutableLocator, RecentFiles, RecentFilesList};
pub use host::{EmbedSettings, EmbeddingHost, HostEvent, OpenOutcome};
pub use keys::{KeyDisposition, KeyInput};
pub use process::{Launcher, TokioLauncher};
pub use resolver::{Resolution, RetryPolicy};
pub use session::{EmbeddingSession, SessionRegistry, SessionState};
pub use tabs::{Tab, TabContent, TabStrip};
pub use viewer::{EmbeddingKind, ViewerKind, ViewerProfile};
