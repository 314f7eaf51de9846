//! Embedding sessions and the registry that maps tabs to them.

mod registry;
mod types;

pub(crate) use registry::path_key;
pub use registry::SessionRegistry;
pub use types::{EmbeddingSession, SessionState};
