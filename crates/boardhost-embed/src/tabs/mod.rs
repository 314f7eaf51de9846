//! The ordered tab strip model. Painting it is the host window's business.

mod operations;
mod types;

pub use types::*;
