//! Embedding strategies: turning a resolved foreign window into part of the host.
//!
//! Both strategies speak only in named [`WindowTrait`]s; the platform layer
//! owns the translation to native style bits.

pub mod child;
pub mod overlay;

use boardhost_common::errors::{EmbedError, PlatformError};
use boardhost_platform::window_system::{ExtendedTrait, WindowTrait};

pub use overlay::OverlayState;

/// Decoration removed from every embedded window.
pub(crate) const CHROME: &[WindowTrait] = &[
    WindowTrait::Caption,
    WindowTrait::Border,
    WindowTrait::ThickFrame,
    WindowTrait::MinimizeBox,
    WindowTrait::MaximizeBox,
    WindowTrait::SystemMenu,
];

/// Extended edge styles removed from every embedded window.
pub(crate) const EDGES: &[ExtendedTrait] = &[
    ExtendedTrait::DialogFrame,
    ExtendedTrait::WindowEdge,
    ExtendedTrait::ClientEdge,
    ExtendedTrait::StaticEdge,
];

/// Tag a native failure with the embedding step it happened in.
pub(crate) fn step<T>(
    name: &'static str,
    result: Result<T, PlatformError>,
) -> Result<T, EmbedError> {
    result.map_err(|source| EmbedError::NativeStep { step: name, source })
}
