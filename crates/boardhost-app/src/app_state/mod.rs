//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the host window and the embedding engine, and turns
//! window events into engine calls.

mod core;
mod event_handler;
mod init;
mod keyboard;
mod polling;
mod shutdown;
mod title;
mod types;

pub use core::BoardhostApp;
