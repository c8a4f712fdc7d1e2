//! Webinar backend
//!
//! This library crate exposes the server, configuration and video streaming
//! for integration testing.

pub mod config;
pub mod server;
pub mod streaming;
