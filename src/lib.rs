//! pwa-devtools - development utilities for the chess puzzle PWA
//!
//! This library crate backs the `generate-icons` and `dev-server` binaries
//! and exposes their building blocks for integration testing.

pub mod cli;
pub mod config;
pub mod icons;
pub mod logging;
pub mod server;
