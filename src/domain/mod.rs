//! Domain layer for the Launchpad plugin.
//!
//! Core types that know nothing about Zellij: the [`Application`] entry, the
//! deduplicating [`Catalog`] store, and the error type shared by every layer.
//!
//! # Organization
//!
//! - [`application`]: Application entry model
//! - [`catalog`]: Catalog store with case-insensitive dedup
//! - [`error`]: Error types and result aliases

pub mod application;
pub mod catalog;
pub mod error;

pub use application::Application;
pub use catalog::Catalog;
pub use error::{LauncherError, Result};
