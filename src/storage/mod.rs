//! Storage layer for the persisted theme preference.
//!
//! # Modules
//!
//! - `backend`: [`PreferenceStore`] trait
//! - `json`: JSON file implementation with atomic writes
//! - `models`: Storage record types

pub mod backend;
pub mod json;
pub mod models;

pub use backend::{PreferenceStore, DARK_MODE_KEY};
pub use json::JsonStorage;
pub use models::PreferenceRecord;
