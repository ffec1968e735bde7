//! Storage backend abstraction.
//!
//! The [`PreferenceStore`] trait is the seam between the worker thread and the
//! persistence format. Each method maps directly to a worker message.

use crate::domain::error::Result;

/// Key under which the theme preference is stored.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Abstraction over persistent preference backends.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): JSON file with atomic writes
pub trait PreferenceStore: Send {
    /// Reads the stored theme preference.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn load_dark_mode(&self) -> Result<Option<bool>>;

    /// Stores the theme preference, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write operation fails.
    fn save_dark_mode(&mut self, dark_mode: bool) -> Result<()>;
}
