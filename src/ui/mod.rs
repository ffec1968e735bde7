//! Terminal rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → Canvas → stdout
//! ```
//!
//! - [`viewmodel`]: renderable snapshot of the launcher state
//! - [`renderer`]: entry point that draws a frame
//! - [`components`]: one renderer per screen region
//! - [`helpers`]: the [`Canvas`](helpers::Canvas) buffer and width utilities
//! - [`theme`]: light and dark palettes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_to_string};
pub use theme::Theme;
pub use viewmodel::{
    DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, StatusLine, UIViewModel,
};
