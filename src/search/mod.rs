//! Search layer: matching, filtering, and debouncing.
//!
//! Everything here is pure or clock-injected, so the behaviour can be tested
//! without a Zellij host.
//!
//! - [`matcher`]: case-insensitive subsequence predicate
//! - [`filter`]: stable catalog filter driven by the matcher
//! - [`debounce`]: single-slot cancellable debouncer for query input

pub mod debounce;
pub mod filter;
pub mod matcher;

pub use debounce::Debouncer;
pub use filter::{filter, normalize_query};
pub use matcher::{match_positions, matches};
