//! # jotpad-core
//!
//! Core types, traits, and error taxonomy for jotpad.
//!
//! This crate provides the data structures and repository traits that the
//! database and API crates depend on.

pub mod error;
pub mod logging;
pub mod models;
pub mod tags;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use tags::{normalize_tag_names, parse_tag_list};
pub use traits::*;
