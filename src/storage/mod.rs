//! Storage
//!
//! Path resolution, containment checks, and directory probing.

pub mod probe;
pub mod resolve;

pub use probe::has_match_except;
pub use resolve::{clean_name, resolve_name};
