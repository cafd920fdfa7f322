//! Launch
//!
//! Platform dispatch for revealing a directory in the native file manager.

pub mod opener;

pub use opener::{FolderOpener, SystemOpener};
