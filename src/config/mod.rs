//! Configuration module for cardcycle
//!
//! - XDG-compliant path resolution
//! - User settings and preferences persistence

pub mod paths;
pub mod settings;

pub use paths::CardCyclePaths;
pub use settings::{Preferences, Settings};
