//! Configuration system for tree9s
//!
//! YAML configuration resolved from platform-appropriate directories, with
//! environment overrides layered on top.
//!
//! Structure:
//! - `schema.rs` - Configuration types
//! - `defaults.rs` - Built-in default values
//! - `paths.rs` - Directory resolution
//! - `loader.rs` - Loading, merging, validation, saving

pub mod defaults;
pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{Config, LoggerConfig, StatusColors, UiConfig};
