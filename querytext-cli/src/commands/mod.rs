pub mod config;
pub mod render;

/// Context attached to every command that needs a readable config file.
pub const CONFIG_LOAD_FAILED: &str = "failed to load querytext config";
