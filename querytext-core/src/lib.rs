//! querytext core library: shared domain types, configuration, errors.
//!
//! - [`types`]: [`Substitution`], the position record for tracked literals
//! - [`config`]: [`RenderConfig`] load / save / init
//! - [`error`]: [`ConfigError`]

pub mod config;
pub mod error;
pub mod types;

pub use config::RenderConfig;
pub use error::ConfigError;
pub use types::Substitution;
