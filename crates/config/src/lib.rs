//! Application configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! overrides. Missing files are not an error for the binaries: they fall back
//! to [`AppConfig::default`].

mod config;

pub use config::{
    AppConfig, ConfigError, ProjectionConfig, RenderConfig, TimingConfig, WindowConfig,
};
