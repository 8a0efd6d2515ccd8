//! Configuration module for trustscan
//!
//! Handles loading and managing configuration from TOML files.

pub mod settings;

pub use settings::{Settings, SslSettings, StoreSettings, WhoisSettings};
