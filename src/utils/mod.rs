//! Utility modules for trustscan

pub mod error;

pub use error::{ConfigError, Result, ScannerError, SslError, StoreError, WhoisError};
