//! Custom error types for trustscan
//!
//! Domain-specific error types using `thiserror` for the failure modes of
//! the assessment pipeline. Collaborator errors (`SslError`, `WhoisError`)
//! are converted to degraded results at the checker boundary and never reach
//! the orchestrator; the variants that do surface are invalid input,
//! persistence and configuration problems.

use thiserror::Error;

/// Top-level error type for trustscan
#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("invalid URL: {message}")]
    InvalidInput { message: String },

    #[error("SSL/TLS error: {0}")]
    Ssl(#[from] SslError),

    #[error("WHOIS lookup error: {0}")]
    Whois(#[from] WhoisError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Certificate inspection errors
#[derive(Error, Debug)]
pub enum SslError {
    #[error("TCP connection to {domain}:{port} failed: {message}")]
    ConnectionFailed {
        domain: String,
        port: u16,
        message: String,
    },

    #[error("TCP connection to {domain}:{port} timed out")]
    ConnectTimeout { domain: String, port: u16 },

    #[error("TLS handshake with {domain} failed: {message}")]
    HandshakeFailed { domain: String, message: String },

    #[error("TLS handshake with {domain} timed out")]
    HandshakeTimeout { domain: String },

    #[error("no peer certificate presented by {domain}")]
    NoPeerCertificate { domain: String },

    #[error("failed to parse certificate: {message}")]
    ParseError { message: String },

    #[error("TLS configuration error: {message}")]
    ConfigurationError { message: String },
}

/// Domain-age estimation errors
#[derive(Error, Debug)]
pub enum WhoisError {
    #[error("WHOIS lookup failed for {domain}: {message}")]
    LookupFailed { domain: String, message: String },

    #[error("WHOIS connection timed out for {domain}")]
    Timeout { domain: String },
}

/// Persistence errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to open database: {message}")]
    Open { message: String },

    #[error("failed to save assessment: {message}")]
    Save { message: String },

    #[error("failed to load assessment {id}: {message}")]
    Load { id: i64, message: String },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("failed to parse configuration: {message}")]
    ParseError { message: String },
}

/// Result type alias using ScannerError
pub type Result<T> = std::result::Result<T, ScannerError>;
