//! trustscan library
//!
//! Evaluates an end-user-supplied URL and produces a trustworthiness
//! assessment:
//! - URL normalization into a canonical domain
//! - Live TLS certificate inspection and grading
//! - WHOIS-based domain-age estimation
//! - Weighted risk scoring fusing both signals
//! - Persisted assessments retrievable by scan id
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use trustscan::{Scanner, Settings};
//! use trustscan::store::SqliteStore;
//!
//! #[tokio::main]
//! async fn main() -> trustscan::Result<()> {
//!     let store = Arc::new(SqliteStore::connect("sqlite://trustscan.db").await?);
//!     let scanner = Scanner::new(Settings::default(), store);
//!     let outcome = scanner.assess("www.example.com").await?;
//!     println!("{}", outcome.assessment.risk_score);
//!     Ok(())
//! }
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod models;
pub mod normalize;
pub mod output;
pub mod runner;
pub mod scoring;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Settings;
pub use models::{RiskCategory, ScanAssessment, ScanOutcome, SslGrade};
pub use runner::Scanner;
pub use utils::{Result, ScannerError};
