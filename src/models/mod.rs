//! Data models for trustscan
//!
//! This module contains all the data structures used throughout the
//! assessment pipeline.

pub mod assessment;
pub mod certificate;
pub mod domain_age;

pub use assessment::{RiskAssessment, RiskCategory, ScanAssessment, ScanOutcome, ScanSummary};
pub use certificate::{CertificateReport, SslGrade, TlsProtocol};
pub use domain_age::DomainAge;
