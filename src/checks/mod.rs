//! Check modules for trustscan
//!
//! This module contains the collaborator lookups the orchestrator fuses:
//! live certificate inspection and WHOIS-based domain-age estimation.

pub mod certificate;
pub mod ssl;
pub mod whois;

pub use certificate::CertificateChecker;
pub use ssl::SslChecker;
pub use whois::WhoisChecker;
