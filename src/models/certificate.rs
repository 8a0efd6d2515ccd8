//! Certificate inspection result types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// TLS protocol versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TlsProtocol {
    Tls10,
    Tls11,
    Tls12,
    Tls13,
}

impl TlsProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            TlsProtocol::Tls10 => "TLS 1.0",
            TlsProtocol::Tls11 => "TLS 1.1",
            TlsProtocol::Tls12 => "TLS 1.2",
            TlsProtocol::Tls13 => "TLS 1.3",
        }
    }

    /// Check if this protocol is deprecated
    pub fn is_deprecated(&self) -> bool {
        matches!(self, TlsProtocol::Tls10 | TlsProtocol::Tls11)
    }
}

impl fmt::Display for TlsProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for TlsProtocol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Letter grade summarizing certificate and protocol health.
///
/// `NotAvailable` means inspection could not be completed (connection,
/// handshake or parse failure); `F` is reserved for definitive negative
/// findings such as an expired certificate or a plain-HTTP target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SslGrade {
    A,
    B,
    C,
    F,
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl SslGrade {
    /// Get the display string for this grade
    pub fn as_str(&self) -> &'static str {
        match self {
            SslGrade::A => "A",
            SslGrade::B => "B",
            SslGrade::C => "C",
            SslGrade::F => "F",
            SslGrade::NotAvailable => "N/A",
        }
    }

    /// Assign a grade from the expiry countdown and negotiated protocol.
    ///
    /// Expiry findings take priority over the protocol version.
    pub fn from_expiry_and_protocol(days_until_expiry: i64, protocol: Option<TlsProtocol>) -> Self {
        if days_until_expiry <= 0 {
            return SslGrade::F;
        }
        if days_until_expiry < 30 {
            return SslGrade::C;
        }
        if matches!(protocol, Some(p) if p.is_deprecated()) {
            return SslGrade::B;
        }
        SslGrade::A
    }

    /// End-user description of what the grade means
    pub fn description(&self) -> &'static str {
        match self {
            SslGrade::A => "Excellent. This site uses up-to-date security.",
            SslGrade::B => "Warning. The security is outdated; be cautious with sensitive data.",
            SslGrade::C => "Warning. The certificate is close to expiry.",
            SslGrade::F => "Danger. This site's security is broken or missing.",
            SslGrade::NotAvailable => "Grade not available.",
        }
    }
}

impl fmt::Display for SslGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of inspecting the certificate presented by a domain.
///
/// Degraded reports (failed connection, handshake or parse) carry the grade
/// `N/A`, no certificate fields and the failure reason in `error`.
#[derive(Debug, Clone, Serialize)]
pub struct CertificateReport {
    pub grade: SslGrade,
    pub protocol: Option<TlsProtocol>,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_to: Option<DateTime<Utc>>,
    pub issuer: Option<String>,
    pub subject: Option<String>,
    pub days_until_expiry: Option<i64>,
    pub is_valid: bool,
    /// Whether the chain verified against the Mozilla root store
    pub trust_verified: bool,
    pub error: Option<String>,
}

impl CertificateReport {
    /// Degraded report: inspection could not be completed
    pub fn degraded(reason: impl Into<String>) -> Self {
        Self {
            grade: SslGrade::NotAvailable,
            protocol: None,
            valid_from: None,
            valid_to: None,
            issuer: None,
            subject: None,
            days_until_expiry: None,
            is_valid: false,
            trust_verified: false,
            error: Some(reason.into()),
        }
    }

    /// Plain-HTTP target: no TLS to inspect, graded F outright
    pub fn insecure_scheme() -> Self {
        let mut report = Self::degraded("plain HTTP target, TLS not attempted");
        report.grade = SslGrade::F;
        report
    }
}
