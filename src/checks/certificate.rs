//! Certificate parsing
//!
//! Extracts the validity window and issuer identity from a DER-encoded leaf
//! certificate using x509-parser.

use crate::utils::SslError;
use chrono::{DateTime, TimeZone, Utc};
use x509_parser::prelude::*;

/// Fields extracted from a parsed leaf certificate
#[derive(Debug, Clone)]
pub struct ParsedCertificate {
    /// Subject common name
    pub subject_cn: Option<String>,
    /// First organizationName in the issuer DN, "Unknown" if absent
    pub issuer_org: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
}

impl ParsedCertificate {
    /// Calculate days until expiry (negative if expired)
    pub fn days_until_expiry(&self) -> i64 {
        self.not_after.signed_duration_since(Utc::now()).num_days()
    }

    /// Check if the certificate is currently within its validity window
    pub fn is_time_valid(&self) -> bool {
        let now = Utc::now();
        now >= self.not_before && now <= self.not_after
    }
}

/// Certificate checker and parser
pub struct CertificateChecker;

impl CertificateChecker {
    pub fn new() -> Self {
        Self
    }

    /// Parse a single DER-encoded certificate
    pub fn parse(&self, der: &[u8]) -> Result<ParsedCertificate, SslError> {
        let (_, cert) = X509Certificate::from_der(der).map_err(|e| SslError::ParseError {
            message: format!("{:?}", e),
        })?;

        let issuer_org = cert
            .issuer()
            .iter_organization()
            .next()
            .and_then(|attr| attr.as_str().ok())
            .unwrap_or("Unknown")
            .to_string();

        let subject_cn = cert
            .subject()
            .iter_common_name()
            .next()
            .and_then(|attr| attr.as_str().ok())
            .map(str::to_string);

        let not_before = asn1_time_to_datetime(cert.validity().not_before)?;
        let not_after = asn1_time_to_datetime(cert.validity().not_after)?;

        Ok(ParsedCertificate {
            subject_cn,
            issuer_org,
            not_before,
            not_after,
        })
    }
}

impl Default for CertificateChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert ASN.1 time to chrono DateTime
fn asn1_time_to_datetime(time: ASN1Time) -> Result<DateTime<Utc>, SslError> {
    let timestamp = time.timestamp();
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .ok_or_else(|| SslError::ParseError {
            message: "invalid timestamp in certificate".to_string(),
        })
}
