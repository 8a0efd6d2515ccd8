//! Scan assessment types
//!
//! `ScanAssessment` is the unit of work: constructed fresh per scan request,
//! fully populated before it is handed to the store, immutable thereafter.

use super::{CertificateReport, DomainAge, SslGrade};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk category derived from the risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskCategory {
    /// Map a clamped risk score to its category.
    /// Boundaries are inclusive on the lower edge of each band.
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => RiskCategory::Critical,
            60..=79 => RiskCategory::High,
            30..=59 => RiskCategory::Medium,
            _ => RiskCategory::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Low => "low",
            RiskCategory::Medium => "medium",
            RiskCategory::High => "high",
            RiskCategory::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of the risk scorer: a bounded score and its category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskAssessment {
    pub risk_score: u8,
    pub risk_category: RiskCategory,
}

/// A complete trustworthiness assessment of one URL
#[derive(Debug, Clone, Serialize)]
pub struct ScanAssessment {
    /// Original string supplied by the caller
    pub input_url: String,
    /// Normalized host, never empty
    pub domain: String,
    pub certificate: CertificateReport,
    pub domain_age: DomainAge,
    /// Risk score in [1,100], higher means more likely unsafe
    pub risk_score: u8,
    pub risk_category: RiskCategory,
    pub security_score: u8,
    pub trust_score: u8,
    pub created_at: DateTime<Utc>,
}

impl ScanAssessment {
    pub fn new(
        input_url: String,
        domain: String,
        certificate: CertificateReport,
        domain_age: DomainAge,
        risk: RiskAssessment,
    ) -> Self {
        Self {
            input_url,
            domain,
            certificate,
            domain_age,
            risk_score: risk.risk_score,
            risk_category: risk.risk_category,
            security_score: 100u8.saturating_sub(risk.risk_score),
            trust_score: 100u8.saturating_sub(risk.risk_score),
            created_at: Utc::now(),
        }
    }
}

/// A persisted assessment together with its record id
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub scan_id: i64,
    pub assessment: ScanAssessment,
}

/// Caller-facing summary of a scan.
///
/// Field names are part of the boundary contract with presentation layers
/// and must stay stable.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    pub scan_id: i64,
    pub risk_level: u8,
    pub risk_category: RiskCategory,
    pub ssl_grade: SslGrade,
    pub domain_age: u32,
    pub domain: String,
}

impl ScanOutcome {
    pub fn summary(&self) -> ScanSummary {
        ScanSummary {
            scan_id: self.scan_id,
            risk_level: self.assessment.risk_score,
            risk_category: self.assessment.risk_category,
            ssl_grade: self.assessment.certificate.grade,
            domain_age: self.assessment.domain_age.age_years,
            domain: self.assessment.domain.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_uses_the_boundary_contract_field_names() {
        let certificate = CertificateReport::degraded("unreachable");
        let domain_age = DomainAge::unknown("no answer");
        let assessment = ScanAssessment::new(
            "https://example.com".to_string(),
            "example.com".to_string(),
            certificate,
            domain_age,
            RiskAssessment {
                risk_score: 90,
                risk_category: RiskCategory::Critical,
            },
        );
        let outcome = ScanOutcome {
            scan_id: 7,
            assessment,
        };

        let json = serde_json::to_value(outcome.summary()).unwrap();
        assert_eq!(json["scanId"], 7);
        assert_eq!(json["riskLevel"], 90);
        assert_eq!(json["riskCategory"], "critical");
        assert_eq!(json["sslGrade"], "N/A");
        assert_eq!(json["domainAge"], 0);
        assert_eq!(json["domain"], "example.com");
    }

    #[test]
    fn derived_scores_are_the_clamped_inverse_of_risk() {
        let assessment = ScanAssessment::new(
            "example.com".to_string(),
            "example.com".to_string(),
            CertificateReport::degraded("unreachable"),
            DomainAge::unknown("no answer"),
            RiskAssessment {
                risk_score: 100,
                risk_category: RiskCategory::Critical,
            },
        );
        assert_eq!(assessment.security_score, 0);
        assert_eq!(assessment.trust_score, 0);
    }
}
