//! Risk scoring
//!
//! Pure additive penalty model fusing the certificate and domain-age
//! signals: no I/O, no failure modes, deterministic for identical inputs.
//!
//! Penalties: certificate grade up to 50 points, domain age up to 30,
//! secondary findings (deprecated protocol, imminent expiry) 10 each. The
//! sum is clamped to [1,100] and mapped onto a category.

use crate::models::{CertificateReport, DomainAge, RiskAssessment, RiskCategory, SslGrade};

/// Score a certificate report and domain-age estimate.
pub fn score(cert: &CertificateReport, age: &DomainAge) -> RiskAssessment {
    let mut penalty: u32 = 0;

    penalty += match cert.grade {
        SslGrade::A => 0,
        SslGrade::B => 15,
        SslGrade::C => 30,
        SslGrade::F | SslGrade::NotAvailable => 50,
    };

    penalty += match age.age_years {
        years if years > 5 => 0,
        years if years > 2 => 10,
        years if years > 0 => 20,
        _ => 30,
    };

    if matches!(cert.protocol, Some(p) if p.is_deprecated()) {
        penalty += 10;
    }
    // Missing expiry data counts as imminent: a degraded certificate result
    // must not score better than a verified short-lived one.
    if cert.days_until_expiry.unwrap_or(0) < 15 {
        penalty += 10;
    }

    let risk_score = penalty.clamp(1, 100) as u8;

    RiskAssessment {
        risk_score,
        risk_category: RiskCategory::from_score(risk_score),
    }
}
