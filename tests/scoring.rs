use chrono::{Duration, Utc};
use trustscan::models::{CertificateReport, DomainAge, RiskCategory, SslGrade, TlsProtocol};
use trustscan::scoring::score;

fn cert(grade: SslGrade, protocol: TlsProtocol, days_until_expiry: i64) -> CertificateReport {
    let now = Utc::now();
    CertificateReport {
        grade,
        protocol: Some(protocol),
        valid_from: Some(now - Duration::days(90)),
        valid_to: Some(now + Duration::days(days_until_expiry)),
        issuer: Some("Example CA".to_string()),
        subject: Some("example.com".to_string()),
        days_until_expiry: Some(days_until_expiry),
        is_valid: days_until_expiry > 0,
        trust_verified: true,
        error: None,
    }
}

fn age(years: u32) -> DomainAge {
    DomainAge {
        age_years: years,
        created: None,
        registrar: None,
        expires: None,
        error: None,
    }
}

#[test]
fn established_domain_with_good_certificate_is_low_risk() {
    let result = score(&cert(SslGrade::A, TlsProtocol::Tls13, 200), &age(10));
    // zero penalties, clamped up to the scale floor
    assert_eq!(result.risk_score, 1);
    assert_eq!(result.risk_category, RiskCategory::Low);
}

#[test]
fn worst_case_inputs_max_out_the_score() {
    // 50 (F) + 30 (unknown age) + 10 (TLS 1.0) + 10 (expiring in 5 days)
    let result = score(&cert(SslGrade::F, TlsProtocol::Tls10, 5), &age(0));
    assert_eq!(result.risk_score, 100);
    assert_eq!(result.risk_category, RiskCategory::Critical);
}

#[test]
fn degraded_certificate_and_unknown_age_stay_in_bounds() {
    let result = score(
        &CertificateReport::degraded("connection refused"),
        &DomainAge::unknown("lookup failed"),
    );
    // 50 (N/A) + 30 (unknown age) + 10 (no expiry data)
    assert_eq!(result.risk_score, 90);
    assert_eq!(result.risk_category, RiskCategory::Critical);
}

#[test]
fn outdated_protocol_adds_a_secondary_penalty() {
    // 15 (B) + 20 (young domain) + 10 (deprecated protocol)
    let result = score(&cert(SslGrade::B, TlsProtocol::Tls11, 200), &age(1));
    assert_eq!(result.risk_score, 45);
    assert_eq!(result.risk_category, RiskCategory::Medium);
}

#[test]
fn imminent_expiry_adds_a_secondary_penalty() {
    // 30 (C) + 10 (moderately aged domain) + 10 (expiring within 15 days)
    let result = score(&cert(SslGrade::C, TlsProtocol::Tls12, 10), &age(4));
    assert_eq!(result.risk_score, 50);
    assert_eq!(result.risk_category, RiskCategory::Medium);
}

#[test]
fn scoring_is_deterministic() {
    let c = cert(SslGrade::B, TlsProtocol::Tls12, 40);
    let a = age(3);
    assert_eq!(score(&c, &a), score(&c, &a));
}

#[test]
fn category_thresholds_are_inclusive_on_the_lower_edge() {
    assert_eq!(RiskCategory::from_score(1), RiskCategory::Low);
    assert_eq!(RiskCategory::from_score(29), RiskCategory::Low);
    assert_eq!(RiskCategory::from_score(30), RiskCategory::Medium);
    assert_eq!(RiskCategory::from_score(59), RiskCategory::Medium);
    assert_eq!(RiskCategory::from_score(60), RiskCategory::High);
    assert_eq!(RiskCategory::from_score(79), RiskCategory::High);
    assert_eq!(RiskCategory::from_score(80), RiskCategory::Critical);
    assert_eq!(RiskCategory::from_score(100), RiskCategory::Critical);
}

#[test]
fn expired_certificate_grades_f_regardless_of_protocol() {
    assert_eq!(
        SslGrade::from_expiry_and_protocol(-5, Some(TlsProtocol::Tls13)),
        SslGrade::F
    );
    assert_eq!(
        SslGrade::from_expiry_and_protocol(0, Some(TlsProtocol::Tls12)),
        SslGrade::F
    );
}

#[test]
fn outdated_protocol_grades_b_when_not_near_expiry() {
    assert_eq!(
        SslGrade::from_expiry_and_protocol(200, Some(TlsProtocol::Tls11)),
        SslGrade::B
    );
}

#[test]
fn expiring_soon_grades_c_before_protocol_is_considered() {
    assert_eq!(
        SslGrade::from_expiry_and_protocol(20, Some(TlsProtocol::Tls10)),
        SslGrade::C
    );
}

#[test]
fn modern_protocol_with_healthy_expiry_grades_a() {
    assert_eq!(
        SslGrade::from_expiry_and_protocol(200, Some(TlsProtocol::Tls13)),
        SslGrade::A
    );
    assert_eq!(
        SslGrade::from_expiry_and_protocol(30, Some(TlsProtocol::Tls12)),
        SslGrade::A
    );
}
