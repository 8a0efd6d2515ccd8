use trustscan::models::{CertificateReport, DomainAge, ScanAssessment};
use trustscan::scoring::score;
use trustscan::store::{AssessmentStore, SqliteStore};

fn sample_assessment() -> ScanAssessment {
    let certificate = CertificateReport::degraded("connection refused");
    let domain_age = DomainAge::unknown("no WHOIS answer");
    let risk = score(&certificate, &domain_age);
    ScanAssessment::new(
        "https://example.com".to_string(),
        "example.com".to_string(),
        certificate,
        domain_age,
        risk,
    )
}

#[tokio::test]
async fn stored_assessment_round_trips_by_id() {
    let store = SqliteStore::connect("sqlite::memory:").await.unwrap();
    let assessment = sample_assessment();

    let id = store.save(&assessment).await.unwrap();
    let stored = store.fetch(id).await.unwrap().expect("record should exist");

    assert_eq!(stored.id, id);
    assert_eq!(stored.url, assessment.input_url);
    assert_eq!(stored.domain, assessment.domain);
    assert_eq!(stored.risk_level, assessment.risk_score as i64);
    assert_eq!(stored.risk_category, assessment.risk_category.to_string());
    assert_eq!(stored.ssl_grade, assessment.certificate.grade.as_str());
    assert_eq!(stored.domain_age, assessment.domain_age.age_years as i64);
    assert_eq!(stored.ssl_valid, assessment.certificate.is_valid);
    assert_eq!(stored.security_score, assessment.security_score as i64);
    assert_eq!(stored.trust_score, assessment.trust_score as i64);
    assert_eq!(stored.created_at, assessment.created_at);
}

#[tokio::test]
async fn repeated_fetches_return_identical_records() {
    let store = SqliteStore::connect("sqlite::memory:").await.unwrap();
    let id = store.save(&sample_assessment()).await.unwrap();

    let first = store.fetch(id).await.unwrap().unwrap();
    let second = store.fetch(id).await.unwrap().unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn fetch_returns_none_for_unknown_id() {
    let store = SqliteStore::connect("sqlite::memory:").await.unwrap();
    assert!(store.fetch(42).await.unwrap().is_none());
}

#[tokio::test]
async fn saves_are_append_only_with_increasing_ids() {
    let store = SqliteStore::connect("sqlite::memory:").await.unwrap();
    let first = store.save(&sample_assessment()).await.unwrap();
    let second = store.save(&sample_assessment()).await.unwrap();
    assert!(second > first);

    // the earlier record is untouched by the later write
    assert_eq!(store.fetch(first).await.unwrap().unwrap().id, first);
}
