//! Terminal and JSON presentation of assessments

use crate::models::{RiskCategory, ScanOutcome};
use crate::store::StoredAssessment;
use crate::utils::Result;
use console::style;

/// Print any serializable value as pretty JSON
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn styled_category(category: RiskCategory) -> console::StyledObject<&'static str> {
    match category {
        RiskCategory::Low => style(category.as_str()).green(),
        RiskCategory::Medium => style(category.as_str()).yellow(),
        RiskCategory::High => style(category.as_str()).red(),
        RiskCategory::Critical => style(category.as_str()).red().bold(),
    }
}

/// Print a fresh scan outcome
pub fn print_outcome(outcome: &ScanOutcome) {
    let assessment = &outcome.assessment;
    println!(
        "\n{}",
        style(format!("Scan #{} - {}", outcome.scan_id, assessment.domain))
            .cyan()
            .bold()
    );

    println!(
        "  Risk score:     {} ({})",
        style(assessment.risk_score).bold(),
        styled_category(assessment.risk_category)
    );
    println!(
        "  SSL grade:      {} - {}",
        style(assessment.certificate.grade.as_str()).bold(),
        assessment.certificate.grade.description()
    );

    if let Some(protocol) = assessment.certificate.protocol {
        println!("  Protocol:       {}", protocol);
    }
    if let Some(ref issuer) = assessment.certificate.issuer {
        println!("  Issuer:         {}", issuer);
    }
    if let Some(days) = assessment.certificate.days_until_expiry {
        if days < 0 {
            println!(
                "  Expiry:         {}",
                style(format!("expired {} days ago", -days)).red()
            );
        } else {
            println!("  Expiry:         in {} days", days);
        }
    }
    if let Some(ref error) = assessment.certificate.error {
        println!("  Certificate:    {}", style(error).yellow());
    }

    if assessment.domain_age.age_years > 0 {
        println!(
            "  Domain age:     {} years",
            assessment.domain_age.age_years
        );
    } else {
        let reason = assessment
            .domain_age
            .error
            .as_deref()
            .unwrap_or("less than a year, or unknown");
        println!("  Domain age:     {}", style(format!("unknown ({reason})")).yellow());
    }
    if let Some(ref registrar) = assessment.domain_age.registrar {
        println!("  Registrar:      {}", registrar);
    }

    println!("  Security score: {}", assessment.security_score);
    println!("  Trust score:    {}", assessment.trust_score);
}

/// Print a stored assessment fetched by id
pub fn print_stored(record: &StoredAssessment) {
    println!(
        "\n{}",
        style(format!("Scan #{} - {}", record.id, record.domain))
            .cyan()
            .bold()
    );
    println!("  URL:            {}", record.url);
    println!("  Risk score:     {} ({})", record.risk_level, record.risk_category);
    println!("  SSL grade:      {}", record.ssl_grade);
    println!("  Domain age:     {} years", record.domain_age);
    println!("  Security score: {}", record.security_score);
    println!("  Trust score:    {}", record.trust_score);
    println!("  Scanned at:     {}", record.created_at.format("%Y-%m-%d %H:%M:%S UTC"));
}
