//! WHOIS-based domain-age estimation
//!
//! Queries domain registration data using the `whois-rust` crate with an
//! embedded servers.json TLD map, and derives the domain age from the
//! registry creation date. When no registry answer is available the estimate
//! is an explicit unknown with the reason recorded, never a guess.

use crate::config::settings::WhoisSettings;
use crate::models::DomainAge;
use crate::utils::WhoisError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tracing::{debug, warn};
use whois_rust::{WhoIs, WhoIsLookupOptions};

/// Embedded WHOIS server map for common TLDs
const SERVERS_JSON: &str = include_str!("servers.json");

/// Domain-age estimator
pub struct WhoisChecker {
    settings: WhoisSettings,
}

impl WhoisChecker {
    /// Create a new estimator with the given settings
    pub fn new(settings: WhoisSettings) -> Self {
        Self { settings }
    }

    /// Estimate the age of `domain` from its WHOIS creation date.
    ///
    /// Never fails: lookup or parse problems yield `DomainAge::unknown` with
    /// the reason recorded. The returned age is registry-backed only.
    pub async fn estimate(&self, domain: &str) -> DomainAge {
        let registered = registered_domain(domain);
        match self.lookup(&registered).await {
            Ok(raw) => build_domain_age(&raw),
            Err(e) => {
                warn!(domain = %registered, error = %e, "WHOIS lookup degraded");
                DomainAge::unknown(e.to_string())
            }
        }
    }

    /// Perform the lookup with exponential backoff between attempts.
    /// Retries stay inside the estimator; the orchestrator never retries.
    async fn lookup(&self, domain: &str) -> Result<String, WhoisError> {
        let mut last_error = None;

        for attempt in 0..self.settings.retry_count {
            if attempt > 0 {
                let delay = self.settings.backoff_base() * 2u32.pow(attempt - 1);
                tokio::time::sleep(delay).await;
            }

            match self.do_lookup(domain).await {
                Ok(raw) => return Ok(raw),
                Err(e) => {
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| WhoisError::LookupFailed {
            domain: domain.to_string(),
            message: "unknown error".to_string(),
        }))
    }

    async fn do_lookup(&self, domain: &str) -> Result<String, WhoisError> {
        let domain_owned = domain.to_string();
        let timeout = self.settings.timeout();

        tokio::time::timeout(timeout, async {
            let domain = domain_owned.clone();
            tokio::task::spawn_blocking(move || {
                let whois = WhoIs::from_string(SERVERS_JSON).map_err(|e| {
                    WhoisError::LookupFailed {
                        domain: domain.clone(),
                        message: format!("failed to load WHOIS server map: {e}"),
                    }
                })?;

                let mut options = WhoIsLookupOptions::from_string(&domain).map_err(|e| {
                    WhoisError::LookupFailed {
                        domain: domain.clone(),
                        message: format!("invalid domain: {e}"),
                    }
                })?;
                options.timeout = Some(timeout);

                whois.lookup(options).map_err(|e| WhoisError::LookupFailed {
                    domain,
                    message: e.to_string(),
                })
            })
            .await
            .map_err(|e| WhoisError::LookupFailed {
                domain: domain_owned.clone(),
                message: format!("task join error: {e}"),
            })?
        })
        .await
        .map_err(|_| WhoisError::Timeout {
            domain: domain.to_string(),
        })?
    }
}

/// Build a DomainAge by parsing the raw WHOIS response
fn build_domain_age(raw: &str) -> DomainAge {
    let mut created = None;
    let mut registrar = None;
    let mut expires = None;

    for line in raw.lines() {
        let trimmed = line.trim();
        let lower = trimmed.to_lowercase();

        if created.is_none()
            && (lower.starts_with("creation date:")
                || lower.starts_with("created:")
                || lower.starts_with("created on:")
                || lower.starts_with("registration date:")
                || lower.starts_with("registered on:")
                || lower.starts_with("registration time:"))
        {
            created = value_after_colon(trimmed).filter(|s| !s.is_empty());
        }

        if registrar.is_none()
            && (lower.starts_with("registrar:")
                || lower.starts_with("registrar name:")
                || lower.starts_with("sponsoring registrar:"))
        {
            registrar = value_after_colon(trimmed).filter(|s| !s.is_empty());
        }

        if expires.is_none()
            && (lower.starts_with("registry expiry date:")
                || lower.starts_with("registrar registration expiration date:")
                || lower.starts_with("expiration date:")
                || lower.starts_with("expiry date:")
                || lower.starts_with("expires:")
                || lower.starts_with("expires on:"))
        {
            expires = value_after_colon(trimmed).filter(|s| !s.is_empty());
        }
    }

    let Some(created_raw) = created else {
        return DomainAge::unknown("creation date not found in WHOIS response");
    };

    match parse_registry_date(&created_raw) {
        Some(created_at) => DomainAge {
            age_years: age_in_years(created_at),
            created: Some(created_raw),
            registrar,
            expires,
            error: None,
        },
        None => {
            debug!(value = %created_raw, "unparseable WHOIS creation date");
            let reason = format!("unparseable creation date '{created_raw}'");
            DomainAge {
                age_years: 0,
                created: Some(created_raw),
                registrar,
                expires,
                error: Some(reason),
            }
        }
    }
}

/// Parse the creation timestamp shapes seen across registries
fn parse_registry_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(Utc.from_utc_datetime(&dt));
    }

    // Registries often append a zone name or comment after the timestamp
    let token = value.split_whitespace().next()?;
    if let Ok(dt) = DateTime::parse_from_rfc3339(token) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d", "%d-%b-%Y", "%Y.%m.%d", "%d.%m.%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(token, format) {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|dt| Utc.from_utc_datetime(&dt));
        }
    }

    None
}

/// Age in whole years: floor(days since creation / 365.25)
fn age_in_years(created_at: DateTime<Utc>) -> u32 {
    let days = Utc::now().signed_duration_since(created_at).num_days();
    if days <= 0 {
        return 0;
    }
    (days as f64 / 365.25) as u32
}

/// Extract the registered domain from a full domain name.
/// e.g. "sub.example.com" -> "example.com", "a.example.co.uk" -> "example.co.uk"
fn registered_domain(domain: &str) -> String {
    let domain = domain.trim().trim_end_matches('.');

    let parts: Vec<&str> = domain.split('.').collect();
    if parts.len() <= 2 {
        return domain.to_string();
    }

    // Known two-part TLDs (public suffix approximation)
    let two_part_tlds = [
        "co.uk", "org.uk", "me.uk", "ac.uk", "gov.uk", "co.jp", "or.jp", "ne.jp", "com.au",
        "net.au", "org.au", "co.nz", "co.za", "com.br", "com.mx", "com.cn", "co.in", "co.kr",
        "com.tw", "com.sg", "com.hk", "com.ar", "com.tr", "com.ua", "com.pl",
    ];

    let lower = domain.to_lowercase();
    for tld in &two_part_tlds {
        if lower.ends_with(tld) {
            if parts.len() >= 3 {
                return parts[parts.len() - 3..].join(".");
            }
            return domain.to_string();
        }
    }

    parts[parts.len() - 2..].join(".")
}

/// Extract full value after the first colon (preserving colons in timestamps)
fn value_after_colon(line: &str) -> Option<String> {
    let pos = line.find(':')?;
    Some(line[pos + 1..].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn parses_common_registry_date_shapes() {
        for value in [
            "1997-09-15T04:00:00Z",
            "1997-09-15T04:00:00+00:00",
            "1997-09-15 04:00:00",
            "1997-09-15",
            "15-Sep-1997",
            "1997.09.15",
            "1997-09-15T04:00:00Z (UTC)",
        ] {
            let parsed = parse_registry_date(value);
            assert!(parsed.is_some(), "failed to parse {value:?}");
            assert_eq!(parsed.unwrap().date_naive().to_string(), "1997-09-15");
        }
        assert!(parse_registry_date("not a date").is_none());
        assert!(parse_registry_date("").is_none());
    }

    #[test]
    fn age_is_floored_in_whole_years() {
        let three_years_ago = Utc::now() - Duration::days(1097);
        assert_eq!(age_in_years(three_years_ago), 3);

        let yesterday = Utc::now() - Duration::days(1);
        assert_eq!(age_in_years(yesterday), 0);

        let future = Utc::now() + Duration::days(10);
        assert_eq!(age_in_years(future), 0);
    }

    #[test]
    fn builds_age_from_a_verisign_style_response() {
        let raw = "\
   Domain Name: EXAMPLE.COM\n\
   Registrar: RESERVED-Internet Assigned Numbers Authority\n\
   Creation Date: 1995-08-14T04:00:00Z\n\
   Registry Expiry Date: 2030-08-13T04:00:00Z\n";

        let age = build_domain_age(raw);
        assert!(age.age_years >= 30);
        assert_eq!(age.created.as_deref(), Some("1995-08-14T04:00:00Z"));
        assert_eq!(
            age.registrar.as_deref(),
            Some("RESERVED-Internet Assigned Numbers Authority")
        );
        assert_eq!(age.expires.as_deref(), Some("2030-08-13T04:00:00Z"));
        assert!(age.error.is_none());
    }

    #[test]
    fn missing_creation_date_is_an_explicit_unknown() {
        let age = build_domain_age("Domain Name: EXAMPLE.COM\nRegistrar: Example Registrar\n");
        assert_eq!(age.age_years, 0);
        assert!(age.error.is_some());
    }

    #[test]
    fn unparseable_creation_date_is_an_explicit_unknown() {
        let age = build_domain_age("created: before 1996\n");
        assert_eq!(age.age_years, 0);
        assert!(age.error.is_some());
        assert_eq!(age.created.as_deref(), Some("before 1996"));
    }

    #[test]
    fn extracts_the_registered_domain() {
        assert_eq!(registered_domain("example.com"), "example.com");
        assert_eq!(registered_domain("deep.sub.example.com"), "example.com");
        assert_eq!(registered_domain("shop.example.co.uk"), "example.co.uk");
        assert_eq!(registered_domain("example.co.uk"), "example.co.uk");
    }
}
