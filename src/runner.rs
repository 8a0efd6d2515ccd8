//! Assessment orchestration
//!
//! The standalone engine behind the CLI front end: normalizes the input,
//! runs the certificate and domain-age lookups concurrently, scores the
//! result and hands the finished assessment to the store.

use crate::checks::{SslChecker, WhoisChecker};
use crate::config::Settings;
use crate::models::{CertificateReport, ScanAssessment, ScanOutcome};
use crate::normalize::normalize;
use crate::scoring;
use crate::store::{AssessmentStore, StoredAssessment};
use crate::utils::Result;
use std::sync::Arc;
use tracing::{info, warn};

/// Assessment orchestrator
pub struct Scanner {
    ssl: SslChecker,
    whois: WhoisChecker,
    store: Arc<dyn AssessmentStore>,
}

impl Scanner {
    /// Create a scanner from explicit settings and a persistence collaborator
    pub fn new(settings: Settings, store: Arc<dyn AssessmentStore>) -> Self {
        Self {
            ssl: SslChecker::new(settings.ssl),
            whois: WhoisChecker::new(settings.whois),
            store,
        }
    }

    /// Assess a raw URL end to end.
    ///
    /// Fails only on unparseable input and on persistence problems;
    /// collaborator failures degrade into the assessment instead of
    /// aborting it. A target that resists both lookups still produces a
    /// valid, maximally pessimistic assessment.
    pub async fn assess(&self, raw_url: &str) -> Result<ScanOutcome> {
        let target = normalize(raw_url)?;
        info!(domain = %target.domain, https = target.https, "starting scan");

        let certificate_lookup = async {
            if target.https {
                self.ssl.inspect(&target.domain).await
            } else {
                CertificateReport::insecure_scheme()
            }
        };
        let (certificate, domain_age) =
            tokio::join!(certificate_lookup, self.whois.estimate(&target.domain));

        let risk = scoring::score(&certificate, &domain_age);
        let assessment = ScanAssessment::new(
            raw_url.to_string(),
            target.domain,
            certificate,
            domain_age,
            risk,
        );

        let scan_id = match self.store.save(&assessment).await {
            Ok(id) => id,
            Err(e) => {
                // The computed result must not vanish with the failed write.
                warn!(
                    domain = %assessment.domain,
                    risk_score = assessment.risk_score,
                    risk_category = %assessment.risk_category,
                    ssl_grade = %assessment.certificate.grade,
                    "assessment computed but not persisted"
                );
                return Err(e.into());
            }
        };

        info!(
            scan_id,
            risk_score = assessment.risk_score,
            risk_category = %assessment.risk_category,
            "scan complete"
        );

        Ok(ScanOutcome {
            scan_id,
            assessment,
        })
    }

    /// Fetch a previously stored assessment by its scan id
    pub async fn fetch(&self, scan_id: i64) -> Result<Option<StoredAssessment>> {
        Ok(self.store.fetch(scan_id).await?)
    }
}
