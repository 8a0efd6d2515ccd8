//! URL normalization
//!
//! Parses a raw user-supplied string into a canonical domain: scheme
//! defaulting to `https://`, a single leading `www.` label stripped, and an
//! empty host rejected rather than silently defaulted.

use crate::utils::ScannerError;
use url::Url;

/// A normalized scan target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Canonical host, never empty
    pub domain: String,
    /// Whether the input used (or defaulted to) the https scheme
    pub https: bool,
}

/// Normalize a raw URL string into a scan target.
pub fn normalize(raw: &str) -> Result<Target, ScannerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ScannerError::InvalidInput {
            message: "URL is required".to_string(),
        });
    }

    let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let parsed = Url::parse(&candidate).map_err(|e| ScannerError::InvalidInput {
        message: format!("{trimmed}: {e}"),
    })?;

    let host = parsed.host_str().ok_or_else(|| ScannerError::InvalidInput {
        message: format!("no host in '{trimmed}'"),
    })?;

    let domain = host.strip_prefix("www.").unwrap_or(host);
    if domain.is_empty() {
        return Err(ScannerError::InvalidInput {
            message: format!("empty host in '{trimmed}'"),
        });
    }

    Ok(Target {
        domain: domain.to_string(),
        https: parsed.scheme() == "https",
    })
}
