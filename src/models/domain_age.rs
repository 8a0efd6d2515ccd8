//! Domain registration age types

use serde::Serialize;

/// Domain-age estimate derived from registry data.
///
/// `age_years == 0` signals "unknown". There is no heuristic fallback: when
/// the registry gives no usable creation date, the estimate is explicitly
/// unknown with the reason recorded, never a fabricated number.
#[derive(Debug, Clone, Serialize)]
pub struct DomainAge {
    pub age_years: u32,
    pub created: Option<String>,
    pub registrar: Option<String>,
    pub expires: Option<String>,
    pub error: Option<String>,
}

impl DomainAge {
    /// Explicit unknown-age result with the failure reason
    pub fn unknown(reason: impl Into<String>) -> Self {
        Self {
            age_years: 0,
            created: None,
            registrar: None,
            expires: None,
            error: Some(reason.into()),
        }
    }

    /// Whether the age is backed by a registry creation date
    pub fn is_known(&self) -> bool {
        self.age_years > 0 || (self.created.is_some() && self.error.is_none())
    }
}
