use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use trustscan::config::Settings;
use trustscan::models::ScanAssessment;
use trustscan::store::{AssessmentStore, StoredAssessment};
use trustscan::utils::StoreError;
use trustscan::{Scanner, ScannerError};

/// Store double that counts writes
struct RecordingStore {
    saves: AtomicUsize,
}

#[async_trait]
impl AssessmentStore for RecordingStore {
    async fn save(&self, _assessment: &ScanAssessment) -> Result<i64, StoreError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(1)
    }

    async fn fetch(&self, _id: i64) -> Result<Option<StoredAssessment>, StoreError> {
        Ok(None)
    }
}

#[tokio::test]
async fn invalid_input_never_reaches_the_store() {
    let store = Arc::new(RecordingStore {
        saves: AtomicUsize::new(0),
    });
    let scanner = Scanner::new(Settings::default(), store.clone());

    let result = scanner.assess("").await;

    assert!(matches!(result, Err(ScannerError::InvalidInput { .. })));
    assert_eq!(store.saves.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn input_without_a_host_never_reaches_the_store() {
    let store = Arc::new(RecordingStore {
        saves: AtomicUsize::new(0),
    });
    let scanner = Scanner::new(Settings::default(), store.clone());

    let result = scanner.assess("https://").await;

    assert!(matches!(result, Err(ScannerError::InvalidInput { .. })));
    assert_eq!(store.saves.load(Ordering::SeqCst), 0);
}
