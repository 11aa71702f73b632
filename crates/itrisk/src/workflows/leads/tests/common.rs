use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::assessment::domain::{
    Answer, AssessmentInput, BackupFrequency, BusinessSize, Industry, IssueFrequency, LastAudit,
    ResponseNeed,
};
use crate::workflows::leads::domain::{ContactDetails, LeadId, LeadSubmission, NotificationStatus};
use crate::workflows::leads::repository::{
    DeliveryReceipt, LeadNotification, LeadNotifier, LeadRecord, LeadRepository, NotifyError,
    RepositoryError,
};
use crate::workflows::leads::{lead_router, LeadCaptureService};

pub(super) fn contact() -> ContactDetails {
    ContactDetails {
        name: "Dana Whitfield".to_string(),
        email: "dana@whitfield-legal.com".to_string(),
        company: "Whitfield Legal".to_string(),
        phone: Some("515-555-0142".to_string()),
    }
}

pub(super) fn answers() -> AssessmentInput {
    AssessmentInput {
        business_size: BusinessSize::SixToTwenty,
        industry: Industry::Legal,
        sensitive_data: Answer::Yes,
        internal_it: Answer::No,
        mfa_enabled: Answer::Partially,
        endpoint_protection: Answer::Yes,
        data_regulations: Answer::Yes,
        last_audit: LastAudit::OverAYearAgo,
        backup_frequency: BackupFrequency::Weekly,
        it_issues: IssueFrequency::Weekly,
        response_needed: ResponseNeed::WithinAnHour,
    }
}

pub(super) fn submission() -> LeadSubmission {
    LeadSubmission {
        contact: contact(),
        answers: answers(),
    }
}

pub(super) fn missing_company_submission() -> LeadSubmission {
    let mut submission = submission();
    submission.contact.company = "  ".to_string();
    submission
}

pub(super) fn build_service() -> (
    LeadCaptureService<MemoryRepository, MemoryNotifier>,
    Arc<MemoryRepository>,
    Arc<MemoryNotifier>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service = LeadCaptureService::new(repository.clone(), notifier.clone());
    (service, repository, notifier)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<LeadId, LeadRecord>>>,
    order: Arc<Mutex<Vec<LeadId>>>,
}

impl LeadRepository for MemoryRepository {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.lead_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.lead_id.clone(), record.clone());
        self.order
            .lock()
            .expect("repository mutex poisoned")
            .push(record.lead_id.clone());
        Ok(record)
    }

    fn update(&self, record: LeadRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if !guard.contains_key(&record.lead_id) {
            return Err(RepositoryError::NotFound);
        }
        guard.insert(record.lead_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<LeadRecord>, RepositoryError> {
        let records = self.records.lock().expect("repository mutex poisoned");
        let order = self.order.lock().expect("repository mutex poisoned");
        Ok(order
            .iter()
            .rev()
            .filter_map(|id| records.get(id).cloned())
            .take(limit)
            .collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    events: Arc<Mutex<Vec<LeadNotification>>>,
}

impl MemoryNotifier {
    pub(super) fn events(&self) -> Vec<LeadNotification> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

impl LeadNotifier for MemoryNotifier {
    fn notify(
        &self,
        notification: LeadNotification,
        _receipt: &DeliveryReceipt,
    ) -> Result<NotificationStatus, NotifyError> {
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(notification);
        Ok(NotificationStatus::Delivered)
    }
}

pub(super) struct OfflineNotifier;

impl LeadNotifier for OfflineNotifier {
    fn notify(
        &self,
        _notification: LeadNotification,
        _receipt: &DeliveryReceipt,
    ) -> Result<NotificationStatus, NotifyError> {
        Err(NotifyError::Transport("connection refused".to_string()))
    }
}

/// Queues receipts so tests can settle delivery after `submit` returns.
#[derive(Default, Clone)]
pub(super) struct DeferredNotifier {
    receipts: Arc<Mutex<Vec<DeliveryReceipt>>>,
}

impl DeferredNotifier {
    pub(super) fn take_receipts(&self) -> Vec<DeliveryReceipt> {
        std::mem::take(&mut *self.receipts.lock().expect("notifier mutex poisoned"))
    }
}

impl LeadNotifier for DeferredNotifier {
    fn notify(
        &self,
        _notification: LeadNotification,
        receipt: &DeliveryReceipt,
    ) -> Result<NotificationStatus, NotifyError> {
        self.receipts
            .lock()
            .expect("notifier mutex poisoned")
            .push(receipt.clone());
        Ok(NotificationStatus::Pending)
    }
}

/// Stores company names upper-cased, the way a CRM-backed store might.
#[derive(Default, Clone)]
pub(super) struct NormalizingRepository {
    inner: MemoryRepository,
}

impl LeadRepository for NormalizingRepository {
    fn insert(&self, mut record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        record.contact.company = record.contact.company.to_uppercase();
        self.inner.insert(record)
    }

    fn update(&self, record: LeadRecord) -> Result<(), RepositoryError> {
        self.inner.update(record)
    }

    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        self.inner.fetch(id)
    }

    fn recent(&self, limit: usize) -> Result<Vec<LeadRecord>, RepositoryError> {
        self.inner.recent(limit)
    }
}

pub(super) struct ConflictRepository;

impl LeadRepository for ConflictRepository {
    fn insert(&self, _record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: LeadRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<LeadRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl LeadRepository for UnavailableRepository {
    fn insert(&self, _record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: LeadRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<LeadRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn lead_router_with_service(
    service: LeadCaptureService<MemoryRepository, MemoryNotifier>,
) -> axum::Router {
    lead_router(Arc::new(service))
}
