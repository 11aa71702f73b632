use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{LeadId, LeadSubmission, NotificationStatus};
use super::repository::{
    DeliveryReceipt, LeadNotifier, LeadRecord, LeadRepository, RepositoryError,
};
use super::validation::{ContactGuard, ContactViolation};
use crate::workflows::assessment::{price, price_range, score};

/// Captures questionnaire leads: validates contact details, runs the engine, stores the
/// result, and hands it to sales.
pub struct LeadCaptureService<R, N> {
    guard: ContactGuard,
    repository: Arc<R>,
    notifier: Arc<N>,
    sequence: AtomicU64,
}

impl<R, N> LeadCaptureService<R, N>
where
    R: LeadRepository + 'static,
    N: LeadNotifier + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            guard: ContactGuard,
            repository,
            notifier,
            sequence: AtomicU64::new(1),
        }
    }

    fn next_lead_id(&self) -> LeadId {
        LeadId::from_sequence(self.sequence.fetch_add(1, Ordering::Relaxed))
    }

    /// Validate, score, price, and persist a submission.
    ///
    /// Notification failures are recorded on the lead and never fail the capture. A lead
    /// handed to a background notifier stays `Pending` until the notifier settles it.
    pub fn submit(&self, submission: LeadSubmission) -> Result<LeadRecord, LeadServiceError> {
        let contact = self.guard.validate(submission.contact)?;
        let answers = submission.answers;

        let record = LeadRecord {
            lead_id: self.next_lead_id(),
            contact,
            answers,
            risk: score(&answers),
            pricing: price(&answers),
            price_range: price_range(&answers),
            captured_at: Utc::now(),
            notification: NotificationStatus::Pending,
        };

        let mut stored = self.repository.insert(record)?;
        tracing::info!(
            lead_id = %stored.lead_id.as_str(),
            risk_total = stored.risk.total,
            risk_level = stored.risk.risk_level.label(),
            monthly_total = stored.pricing.monthly_total,
            "captured lead"
        );

        let receipt = DeliveryReceipt::new(stored.lead_id.clone(), self.repository.clone());
        let status = match self.notifier.notify(stored.notification(), &receipt) {
            Ok(status) => status,
            Err(error) => {
                tracing::warn!(
                    lead_id = %stored.lead_id.as_str(),
                    %error,
                    "lead notification failed"
                );
                NotificationStatus::Failed
            }
        };

        if status == NotificationStatus::Pending {
            return Ok(stored);
        }

        stored.notification = status;
        self.repository.update(stored.clone())?;
        Ok(stored)
    }

    pub fn get(&self, lead_id: &LeadId) -> Result<LeadRecord, LeadServiceError> {
        let record = self
            .repository
            .fetch(lead_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn recent(&self, limit: usize) -> Result<Vec<LeadRecord>, LeadServiceError> {
        Ok(self.repository.recent(limit)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LeadServiceError {
    #[error(transparent)]
    Contact(#[from] ContactViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
