use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{ContactDetails, LeadId, NotificationStatus};
use crate::workflows::assessment::{
    AssessmentInput, PriceRange, PricingResult, RiskLevel, RiskScore,
};

/// Stored lead: contact, answers, and the report that was generated for them.
#[derive(Debug, Clone, Serialize)]
pub struct LeadRecord {
    pub lead_id: LeadId,
    pub contact: ContactDetails,
    pub answers: AssessmentInput,
    pub risk: RiskScore,
    pub pricing: PricingResult,
    pub price_range: PriceRange,
    pub captured_at: DateTime<Utc>,
    pub notification: NotificationStatus,
}

impl LeadRecord {
    pub fn summary_view(&self) -> LeadSummaryView {
        LeadSummaryView {
            lead_id: self.lead_id.clone(),
            company: self.contact.company.clone(),
            risk_total: self.risk.total,
            risk_level: self.risk.risk_level,
            monthly_total: self.pricing.monthly_total,
            annual_total: self.pricing.annual_total,
            notification: self.notification,
            captured_at: self.captured_at,
        }
    }

    pub fn notification(&self) -> LeadNotification {
        LeadNotification {
            lead_id: self.lead_id.clone(),
            contact_name: self.contact.name.clone(),
            email: self.contact.email.clone(),
            company: self.contact.company.clone(),
            industry: self.answers.industry.label(),
            business_size: self.answers.business_size.label(),
            risk_total: self.risk.total,
            risk_level: self.risk.risk_level,
            top_risks: self.risk.summary.top_risks.clone(),
            monthly_total: self.pricing.monthly_total,
            annual_total: self.pricing.annual_total,
            captured_at: self.captured_at,
        }
    }
}

pub trait LeadRepository: Send + Sync {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError>;
    fn update(&self, record: LeadRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError>;
    /// Newest first, at most `limit` records.
    fn recent(&self, limit: usize) -> Result<Vec<LeadRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("lead already exists")]
    Conflict,
    #[error("lead not found")]
    NotFound,
    #[error("lead store unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook that hands a fresh lead to sales (webhook, CRM, or log).
pub trait LeadNotifier: Send + Sync {
    /// Returns the status to record right away. Notifiers that finish delivery in the
    /// background return `Pending` and later settle the lead through `receipt`.
    fn notify(
        &self,
        notification: LeadNotification,
        receipt: &DeliveryReceipt,
    ) -> Result<NotificationStatus, NotifyError>;
}

/// Handle for settling a lead's notification status after capture has returned.
#[derive(Clone)]
pub struct DeliveryReceipt {
    lead_id: LeadId,
    repository: Arc<dyn LeadRepository>,
}

impl DeliveryReceipt {
    pub fn new(lead_id: LeadId, repository: Arc<dyn LeadRepository>) -> Self {
        Self {
            lead_id,
            repository,
        }
    }

    pub fn lead_id(&self) -> &LeadId {
        &self.lead_id
    }

    /// Record the final delivery outcome on the stored lead.
    pub fn settle(&self, status: NotificationStatus) -> Result<LeadRecord, RepositoryError> {
        let mut record = self
            .repository
            .fetch(&self.lead_id)?
            .ok_or(RepositoryError::NotFound)?;
        record.notification = status;
        self.repository.update(record.clone())?;
        Ok(record)
    }
}

impl std::fmt::Debug for DeliveryReceipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeliveryReceipt")
            .field("lead_id", &self.lead_id)
            .finish_non_exhaustive()
    }
}

/// Payload forwarded to the sales team for follow-up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadNotification {
    pub lead_id: LeadId,
    pub contact_name: String,
    pub email: String,
    pub company: String,
    pub industry: &'static str,
    pub business_size: &'static str,
    pub risk_total: u8,
    pub risk_level: RiskLevel,
    pub top_risks: Vec<&'static str>,
    pub monthly_total: u32,
    pub annual_total: u32,
    pub captured_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Public view of a lead returned by the HTTP API.
#[derive(Debug, Clone, Serialize)]
pub struct LeadSummaryView {
    pub lead_id: LeadId,
    pub company: String,
    pub risk_total: u8,
    pub risk_level: RiskLevel,
    pub monthly_total: u32,
    pub annual_total: u32,
    pub notification: NotificationStatus,
    pub captured_at: DateTime<Utc>,
}
