//! Lead capture: contact validation, persistence, and sales notification for completed
//! questionnaires.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{ContactDetails, LeadId, LeadSubmission, NotificationStatus};
pub use repository::{
    DeliveryReceipt, LeadNotification, LeadNotifier, LeadRecord, LeadRepository, LeadSummaryView,
    NotifyError, RepositoryError,
};
pub use router::lead_router;
pub use service::{LeadCaptureService, LeadServiceError};
pub use validation::{ContactGuard, ContactViolation};
