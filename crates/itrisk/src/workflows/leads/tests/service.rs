use super::common::*;
use crate::workflows::assessment::{price, price_range, score, RiskLevel};
use crate::workflows::leads::domain::{LeadId, NotificationStatus};
use crate::workflows::leads::repository::{DeliveryReceipt, LeadRepository, RepositoryError};
use crate::workflows::leads::validation::ContactViolation;
use crate::workflows::leads::{LeadCaptureService, LeadServiceError};
use std::sync::Arc;

#[test]
fn submit_scores_prices_and_notifies() {
    let (service, repository, notifier) = build_service();

    let record = service.submit(submission()).expect("submission succeeds");

    assert_eq!(record.lead_id, LeadId("lead-000001".to_string()));
    assert_eq!(record.risk, score(&answers()));
    assert_eq!(record.pricing, price(&answers()));
    assert_eq!(record.price_range, price_range(&answers()));
    assert_eq!(record.notification, NotificationStatus::Delivered);

    let stored = repository
        .fetch(&record.lead_id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored.notification, NotificationStatus::Delivered);

    let events = notifier.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].lead_id, record.lead_id);
    assert_eq!(events[0].company, "Whitfield Legal");
    assert_eq!(events[0].industry, "Legal");
    assert_eq!(events[0].monthly_total, record.pricing.monthly_total);
}

#[test]
fn submit_assigns_sequential_ids() {
    let (service, _, _) = build_service();

    let first = service.submit(submission()).expect("first succeeds");
    let second = service.submit(submission()).expect("second succeeds");

    assert_eq!(first.lead_id.as_str(), "lead-000001");
    assert_eq!(second.lead_id.as_str(), "lead-000002");
}

#[test]
fn submit_propagates_contact_violations() {
    let (service, repository, notifier) = build_service();

    match service.submit(missing_company_submission()) {
        Err(LeadServiceError::Contact(ContactViolation::MissingCompany)) => {}
        other => panic!("expected contact violation, got {other:?}"),
    }

    assert!(repository.recent(10).expect("recent succeeds").is_empty());
    assert!(notifier.events().is_empty());
}

#[test]
fn notifier_failure_is_recorded_without_failing_capture() {
    let repository = Arc::new(MemoryRepository::default());
    let service = LeadCaptureService::new(repository.clone(), Arc::new(OfflineNotifier));

    let record = service.submit(submission()).expect("capture still succeeds");

    assert_eq!(record.notification, NotificationStatus::Failed);
    let stored = service.get(&record.lead_id).expect("lead stored");
    assert_eq!(stored.notification, NotificationStatus::Failed);
    assert_eq!(stored.summary_view().notification.label(), "failed");
}

#[test]
fn repository_failures_propagate() {
    let service = LeadCaptureService::new(
        Arc::new(UnavailableRepository),
        Arc::new(MemoryNotifier::default()),
    );

    match service.submit(submission()) {
        Err(LeadServiceError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected unavailable repository, got {other:?}"),
    }
}

#[test]
fn get_propagates_not_found() {
    let (service, _, _) = build_service();

    match service.get(&LeadId("lead-999999".to_string())) {
        Err(LeadServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found error, got {other:?}"),
    }
}

#[test]
fn recent_returns_newest_first() {
    let (service, _, _) = build_service();
    for _ in 0..3 {
        service.submit(submission()).expect("submission succeeds");
    }

    let ids: Vec<String> = service
        .recent(2)
        .expect("recent succeeds")
        .into_iter()
        .map(|record| record.lead_id.0)
        .collect();
    assert_eq!(ids, vec!["lead-000003", "lead-000002"]);
}

#[test]
fn summary_view_reports_headline_figures() {
    let (service, _, _) = build_service();
    let record = service.submit(submission()).expect("submission succeeds");

    let view = record.summary_view();

    assert_eq!(view.lead_id, record.lead_id);
    assert_eq!(view.company, "Whitfield Legal");
    assert_eq!(view.risk_total, record.risk.total);
    assert_eq!(view.risk_level, RiskLevel::from_total(record.risk.total));
    assert_eq!(view.annual_total, view.monthly_total * 12);
}

#[test]
fn background_delivery_stays_pending_until_settled() {
    let repository = Arc::new(MemoryRepository::default());
    let notifier = Arc::new(DeferredNotifier::default());
    let service = LeadCaptureService::new(repository.clone(), notifier.clone());

    let delivered = service.submit(submission()).expect("first capture");
    let refused = service.submit(submission()).expect("second capture");
    assert_eq!(delivered.notification, NotificationStatus::Pending);
    assert_eq!(
        service.get(&refused.lead_id).expect("lead stored").notification,
        NotificationStatus::Pending
    );

    let receipts = notifier.take_receipts();
    assert_eq!(receipts.len(), 2);
    assert_eq!(receipts[0].lead_id(), &delivered.lead_id);
    receipts[0]
        .settle(NotificationStatus::Delivered)
        .expect("settles delivered");
    receipts[1]
        .settle(NotificationStatus::Failed)
        .expect("settles failed");

    let delivered = service.get(&delivered.lead_id).expect("lead stored");
    let refused = service.get(&refused.lead_id).expect("lead stored");
    assert_eq!(delivered.notification, NotificationStatus::Delivered);
    assert_eq!(refused.notification, NotificationStatus::Failed);
    assert_eq!(delivered.pricing, price(&answers()));
}

#[test]
fn settling_an_unknown_lead_reports_not_found() {
    let receipt = DeliveryReceipt::new(
        LeadId::from_sequence(42),
        Arc::new(MemoryRepository::default()),
    );

    assert!(matches!(
        receipt.settle(NotificationStatus::Delivered),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn submit_keeps_values_normalized_by_the_repository() {
    let repository = Arc::new(NormalizingRepository::default());
    let service =
        LeadCaptureService::new(repository.clone(), Arc::new(MemoryNotifier::default()));

    let record = service.submit(submission()).expect("submission succeeds");

    assert_eq!(record.contact.company, "WHITFIELD LEGAL");
    assert_eq!(record.notification, NotificationStatus::Delivered);
    let stored = repository
        .fetch(&record.lead_id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored.contact.company, "WHITFIELD LEGAL");
    assert_eq!(stored.notification, NotificationStatus::Delivered);
}
