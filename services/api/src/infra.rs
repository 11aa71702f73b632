use itrisk::config::LeadsConfig;
use itrisk::workflows::leads::{
    DeliveryReceipt, LeadId, LeadNotification, LeadNotifier, LeadRecord, LeadRepository,
    NotificationStatus, NotifyError, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default)]
struct LeadStore {
    records: HashMap<LeadId, LeadRecord>,
    arrival: Vec<LeadId>,
}

/// Process-local lead store; contents are lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadRepository {
    store: Arc<Mutex<LeadStore>>,
}

impl LeadRepository for InMemoryLeadRepository {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        let mut guard = self.store.lock().expect("repository mutex poisoned");
        if guard.records.contains_key(&record.lead_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.arrival.push(record.lead_id.clone());
        guard.records.insert(record.lead_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: LeadRecord) -> Result<(), RepositoryError> {
        let mut guard = self.store.lock().expect("repository mutex poisoned");
        if guard.records.contains_key(&record.lead_id) {
            guard.records.insert(record.lead_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        let guard = self.store.lock().expect("repository mutex poisoned");
        Ok(guard.records.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<LeadRecord>, RepositoryError> {
        let guard = self.store.lock().expect("repository mutex poisoned");
        Ok(guard
            .arrival
            .iter()
            .rev()
            .filter_map(|id| guard.records.get(id).cloned())
            .take(limit)
            .collect())
    }
}

/// Writes each lead to the log for environments without a CRM hook.
#[derive(Debug, Default, Clone)]
pub(crate) struct LoggingLeadNotifier;

impl LeadNotifier for LoggingLeadNotifier {
    fn notify(
        &self,
        notification: LeadNotification,
        _receipt: &DeliveryReceipt,
    ) -> Result<NotificationStatus, NotifyError> {
        info!(
            lead_id = %notification.lead_id.as_str(),
            company = %notification.company,
            email = %notification.email,
            risk_total = notification.risk_total,
            monthly_total = notification.monthly_total,
            "new assessment lead"
        );
        Ok(NotificationStatus::Delivered)
    }
}

/// Posts lead notifications as JSON to a sales webhook.
///
/// Dispatch happens on the ambient tokio runtime. The lead stays `Pending` until the
/// request finishes, then is settled as `Delivered` or `Failed`.
pub(crate) struct WebhookLeadNotifier {
    url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl WebhookLeadNotifier {
    pub(crate) fn new(url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            url: url.into(),
            token,
            client: reqwest::Client::new(),
        }
    }

    fn request(&self, notification: &LeadNotification) -> reqwest::RequestBuilder {
        let request = self.client.post(&self.url).json(notification);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl LeadNotifier for WebhookLeadNotifier {
    fn notify(
        &self,
        notification: LeadNotification,
        receipt: &DeliveryReceipt,
    ) -> Result<NotificationStatus, NotifyError> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|err| NotifyError::Transport(format!("no async runtime: {err}")))?;

        let request = self.request(&notification);
        let url = self.url.clone();
        let receipt = receipt.clone();

        runtime.spawn(async move {
            let lead_id = receipt.lead_id().as_str();
            let status = match request.send().await {
                Ok(response) if response.status().is_success() => {
                    debug!(%url, %lead_id, "lead webhook delivered");
                    NotificationStatus::Delivered
                }
                Ok(response) => {
                    warn!(%url, %lead_id, status = %response.status(), "lead webhook rejected");
                    NotificationStatus::Failed
                }
                Err(err) => {
                    error!(%url, %lead_id, error = %err, "lead webhook request failed");
                    NotificationStatus::Failed
                }
            };

            if let Err(err) = receipt.settle(status) {
                error!(%lead_id, error = %err, "lead delivery status not recorded");
            }
        });

        Ok(NotificationStatus::Pending)
    }
}

/// Notifier selected from configuration at startup.
pub(crate) enum LeadDispatch {
    Log(LoggingLeadNotifier),
    Webhook(WebhookLeadNotifier),
}

impl LeadDispatch {
    pub(crate) fn from_config(config: &LeadsConfig) -> Self {
        match &config.webhook_url {
            Some(url) => Self::Webhook(WebhookLeadNotifier::new(
                url.clone(),
                config.webhook_token.clone(),
            )),
            None => Self::Log(LoggingLeadNotifier),
        }
    }

    pub(crate) const fn label(&self) -> &'static str {
        match self {
            Self::Log(_) => "log",
            Self::Webhook(_) => "webhook",
        }
    }
}

impl LeadNotifier for LeadDispatch {
    fn notify(
        &self,
        notification: LeadNotification,
        receipt: &DeliveryReceipt,
    ) -> Result<NotificationStatus, NotifyError> {
        match self {
            Self::Log(notifier) => notifier.notify(notification, receipt),
            Self::Webhook(notifier) => notifier.notify(notification, receipt),
        }
    }
}
