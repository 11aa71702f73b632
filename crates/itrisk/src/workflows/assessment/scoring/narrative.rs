use super::super::domain::{
    Answer, AssessmentInput, BackupFrequency, LastAudit, ResponseNeed, SizeBucket,
};
use super::CategoryKind;

/// Conditional text attached to a category result.
#[derive(Debug, Default)]
pub(crate) struct CategoryNarrative {
    pub recommendations: Vec<String>,
    pub risk_areas: Vec<String>,
    pub value_areas: Vec<String>,
}

impl CategoryNarrative {
    fn recommend(&mut self, text: impl Into<String>) {
        self.recommendations.push(text.into());
    }

    fn risk(&mut self, text: impl Into<String>) {
        self.risk_areas.push(text.into());
    }

    fn value(&mut self, text: impl Into<String>) {
        self.value_areas.push(text.into());
    }
}

pub(crate) fn describe(category: CategoryKind, input: &AssessmentInput) -> CategoryNarrative {
    match category {
        CategoryKind::BusinessProfile => business_profile(input),
        CategoryKind::Security => security(input),
        CategoryKind::ComplianceSupport => compliance_support(input),
    }
}

fn business_profile(input: &AssessmentInput) -> CategoryNarrative {
    let mut narrative = CategoryNarrative::default();

    match input.sensitive_data {
        Answer::Yes => {
            narrative.recommend("Classify sensitive data and encrypt it at rest and in transit");
            narrative.risk("Sensitive data handled without a documented protection program");
            narrative.value(format!(
                "Data protection program tailored to {} obligations",
                input.industry.label()
            ));
        }
        Answer::NotSure | Answer::Partially => {
            narrative.recommend("Run a data discovery exercise to locate sensitive records");
            narrative.risk("Unknown sensitive data footprint");
        }
        Answer::No => {}
    }

    match input.internal_it {
        Answer::No => {
            narrative.recommend("Engage a managed IT partner to own day-to-day operations");
            narrative.risk("No dedicated IT resource");
            narrative.value("Fully managed IT team without hiring overhead");
        }
        Answer::NotSure | Answer::Partially => {
            narrative.recommend("Formalize IT ownership and escalation paths");
            narrative.risk("IT responsibilities split across non-specialist staff");
            narrative.value("Co-managed support that augments existing staff");
        }
        Answer::Yes => {
            narrative.value("Co-managed tooling that extends your internal team's reach");
        }
    }

    if input.industry.is_regulated() {
        narrative.risk(format!(
            "{} firms are high-value targets for attackers",
            input.industry.label()
        ));
    }

    match input.business_size.bucket() {
        SizeBucket::Small => narrative.value("Enterprise-grade tooling at small-business pricing"),
        SizeBucket::Medium => narrative.value("Standardized onboarding for a growing team"),
        SizeBucket::Large => narrative.value("Asset and identity governance at scale"),
    }

    narrative
}

fn security(input: &AssessmentInput) -> CategoryNarrative {
    let mut narrative = CategoryNarrative::default();

    match input.mfa_enabled {
        Answer::No => {
            narrative.recommend(
                "Enforce multi-factor authentication on email, remote access, and admin accounts",
            );
            narrative.risk("Accounts protected by passwords alone");
        }
        Answer::NotSure => {
            narrative.recommend("Audit which accounts have multi-factor authentication enabled");
            narrative.risk("Multi-factor authentication coverage unknown");
        }
        Answer::Partially => {
            narrative.recommend("Extend multi-factor authentication to every user");
            narrative.risk("Gaps in multi-factor authentication coverage");
        }
        Answer::Yes => {}
    }

    match input.endpoint_protection {
        Answer::No => {
            narrative.recommend("Deploy managed endpoint detection and response on all devices");
            narrative.risk("Devices without endpoint protection");
        }
        Answer::NotSure | Answer::Partially => {
            narrative.recommend("Inventory devices and close endpoint protection gaps");
            narrative.risk("Inconsistent endpoint protection");
        }
        Answer::Yes => {}
    }

    match input.backup_frequency {
        BackupFrequency::NoBackups => {
            narrative.recommend("Implement automated daily backups with an offsite copy");
            narrative.risk("No data backups in place");
        }
        BackupFrequency::NotSure => {
            narrative.recommend("Verify backup jobs and test a full restore");
            narrative.risk("Backup status unverified");
        }
        BackupFrequency::Monthly | BackupFrequency::Weekly => {
            narrative.recommend("Move backups to a daily schedule with tested restores");
            narrative.risk(format!(
                "{} backups can lose days of work",
                input.backup_frequency.label()
            ));
        }
        BackupFrequency::Daily => {}
    }

    if narrative.risk_areas.is_empty() {
        narrative.value("Independent validation of existing security controls");
    } else {
        narrative.value("24/7 security monitoring and threat response");
    }
    if input.backup_frequency != BackupFrequency::Daily {
        narrative.value("Ransomware recovery readiness");
    }

    narrative
}

fn compliance_support(input: &AssessmentInput) -> CategoryNarrative {
    let mut narrative = CategoryNarrative::default();

    if input.last_audit.is_overdue() {
        narrative.recommend("Schedule a comprehensive IT security audit");
        narrative.risk(format!(
            "Last security audit: {}",
            input.last_audit.label().to_ascii_lowercase()
        ));
        narrative.value("Baseline audit with a prioritized remediation plan");
    } else if input.last_audit == LastAudit::SixToTwelveMonths {
        narrative.recommend("Book the next audit before the twelve-month mark");
    }

    match input.data_regulations {
        Answer::Yes => {
            narrative.recommend("Map controls to your regulatory obligations and keep evidence");
            narrative.risk("Regulatory exposure from unmanaged compliance");
            narrative.value("Audit-ready compliance documentation");
        }
        Answer::NotSure | Answer::Partially => {
            narrative.recommend("Confirm which data regulations apply to your business");
            narrative.risk("Unclear regulatory obligations");
        }
        Answer::No => {}
    }

    if input.it_issues.is_frequent() {
        narrative.recommend("Move to proactive monitoring to cut recurring IT issues");
        narrative.risk(format!(
            "IT issues occur {}",
            input.it_issues.label().to_ascii_lowercase()
        ));
        narrative.value("Fewer disruptions through proactive maintenance");
    }

    match input.response_needed {
        ResponseNeed::WithinMinutes | ResponseNeed::WithinAnHour => {
            narrative.recommend("Adopt a support plan with guaranteed response times");
            narrative.value(format!(
                "Guaranteed response {}",
                input.response_needed.label().to_ascii_lowercase()
            ));
        }
        ResponseNeed::SameDay => narrative.value("Same-day support commitment"),
        ResponseNeed::NotUrgent => {}
    }

    narrative
}
