use super::super::domain::{Answer, AssessmentInput, BackupFrequency, LastAudit};
use super::super::insights;
use super::CategoryResult;
use serde::Serialize;

const TOP_RISK_LIMIT: usize = 3;

/// Headline content for the first page of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutiveSummary {
    pub top_risks: Vec<&'static str>,
    pub recommendations: Vec<String>,
    pub value_propositions: Vec<String>,
    pub industry_risks: Vec<&'static str>,
    pub industry_values: Vec<&'static str>,
}

pub(crate) fn build(input: &AssessmentInput, categories: &[CategoryResult]) -> ExecutiveSummary {
    ExecutiveSummary {
        top_risks: top_risks(input),
        recommendations: categories
            .iter()
            .flat_map(|category| category.recommendations.iter().cloned())
            .collect(),
        value_propositions: value_propositions(input),
        industry_risks: insights::industry_risks(input.industry).to_vec(),
        industry_values: insights::industry_values(input.industry).to_vec(),
    }
}

/// First matches in priority order, capped at three.
fn top_risks(input: &AssessmentInput) -> Vec<&'static str> {
    let checks: [(bool, &'static str); 6] = [
        (
            input.sensitive_data == Answer::Yes,
            "Sensitive data is handled without verified safeguards",
        ),
        (
            input.last_audit == LastAudit::Never,
            "IT security has never been audited",
        ),
        (
            input.last_audit == LastAudit::OverAYearAgo,
            "IT security has not been audited in over a year",
        ),
        (
            input.backup_frequency.is_unprotected(),
            "Backups are missing or unverified, leaving data unrecoverable",
        ),
        (
            matches!(input.mfa_enabled, Answer::No | Answer::NotSure),
            "Accounts lack multi-factor authentication",
        ),
        (
            input.it_issues.is_frequent(),
            "Frequent IT issues are disrupting operations",
        ),
    ];

    checks
        .into_iter()
        .filter_map(|(matched, text)| matched.then_some(text))
        .take(TOP_RISK_LIMIT)
        .collect()
}

fn value_propositions(input: &AssessmentInput) -> Vec<String> {
    let mut propositions = Vec::new();

    if input.internal_it != Answer::Yes {
        propositions
            .push("Dedicated IT expertise without the cost of a full-time hire".to_string());
    }
    if input.response_needed.is_urgent() {
        propositions.push(format!(
            "Rapid-response support that meets your \"{}\" expectation",
            input.response_needed.label().to_ascii_lowercase()
        ));
    }
    if input.it_issues.is_frequent() {
        propositions.push("Proactive maintenance that reduces recurring downtime".to_string());
    }
    if matches!(input.data_regulations, Answer::Yes | Answer::NotSure) {
        propositions.push("Compliance guidance and audit-ready documentation".to_string());
    }
    if input.backup_frequency != BackupFrequency::Daily {
        propositions.push("Automated, tested daily backups".to_string());
    }
    propositions.push("Predictable monthly IT costs".to_string());

    propositions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::assessment::domain::IssueFrequency;

    #[test]
    fn top_risks_follow_priority_and_cap_at_three() {
        let input = AssessmentInput {
            sensitive_data: Answer::Yes,
            last_audit: LastAudit::Never,
            backup_frequency: BackupFrequency::NoBackups,
            mfa_enabled: Answer::No,
            it_issues: IssueFrequency::Daily,
            ..AssessmentInput::default()
        };

        let risks = top_risks(&input);
        assert_eq!(risks.len(), 3);
        assert!(risks[0].starts_with("Sensitive data"));
        assert_eq!(risks[1], "IT security has never been audited");
        assert!(risks[2].starts_with("Backups"));
    }

    #[test]
    fn audit_risk_distinguishes_never_from_overdue() {
        let audit_risks = |last_audit| {
            top_risks(&AssessmentInput {
                last_audit,
                ..AssessmentInput::default()
            })
            .into_iter()
            .filter(|risk| risk.contains("audited"))
            .collect::<Vec<_>>()
        };

        assert_eq!(
            audit_risks(LastAudit::Never),
            vec!["IT security has never been audited"]
        );
        assert_eq!(
            audit_risks(LastAudit::OverAYearAgo),
            vec!["IT security has not been audited in over a year"]
        );
        assert!(audit_risks(LastAudit::SixToTwelveMonths).is_empty());
    }

    #[test]
    fn top_risks_skip_unmatched_checks() {
        let input = AssessmentInput {
            sensitive_data: Answer::No,
            last_audit: LastAudit::WithinSixMonths,
            backup_frequency: BackupFrequency::Daily,
            mfa_enabled: Answer::No,
            it_issues: IssueFrequency::Weekly,
            ..AssessmentInput::default()
        };

        assert_eq!(
            top_risks(&input),
            vec![
                "Accounts lack multi-factor authentication",
                "Frequent IT issues are disrupting operations",
            ]
        );
    }

    #[test]
    fn value_propositions_always_close_with_cost_predictability() {
        let input = AssessmentInput {
            internal_it: Answer::Yes,
            backup_frequency: BackupFrequency::Daily,
            data_regulations: Answer::No,
            it_issues: IssueFrequency::Rarely,
            ..AssessmentInput::default()
        };

        assert_eq!(
            value_propositions(&input),
            vec!["Predictable monthly IT costs".to_string()]
        );
    }
}
