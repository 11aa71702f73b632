use super::super::domain::{
    Answer, AssessmentInput, BackupFrequency, BusinessSize, Industry, IssueFrequency, LastAudit,
    ResponseNeed,
};
use super::CategoryKind;

/// Risk and value points accumulated for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct CategoryTally {
    pub risk: f32,
    pub value: f32,
}

impl CategoryTally {
    fn add(&mut self, (risk, value): (i16, i16)) {
        self.risk += f32::from(risk);
        self.value += f32::from(value);
    }

    /// Scale raw points into the category's share of the 100-point total.
    pub(crate) fn scaled(self, category: CategoryKind) -> Self {
        let share = category.share();
        let denominator = category.denominator();
        Self {
            risk: share * (self.risk / denominator).clamp(0.0, 1.0),
            value: share * (self.value / denominator).clamp(0.0, 1.0),
        }
    }
}

pub(crate) fn tally(category: CategoryKind, input: &AssessmentInput) -> CategoryTally {
    match category {
        CategoryKind::BusinessProfile => business_profile(input),
        CategoryKind::Security => security(input),
        CategoryKind::ComplianceSupport => compliance_support(input),
    }
}

/// Only the business profile risk is weighted by industry.
const fn industry_risk_multiplier(industry: Industry) -> f32 {
    match industry {
        Industry::Healthcare => 1.5,
        Industry::Finance => 1.4,
        Industry::Legal | Industry::Accounting => 1.3,
        Industry::Retail => 1.1,
        Industry::Other => 1.0,
    }
}

fn business_profile(input: &AssessmentInput) -> CategoryTally {
    let mut tally = CategoryTally::default();
    tally.add(size_points(input.business_size));
    tally.add(sensitive_data_points(input.sensitive_data));
    tally.add(internal_it_points(input.internal_it));
    tally.risk *= industry_risk_multiplier(input.industry);
    tally
}

fn security(input: &AssessmentInput) -> CategoryTally {
    let mut tally = CategoryTally::default();
    tally.add(mfa_points(input.mfa_enabled));
    tally.add(endpoint_points(input.endpoint_protection));
    tally.add(backup_points(input.backup_frequency));
    tally
}

fn compliance_support(input: &AssessmentInput) -> CategoryTally {
    let mut tally = CategoryTally::default();
    tally.add(audit_points(input.last_audit));
    tally.add(regulation_points(input.data_regulations));
    tally.add(issue_points(input.it_issues));
    tally.add(response_points(input.response_needed));
    tally
}

// Each table returns (risk, value).

const fn size_points(size: BusinessSize) -> (i16, i16) {
    match size {
        BusinessSize::OneToFive => (15, 5),
        BusinessSize::SixToTwenty => (12, 10),
        BusinessSize::TwentyOneToFifty => (10, 15),
        BusinessSize::FiftyOneToHundred => (8, 18),
        BusinessSize::OverHundred => (6, 20),
    }
}

const fn sensitive_data_points(answer: Answer) -> (i16, i16) {
    match answer {
        Answer::Yes => (20, 10),
        Answer::NotSure | Answer::Partially => (12, 8),
        Answer::No => (0, 0),
    }
}

/// In-house IT mitigates risk while still leaving room for co-managed value.
const fn internal_it_points(answer: Answer) -> (i16, i16) {
    match answer {
        Answer::No => (15, 15),
        Answer::NotSure => (10, 10),
        Answer::Partially => (5, 10),
        Answer::Yes => (-10, 5),
    }
}

const fn mfa_points(answer: Answer) -> (i16, i16) {
    match answer {
        Answer::No => (40, 25),
        Answer::NotSure => (30, 20),
        Answer::Partially => (20, 15),
        Answer::Yes => (0, 5),
    }
}

const fn endpoint_points(answer: Answer) -> (i16, i16) {
    match answer {
        Answer::No => (30, 20),
        Answer::NotSure => (25, 15),
        Answer::Partially => (15, 10),
        Answer::Yes => (0, 5),
    }
}

const fn backup_points(frequency: BackupFrequency) -> (i16, i16) {
    match frequency {
        BackupFrequency::NoBackups => (40, 30),
        BackupFrequency::NotSure => (30, 20),
        BackupFrequency::Monthly => (20, 15),
        BackupFrequency::Weekly => (10, 10),
        BackupFrequency::Daily => (0, 5),
    }
}

const fn audit_points(audit: LastAudit) -> (i16, i16) {
    match audit {
        LastAudit::Never => (45, 25),
        LastAudit::OverAYearAgo => (30, 20),
        LastAudit::SixToTwelveMonths => (15, 10),
        LastAudit::WithinSixMonths => (0, 5),
    }
}

const fn regulation_points(answer: Answer) -> (i16, i16) {
    match answer {
        Answer::Yes => (20, 15),
        Answer::NotSure | Answer::Partially => (15, 10),
        Answer::No => (0, 5),
    }
}

const fn issue_points(frequency: IssueFrequency) -> (i16, i16) {
    match frequency {
        IssueFrequency::Daily => (25, 20),
        IssueFrequency::Weekly => (18, 15),
        IssueFrequency::Occasionally => (10, 10),
        IssueFrequency::Rarely => (5, 5),
        IssueFrequency::Never => (0, 0),
    }
}

const fn response_points(need: ResponseNeed) -> (i16, i16) {
    match need {
        ResponseNeed::WithinMinutes => (15, 20),
        ResponseNeed::WithinAnHour => (10, 15),
        ResponseNeed::SameDay => (5, 10),
        ResponseNeed::NotUrgent => (0, 5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_risk_is_weighted_by_industry() {
        let base = AssessmentInput {
            sensitive_data: Answer::Yes,
            internal_it: Answer::No,
            ..AssessmentInput::default()
        };
        let other = tally(CategoryKind::BusinessProfile, &base);
        let healthcare = tally(
            CategoryKind::BusinessProfile,
            &AssessmentInput {
                industry: Industry::Healthcare,
                ..base
            },
        );

        assert_eq!(other.risk, 50.0);
        assert_eq!(healthcare.risk, 75.0);
        assert_eq!(other.value, healthcare.value);
    }

    #[test]
    fn security_and_compliance_ignore_industry() {
        let base = AssessmentInput::default();
        let finance = AssessmentInput {
            industry: Industry::Finance,
            ..base
        };
        for category in [CategoryKind::Security, CategoryKind::ComplianceSupport] {
            assert_eq!(tally(category, &base), tally(category, &finance));
        }
    }

    #[test]
    fn scaling_clamps_into_share() {
        let saturated = CategoryTally {
            risk: 140.0,
            value: -5.0,
        }
        .scaled(CategoryKind::ComplianceSupport);
        assert_eq!(saturated.risk, 34.0);
        assert_eq!(saturated.value, 0.0);

        let half = CategoryTally {
            risk: 25.0,
            value: 25.0,
        }
        .scaled(CategoryKind::BusinessProfile);
        assert!((half.risk - 16.5).abs() < f32::EPSILON);
    }

    #[test]
    fn internal_it_reduces_profile_risk() {
        let mitigated = tally(
            CategoryKind::BusinessProfile,
            &AssessmentInput {
                business_size: BusinessSize::OverHundred,
                sensitive_data: Answer::No,
                internal_it: Answer::Yes,
                ..AssessmentInput::default()
            },
        );
        assert_eq!(mitigated.risk, -4.0);
        assert_eq!(mitigated.scaled(CategoryKind::BusinessProfile).risk, 0.0);
    }
}
