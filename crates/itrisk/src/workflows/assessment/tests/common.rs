use crate::workflows::assessment::domain::{
    Answer, AssessmentInput, BackupFrequency, BusinessSize, Industry, IssueFrequency, LastAudit,
    ResponseNeed,
};

/// Small firm with every security control missing.
pub(super) fn worst_case_input() -> AssessmentInput {
    AssessmentInput {
        business_size: BusinessSize::OneToFive,
        industry: Industry::Other,
        sensitive_data: Answer::No,
        internal_it: Answer::No,
        mfa_enabled: Answer::No,
        endpoint_protection: Answer::NotSure,
        data_regulations: Answer::No,
        last_audit: LastAudit::Never,
        backup_frequency: BackupFrequency::NoBackups,
        it_issues: IssueFrequency::Rarely,
        response_needed: ResponseNeed::NotUrgent,
    }
}

/// Large firm with in-house IT and every control in place.
pub(super) fn hardened_input() -> AssessmentInput {
    AssessmentInput {
        business_size: BusinessSize::OverHundred,
        industry: Industry::Other,
        sensitive_data: Answer::No,
        internal_it: Answer::Yes,
        mfa_enabled: Answer::Yes,
        endpoint_protection: Answer::Yes,
        data_regulations: Answer::No,
        last_audit: LastAudit::WithinSixMonths,
        backup_frequency: BackupFrequency::Daily,
        it_issues: IssueFrequency::Never,
        response_needed: ResponseNeed::NotUrgent,
    }
}

const ANSWERS: [Answer; 4] = [Answer::Yes, Answer::Partially, Answer::No, Answer::NotSure];

const BACKUPS: [BackupFrequency; 5] = [
    BackupFrequency::Daily,
    BackupFrequency::Weekly,
    BackupFrequency::Monthly,
    BackupFrequency::NotSure,
    BackupFrequency::NoBackups,
];

const AUDITS: [LastAudit; 4] = [
    LastAudit::Never,
    LastAudit::OverAYearAgo,
    LastAudit::SixToTwelveMonths,
    LastAudit::WithinSixMonths,
];

const RESPONSES: [ResponseNeed; 4] = [
    ResponseNeed::WithinMinutes,
    ResponseNeed::WithinAnHour,
    ResponseNeed::SameDay,
    ResponseNeed::NotUrgent,
];

/// Broad sweep over the answers that move scores and prices the most.
pub(super) fn sample_inputs() -> Vec<AssessmentInput> {
    let mut inputs = Vec::new();
    for business_size in BusinessSize::ordered() {
        for industry in Industry::ordered() {
            for (index, mfa_enabled) in ANSWERS.into_iter().enumerate() {
                for backup_frequency in BACKUPS {
                    for last_audit in AUDITS {
                        inputs.push(AssessmentInput {
                            business_size,
                            industry,
                            sensitive_data: ANSWERS[(index + 1) % ANSWERS.len()],
                            internal_it: ANSWERS[(index + 2) % ANSWERS.len()],
                            mfa_enabled,
                            endpoint_protection: ANSWERS[(index + 3) % ANSWERS.len()],
                            data_regulations: ANSWERS[index],
                            last_audit,
                            backup_frequency,
                            it_issues: IssueFrequency::Weekly,
                            response_needed: RESPONSES[index],
                        });
                    }
                }
            }
        }
    }
    inputs
}
