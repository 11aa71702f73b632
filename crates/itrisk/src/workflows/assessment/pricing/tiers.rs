use super::super::domain::{BusinessSize, ResponseNeed, SizeBucket};

/// Ascending per-user tiers as (user ceiling, monthly rate).
pub(crate) const PER_USER_TIERS: [(u32, u32); 5] =
    [(10, 125), (25, 110), (50, 100), (100, 90), (200, 80)];

pub(crate) const REGULATED_MULTIPLIER: f64 = 1.25;
pub(crate) const SENSITIVE_DATA_SURCHARGE: u32 = 150;
pub(crate) const MFA_ROLLOUT_SURCHARGE: u32 = 100;
pub(crate) const BACKUP_REMEDIATION_SURCHARGE: u32 = 100;

/// Compliance-management band added by the range policy (min, max).
pub(crate) const HIGH_COMPLIANCE_BAND: (u32, u32) = (250, 500);

pub(crate) const fn base_price(bucket: SizeBucket) -> u32 {
    match bucket {
        SizeBucket::Small => 500,
        SizeBucket::Medium => 1000,
        SizeBucket::Large => 2000,
    }
}

/// First tier whose ceiling covers the head count; past the table the lowest rate applies.
pub(crate) fn per_user_price(user_count: u32) -> u32 {
    let lowest = PER_USER_TIERS
        .iter()
        .map(|(_, rate)| *rate)
        .min()
        .unwrap_or_default();

    PER_USER_TIERS
        .iter()
        .find(|(ceiling, _)| user_count <= *ceiling)
        .map(|(_, rate)| *rate)
        .unwrap_or(lowest)
}

pub(crate) const fn response_premium(need: ResponseNeed) -> u32 {
    match need {
        ResponseNeed::WithinMinutes => 500,
        ResponseNeed::WithinAnHour => 300,
        ResponseNeed::SameDay => 200,
        ResponseNeed::NotUrgent => 0,
    }
}

/// Monthly (min, max) band used by the range policy.
pub(crate) const fn range_band(size: BusinessSize) -> (u32, u32) {
    match size {
        BusinessSize::OneToFive => (400, 800),
        BusinessSize::SixToTwenty => (900, 2_000),
        BusinessSize::TwentyOneToFifty => (2_000, 4_500),
        BusinessSize::FiftyOneToHundred => (4_500, 8_500),
        BusinessSize::OverHundred => (8_500, 15_000),
    }
}
