//! Managed-service price estimates.
//!
//! Two policies coexist and are never blended: [`price`] produces an itemized point
//! estimate, [`price_range`] produces a min/max band keyed by a compliance flag.

mod tiers;

use super::domain::{Answer, AssessmentInput, SizeBucket};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOnKind {
    SensitiveData,
    MfaRollout,
    BackupRemediation,
    ResponsePremium,
}

impl AddOnKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::SensitiveData => "Sensitive data protection",
            Self::MfaRollout => "MFA rollout",
            Self::BackupRemediation => "Backup remediation",
            Self::ResponsePremium => "Priority response",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceAddOn {
    pub kind: AddOnKind,
    pub label: &'static str,
    pub monthly: u32,
}

/// Itemized point estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingResult {
    pub size_category: SizeBucket,
    pub base_price: u32,
    pub per_user_price: u32,
    pub user_count: u32,
    pub industry_multiplier: f64,
    pub add_ons: Vec<PriceAddOn>,
    pub monthly_total: u32,
    pub annual_total: u32,
}

/// Min/max band quoted when a single figure would overstate precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    pub tier_label: &'static str,
    pub is_high_compliance: bool,
    pub min_monthly: u32,
    pub max_monthly: u32,
    pub min_annual: u32,
    pub max_annual: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingPolicy {
    #[default]
    #[serde(alias = "point_estimate")]
    Point,
    Range,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum PriceQuote {
    Point(PricingResult),
    Range(PriceRange),
}

pub fn quote(input: &AssessmentInput, policy: PricingPolicy) -> PriceQuote {
    match policy {
        PricingPolicy::Point => PriceQuote::Point(price(input)),
        PricingPolicy::Range => PriceQuote::Range(price_range(input)),
    }
}

/// Point estimate: package base, tiered per-user rate, regulated multiplier, and surcharges.
pub fn price(input: &AssessmentInput) -> PricingResult {
    let size_category = input.business_size.bucket();
    let user_count = input.business_size.representative_users();
    let base_price = tiers::base_price(size_category);
    let per_user_price = tiers::per_user_price(user_count);
    let industry_multiplier = if input.industry.is_regulated() {
        tiers::REGULATED_MULTIPLIER
    } else {
        1.0
    };

    let base_monthly = f64::from(base_price)
        + f64::from(user_count) * f64::from(per_user_price) * industry_multiplier;

    let add_ons = add_ons(input);
    let surcharges: u32 = add_ons.iter().map(|add_on| add_on.monthly).sum();
    let monthly_total = (base_monthly + f64::from(surcharges)).round() as u32;

    PricingResult {
        size_category,
        base_price,
        per_user_price,
        user_count,
        industry_multiplier,
        add_ons,
        monthly_total,
        annual_total: monthly_total * 12,
    }
}

fn add_ons(input: &AssessmentInput) -> Vec<PriceAddOn> {
    let mut add_ons = Vec::new();
    let mut push = |kind: AddOnKind, monthly: u32| {
        if monthly > 0 {
            add_ons.push(PriceAddOn {
                kind,
                label: kind.label(),
                monthly,
            });
        }
    };

    if input.sensitive_data == Answer::Yes {
        push(AddOnKind::SensitiveData, tiers::SENSITIVE_DATA_SURCHARGE);
    }
    if input.mfa_enabled == Answer::No {
        push(AddOnKind::MfaRollout, tiers::MFA_ROLLOUT_SURCHARGE);
    }
    // Charged for missing or unverified backups, not for daily ones.
    if input.backup_frequency.is_unprotected() {
        push(
            AddOnKind::BackupRemediation,
            tiers::BACKUP_REMEDIATION_SURCHARGE,
        );
    }
    push(
        AddOnKind::ResponsePremium,
        tiers::response_premium(input.response_needed),
    );

    add_ons
}

/// Range estimate keyed by business size with a flat compliance band.
pub fn price_range(input: &AssessmentInput) -> PriceRange {
    let is_high_compliance =
        input.industry.is_regulated() || input.data_regulations == Answer::Yes;
    let (mut min_monthly, mut max_monthly) = tiers::range_band(input.business_size);

    if is_high_compliance {
        let (min_band, max_band) = tiers::HIGH_COMPLIANCE_BAND;
        min_monthly += min_band;
        max_monthly += max_band;
    }

    PriceRange {
        tier_label: input.business_size.bucket().label(),
        is_high_compliance,
        min_monthly,
        max_monthly,
        min_annual: min_monthly * 12,
        max_annual: max_monthly * 12,
    }
}
