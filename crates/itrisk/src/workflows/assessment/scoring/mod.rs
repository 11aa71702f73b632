mod narrative;
mod rules;
mod summary;

pub use summary::ExecutiveSummary;

use super::domain::AssessmentInput;
use super::insights::{self, CategoryInsights};
use serde::{Deserialize, Serialize};

/// The three scored sections of the questionnaire, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    BusinessProfile,
    Security,
    ComplianceSupport,
}

impl CategoryKind {
    pub const fn ordered() -> [Self; 3] {
        [Self::BusinessProfile, Self::Security, Self::ComplianceSupport]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::BusinessProfile => "Business Profile",
            Self::Security => "Security",
            Self::ComplianceSupport => "Compliance & Support",
        }
    }

    /// Points of the 100-point total allotted to this category.
    pub const fn share(self) -> f32 {
        match self {
            Self::BusinessProfile => 33.0,
            Self::Security => 33.0,
            Self::ComplianceSupport => 34.0,
        }
    }

    /// Raw point total that saturates the category share.
    pub const fn denominator(self) -> f32 {
        match self {
            Self::BusinessProfile => 50.0,
            Self::Security => 100.0,
            Self::ComplianceSupport => 100.0,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let key = raw.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        match key.as_str() {
            "business profile" | "profile" | "business" => Some(Self::BusinessProfile),
            "security" => Some(Self::Security),
            "compliance & support" | "compliance and support" | "compliance support"
            | "compliance" | "support" => Some(Self::ComplianceSupport),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn from_total(total: u8) -> Self {
        if total < 33 {
            Self::Low
        } else if total < 66 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Scored section of the report with its narrative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryResult {
    pub category: CategoryKind,
    pub name: &'static str,
    pub risk_score: f32,
    pub value_score: f32,
    pub recommendations: Vec<String>,
    pub risk_areas: Vec<String>,
    pub value_areas: Vec<String>,
    pub insights: CategoryInsights,
}

/// Engine output for one questionnaire submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskScore {
    pub total: u8,
    pub value_score: u8,
    pub risk_level: RiskLevel,
    pub categories: Vec<CategoryResult>,
    pub summary: ExecutiveSummary,
}

impl RiskScore {
    pub fn category(&self, kind: CategoryKind) -> Option<&CategoryResult> {
        self.categories.iter().find(|result| result.category == kind)
    }
}

/// Score an answer set. Total over its input domain; never fails.
pub fn score(input: &AssessmentInput) -> RiskScore {
    let bucket = input.business_size.bucket();
    let mut total_risk = 0.0_f32;
    let mut total_value = 0.0_f32;
    let mut categories = Vec::with_capacity(3);

    for category in CategoryKind::ordered() {
        let scaled = rules::tally(category, input).scaled(category);
        total_risk += scaled.risk;
        total_value += scaled.value;

        let narrative = narrative::describe(category, input);
        categories.push(CategoryResult {
            category,
            name: category.label(),
            risk_score: round_tenth(scaled.risk),
            value_score: round_tenth(scaled.value),
            recommendations: narrative.recommendations,
            risk_areas: narrative.risk_areas,
            value_areas: narrative.value_areas,
            insights: insights::lookup(input.industry, category, bucket),
        });
    }

    let total = clamp_score(total_risk);
    let value_score = clamp_score(total_value);
    let summary = summary::build(input, &categories);

    RiskScore {
        total,
        value_score,
        risk_level: RiskLevel::from_total(total),
        categories,
        summary,
    }
}

fn clamp_score(raw: f32) -> u8 {
    raw.round().clamp(0.0, 100.0) as u8
}

fn round_tenth(raw: f32) -> f32 {
    (raw * 10.0).round() / 10.0
}
