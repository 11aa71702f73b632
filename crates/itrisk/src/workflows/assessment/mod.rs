//! Questionnaire scoring and pricing engine.
//!
//! Everything in this module is pure: the same [`AssessmentInput`] always yields the same
//! [`RiskScore`] and price, with no I/O or clock access.

pub mod domain;
pub mod import;
pub mod insights;
pub mod pricing;
pub mod router;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use domain::{
    Answer, AssessmentInput, BackupFrequency, BusinessSize, Industry, IssueFrequency, LastAudit,
    ResponseNeed, SizeBucket,
};
pub use import::{AssessmentCsvImporter, AssessmentImportError};
pub use insights::{CategoryInsights, GENERIC_INSIGHT};
pub use pricing::{
    price, price_range, quote, AddOnKind, PriceAddOn, PriceQuote, PriceRange, PricingPolicy,
    PricingResult,
};
pub use router::assessment_router;
pub use scoring::{score, CategoryKind, CategoryResult, ExecutiveSummary, RiskLevel, RiskScore};
