use std::fmt;

use serde::de::{IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Headcount bracket selected on the first questionnaire step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BusinessSize {
    #[default]
    OneToFive,
    SixToTwenty,
    TwentyOneToFifty,
    FiftyOneToHundred,
    OverHundred,
}

impl BusinessSize {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::OneToFive,
            Self::SixToTwenty,
            Self::TwentyOneToFifty,
            Self::FiftyOneToHundred,
            Self::OverHundred,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::OneToFive => "1-5",
            Self::SixToTwenty => "6-20",
            Self::TwentyOneToFifty => "21-50",
            Self::FiftyOneToHundred => "51-100",
            Self::OverHundred => "100+",
        }
    }

    /// Unrecognized brackets resolve to the smallest size.
    pub fn parse(raw: &str) -> Self {
        let normalized = normalize(raw);
        if let Ok(headcount) = normalized.parse::<u32>() {
            return Self::from_headcount(headcount);
        }

        match normalized.as_str() {
            "6-20" | "6 to 20" => Self::SixToTwenty,
            "21-50" | "21 to 50" => Self::TwentyOneToFifty,
            "51-100" | "51 to 100" => Self::FiftyOneToHundred,
            "100+" | "101+" | "over 100" | "more than 100" => Self::OverHundred,
            _ => Self::OneToFive,
        }
    }

    /// Bracket for an exact employee count.
    pub const fn from_headcount(headcount: u32) -> Self {
        match headcount {
            0..=5 => Self::OneToFive,
            6..=20 => Self::SixToTwenty,
            21..=50 => Self::TwentyOneToFifty,
            51..=100 => Self::FiftyOneToHundred,
            _ => Self::OverHundred,
        }
    }

    pub const fn bucket(self) -> SizeBucket {
        match self {
            Self::OneToFive | Self::SixToTwenty => SizeBucket::Small,
            Self::TwentyOneToFifty | Self::FiftyOneToHundred => SizeBucket::Medium,
            Self::OverHundred => SizeBucket::Large,
        }
    }

    /// Head count used for per-user pricing. `100+` is priced as 150 users.
    pub const fn representative_users(self) -> u32 {
        match self {
            Self::OneToFive => 3,
            Self::SixToTwenty => 13,
            Self::TwentyOneToFifty => 35,
            Self::FiftyOneToHundred => 75,
            Self::OverHundred => 150,
        }
    }
}

/// Coarse size classification used for narrative variants and package pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeBucket {
    Small,
    Medium,
    Large,
}

impl SizeBucket {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Industry {
    Legal,
    Finance,
    Accounting,
    Retail,
    Healthcare,
    #[default]
    Other,
}

impl Industry {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Legal,
            Self::Finance,
            Self::Accounting,
            Self::Retail,
            Self::Healthcare,
            Self::Other,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Legal => "Legal",
            Self::Finance => "Finance",
            Self::Accounting => "Accounting",
            Self::Retail => "Retail",
            Self::Healthcare => "Healthcare",
            Self::Other => "Other",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "legal" | "law" | "law firm" => Self::Legal,
            "finance" | "financial" | "financial services" => Self::Finance,
            "accounting" | "accountancy" => Self::Accounting,
            "retail" => Self::Retail,
            "healthcare" | "health care" | "medical" => Self::Healthcare,
            _ => Self::Other,
        }
    }

    /// Industries priced with the compliance multiplier.
    pub const fn is_regulated(self) -> bool {
        matches!(
            self,
            Self::Legal | Self::Finance | Self::Healthcare | Self::Accounting
        )
    }
}

/// Shared answer scale for the yes/no style questions.
///
/// `Partially` is only offered for internal IT, MFA, and endpoint protection, but every
/// field accepts it so a mis-wired form never fails the calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Answer {
    Yes,
    Partially,
    No,
    #[default]
    NotSure,
}

impl Answer {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::Partially => "Partially",
            Self::No => "No",
            Self::NotSure => "Not Sure",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "yes" | "y" | "true" => Self::Yes,
            "no" | "n" | "false" => Self::No,
            "partially" | "partial" | "partly" | "some" => Self::Partially,
            _ => Self::NotSure,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LastAudit {
    #[default]
    Never,
    OverAYearAgo,
    SixToTwelveMonths,
    WithinSixMonths,
}

impl LastAudit {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::OverAYearAgo => "Over a year ago",
            Self::SixToTwelveMonths => "6-12 months ago",
            Self::WithinSixMonths => "Within last 6 months",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "over a year ago" | "over a year" | "more than a year ago" => Self::OverAYearAgo,
            "6-12 months ago" | "6-12 months" => Self::SixToTwelveMonths,
            "within last 6 months" | "within the last 6 months" | "within 6 months" => {
                Self::WithinSixMonths
            }
            _ => Self::Never,
        }
    }

    pub const fn is_overdue(self) -> bool {
        matches!(self, Self::Never | Self::OverAYearAgo)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackupFrequency {
    Daily,
    Weekly,
    Monthly,
    #[default]
    NotSure,
    NoBackups,
}

impl BackupFrequency {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::NotSure => "Not Sure",
            Self::NoBackups => "We don't back up data",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "daily" => Self::Daily,
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            "we don't back up data" | "we do not back up data" | "none" | "never" => {
                Self::NoBackups
            }
            _ => Self::NotSure,
        }
    }

    /// True when nobody can confirm a working backup exists.
    pub const fn is_unprotected(self) -> bool {
        matches!(self, Self::NoBackups | Self::NotSure)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IssueFrequency {
    Daily,
    Weekly,
    #[default]
    Occasionally,
    Rarely,
    Never,
}

impl IssueFrequency {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Occasionally => "Occasionally",
            Self::Rarely => "Rarely",
            Self::Never => "Never",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "daily" => Self::Daily,
            "weekly" => Self::Weekly,
            "rarely" => Self::Rarely,
            "never" => Self::Never,
            _ => Self::Occasionally,
        }
    }

    pub const fn is_frequent(self) -> bool {
        matches!(self, Self::Daily | Self::Weekly)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResponseNeed {
    WithinMinutes,
    WithinAnHour,
    SameDay,
    #[default]
    NotUrgent,
}

impl ResponseNeed {
    pub const fn label(self) -> &'static str {
        match self {
            Self::WithinMinutes => "Within minutes",
            Self::WithinAnHour => "Within an hour",
            Self::SameDay => "Same day",
            Self::NotUrgent => "Not urgent / Within a few days",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "within minutes" | "minutes" | "immediately" => Self::WithinMinutes,
            "within an hour" | "within 1 hour" | "within one hour" | "an hour" => {
                Self::WithinAnHour
            }
            "same day" | "same-day" | "within a day" => Self::SameDay,
            _ => Self::NotUrgent,
        }
    }

    pub const fn is_urgent(self) -> bool {
        matches!(self, Self::WithinMinutes | Self::WithinAnHour)
    }
}

/// Complete answer set collected by the questionnaire.
///
/// Every field is optional on the wire; absent or unrecognized values take the
/// documented default for that question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssessmentInput {
    pub business_size: BusinessSize,
    pub industry: Industry,
    pub sensitive_data: Answer,
    #[serde(rename = "internalIT", alias = "internalIt")]
    pub internal_it: Answer,
    pub mfa_enabled: Answer,
    pub endpoint_protection: Answer,
    pub data_regulations: Answer,
    pub last_audit: LastAudit,
    pub backup_frequency: BackupFrequency,
    pub it_issues: IssueFrequency,
    pub response_needed: ResponseNeed,
}

fn normalize(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .replace('_', " ")
        .replace('\u{2013}', "-")
        .replace('\u{2019}', "'")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Accepts any JSON or CSV scalar for an answer: text goes through `parse`, booleans read
/// as yes/no, numbers as their decimal text. Null and structured values take the default.
struct LenientLabel<T> {
    parse: fn(&str) -> T,
}

impl<'de, T: Default> Visitor<'de> for LenientLabel<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a questionnaire answer")
    }

    fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<T, E> {
        Ok((self.parse)(value))
    }

    fn visit_bytes<E: serde::de::Error>(self, value: &[u8]) -> Result<T, E> {
        Ok((self.parse)(&String::from_utf8_lossy(value)))
    }

    fn visit_bool<E: serde::de::Error>(self, value: bool) -> Result<T, E> {
        Ok((self.parse)(if value { "yes" } else { "no" }))
    }

    fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<T, E> {
        Ok((self.parse)(&value.to_string()))
    }

    fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<T, E> {
        Ok((self.parse)(&value.to_string()))
    }

    fn visit_i128<E: serde::de::Error>(self, value: i128) -> Result<T, E> {
        Ok((self.parse)(&value.to_string()))
    }

    fn visit_u128<E: serde::de::Error>(self, value: u128) -> Result<T, E> {
        Ok((self.parse)(&value.to_string()))
    }

    fn visit_f64<E: serde::de::Error>(self, value: f64) -> Result<T, E> {
        Ok((self.parse)(&value.to_string()))
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<T, E> {
        Ok(T::default())
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<T, E> {
        Ok(T::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<T, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<T, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(T::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<T, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(T::default())
    }
}

macro_rules! label_serde {
    ($($kind:ty),+ $(,)?) => {
        $(
            impl Serialize for $kind {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.label())
                }
            }

            impl<'de> Deserialize<'de> for $kind {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    deserializer.deserialize_any(LenientLabel { parse: <$kind>::parse })
                }
            }
        )+
    };
}

label_serde!(
    BusinessSize,
    Industry,
    Answer,
    LastAudit,
    BackupFrequency,
    IssueFrequency,
    ResponseNeed,
);
