use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One form field after base-10 integer coercion. `None` is the
/// not-a-number sentinel and goes over the wire as `null`.
pub type FieldValue = Option<i64>;

/// Coerces form text the way a browser's `parseInt(value, 10)` does:
/// leading whitespace, optional sign, then as many digits as are present.
pub fn parse_int(text: &str) -> FieldValue {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let mut value: i64 = 0;
    for b in digits.bytes() {
        let digit = i64::from(b - b'0');
        value = value.checked_mul(10)?;
        value = if negative {
            value.checked_sub(digit)?
        } else {
            value.checked_add(digit)?
        };
    }
    Some(value)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReadingSubmission {
    pub fields: BTreeMap<String, FieldValue>,
}

impl ReadingSubmission {
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let fields = entries
            .into_iter()
            .map(|(name, value)| (name.to_string(), parse_int(value)))
            .collect();
        Self { fields }
    }

    pub fn get(&self, name: &str) -> FieldValue {
        self.fields.get(name).copied().flatten()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Risk", default)]
    pub risk: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Average {
    pub systolic: i64,
    pub diastolic: i64,
    pub pulse: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    pub systolic: i64,
    pub diastolic: i64,
    pub pulse: i64,
    #[serde(default)]
    pub classification: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    #[serde(default)]
    pub last_reading: Option<Reading>,
    #[serde(default)]
    pub seven_day_avg: Option<Average>,
    #[serde(default)]
    pub thirty_day_avg: Option<Average>,
    #[serde(default)]
    pub all_time_avg: Option<Average>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmitSuccess {
    #[serde(default)]
    pub message: Option<String>,
    pub classification: Classification,
    pub recommendation: String,
    #[serde(default)]
    pub stats: Option<StatsSnapshot>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubmitFailure {
    #[serde(default)]
    pub error: Option<String>,
}

/// What the result panel is asked to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success(SubmitSuccess),
    Failure { error: String },
}
