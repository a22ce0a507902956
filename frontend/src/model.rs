use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
    #[serde(other)]
    Other,
}

/// Reads a string field that the store may send as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub transaction_date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comment: String,
}

impl Transaction {
    /// Calendar date of the transaction, or `None` when the stored value is
    /// not a date this screen understands.
    pub fn date(&self) -> Option<NaiveDate> {
        parse_transaction_date(&self.transaction_date)
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
}

/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive `YYYY-MM-DDTHH:MM:SS`.
/// Timestamps with an offset are reduced to their UTC calendar date.
pub fn parse_transaction_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.naive_utc().date());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|stamp| stamp.date())
}

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Zero-based position of `name` in [`MONTHS`].
pub fn month_index(name: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|month| *month == name)
        .map(|idx| idx as u32)
}

/// Integer at the start of `raw`, ignoring anything after its digits
/// (`"2025abc"` reads as 2025).
pub fn parse_leading_int(raw: &str) -> Option<i32> {
    let raw = raw.trim_start();
    let (sign, rest) = match raw.as_bytes().first() {
        Some(b'-') => (-1, &raw[1..]),
        Some(b'+') => (1, &raw[1..]),
        _ => (1, raw),
    };
    let end = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse::<i32>().ok().map(|value| sign * value)
}

/// The month/year pair picked in the dropdowns. Both halves stay strings
/// because they are exactly what the dropdowns hand back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Period {
    pub month: String,
    pub year: String,
}

impl Period {
    pub fn new(month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            year: year.into(),
        }
    }

    /// Zero-based month index and numeric year, if both halves are valid.
    pub fn resolve(&self) -> Option<(u32, i32)> {
        let month = month_index(&self.month)?;
        let year = parse_leading_int(&self.year)?;
        Some((month, year))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match self.resolve() {
            Some((month, year)) => date.month0() == month && date.year() == year,
            None => false,
        }
    }
}
