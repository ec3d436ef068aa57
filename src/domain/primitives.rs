//! Domain primitives: InstrumentCode, OrderKind, TradeDate.

use crate::error::FieldError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Strip surrounding whitespace and quote characters from a raw field.
pub fn clean_field(raw: &str) -> &str {
    raw.trim().trim_matches(|c| c == '"' || c == '\'').trim()
}

/// Instrument identifier (e.g., a ticker such as "ABC").
///
/// An empty code marks an inert record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstrumentCode(pub String);

impl InstrumentCode {
    pub fn new(code: String) -> Self {
        InstrumentCode(code)
    }

    /// Build from raw field text.
    pub fn parse(raw: &str) -> Self {
        InstrumentCode(clean_field(raw).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for InstrumentCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order classification: Buy, Sell, or anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    Buy,
    Sell,
    /// Any other order type, including blank.
    Other,
}

impl OrderKind {
    /// Classify raw order type text, case-insensitively.
    pub fn classify(raw: &str) -> Self {
        let text = clean_field(raw);
        if text.eq_ignore_ascii_case("buy") {
            OrderKind::Buy
        } else if text.eq_ignore_ascii_case("sell") {
            OrderKind::Sell
        } else {
            OrderKind::Other
        }
    }
}

impl std::fmt::Display for OrderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderKind::Buy => write!(f, "buy"),
            OrderKind::Sell => write!(f, "sell"),
            OrderKind::Other => write!(f, "other"),
        }
    }
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %I:%M:%S %p",
    "%d-%b-%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%b-%Y"];

/// Trade timestamp. Blank source text maps to the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TradeDate(pub NaiveDateTime);

impl TradeDate {
    /// The sentinel used for blank dates.
    pub fn epoch() -> Self {
        TradeDate(DateTime::<Utc>::UNIX_EPOCH.naive_utc())
    }

    /// Parse raw field text.
    ///
    /// # Errors
    /// Returns `FieldError::InvalidDate` if non-blank text matches no known format.
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let text = clean_field(raw);
        if text.is_empty() {
            return Ok(Self::epoch());
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Ok(TradeDate(dt.naive_utc()));
        }
        for fmt in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
                return Ok(TradeDate(dt));
            }
        }
        for fmt in DATE_FORMATS {
            if let Ok(d) = NaiveDate::parse_from_str(text, fmt) {
                return Ok(TradeDate(d.and_time(NaiveTime::MIN)));
            }
        }

        Err(FieldError::InvalidDate(text.to_string()))
    }
}

impl Default for TradeDate {
    fn default() -> Self {
        Self::epoch()
    }
}

impl std::fmt::Display for TradeDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
