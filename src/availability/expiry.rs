//! Expiry checks
//!
//! Calendar-date comparisons for pantry stock. A date that is absent,
//! empty, or unreadable never counts as expired.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::StockEntry;

/// Today's calendar date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse an expiry date, accepting YYYY-MM-DD or a full timestamp
pub fn parse_expiry_date(date: &str) -> Option<NaiveDate> {
    let trimmed = date.trim();
    if trimmed.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(trimmed).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Whether `date` falls strictly before `today`
pub fn is_expired_on(date: &str, today: NaiveDate) -> bool {
    match parse_expiry_date(date) {
        Some(expiry) => expiry < today,
        None => false,
    }
}

/// Whether `date` falls strictly before today's local date
///
/// An item dated today is still good.
pub fn is_expired(date: &str) -> bool {
    is_expired_on(date, today())
}

/// Whether a stock entry is expired as of `today`
pub fn entry_expired_on(entry: &StockEntry, today: NaiveDate) -> bool {
    entry
        .expiry_date
        .as_deref()
        .is_some_and(|date| is_expired_on(date, today))
}

/// Whole days from `today` until `date`, negative once it has passed
pub fn days_until_expiry(date: &str, today: NaiveDate) -> Option<i64> {
    parse_expiry_date(date).map(|expiry| (expiry - today).num_days())
}

/// Day windows used to badge stock that is close to expiring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryThresholds {
    /// Up to this many days away counts as "expiring soon"
    pub soon_days: i64,
    /// Up to this many days away counts as "expiring within two weeks"
    pub later_days: i64,
}

impl Default for ExpiryThresholds {
    fn default() -> Self {
        Self {
            soon_days: 7,
            later_days: 14,
        }
    }
}

/// Display classification of a stock entry's expiry date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    /// No usable date
    NoDate,
    Expired,
    ExpiringSoon,
    ExpiringWithinTwoWeeks,
    Fresh,
}

impl ExpiryStatus {
    /// Badge label, `None` when nothing needs flagging
    pub fn label(&self) -> Option<&'static str> {
        match self {
            ExpiryStatus::Expired => Some("Expired"),
            ExpiryStatus::ExpiringSoon => Some("Expiring soon"),
            ExpiryStatus::ExpiringWithinTwoWeeks => Some("Expiring in 2 weeks"),
            ExpiryStatus::NoDate | ExpiryStatus::Fresh => None,
        }
    }
}

/// Classify an expiry date relative to `today`
pub fn expiry_status_on(date: &str, today: NaiveDate, thresholds: &ExpiryThresholds) -> ExpiryStatus {
    match days_until_expiry(date, today) {
        None => ExpiryStatus::NoDate,
        Some(days) if days < 0 => ExpiryStatus::Expired,
        Some(days) if days <= thresholds.soon_days => ExpiryStatus::ExpiringSoon,
        Some(days) if days <= thresholds.later_days => ExpiryStatus::ExpiringWithinTwoWeeks,
        Some(_) => ExpiryStatus::Fresh,
    }
}

/// One line of a pantry expiry report
#[derive(Debug, Clone, Serialize)]
pub struct ExpiryReportEntry {
    pub name: String,
    pub expiry_date: Option<String>,
    pub days_until_expiry: Option<i64>,
    pub status: ExpiryStatus,
    pub label: Option<&'static str>,
}

/// Expiry status for every entry, soonest first; undated entries go last
pub fn expiry_report_on(
    pantry: &[StockEntry],
    today: NaiveDate,
    thresholds: &ExpiryThresholds,
) -> Vec<ExpiryReportEntry> {
    let mut report: Vec<ExpiryReportEntry> = pantry
        .iter()
        .map(|entry| {
            let date = entry.expiry_date.as_deref().unwrap_or("");
            let status = expiry_status_on(date, today, thresholds);
            ExpiryReportEntry {
                name: entry.name.clone(),
                expiry_date: entry.expiry_date.clone(),
                days_until_expiry: days_until_expiry(date, today),
                status,
                label: status.label(),
            }
        })
        .collect();

    // Stable sort keeps pantry order among equal dates
    report.sort_by_key(|entry| (entry.days_until_expiry.is_none(), entry.days_until_expiry));
    report
}
