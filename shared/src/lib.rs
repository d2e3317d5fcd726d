use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use chrono::{NaiveDate, NaiveTime};

/// Date format used for reminder map keys
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Time format accepted for reminder times
pub const REMINDER_TIME_FORMAT: &str = "%H:%M";

/// A free-text note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub text: String,
    /// Creation time in epoch milliseconds
    pub created_at: i64,
}

/// Direction of money movement in the finance ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    /// Parse the value of the kind selector; anything unknown is `None`
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "income" => Some(TransactionKind::Income),
            "expense" => Some(TransactionKind::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ledger entry. Amounts are always positive; `kind` carries the sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    #[serde(rename = "desc")]
    pub description: String,
    /// Creation time in epoch milliseconds
    #[serde(rename = "date")]
    pub created_at: i64,
}

impl Transaction {
    /// Amount with the sign implied by the kind
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// Totals derived from the ledger. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FinanceSummary {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

/// A gallery image stored inline as a data URI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    #[serde(rename = "src")]
    pub image_data: String,
}

/// A checklist entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub done: bool,
    /// Creation time in epoch milliseconds
    pub created_at: i64,
}

/// A reminder attached to one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub title: String,
    /// Optional "HH:MM" time. Older data stores a missing time as "".
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_string_as_none"
    )]
    pub time: Option<String>,
}

impl Reminder {
    /// Time of day this reminder is due, if it has a well-formed time
    pub fn time_of_day(&self) -> Option<NaiveTime> {
        self.time
            .as_deref()
            .and_then(|t| NaiveTime::parse_from_str(t, REMINDER_TIME_FORMAT).ok())
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

/// Calendar day key in `YYYY-MM-DD` form
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    pub fn from_date(date: NaiveDate) -> Self {
        DateKey(date.format(DATE_KEY_FORMAT).to_string())
    }

    /// Parse a raw key, rejecting anything that is not a real calendar date
    pub fn parse(raw: &str) -> Option<Self> {
        NaiveDate::parse_from_str(raw, DATE_KEY_FORMAT)
            .ok()
            .map(Self::from_date)
    }

    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, DATE_KEY_FORMAT).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey::from_date(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reminders grouped by day. A key is never mapped to an empty list.
pub type ReminderMap = BTreeMap<DateKey, Vec<Reminder>>;

/// Type of calendar cell for explicit rendering logic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarDayType {
    /// Blank cell before the first day of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
}

/// A single cell of a month grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    /// Day of month, 0 for padding cells
    pub day: u32,
    pub date: Option<NaiveDate>,
    pub day_type: CalendarDayType,
    pub is_today: bool,
    pub is_selected: bool,
    pub has_reminders: bool,
}

/// A month laid out as a 7-column, Sunday-first grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: i32,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
    pub days_in_month: u32,
    pub days: Vec<CalendarDay>,
}

/// All twelve months of one year
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YearCalendar {
    pub year: i32,
    pub months: Vec<CalendarMonth>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_key_format() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        let key = DateKey::from_date(date);
        assert_eq!(key.as_str(), "2025-03-07");
        assert_eq!(key.to_date(), Some(date));
        assert_eq!(DateKey::parse("2025-02-30"), None);
        assert_eq!(DateKey::parse("2025-12-31").unwrap().as_str(), "2025-12-31");
    }

    #[test]
    fn test_reminder_map_serializes_as_object() {
        let mut map = ReminderMap::new();
        map.insert(
            DateKey::parse("2025-06-01").unwrap(),
            vec![Reminder { id: "r1".to_string(), title: "Dentist".to_string(), time: Some("09:30".to_string()) }],
        );

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"2025-06-01":[{"id":"r1","title":"Dentist","time":"09:30"}]}"#);

        let back: ReminderMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn test_reminder_empty_time_reads_as_none() {
        let reminder: Reminder = serde_json::from_str(r#"{"id":"a","title":"Call mum","time":""}"#).unwrap();
        assert_eq!(reminder.time, None);
        assert_eq!(reminder.time_of_day(), None);

        let reminder: Reminder = serde_json::from_str(r#"{"id":"a","title":"Call mum"}"#).unwrap();
        assert_eq!(reminder.time, None);
    }

    #[test]
    fn test_reminder_time_of_day() {
        let reminder = Reminder { id: "a".to_string(), title: "Gym".to_string(), time: Some("18:45".to_string()) };
        assert_eq!(reminder.time_of_day(), NaiveTime::from_hms_opt(18, 45, 0));

        let reminder = Reminder { id: "a".to_string(), title: "Gym".to_string(), time: Some("late".to_string()) };
        assert_eq!(reminder.time_of_day(), None);
    }

    #[test]
    fn test_transaction_wire_names() {
        let json = r#"{"id":"t1","type":"expense","amount":20000,"desc":"Makan","date":1718000000000}"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.kind, TransactionKind::Expense);
        assert_eq!(tx.description, "Makan");
        assert_eq!(tx.signed_amount(), -20000.0);
        assert_eq!(tx.created_at, 1_718_000_000_000);
    }

    #[test]
    fn test_task_done_defaults_false() {
        let task: Task = serde_json::from_str(r#"{"id":"t","text":"Buy milk","createdAt":1}"#).unwrap();
        assert!(!task.done);
    }

    #[test]
    fn test_transaction_kind_parse() {
        assert_eq!(TransactionKind::parse("income"), Some(TransactionKind::Income));
        assert_eq!(TransactionKind::parse("expense"), Some(TransactionKind::Expense));
        assert_eq!(TransactionKind::parse("refund"), None);
    }
}
