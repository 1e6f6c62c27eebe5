// Time series domain models and date-range filtering
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub value: f64,
    #[serde(rename = "date")]
    pub timestamp: NaiveDate,
}

impl DataPoint {
    pub fn new(value: f64, timestamp: NaiveDate) -> Self {
        Self { value, timestamp }
    }
}

/// Closed interval of calendar days, both bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// An inverted range selects nothing.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Full span of the series, from its earliest to its latest timestamp.
///
/// Does not rely on the series being sorted. Returns `None` for an empty series.
pub fn default_range(series: &[DataPoint]) -> Option<DateRange> {
    let start = series.iter().map(|p| p.timestamp).min()?;
    let end = series.iter().map(|p| p.timestamp).max()?;
    Some(DateRange::new(start, end))
}

/// Points whose timestamp lies in `[start, end]`, in input order.
pub fn filter(series: &[DataPoint], start: NaiveDate, end: NaiveDate) -> Vec<DataPoint> {
    let range = DateRange::new(start, end);
    if range.is_empty() {
        return Vec::new();
    }
    series
        .iter()
        .filter(|p| range.contains(p.timestamp))
        .cloned()
        .collect()
}
