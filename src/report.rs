//! Ordered metric accumulation feeding both output paths.

use crate::logo;
use serde_json::{Map, Value};
use std::fmt;

/// Raw value carried by a metric.
///
/// The package total serializes as a bare number in structured output;
/// every other metric is a preformatted string.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    Text(String),
    Count(u64),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Text(s) => f.write_str(s),
            MetricValue::Count(n) => write!(f, "{}", n),
        }
    }
}

impl From<String> for MetricValue {
    fn from(value: String) -> Self {
        MetricValue::Text(value)
    }
}

impl From<u64> for MetricValue {
    fn from(value: u64) -> Self {
        MetricValue::Count(value)
    }
}

/// One collected statistic.
#[derive(Debug, Clone)]
pub struct Metric {
    pub key: &'static str,
    pub value: MetricValue,
}

/// Insertion-ordered accumulator over one collection run.
///
/// Append order is significant: it decides which template slot a metric
/// lands in. A single `append` call updates both the display view and
/// the key/value view; there is no other mutation path.
#[derive(Debug)]
pub struct Report {
    key_color: &'static str,
    lines: Vec<String>,
    metrics: Vec<Metric>,
}

impl Report {
    /// New empty report; `key_color` comes from the active profile's
    /// palette and colors metric keys in rendered output.
    pub fn new(key_color: &'static str) -> Self {
        Report {
            key_color,
            lines: Vec::new(),
            metrics: Vec::new(),
        }
    }

    /// Record one metric in both views.
    pub fn append(&mut self, metric: Metric) {
        self.lines.push(format!(
            "{}{}: {}{}",
            self.key_color,
            metric.key,
            logo::CLEAR,
            metric.value
        ));
        self.metrics.push(metric);
    }

    /// Display-ordered colored lines for the template renderer.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of appended metrics.
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Key/value mapping as one JSON object. Later appends of the same
    /// key overwrite earlier ones.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for metric in &self.metrics {
            let value = match &metric.value {
                MetricValue::Text(s) => Value::from(s.clone()),
                MetricValue::Count(n) => Value::from(*n),
            };
            map.insert(metric.key.to_string(), value);
        }
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(key: &'static str, value: &str) -> Metric {
        Metric {
            key,
            value: MetricValue::Text(value.to_string()),
        }
    }

    #[test]
    fn line_count_tracks_appends() {
        let mut report = Report::new(logo::CLEAR);
        assert!(report.is_empty());
        report.append(text("User", "alice"));
        report.append(text("Hostname", "box"));
        assert_eq!(report.len(), 2);
        assert_eq!(report.lines().len(), 2);
    }

    #[test]
    fn lines_carry_key_color_and_reset() {
        let mut report = Report::new("\x1b[1;31m");
        report.append(text("RAM", "3 GB/ 16 GB"));
        assert_eq!(report.lines()[0], "\x1b[1;31mRAM: \x1b[0;0m3 GB/ 16 GB");
    }

    #[test]
    fn latest_append_wins_per_key() {
        let mut report = Report::new(logo::CLEAR);
        report.append(text("Kernel", "old"));
        report.append(text("Kernel", "new"));
        assert_eq!(report.len(), 2);
        assert_eq!(report.to_json()["Kernel"], "new");
    }

    #[test]
    fn counts_serialize_as_numbers() {
        let mut report = Report::new(logo::CLEAR);
        report.append(Metric {
            key: "Packages",
            value: MetricValue::Count(1234),
        });
        report.append(text("Processes", "97 running"));
        let json = report.to_json();
        assert_eq!(json["Packages"], 1234);
        assert_eq!(json["Processes"], "97 running");
    }
}
