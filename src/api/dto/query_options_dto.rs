//! Query request DTOs supplied by the dashboard host

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One dashboard query: the time window, the desired point density and
/// the per-panel targets, in panel order.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QueryOptions {
    pub range: TimeRange,

    /// Used as a divisor when deriving the sampling interval.
    #[validate(range(min = 1))]
    pub max_data_points: u32,

    #[serde(default)]
    pub targets: Vec<Target>,
}

/// Timezone-aware query window. The offset of `from` is reported to the
/// backend as `tzo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub from: DateTime<FixedOffset>,
    pub to: DateTime<FixedOffset>,
}

impl TimeRange {
    pub fn new(from: DateTime<FixedOffset>, to: DateTime<FixedOffset>) -> Self {
        Self { from, to }
    }

    /// Signed length of the window in milliseconds.
    pub fn span_ms(&self) -> i64 {
        (self.to - self.from).num_milliseconds()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    /// Backend cluster, used as the first path segment of the request.
    #[serde(default)]
    pub cluster: String,

    /// Backend query string, e.g. `m=cpu&h=host-1`. May hold `$var` references.
    #[serde(default)]
    pub raw_dashboard_query: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    #[serde(default)]
    pub hide: bool,
}

impl Target {
    pub fn new(cluster: impl Into<String>, raw_dashboard_query: impl Into<String>) -> Self {
        Self {
            cluster: cluster.into(),
            raw_dashboard_query: raw_dashboard_query.into(),
            alias: None,
            hide: false,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hide = true;
        self
    }

    /// Alias to apply to this target's series; an empty alias counts as none.
    pub fn effective_alias(&self) -> Option<&str> {
        self.alias.as_deref().filter(|a| !a.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_host_payload() {
        let options: QueryOptions = serde_json::from_value(json!({
            "range": {
                "from": "2024-03-01T10:00:00+05:30",
                "to": "2024-03-01T11:00:00+05:30"
            },
            "maxDataPoints": 600,
            "targets": [
                { "cluster": "prod", "rawDashboardQuery": "m=cpu", "alias": "CPU" },
                { "cluster": "prod", "rawDashboardQuery": "m=mem", "hide": true }
            ]
        }))
        .unwrap();

        assert_eq!(options.max_data_points, 600);
        assert_eq!(options.range.span_ms(), 3_600_000);
        assert_eq!(options.targets[0].effective_alias(), Some("CPU"));
        assert!(!options.targets[0].hide);
        assert!(options.targets[1].hide);
        assert_eq!(options.targets[1].alias, None);
    }

    #[test]
    fn empty_alias_is_treated_as_absent() {
        let target = Target::new("c1", "m=cpu").with_alias("");
        assert_eq!(target.effective_alias(), None);
    }

    #[test]
    fn zero_max_data_points_fails_validation() {
        let from = DateTime::parse_from_rfc3339("2024-03-01T10:00:00Z").unwrap();
        let options = QueryOptions {
            range: TimeRange::new(from, from),
            max_data_points: 0,
            targets: vec![],
        };
        assert!(options.validate().is_err());
    }
}
