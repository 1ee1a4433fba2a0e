//! Monitor models for the `/v1/monitor` API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use serde_json::Number;

/// An alerting rule evaluated against a query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Monitor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// `metric alert`, `service check`, `event alert`, ...
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<MonitorOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
}

impl Monitor {
    pub fn new(
        kind: impl Into<String>,
        name: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        Self {
            kind: Some(kind.into()),
            name: Some(name.into()),
            query: Some(query.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonitorOptions {
    /// Minutes. Accepts a numeric string on decode, always sent as a number.
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_i64_from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub no_data_timeframe: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_audit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_no_data: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renotify_interval: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_host_delay: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_delay: Option<i64>,
    /// Muted scopes mapped to their end timestamp (`None` for indefinitely).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silenced: Option<BTreeMap<String, Option<i64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_h: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalation_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<ThresholdCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_tags: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_full_window: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
}

/// Alert thresholds. Values stay JSON numbers on the wire; a numeric string
/// from the API is accepted and re-encoded as a number with the same digits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdCount {
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_number_from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub ok: Option<Number>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_number_from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub critical: Option<Number>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_number_from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub warning: Option<Number>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_number_from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub unknown: Option<Number>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_number_from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub critical_recovery: Option<Number>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_number_from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub warning_recovery: Option<Number>,
}

/// Filters for listing monitors.
#[derive(Debug, Clone, Default)]
pub struct ListMonitorsParams {
    /// Substring match on the monitor name.
    pub name: Option<String>,
    /// Only monitors carrying all of these tags.
    pub tags: Vec<String>,
}

/// Body of a mute request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MuteMonitorRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// POSIX timestamp at which the mute ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_monitor_thresholds_accept_numbers_and_strings() {
        let monitor: Monitor = serde_json::from_value(json!({
            "id": 42,
            "type": "metric alert",
            "query": "avg(last_5m):avg:system.load.1{*} > 4",
            "name": "load",
            "options": {
                "no_data_timeframe": 20,
                "thresholds": {"critical": 4, "warning": "3.5"},
                "silenced": {"*": null, "host:web-01": 1700000000}
            }
        }))
        .unwrap();

        let options = monitor.options.as_ref().unwrap();
        assert_eq!(options.no_data_timeframe, Some(20));
        let thresholds = options.thresholds.as_ref().unwrap();
        assert_eq!(thresholds.critical.as_ref().unwrap().as_i64(), Some(4));
        assert_eq!(thresholds.warning.as_ref().unwrap().as_f64(), Some(3.5));

        let silenced = options.silenced.as_ref().unwrap();
        assert_eq!(silenced.get("*"), Some(&None));
        assert_eq!(silenced.get("host:web-01"), Some(&Some(1_700_000_000)));
    }

    #[test]
    fn test_monitor_options_encode_numbers_as_numbers() {
        let options: MonitorOptions = serde_json::from_str(
            r#"{"no_data_timeframe": "10", "thresholds": {"critical": 90, "warning": "80.50"}}"#,
        )
        .unwrap();
        assert_eq!(
            serde_json::to_string(&options).unwrap(),
            r#"{"no_data_timeframe":10,"thresholds":{"critical":90,"warning":80.50}}"#
        );
    }

    #[test]
    fn test_no_data_timeframe_rejects_non_numeric_text() {
        let err = serde_json::from_value::<MonitorOptions>(json!({"no_data_timeframe": "2m"}))
            .unwrap_err();
        assert!(err.to_string().contains("expected a numeric string"));
    }

    #[test]
    fn test_new_monitor_omits_absent_fields() {
        let monitor = Monitor::new("metric alert", "cpu", "avg(last_1m):avg:cpu{*} > 90");
        assert_eq!(
            serde_json::to_value(&monitor).unwrap(),
            json!({
                "type": "metric alert",
                "name": "cpu",
                "query": "avg(last_1m):avg:cpu{*} > 90"
            })
        );
    }
}
