use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::element_id::ElementId;

/// Result size sent to the reporting service meaning "no limit".
pub const UNBOUNDED_RESULT_SIZE: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReportFilter {
    Element(ElementId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "GetReportStateData", rename_all = "camelCase")]
pub struct StateDataRequest {
    pub filter: ReportFilter,
    pub max_amount: u32,
    pub timespan: String,
}

/// Alarm-severity states in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlarmState {
    Critical,
    Major,
    Masked,
    Minor,
    Normal,
    #[serde(rename = "No template")]
    NoTemplate,
    Timeout,
    Unknown,
    Warning,
}

impl AlarmState {
    pub const ALL: [AlarmState; 9] = [
        AlarmState::Critical,
        AlarmState::Major,
        AlarmState::Masked,
        AlarmState::Minor,
        AlarmState::Normal,
        AlarmState::NoTemplate,
        AlarmState::Timeout,
        AlarmState::Unknown,
        AlarmState::Warning,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AlarmState::Critical => "Critical",
            AlarmState::Major => "Major",
            AlarmState::Masked => "Masked",
            AlarmState::Minor => "Minor",
            AlarmState::Normal => "Normal",
            AlarmState::NoTemplate => "No template",
            AlarmState::Timeout => "Timeout",
            AlarmState::Unknown => "Unknown",
            AlarmState::Warning => "Warning",
        }
    }
}

impl fmt::Display for AlarmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Percentage (0-100) of the window spent in each state, as reported.
///
/// Values are kept exactly as received. `Default` is the all-zero
/// distribution used whenever no data is available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateDistribution {
    #[serde(rename = "percentageCritical")]
    pub critical: f64,
    #[serde(rename = "percentageMajor")]
    pub major: f64,
    #[serde(rename = "percentageMasked")]
    pub masked: f64,
    #[serde(rename = "percentageMinor")]
    pub minor: f64,
    #[serde(rename = "percentageNormal")]
    pub normal: f64,
    #[serde(rename = "percentageNoTemplate")]
    pub no_template: f64,
    #[serde(rename = "percentageTimeout")]
    pub timeout: f64,
    #[serde(rename = "percentageUnknown")]
    pub unknown: f64,
    #[serde(rename = "percentageWarning")]
    pub warning: f64,
}

impl StateDistribution {
    pub fn percentage(&self, state: AlarmState) -> f64 {
        match state {
            AlarmState::Critical => self.critical,
            AlarmState::Major => self.major,
            AlarmState::Masked => self.masked,
            AlarmState::Minor => self.minor,
            AlarmState::Normal => self.normal,
            AlarmState::NoTemplate => self.no_template,
            AlarmState::Timeout => self.timeout,
            AlarmState::Unknown => self.unknown,
            AlarmState::Warning => self.warning,
        }
    }
}

/// Message returned by the reporting service, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ChannelResponse {
    #[serde(rename = "ReportStateDataResponse")]
    StateData(StateDistribution),
    /// Any message kind this source does not consume.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRow {
    pub state: AlarmState,
    pub proportion: f64,
    pub display: String,
}

/// One page of rows. This source always answers in a single page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub rows: Vec<StateRow>,
    pub has_next_page: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let request = StateDataRequest {
            filter: ReportFilter::Element(ElementId::new(12, 34)),
            max_amount: UNBOUNDED_RESULT_SIZE,
            timespan: "2024-01-01 00:00:00|2024-01-02 00:00:00".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "type": "GetReportStateData",
                "filter": { "element": { "systemId": 12, "elementId": 34 } },
                "maxAmount": 0,
                "timespan": "2024-01-01 00:00:00|2024-01-02 00:00:00"
            })
        );
    }

    #[test]
    fn test_response_kinds() {
        let response: ChannelResponse = serde_json::from_value(json!({
            "type": "ReportStateDataResponse",
            "percentageCritical": 10.0,
            "percentageNoTemplate": 90.0
        }))
        .unwrap();
        match response {
            ChannelResponse::StateData(states) => {
                assert_eq!(states.percentage(AlarmState::Critical), 10.0);
                assert_eq!(states.percentage(AlarmState::NoTemplate), 90.0);
                assert_eq!(states.percentage(AlarmState::Warning), 0.0);
            }
            other => panic!("expected state data, got {:?}", other),
        }

        let other: ChannelResponse =
            serde_json::from_value(json!({ "type": "ElementInfoResponse", "name": "x" })).unwrap();
        assert_eq!(other, ChannelResponse::Other);
    }

    #[test]
    fn test_state_names() {
        let names: Vec<&str> = AlarmState::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                "Critical",
                "Major",
                "Masked",
                "Minor",
                "Normal",
                "No template",
                "Timeout",
                "Unknown",
                "Warning"
            ]
        );
        assert_eq!(
            serde_json::to_value(AlarmState::NoTemplate).unwrap(),
            json!("No template")
        );
    }
}
