use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Batch-level statistics fed to a predictor. Every field may be omitted on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSet {
    pub records: u64,
    pub anomalies: u64,
    pub invalid_pin_rate: f64,
    pub duplicate_rate: f64,
    pub missing_dob_rate: f64,
    pub state: String,
}

impl Default for FeatureSet {
    fn default() -> Self {
        Self {
            records: 1,
            anomalies: 0,
            invalid_pin_rate: 0.0,
            duplicate_rate: 0.0,
            missing_dob_rate: 0.0,
            state: "Unknown".to_string(),
        }
    }
}

impl FeatureSet {
    /// Decode a loosely-typed mapping, filling absent keys with their defaults.
    pub fn from_value(value: &Value) -> Result<Self, FeatureError> {
        if !value.is_object() {
            return Err(FeatureError::NotAnObject(json_kind(value)));
        }
        Ok(Self::deserialize(value)?)
    }

    /// Share of records flagged anomalous; an empty batch counts as one record.
    pub fn anomaly_rate(&self) -> f64 {
        self.anomalies as f64 / self.records.max(1) as f64
    }

    /// Rate fields lying outside [0, 1]. Scoring accepts them as-is.
    pub fn out_of_range_rates(&self) -> Vec<&'static str> {
        [
            ("invalid_pin_rate", self.invalid_pin_rate),
            ("duplicate_rate", self.duplicate_rate),
            ("missing_dob_rate", self.missing_dob_rate),
        ]
        .into_iter()
        .filter(|(_, rate)| !(0.0..=1.0).contains(rate))
        .map(|(name, _)| name)
        .collect()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Raised when a feature mapping cannot be read at all.
#[derive(Debug, thiserror::Error)]
pub enum FeatureError {
    #[error("feature payload must be a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("invalid feature payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_keys_take_defaults() {
        let features = FeatureSet::from_value(&json!({})).expect("empty object decodes");
        assert_eq!(features, FeatureSet::default());
        assert_eq!(features.records, 1);
        assert_eq!(features.state, "Unknown");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let features = FeatureSet::from_value(&json!({
            "records": 40,
            "district": "Patna",
        }))
        .expect("decodes");
        assert_eq!(features.records, 40);
    }

    #[test]
    fn anomaly_rate_floors_denominator_at_one() {
        let features = FeatureSet {
            records: 0,
            anomalies: 3,
            ..FeatureSet::default()
        };
        assert_eq!(features.anomaly_rate(), 3.0);
    }

    #[test]
    fn non_object_payload_is_rejected() {
        let err = FeatureSet::from_value(&json!([1, 2])).expect_err("arrays rejected");
        assert!(matches!(err, FeatureError::NotAnObject("an array")));
    }

    #[test]
    fn mistyped_field_is_rejected() {
        let err = FeatureSet::from_value(&json!({ "duplicate_rate": "high" }))
            .expect_err("string rate rejected");
        assert!(matches!(err, FeatureError::Decode(_)));
    }

    #[test]
    fn flags_rates_outside_unit_interval() {
        let features = FeatureSet {
            invalid_pin_rate: 1.2,
            duplicate_rate: -0.1,
            missing_dob_rate: 0.4,
            ..FeatureSet::default()
        };
        assert_eq!(
            features.out_of_range_rates(),
            vec!["invalid_pin_rate", "duplicate_rate"]
        );
    }
}
