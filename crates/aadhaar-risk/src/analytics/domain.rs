use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::risk::FeatureSet;

/// Aggregate record counts and quality rates for one state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateStats {
    pub state: String,
    pub records: u64,
    pub anomalies: u64,
    pub invalid_pin_rate: f64,
    pub duplicate_rate: f64,
    pub missing_dob_rate: f64,
}

impl StateStats {
    pub fn to_features(&self) -> FeatureSet {
        FeatureSet {
            records: self.records,
            anomalies: self.anomalies,
            invalid_pin_rate: self.invalid_pin_rate,
            duplicate_rate: self.duplicate_rate,
            missing_dob_rate: self.missing_dob_rate,
            state: self.state.clone(),
        }
    }
}

/// Counts of each data-quality defect found in a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyReport {
    pub duplicate_ids: Vec<String>,
    pub invalid_pincodes: u64,
    pub missing_dob: u64,
    pub invalid_phone: u64,
    pub impossible_age: u64,
    pub district_mismatch: u64,
    pub inconsistent_gender: u64,
}

impl AnomalyReport {
    pub fn total(&self) -> u64 {
        self.duplicate_ids.len() as u64
            + self.invalid_pincodes
            + self.missing_dob
            + self.invalid_phone
            + self.impossible_age
            + self.district_mismatch
            + self.inconsistent_gender
    }
}

/// Two anomaly kinds that tend to occur together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationWarning {
    pub primary: String,
    pub secondary: String,
    pub coefficient: f64,
    pub message: String,
}

/// Bucketed counts keyed by bucket label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionStats {
    pub age_distribution: BTreeMap<String, u64>,
    pub gender_distribution: BTreeMap<String, u64>,
    pub state_distribution: BTreeMap<String, u64>,
}
