use super::features::FeatureSet;
use super::{RiskPredictor, RiskVerdict};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum BatchImportError {
    #[error("failed to read feature export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid feature CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads per-region feature rows from a CSV export. Missing or blank cells take defaults.
pub struct BatchImporter;

impl BatchImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<FeatureSet>, BatchImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<FeatureSet>, BatchImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut rows = Vec::new();

        for record in csv_reader.deserialize::<FeatureRow>() {
            rows.push(record?.into_features());
        }

        Ok(rows)
    }
}

/// Score rows in input order.
pub fn score_batch<P>(predictor: &P, rows: &[FeatureSet]) -> Vec<RiskVerdict>
where
    P: RiskPredictor + ?Sized,
{
    rows.iter().map(|row| predictor.predict(row)).collect()
}

#[derive(Debug, Deserialize)]
struct FeatureRow {
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    records: Option<u64>,
    #[serde(default)]
    anomalies: Option<u64>,
    #[serde(default)]
    invalid_pin_rate: Option<f64>,
    #[serde(default)]
    duplicate_rate: Option<f64>,
    #[serde(default)]
    missing_dob_rate: Option<f64>,
}

impl FeatureRow {
    fn into_features(self) -> FeatureSet {
        let defaults = FeatureSet::default();
        FeatureSet {
            records: self.records.unwrap_or(defaults.records),
            anomalies: self.anomalies.unwrap_or(defaults.anomalies),
            invalid_pin_rate: self.invalid_pin_rate.unwrap_or(defaults.invalid_pin_rate),
            duplicate_rate: self.duplicate_rate.unwrap_or(defaults.duplicate_rate),
            missing_dob_rate: self.missing_dob_rate.unwrap_or(defaults.missing_dob_rate),
            state: self
                .state
                .filter(|state| !state.is_empty())
                .unwrap_or(defaults.state),
        }
    }
}
