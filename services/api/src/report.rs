use aadhaar_risk::error::AppError;
use aadhaar_risk::risk::{
    score, score_batch, BatchImporter, FeatureSet, RiskVerdict, RuleBasedPredictor,
};
use clap::Args;
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// Total record count in the batch
    #[arg(long, default_value_t = 1)]
    pub(crate) records: u64,
    /// Count of records flagged anomalous
    #[arg(long, default_value_t = 0)]
    pub(crate) anomalies: u64,
    /// Fraction of records with invalid postal codes
    #[arg(long, default_value_t = 0.0)]
    pub(crate) invalid_pin_rate: f64,
    /// Fraction of duplicate identity records
    #[arg(long, default_value_t = 0.0)]
    pub(crate) duplicate_rate: f64,
    /// Fraction of records missing a date of birth
    #[arg(long, default_value_t = 0.0)]
    pub(crate) missing_dob_rate: f64,
    /// Region label carried through to the verdict
    #[arg(long, default_value = "Unknown")]
    pub(crate) state: String,
    /// Emit the verdict as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

impl PredictArgs {
    pub(crate) fn features(&self) -> FeatureSet {
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

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with state, records, anomalies and rate columns
    pub(crate) csv: PathBuf,
    /// Emit the verdicts as a JSON array instead of text summaries
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let verdict = score(&args.features());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        print!("{}", render_verdict(&verdict));
    }
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let rows = BatchImporter::from_path(&args.csv)?;
    let verdicts = score_batch(&RuleBasedPredictor, &rows);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&verdicts)?);
        return Ok(());
    }

    println!(
        "Scored {} region(s) from {}",
        verdicts.len(),
        args.csv.display()
    );
    for verdict in &verdicts {
        println!();
        print!("{}", render_verdict(verdict));
    }
    Ok(())
}

pub(crate) fn render_verdict(verdict: &RiskVerdict) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Risk assessment for {}", verdict.state);
    let _ = writeln!(
        out,
        "  Prediction: {} (score {:.2}, confidence {:.2})",
        verdict.prediction.label(),
        verdict.score,
        verdict.confidence
    );
    let _ = writeln!(out, "  Action: {}", verdict.recommended_action);
    let _ = writeln!(out, "  Top contributing features:");
    for entry in &verdict.top_features {
        let _ = writeln!(
            out,
            "    - {}: {} ({:.1})",
            entry.feature, entry.value, entry.contribution
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_lists_prediction_action_and_features() {
        let verdict = score(&FeatureSet {
            records: 200,
            anomalies: 30,
            invalid_pin_rate: 0.2,
            duplicate_rate: 0.12,
            missing_dob_rate: 0.08,
            state: "Bihar".to_string(),
        });

        let text = render_verdict(&verdict);

        assert!(text.starts_with("Risk assessment for Bihar\n"));
        assert!(text.contains("Prediction: High Risk Zone (score 0.72, confidence 0.86)"));
        assert!(text.contains("Action: Immediate verification required."));
        assert!(text.contains("    - Invalid PIN Rate: 20.0% (20.0)"));
        assert_eq!(text.matches("    - ").count(), 3);
    }

    #[test]
    fn render_shows_general_assessment_for_clean_batch() {
        let verdict = score(&FeatureSet::default());

        let text = render_verdict(&verdict);

        assert!(text.contains("Prediction: Low Risk Zone (score 0.00, confidence 0.70)"));
        assert!(text.contains("    - General Assessment: Normal (100.0)"));
    }
}
