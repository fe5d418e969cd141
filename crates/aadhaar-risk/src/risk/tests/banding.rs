use super::common::*;
use crate::risk::{score, RiskBand};

#[test]
fn classify_uses_half_open_thresholds() {
    assert_eq!(RiskBand::classify(0.70), RiskBand::High);
    assert_eq!(RiskBand::classify(0.6999), RiskBand::Medium);
    assert_eq!(RiskBand::classify(0.40), RiskBand::Medium);
    assert_eq!(RiskBand::classify(0.3999), RiskBand::Low);
    assert_eq!(RiskBand::classify(0.0), RiskBand::Low);
    assert_eq!(RiskBand::classify(1.0), RiskBand::High);
}

#[test]
fn score_landing_on_medium_threshold_is_medium() {
    let verdict = score(&features(1, 0, 0.32, 0.0, 0.0));
    assert_eq!(verdict.score, 0.4);
    assert_eq!(verdict.prediction, RiskBand::Medium);
    assert_eq!(verdict.confidence, 0.75);
}

#[test]
fn score_landing_on_high_threshold_is_high() {
    let verdict = score(&features(1, 0, 0.56, 0.0, 0.0));
    assert_eq!(verdict.score, 0.7);
    assert_eq!(verdict.prediction, RiskBand::High);
    assert_eq!(verdict.confidence, 0.85);
}

#[test]
fn score_just_below_medium_threshold_is_low() {
    let verdict = score(&features(1, 0, 0.319, 0.0, 0.0));
    assert_eq!(verdict.prediction, RiskBand::Low);
}

#[test]
fn confidence_is_clamped_to_band_limits() {
    assert_eq!(RiskBand::High.confidence(1.0), 0.94);
    assert_eq!(RiskBand::High.confidence(5.0), 0.95);
    assert_eq!(RiskBand::Low.confidence(-1.0), 0.65);
    assert!((RiskBand::Medium.confidence(0.5) - 0.77).abs() < 1e-12);
}

#[test]
fn labels_and_actions_are_fixed_text() {
    assert_eq!(RiskBand::Low.label(), "Low Risk Zone");
    assert_eq!(RiskBand::Medium.label(), "Medium Risk Zone");
    assert_eq!(RiskBand::High.label(), "High Risk Zone");
    assert_eq!(
        RiskBand::High.recommended_action(),
        "Immediate verification required. Initiate PIN validation and duplicate check workflows."
    );
    assert_eq!(
        serde_json::to_value(RiskBand::High).expect("serializes"),
        serde_json::json!("High Risk Zone")
    );
}
