use super::features::FeatureSet;
use super::FeatureContribution;

const ANOMALY_WEIGHT: f64 = 0.35;
const INVALID_PIN_WEIGHT: f64 = 0.25;
const DUPLICATE_WEIGHT: f64 = 0.25;
const MISSING_DOB_WEIGHT: f64 = 0.15;

/// Stretches the typically small weighted sum across the usable score range.
const NORMALIZATION_FACTOR: f64 = 5.0;

const MAX_TOP_FEATURES: usize = 3;

/// Component rates in reporting order; ties keep this order after ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SignalKind {
    InvalidPin,
    Duplicate,
    Anomaly,
    MissingDob,
}

impl SignalKind {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            SignalKind::InvalidPin => "Invalid PIN Rate",
            SignalKind::Duplicate => "Duplicate Rate",
            SignalKind::Anomaly => "Overall Anomaly Rate",
            SignalKind::MissingDob => "Missing DOB Rate",
        }
    }

    /// A rate must strictly exceed this to be reported as a contributor.
    pub(crate) fn significance_threshold(&self) -> f64 {
        match self {
            SignalKind::InvalidPin => 0.05,
            SignalKind::Duplicate => 0.03,
            SignalKind::Anomaly => 0.02,
            SignalKind::MissingDob => 0.02,
        }
    }
}

pub(crate) struct ScoreSignals {
    pub anomaly_rate: f64,
    pub invalid_pin_rate: f64,
    pub duplicate_rate: f64,
    pub missing_dob_rate: f64,
}

impl ScoreSignals {
    pub(crate) fn from_features(features: &FeatureSet) -> Self {
        Self {
            anomaly_rate: features.anomaly_rate(),
            invalid_pin_rate: features.invalid_pin_rate,
            duplicate_rate: features.duplicate_rate,
            missing_dob_rate: features.missing_dob_rate,
        }
    }

    fn weighted_sum(&self) -> f64 {
        self.anomaly_rate * ANOMALY_WEIGHT
            + self.invalid_pin_rate * INVALID_PIN_WEIGHT
            + self.duplicate_rate * DUPLICATE_WEIGHT
            + self.missing_dob_rate * MISSING_DOB_WEIGHT
    }

    fn in_reporting_order(&self) -> [(SignalKind, f64); 4] {
        [
            (SignalKind::InvalidPin, self.invalid_pin_rate),
            (SignalKind::Duplicate, self.duplicate_rate),
            (SignalKind::Anomaly, self.anomaly_rate),
            (SignalKind::MissingDob, self.missing_dob_rate),
        ]
    }
}

/// Unrounded score, capped at 1.0. Negative rates are not guarded against.
pub(crate) fn normalized_score(signals: &ScoreSignals) -> f64 {
    (signals.weighted_sum() * NORMALIZATION_FACTOR).min(1.0)
}

pub(crate) fn rank_contributions(signals: &ScoreSignals) -> Vec<FeatureContribution> {
    let mut ranked: Vec<FeatureContribution> = signals
        .in_reporting_order()
        .into_iter()
        .filter(|(kind, rate)| *rate > kind.significance_threshold())
        .map(|(kind, rate)| contribution_for(kind, rate))
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.contribution.total_cmp(&a.contribution));
    ranked.truncate(MAX_TOP_FEATURES);

    if ranked.is_empty() {
        ranked.push(FeatureContribution::general_assessment());
    }
    ranked
}

fn contribution_for(kind: SignalKind, rate: f64) -> FeatureContribution {
    let percent = rate * 100.0;
    FeatureContribution {
        feature: kind.label().to_string(),
        value: format!("{percent:.1}%"),
        contribution: round_to(percent, 1),
    }
}

/// Rounds on the decimal expansion of the stored value rather than on a scaled
/// product, so 0.745 (held as 0.74499...) becomes 0.74.
pub(crate) fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
