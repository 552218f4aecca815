// src/models.rs
use serde::{Deserialize, Serialize, Serializer};

use crate::errors::ANALYSIS_FAILED_MESSAGE;

/// The structured answer returned by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynergyScore {
    #[serde(serialize_with = "serialize_score")]
    pub synergy_score: f64,
    pub justification: String,
}

impl SynergyScore {
    /// The score as shown in the result badge, e.g. `82%`.
    pub fn score_label(&self) -> String {
        format!("{}%", format_score(self.synergy_score))
    }
}

fn format_score(score: f64) -> String {
    if score.is_finite() && score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        score.to_string()
    }
}

// Whole scores go back out as integers so `82` round-trips as `82`, not `82.0`.
fn serialize_score<S: Serializer>(score: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if score.is_finite() && score.fract() == 0.0 && score.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*score as i64)
    } else {
        serializer.serialize_f64(*score)
    }
}

/// Outcome of one synergy check: a score or an error, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    Score(SynergyScore),
    Error { error: String },
}

impl AnalysisResult {
    /// The single visitor-facing failure.
    pub fn failed() -> Self {
        AnalysisResult::Error {
            error: ANALYSIS_FAILED_MESSAGE.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, AnalysisResult::Error { .. })
    }

    pub fn score(&self) -> Option<&SynergyScore> {
        match self {
            AnalysisResult::Score(score) => Some(score),
            AnalysisResult::Error { .. } => None,
        }
    }
}

/// What the synergy section renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelSnapshot {
    pub in_flight: bool,
    pub result: Option<AnalysisResult>,
    pub score_label: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_score_payload_round_trip_is_exact() {
        let raw = r#"{"synergyScore":82,"justification":"Strong match"}"#;
        let result: AnalysisResult = serde_json::from_str(raw).unwrap();

        assert_eq!(
            result,
            AnalysisResult::Score(SynergyScore {
                synergy_score: 82.0,
                justification: "Strong match".to_string(),
            })
        );
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"synergyScore": 82, "justification": "Strong match"})
        );
    }

    #[test]
    fn test_boundary_labels() {
        let zero = SynergyScore {
            synergy_score: 0.0,
            justification: String::new(),
        };
        let full = SynergyScore {
            synergy_score: 100.0,
            justification: String::new(),
        };
        let partial = SynergyScore {
            synergy_score: 72.5,
            justification: String::new(),
        };
        assert_eq!(zero.score_label(), "0%");
        assert_eq!(full.score_label(), "100%");
        assert_eq!(partial.score_label(), "72.5%");
    }

    #[test]
    fn test_error_shape() {
        let failed = AnalysisResult::failed();
        assert!(failed.is_error());
        assert!(failed.score().is_none());
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({"error": ANALYSIS_FAILED_MESSAGE})
        );
    }

    #[test]
    fn test_partial_payload_is_rejected() {
        assert!(serde_json::from_str::<SynergyScore>(r#"{"synergyScore":50}"#).is_err());
        assert!(serde_json::from_str::<SynergyScore>(r#"{"justification":"x"}"#).is_err());
        assert!(
            serde_json::from_str::<SynergyScore>(r#"{"synergyScore":"high","justification":"x"}"#)
                .is_err()
        );
    }
}
