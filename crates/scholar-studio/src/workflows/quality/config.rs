use super::ScoreBreakdown;
use serde::{Deserialize, Serialize};

/// Feedback thresholds applied to a computed breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityRubric {
    /// A dimension strictly below its value here is reported as a weakness.
    pub weakness_below: ScoreBreakdown,
    /// A dimension at or above its value here is reported as a strength.
    pub strength_at_least: ScoreBreakdown,
    pub suggest_metrics_below: u8,
    pub suggest_shorter_sentences_below: u8,
    pub suggest_restructure_below: u8,
}

impl Default for QualityRubric {
    fn default() -> Self {
        Self {
            weakness_below: ScoreBreakdown {
                clarity: 70,
                specificity: 60,
                structure: 70,
                completeness: 70,
                relevance: 70,
            },
            strength_at_least: ScoreBreakdown {
                clarity: 85,
                specificity: 80,
                structure: 85,
                completeness: 85,
                relevance: 85,
            },
            suggest_metrics_below: 75,
            suggest_shorter_sentences_below: 75,
            suggest_restructure_below: 75,
        }
    }
}
