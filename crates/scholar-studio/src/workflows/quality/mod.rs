//! Heuristic quality rubric for finished documents.
//!
//! Scoring only counts surface patterns (words, sentences, keyword hits), so
//! every result is deterministic for a given text and document type.

mod config;
mod feedback;
mod patterns;
pub mod router;
mod rules;
mod sections;

#[cfg(test)]
mod tests;

pub use config::QualityRubric;
pub use router::quality_router;
pub use sections::DocumentSection;

use super::authoring::DocumentType;
use feedback::compile_feedback;
use rules::TextMetrics;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One of the five scored facets of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Clarity,
    Specificity,
    Structure,
    Completeness,
    Relevance,
}

impl Dimension {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Clarity,
            Self::Specificity,
            Self::Structure,
            Self::Completeness,
            Self::Relevance,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Clarity => "Clarity",
            Self::Specificity => "Specificity",
            Self::Structure => "Structure",
            Self::Completeness => "Completeness",
            Self::Relevance => "Relevance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub clarity: u8,
    pub specificity: u8,
    pub structure: u8,
    pub completeness: u8,
    pub relevance: u8,
}

impl ScoreBreakdown {
    pub const fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Clarity => self.clarity,
            Dimension::Specificity => self.specificity,
            Dimension::Structure => self.structure,
            Dimension::Completeness => self.completeness,
            Dimension::Relevance => self.relevance,
        }
    }

    /// Rounded arithmetic mean of the five dimensions.
    pub fn overall(&self) -> u8 {
        let total: u32 = Dimension::ordered()
            .into_iter()
            .map(|dimension| u32::from(self.get(dimension)))
            .sum();
        let mean = f64::from(total) / Dimension::ordered().len() as f64;
        mean.round().clamp(0.0, 100.0) as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityScore {
    pub overall: u8,
    pub breakdown: ScoreBreakdown,
    pub weaknesses: Vec<String>,
    pub strengths: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Score and section breakdown for one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityReport {
    pub document_type: DocumentType,
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_sentence_length: f64,
    pub score: QualityScore,
    pub sections: Vec<DocumentSection>,
}

/// Stateless assessor applying a rubric to document text.
#[derive(Debug, Clone, Default)]
pub struct QualityEngine {
    rubric: QualityRubric,
}

impl QualityEngine {
    pub fn new(rubric: QualityRubric) -> Self {
        Self { rubric }
    }

    pub fn rubric(&self) -> &QualityRubric {
        &self.rubric
    }

    pub fn score(&self, text: &str, document_type: DocumentType) -> QualityScore {
        let metrics = TextMetrics::measure(text);
        self.score_with(text, document_type, &metrics)
    }

    pub fn sections(&self, text: &str, document_type: DocumentType) -> Vec<DocumentSection> {
        let metrics = TextMetrics::measure(text);
        sections::detect_sections(text, document_type, metrics.word_count)
    }

    pub fn assess(&self, text: &str, document_type: DocumentType) -> QualityReport {
        let metrics = TextMetrics::measure(text);
        let score = self.score_with(text, document_type, &metrics);
        let sections = sections::detect_sections(text, document_type, metrics.word_count);

        QualityReport {
            document_type,
            word_count: metrics.word_count,
            sentence_count: metrics.sentence_count,
            avg_sentence_length: metrics.avg_sentence_length,
            score,
            sections,
        }
    }

    fn score_with(
        &self,
        text: &str,
        document_type: DocumentType,
        metrics: &TextMetrics,
    ) -> QualityScore {
        let breakdown = rules::score_breakdown(text, document_type, metrics);
        let overall = breakdown.overall();
        let feedback = compile_feedback(&breakdown, metrics, document_type, &self.rubric);

        debug!(
            %document_type,
            words = metrics.word_count,
            sentences = metrics.sentence_count,
            overall,
            "document scored"
        );

        QualityScore {
            overall,
            breakdown,
            weaknesses: feedback.weaknesses,
            strengths: feedback.strengths,
            suggestions: feedback.suggestions,
        }
    }
}

/// Score a document with the default rubric.
pub fn calculate_document_score(text: &str, document_type: DocumentType) -> QualityScore {
    QualityEngine::default().score(text, document_type)
}

/// Canonical sections for a document type, checked against the whole text.
pub fn document_sections(text: &str, document_type: DocumentType) -> Vec<DocumentSection> {
    QualityEngine::default().sections(text, document_type)
}
