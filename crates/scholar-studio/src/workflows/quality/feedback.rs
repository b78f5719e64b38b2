use super::super::authoring::DocumentType;
use super::config::QualityRubric;
use super::rules::TextMetrics;
use super::{Dimension, ScoreBreakdown};

#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Feedback {
    pub weaknesses: Vec<String>,
    pub strengths: Vec<String>,
    pub suggestions: Vec<String>,
}

pub(crate) fn compile_feedback(
    breakdown: &ScoreBreakdown,
    metrics: &TextMetrics,
    document_type: DocumentType,
    rubric: &QualityRubric,
) -> Feedback {
    let mut feedback = Feedback::default();

    for dimension in Dimension::ordered() {
        let score = breakdown.get(dimension);
        if score < rubric.weakness_below.get(dimension) {
            feedback
                .weaknesses
                .push(weakness(dimension, metrics, document_type));
        }
        if score >= rubric.strength_at_least.get(dimension) {
            feedback.strengths.push(strength(dimension).to_string());
        }
    }

    if breakdown.specificity < rubric.suggest_metrics_below {
        feedback.suggestions.push(
            "Quantify your achievements with concrete numbers: percentages, sample sizes, funding amounts, or measurable results."
                .to_string(),
        );
    }
    if breakdown.clarity < rubric.suggest_shorter_sentences_below {
        feedback.suggestions.push(
            "Split sentences longer than 20 words and prefer active voice (\"I designed\" rather than \"was designed\")."
                .to_string(),
        );
    }
    if document_type == DocumentType::Sop && breakdown.structure < rubric.suggest_restructure_below
    {
        feedback.suggestions.push(
            "Restructure the statement so it opens with your motivation, moves through your background and research, and closes with your goals and program fit."
                .to_string(),
        );
    }

    feedback
}

fn weakness(dimension: Dimension, metrics: &TextMetrics, document_type: DocumentType) -> String {
    match dimension {
        Dimension::Clarity => format!(
            "Sentences average {:.1} words or lean on passive voice, which makes the writing harder to follow.",
            metrics.avg_sentence_length
        ),
        Dimension::Specificity => {
            "Claims lack concrete evidence such as numbers, percentages, or measurable outcomes."
                .to_string()
        }
        Dimension::Structure => match document_type {
            DocumentType::Sop => {
                "The narrative does not clearly connect your motivation, background, and goals."
                    .to_string()
            }
            DocumentType::Cv => {
                "Entries read as a flat list without a clear organizing structure.".to_string()
            }
        },
        Dimension::Completeness => {
            if document_type == DocumentType::Sop && metrics.word_count > 1000 {
                format!(
                    "At {} words the statement exceeds the usual limit; tighten it to under 1000 words.",
                    metrics.word_count
                )
            } else {
                format!(
                    "At {} words the document is too brief to cover the expected content.",
                    metrics.word_count
                )
            }
        }
        Dimension::Relevance => match document_type {
            DocumentType::Sop => {
                "The statement rarely ties back to academic themes like research, study, or the program."
                    .to_string()
            }
            DocumentType::Cv => {
                "Entries rarely highlight professional signals like skills, projects, or leadership."
                    .to_string()
            }
        },
    }
}

const fn strength(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Clarity => "Clear, readable sentences that are easy to follow.",
        Dimension::Specificity => "Concrete details and measurable outcomes support your claims.",
        Dimension::Structure => "Well organized, with logical transitions between ideas.",
        Dimension::Completeness => "Covers the expected content at an appropriate length.",
        Dimension::Relevance => "Stays focused on what the reader is looking for.",
    }
}
