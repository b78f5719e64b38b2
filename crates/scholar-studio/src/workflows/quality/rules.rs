use super::super::authoring::DocumentType;
use super::patterns::{
    count, ACADEMIC_TERMS, BACKGROUND_EXPERIENCE, CLARITY_MARKERS, GOAL_PLAN, MOTIVATION_INTENT,
    PASSIVE_VOICE, PROFESSIONAL_TERMS, SPECIFIC_DETAIL, TRANSITIONS, VAGUE_LANGUAGE,
};
use super::ScoreBreakdown;

/// Surface counts shared by the dimension rules and feedback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TextMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_sentence_length: f64,
}

impl TextMetrics {
    pub(crate) fn measure(text: &str) -> Self {
        let word_count = text.split_whitespace().count();
        let sentence_count = text
            .split(['.', '!', '?'])
            .filter(|fragment| !fragment.trim().is_empty())
            .count();
        let avg_sentence_length = if sentence_count == 0 {
            0.0
        } else {
            word_count as f64 / sentence_count as f64
        };

        Self {
            word_count,
            sentence_count,
            avg_sentence_length,
        }
    }
}

pub(crate) fn score_breakdown(
    text: &str,
    document_type: DocumentType,
    metrics: &TextMetrics,
) -> ScoreBreakdown {
    ScoreBreakdown {
        clarity: clarity(text, metrics),
        specificity: specificity(text),
        structure: structure(text, document_type),
        completeness: completeness(metrics.word_count, document_type),
        relevance: relevance(text, document_type),
    }
}

pub(crate) fn clamp_score(raw: i32) -> u8 {
    raw.clamp(0, 100) as u8
}

fn clarity(text: &str, metrics: &TextMetrics) -> u8 {
    let mut score: i32 = 85;

    if metrics.avg_sentence_length > 25.0 {
        score -= 15;
    } else if metrics.avg_sentence_length > 20.0 {
        score -= 10;
    }

    if metrics.word_count > 0 {
        let passive_ratio = count(&PASSIVE_VOICE, text) as f64 / metrics.word_count as f64;
        if passive_ratio > 0.1 {
            score -= 10;
        }
    }

    if CLARITY_MARKERS.is_match(text) {
        score += 5;
    }

    clamp_score(score)
}

fn specificity(text: &str) -> u8 {
    let details = count(&SPECIFIC_DETAIL, text) as i32;
    let vague = count(&VAGUE_LANGUAGE, text) as i32;

    let score = 70 + (details.saturating_mul(3)).min(20) - (vague.saturating_mul(2)).min(15);
    clamp_score(score)
}

fn structure(text: &str, document_type: DocumentType) -> u8 {
    let mut score: i32 = 80;

    if document_type == DocumentType::Sop {
        for pattern in [&MOTIVATION_INTENT, &BACKGROUND_EXPERIENCE, &GOAL_PLAN] {
            if pattern.is_match(text) {
                score += 5;
            }
        }
    }

    let transitions = count(&TRANSITIONS, text) as i32;
    score += (transitions.saturating_mul(2)).min(10);

    clamp_score(score)
}

/// Length tier for the whole document.
pub(crate) fn completeness(word_count: usize, document_type: DocumentType) -> u8 {
    match document_type {
        DocumentType::Sop => match word_count {
            0..=199 => 30,
            200..=399 => 60,
            400..=599 => 85,
            600..=1000 => 95,
            _ => 70,
        },
        DocumentType::Cv => match word_count {
            0..=149 => 40,
            150..=299 => 70,
            _ => 90,
        },
    }
}

fn relevance(text: &str, document_type: DocumentType) -> u8 {
    let keywords = match document_type {
        DocumentType::Sop => &ACADEMIC_TERMS,
        DocumentType::Cv => &PROFESSIONAL_TERMS,
    };
    let matches = count(keywords, text).min(15) as i32;
    clamp_score(75 + matches)
}
