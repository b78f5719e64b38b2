use super::{filler, SHORT_SOP};
use crate::workflows::authoring::DocumentType;
use crate::workflows::quality::{
    calculate_document_score, Dimension, QualityEngine, QualityRubric, ScoreBreakdown,
};

#[test]
fn scores_a_short_statement() {
    let score = calculate_document_score(SHORT_SOP, DocumentType::Sop);

    assert_eq!(
        score.breakdown,
        ScoreBreakdown {
            clarity: 90,
            specificity: 79,
            structure: 97,
            completeness: 30,
            relevance: 77,
        }
    );
    assert_eq!(score.overall, 75);
    assert_eq!(score.weaknesses.len(), 1);
    assert!(score.weaknesses[0].contains("25 words"));
    assert_eq!(score.strengths.len(), 2);
    assert!(score.suggestions.is_empty());
}

#[test]
fn empty_text_falls_back_to_baselines() {
    let score = calculate_document_score("", DocumentType::Sop);

    assert_eq!(
        score.breakdown,
        ScoreBreakdown {
            clarity: 85,
            specificity: 70,
            structure: 80,
            completeness: 30,
            relevance: 75,
        }
    );
    assert_eq!(score.overall, 68);

    let score = calculate_document_score("", DocumentType::Cv);
    assert_eq!(score.breakdown.completeness, 40);
    assert_eq!(score.breakdown.structure, 80);
}

#[test]
fn sop_completeness_follows_word_count() {
    for (words, expected) in [(150, 30), (500, 85), (1200, 70)] {
        let score = calculate_document_score(&filler(words), DocumentType::Sop);
        assert_eq!(score.breakdown.completeness, expected, "{words} words");
    }
}

#[test]
fn cv_completeness_follows_word_count() {
    for (words, expected) in [(100, 40), (200, 70), (400, 90)] {
        let score = calculate_document_score(&filler(words), DocumentType::Cv);
        assert_eq!(score.breakdown.completeness, expected, "{words} words");
    }
}

#[test]
fn overall_is_the_rounded_mean() {
    for text in [SHORT_SOP, "", "Some good, great, nice work was completed."] {
        for document_type in DocumentType::ordered() {
            let score = calculate_document_score(text, document_type);
            let sum: u32 = Dimension::ordered()
                .into_iter()
                .map(|dimension| u32::from(score.breakdown.get(dimension)))
                .sum();
            let expected = (f64::from(sum) / 5.0).round() as u8;
            assert_eq!(score.overall, expected);
        }
    }
}

#[test]
fn scoring_is_deterministic() {
    let engine = QualityEngine::default();
    let first = engine.score(SHORT_SOP, DocumentType::Sop);
    let second = engine.score(SHORT_SOP, DocumentType::Sop);
    assert_eq!(first, second);
}

#[test]
fn vague_run_on_text_collects_feedback() {
    let sentence = "Many students were motivated and some were inspired by various good and great things that happened in several nice places over many long years of study";
    let score = calculate_document_score(&format!("{sentence}."), DocumentType::Sop);

    // 26 words in a single sentence.
    assert_eq!(score.breakdown.clarity, 70);
    assert!(score.breakdown.specificity < 60);
    assert!(score
        .weaknesses
        .iter()
        .any(|message| message.contains("concrete evidence")));
    assert!(score.suggestions[0].starts_with("Quantify"));
    assert!(score.suggestions[1].starts_with("Split"));
}

#[test]
fn custom_rubric_changes_feedback_only() {
    let strict = QualityRubric {
        weakness_below: ScoreBreakdown {
            clarity: 100,
            specificity: 100,
            structure: 100,
            completeness: 100,
            relevance: 100,
        },
        ..QualityRubric::default()
    };
    let engine = QualityEngine::new(strict);

    let strict_score = engine.score(SHORT_SOP, DocumentType::Sop);
    let default_score = QualityEngine::default().score(SHORT_SOP, DocumentType::Sop);

    assert_eq!(strict_score.breakdown, default_score.breakdown);
    assert_eq!(strict_score.weaknesses.len(), 5);
}

#[test]
fn assess_combines_score_and_sections() {
    let report = QualityEngine::default().assess(SHORT_SOP, DocumentType::Sop);

    assert_eq!(report.word_count, 25);
    assert_eq!(report.sentence_count, 3);
    assert_eq!(report.score.overall, 75);
    assert_eq!(report.sections.len(), 5);
}
