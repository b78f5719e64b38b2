use proptest::prelude::*;
use scholar_studio::workflows::authoring::DocumentType;
use scholar_studio::workflows::quality::{calculate_document_score, document_sections, Dimension};

fn document_type() -> impl Strategy<Value = DocumentType> {
    prop_oneof![Just(DocumentType::Sop), Just(DocumentType::Cv)]
}

proptest! {
    #[test]
    fn scores_stay_in_range(text in ".{0,400}", document_type in document_type()) {
        let score = calculate_document_score(&text, document_type);
        prop_assert!(score.overall <= 100);
        for dimension in Dimension::ordered() {
            prop_assert!(score.breakdown.get(dimension) <= 100);
        }
    }

    #[test]
    fn overall_is_rounded_mean(
        words in prop::collection::vec("[a-z]{1,10}[.!?]?", 0..300),
        document_type in document_type(),
    ) {
        let text = words.join(" ");
        let score = calculate_document_score(&text, document_type);
        let sum: u32 = Dimension::ordered()
            .into_iter()
            .map(|dimension| u32::from(score.breakdown.get(dimension)))
            .sum();
        prop_assert_eq!(score.overall, (f64::from(sum) / 5.0).round() as u8);
    }

    #[test]
    fn scoring_is_deterministic(text in ".{0,200}", document_type in document_type()) {
        let first = calculate_document_score(&text, document_type);
        let second = calculate_document_score(&text, document_type);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn sections_always_list_five_entries(text in ".{0,200}", document_type in document_type()) {
        let sections = document_sections(&text, document_type);
        prop_assert_eq!(sections.len(), 5);
        let quality = sections[0].quality;
        prop_assert!(sections.iter().all(|section| section.quality == quality));
    }
}
