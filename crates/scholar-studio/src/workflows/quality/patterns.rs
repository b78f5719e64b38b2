//! Surface-text patterns the rubric counts. All matching is case-insensitive.

use regex::Regex;
use std::sync::LazyLock;

macro_rules! rubric_pattern {
    ($name:ident, $regex_str:expr) => {
        pub(crate) static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($regex_str).expect("rubric pattern compiles"));
    };
}

// ── Clarity ───────────────────────────────────────────────────────────────
rubric_pattern!(PASSIVE_VOICE, r"(?i)\b(?:was|were|been|being)\s+\w+ed\b");
rubric_pattern!(
    CLARITY_MARKERS,
    r"(?i)\b(?:specifically|for example|in particular|namely|such as)\b"
);

// ── Specificity ───────────────────────────────────────────────────────────
rubric_pattern!(
    SPECIFIC_DETAIL,
    r"(?i)\d+(?:\.\d+)?%|\$\d[\d,]*(?:\.\d+)?|\b\d+\.\d+\b|\b(?:increased|decreased|improved|reduced|achieved|developed|led|managed)\b"
);
rubric_pattern!(
    VAGUE_LANGUAGE,
    r"(?i)\b(?:many|some|various|several|good|nice|great|excellent|amazing)\b"
);

// ── Structure ─────────────────────────────────────────────────────────────
rubric_pattern!(
    MOTIVATION_INTENT,
    r"(?i)\b(?:passion|passionate|motivated|motivation|inspired|interest|interested|driven|fascinated)\b"
);
rubric_pattern!(
    BACKGROUND_EXPERIENCE,
    r"(?i)\b(?:experience|background|worked|studied|research|project|internship)\b"
);
rubric_pattern!(
    GOAL_PLAN,
    r"(?i)\b(?:goal|goals|aim|plan|plans|future|career|aspire|aspiration)\b"
);
rubric_pattern!(
    TRANSITIONS,
    r"(?i)\b(?:furthermore|additionally|however|therefore|consequently|meanwhile|subsequently)\b"
);

// ── Relevance ─────────────────────────────────────────────────────────────
rubric_pattern!(
    ACADEMIC_TERMS,
    r"(?i)\b(?:research|study|academic|university|program|degree|field|knowledge|learning)\b"
);
rubric_pattern!(
    PROFESSIONAL_TERMS,
    r"(?i)\b(?:experience|skills|project|team|responsibility|achievement|leadership|technical)\b"
);

// ── Sections: Statement of Purpose ────────────────────────────────────────
rubric_pattern!(
    SOP_INTRODUCTION,
    r"(?i)introduction|passion|interest|my name|fascinat"
);
rubric_pattern!(
    SOP_BACKGROUND,
    r"(?i)background|education|degree|undergraduate|studied|bachelor"
);
rubric_pattern!(SOP_RESEARCH, r"(?i)research");
rubric_pattern!(SOP_GOALS, r"(?i)goal|career|future|aspir|plan");
rubric_pattern!(SOP_FIT, r"(?i)program|university|faculty|department|\bfit\b");

// ── Sections: CV ──────────────────────────────────────────────────────────
rubric_pattern!(CV_CONTACT, r"(?i)contact|e-?mail|phone|address|@");
rubric_pattern!(
    CV_EDUCATION,
    r"(?i)education|degree|university|bachelor|master|ph\.?d"
);
rubric_pattern!(
    CV_EXPERIENCE,
    r"(?i)experience|position|employment|intern|assistant"
);
rubric_pattern!(
    CV_SKILLS,
    r"(?i)skills|proficien|programming|technologies|languages"
);
rubric_pattern!(
    CV_PUBLICATIONS,
    r"(?i)publication|journal|proceedings|published|preprint"
);

pub(crate) fn count(pattern: &Regex, text: &str) -> usize {
    pattern.find_iter(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passive_voice_requires_auxiliary_and_participle() {
        assert_eq!(count(&PASSIVE_VOICE, "The model was trained and WERE tested."), 2);
        assert_eq!(count(&PASSIVE_VOICE, "I was happy."), 0);
    }

    #[test]
    fn specific_detail_matches_numbers_and_impact_verbs() {
        let text = "Accuracy improved 12.5% after I led a $40,000 study; error fell to 0.3.";
        // improved, 12.5%, led, $40,000, 0.3
        assert_eq!(count(&SPECIFIC_DETAIL, text), 5);
    }

    #[test]
    fn multi_word_markers_match() {
        assert!(CLARITY_MARKERS.is_match("Tools such as Rust"));
        assert!(CLARITY_MARKERS.is_match("For Example, this"));
        assert!(!CLARITY_MARKERS.is_match("an example"));
    }

    #[test]
    fn vague_words_match_whole_words_only() {
        assert_eq!(count(&VAGUE_LANGUAGE, "Some great results"), 2);
        assert_eq!(count(&VAGUE_LANGUAGE, "somewhat greatly"), 0);
    }
}
