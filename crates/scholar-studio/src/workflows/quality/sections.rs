use super::super::authoring::DocumentType;
use super::patterns::{
    CV_CONTACT, CV_EDUCATION, CV_EXPERIENCE, CV_PUBLICATIONS, CV_SKILLS, SOP_BACKGROUND, SOP_FIT,
    SOP_GOALS, SOP_INTRODUCTION, SOP_RESEARCH,
};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Completeness entry for one canonical part of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSection {
    pub id: &'static str,
    pub name: &'static str,
    pub required: bool,
    pub present: bool,
    pub quality: u8,
}

struct SectionRule {
    id: &'static str,
    name: &'static str,
    required: bool,
    pattern: &'static LazyLock<Regex>,
}

static SOP_SECTIONS: [SectionRule; 5] = [
    SectionRule {
        id: "introduction",
        name: "Introduction",
        required: true,
        pattern: &SOP_INTRODUCTION,
    },
    SectionRule {
        id: "background",
        name: "Academic Background",
        required: true,
        pattern: &SOP_BACKGROUND,
    },
    SectionRule {
        id: "research",
        name: "Research Experience",
        required: true,
        pattern: &SOP_RESEARCH,
    },
    SectionRule {
        id: "goals",
        name: "Career Goals",
        required: true,
        pattern: &SOP_GOALS,
    },
    SectionRule {
        id: "fit",
        name: "Program Fit",
        required: true,
        pattern: &SOP_FIT,
    },
];

static CV_SECTIONS: [SectionRule; 5] = [
    SectionRule {
        id: "contact",
        name: "Contact Information",
        required: true,
        pattern: &CV_CONTACT,
    },
    SectionRule {
        id: "education",
        name: "Education",
        required: true,
        pattern: &CV_EDUCATION,
    },
    SectionRule {
        id: "experience",
        name: "Experience",
        required: true,
        pattern: &CV_EXPERIENCE,
    },
    SectionRule {
        id: "skills",
        name: "Skills",
        required: true,
        pattern: &CV_SKILLS,
    },
    SectionRule {
        id: "publications",
        name: "Publications",
        required: false,
        pattern: &CV_PUBLICATIONS,
    },
];

fn rules_for(document_type: DocumentType) -> &'static [SectionRule] {
    match document_type {
        DocumentType::Sop => &SOP_SECTIONS,
        DocumentType::Cv => &CV_SECTIONS,
    }
}

/// Quality tier shared by every section. It follows the whole document's
/// length, not the section's own text.
pub(crate) fn section_quality(word_count: usize) -> u8 {
    match word_count {
        0..=49 => 40,
        50..=99 => 70,
        _ => 85,
    }
}

pub(crate) fn detect_sections(
    text: &str,
    document_type: DocumentType,
    word_count: usize,
) -> Vec<DocumentSection> {
    let quality = section_quality(word_count);
    rules_for(document_type)
        .iter()
        .map(|rule| DocumentSection {
            id: rule.id,
            name: rule.name,
            required: rule.required,
            present: rule.pattern.is_match(text),
            quality,
        })
        .collect()
}
