use super::domain::{DocumentType, FieldDefinition, FieldKind, FieldOption, StepDefinition};

/// Fresh canonical steps for a document type. Every call returns new values,
/// so sessions never share field state.
pub fn template_for(document_type: DocumentType) -> Vec<StepDefinition> {
    match document_type {
        DocumentType::Sop => sop_steps(),
        DocumentType::Cv => cv_steps(),
    }
}

fn field(id: &'static str, label: &'static str, kind: FieldKind, required: bool) -> FieldDefinition {
    FieldDefinition {
        id,
        label,
        kind,
        required,
        value: String::new(),
    }
}

fn step(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    fields: Vec<FieldDefinition>,
) -> StepDefinition {
    StepDefinition {
        id,
        title,
        description,
        fields,
        complete: false,
    }
}

const fn option(value: &'static str, label: &'static str) -> FieldOption {
    FieldOption { value, label }
}

fn sop_steps() -> Vec<StepDefinition> {
    vec![
        step(
            "basic",
            "Basic Information",
            "Tell us about the program you are applying to.",
            vec![
                field("full_name", "Full Name", FieldKind::Text, true),
                field("target_program", "Target Program", FieldKind::Text, true),
                field("target_university", "Target University", FieldKind::Text, true),
                field(
                    "degree_level",
                    "Degree Level",
                    FieldKind::Select {
                        options: vec![
                            option("masters", "Master's"),
                            option("phd", "PhD"),
                            option("mphil", "MPhil"),
                        ],
                    },
                    true,
                ),
                field("field_of_study", "Field of Study", FieldKind::Text, false),
            ],
        ),
        step(
            "hook",
            "Opening Hook",
            "Open with a moment that captures why this field matters to you.",
            vec![
                field(
                    "hook_style",
                    "Hook Style",
                    FieldKind::Radio {
                        options: vec![
                            option("personal_story", "Personal story"),
                            option("question", "Thought-provoking question"),
                            option("achievement", "Defining achievement"),
                            option("observation", "Striking observation"),
                        ],
                    },
                    false,
                ),
                field("opening_story", "Opening Story", FieldKind::Textarea, true),
            ],
        ),
        step(
            "research",
            "Research Experience",
            "Describe the research you have done and what came of it.",
            vec![
                field("research_projects", "Research Projects", FieldKind::Textarea, true),
                field("research_outcomes", "Key Outcomes", FieldKind::Textarea, false),
                field("methods", "Methods and Tools", FieldKind::Textarea, false),
            ],
        ),
        step(
            "challenges",
            "Challenges Overcome",
            "Share an obstacle you faced and how you handled it.",
            vec![
                field("challenge", "Challenge Faced", FieldKind::Textarea, false),
                field("lessons_learned", "Lessons Learned", FieldKind::Textarea, false),
            ],
        ),
        step(
            "motivation",
            "Motivation & Program Fit",
            "Explain why this program is the right next step.",
            vec![
                field("why_program", "Why This Program", FieldKind::Textarea, true),
                field("faculty_interest", "Faculty of Interest", FieldKind::Text, false),
                field("program_resources", "Program Resources", FieldKind::Textarea, false),
            ],
        ),
        step(
            "goals",
            "Career Goals",
            "Describe where this degree will take you.",
            vec![
                field("short_term_goals", "Short-Term Goals", FieldKind::Textarea, true),
                field("long_term_goals", "Long-Term Goals", FieldKind::Textarea, true),
                field("contribution", "Contribution to the Field", FieldKind::Textarea, false),
                field(
                    "include_diversity",
                    "Include Diversity Statement",
                    FieldKind::Checkbox,
                    false,
                ),
            ],
        ),
    ]
}

fn cv_steps() -> Vec<StepDefinition> {
    vec![
        step(
            "research_interests",
            "Research Interests",
            "Summarize the questions that drive your work.",
            vec![
                field("primary_interests", "Primary Interests", FieldKind::Textarea, true),
                field("research_summary", "Research Summary", FieldKind::Textarea, false),
            ],
        ),
        step(
            "education",
            "Education",
            "List your degrees, most recent first.",
            vec![
                field("degrees", "Degrees", FieldKind::Textarea, true),
                field("gpa", "GPA", FieldKind::Text, false),
                field("thesis_title", "Thesis Title", FieldKind::Text, false),
            ],
        ),
        step(
            "publications",
            "Publications",
            "Journal articles, proceedings, and preprints.",
            vec![
                field("publication_list", "Publication List", FieldKind::Textarea, false),
                field(
                    "citation_style",
                    "Citation Style",
                    FieldKind::Select {
                        options: vec![
                            option("apa", "APA"),
                            option("mla", "MLA"),
                            option("chicago", "Chicago"),
                            option("ieee", "IEEE"),
                        ],
                    },
                    false,
                ),
            ],
        ),
        step(
            "experience",
            "Research & Teaching Experience",
            "Positions held, with responsibilities and results.",
            vec![
                field("research_positions", "Research Positions", FieldKind::Textarea, true),
                field("teaching_experience", "Teaching Experience", FieldKind::Textarea, false),
            ],
        ),
        step(
            "skills",
            "Skills",
            "Technical, laboratory, and computational skills.",
            vec![
                field("technical_skills", "Technical Skills", FieldKind::Textarea, true),
                field("lab_skills", "Laboratory Skills", FieldKind::Textarea, false),
            ],
        ),
        step(
            "certifications_languages",
            "Certifications & Languages",
            "Professional certifications and spoken languages.",
            vec![
                field("certifications", "Certifications", FieldKind::Textarea, false),
                field("languages", "Languages", FieldKind::Textarea, false),
            ],
        ),
        step(
            "conferences",
            "Conferences & Presentations",
            "Talks and posters you have given.",
            vec![
                field("presentations", "Presentations", FieldKind::Textarea, false),
                field(
                    "presentation_format",
                    "Primary Format",
                    FieldKind::Radio {
                        options: vec![
                            option("oral", "Oral"),
                            option("poster", "Poster"),
                            option("invited", "Invited talk"),
                        ],
                    },
                    false,
                ),
            ],
        ),
        step(
            "awards",
            "Awards & Honors",
            "Scholarships, fellowships, grants, and prizes.",
            vec![
                field("awards", "Awards", FieldKind::Textarea, false),
                field("grants", "Grants & Fellowships", FieldKind::Textarea, false),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sop_template_follows_canonical_order() {
        let ids: Vec<_> = template_for(DocumentType::Sop)
            .iter()
            .map(|step| step.id)
            .collect();
        assert_eq!(
            ids,
            ["basic", "hook", "research", "challenges", "motivation", "goals"]
        );
    }

    #[test]
    fn cv_template_follows_canonical_order() {
        let ids: Vec<_> = template_for(DocumentType::Cv)
            .iter()
            .map(|step| step.id)
            .collect();
        assert_eq!(
            ids,
            [
                "research_interests",
                "education",
                "publications",
                "experience",
                "skills",
                "certifications_languages",
                "conferences",
                "awards",
            ]
        );
    }

    #[test]
    fn field_ids_are_unique_within_each_step() {
        for document_type in DocumentType::ordered() {
            for step in template_for(document_type) {
                let unique: HashSet<_> = step.fields.iter().map(|field| field.id).collect();
                assert_eq!(unique.len(), step.fields.len(), "duplicate id in {}", step.id);
            }
        }
    }

    #[test]
    fn templates_start_blank_and_incomplete() {
        for document_type in DocumentType::ordered() {
            for step in template_for(document_type) {
                assert!(!step.complete);
                assert!(step.fields.iter().all(|field| field.value.is_empty()));
            }
        }
    }
}
