use crate::infra::{parse_document_type, read_document};
use chrono::Local;
use clap::Args;
use scholar_studio::error::AppError;
use scholar_studio::workflows::authoring::{DocumentType, GenerationSession};
use scholar_studio::workflows::quality::{Dimension, QualityEngine, QualityReport};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Document type to score against (sop or cv)
    #[arg(long, value_parser = parse_document_type)]
    pub(crate) document_type: DocumentType,
    /// Path to the document text; reads stdin when omitted or "-"
    pub(crate) input: Option<PathBuf>,
    /// Emit the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Document type to author (sop or cv)
    #[arg(long, value_parser = parse_document_type, default_value = "sop")]
    pub(crate) document_type: DocumentType,
    /// Simulated generation latency in milliseconds
    #[arg(long, default_value_t = 0)]
    pub(crate) latency_ms: u64,
    /// Print the assembled document before the report
    #[arg(long)]
    pub(crate) show_document: bool,
    /// Emit the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        document_type,
        input,
        json,
    } = args;

    let text = read_document(input.as_deref())?;
    let report = QualityEngine::default().assess(&text, document_type);
    print_report(&report, json)
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        document_type,
        latency_ms,
        show_document,
        json,
    } = args;

    let mut session =
        GenerationSession::new(document_type).with_latency(Duration::from_millis(latency_ms));

    if !json {
        println!(
            "{} authoring demo ({})",
            document_type.title(),
            Local::now().format("%Y-%m-%d %H:%M")
        );
    }

    loop {
        let step_id = session.current_step().id;
        for (_, field_id, value) in sample_answers(document_type)
            .iter()
            .filter(|(step, _, _)| *step == step_id)
        {
            session.update_field(field_id, *value);
        }

        if !json {
            let step = session.current_step();
            let answered = step.fields.iter().filter(|field| field.is_answered()).count();
            println!(
                "- Step {}/{}: {} ({} of {} fields answered)",
                session.current_step_index() + 1,
                session.total_steps(),
                step.title,
                answered,
                step.fields.len()
            );
        }

        if session.is_last_step() {
            break;
        }
        session.next_step();
    }

    session.generate_document().await;

    if show_document && !json {
        println!("\n{}", session.generated_document());
    }

    let report = QualityEngine::default().assess(session.generated_document(), document_type);
    print_report(&report, json)
}

fn print_report(report: &QualityReport, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!(
        "\nQuality report ({}): {} words, {} sentences",
        report.document_type.title(),
        report.word_count,
        report.sentence_count
    );
    println!("Overall score: {}/100", report.score.overall);
    for dimension in Dimension::ordered() {
        println!(
            "  - {:<13} {:>3}",
            dimension.label(),
            report.score.breakdown.get(dimension)
        );
    }

    println!("Sections:");
    for section in &report.sections {
        let status = if section.present { "present" } else { "missing" };
        let requirement = if section.required {
            "required"
        } else {
            "optional"
        };
        println!(
            "  - {} [{}]: {} (quality {})",
            section.name, requirement, status, section.quality
        );
    }

    print_list("Strengths", &report.score.strengths);
    print_list("Weaknesses", &report.score.weaknesses);
    print_list("Suggestions", &report.score.suggestions);
    Ok(())
}

fn print_list(heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{heading}:");
    for item in items {
        println!("  - {item}");
    }
}

type SampleAnswer = (&'static str, &'static str, &'static str);

fn sample_answers(document_type: DocumentType) -> &'static [SampleAnswer] {
    match document_type {
        DocumentType::Sop => &SOP_ANSWERS,
        DocumentType::Cv => &CV_ANSWERS,
    }
}

static SOP_ANSWERS: [SampleAnswer; 14] = [
    ("basic", "full_name", "Priya Raman"),
    ("basic", "target_program", "PhD in Computer Science"),
    ("basic", "target_university", "University of Washington"),
    ("basic", "degree_level", "phd"),
    ("basic", "field_of_study", "Natural Language Processing"),
    ("hook", "hook_style", "personal_story"),
    (
        "hook",
        "opening_story",
        "My interest in language technology began when I translated medical forms for my grandmother. I was inspired to study how machines could do this work reliably.",
    ),
    (
        "research",
        "research_projects",
        "As an undergraduate research assistant I developed a low-resource translation model for Tamil. Specifically, I led the data collection effort and managed a team of four annotators.",
    ),
    (
        "research",
        "research_outcomes",
        "The model improved BLEU by 4.2 points and reduced annotation cost by 30%. The work was accepted at a regional workshop.",
    ),
    (
        "challenges",
        "challenge",
        "Our first corpus was too noisy to train on. However, I designed a filtering pipeline that recovered most of the usable data.",
    ),
    (
        "motivation",
        "why_program",
        "The program offers a strong research group in multilingual learning, and its faculty work directly on the problems I care about.",
    ),
    ("motivation", "faculty_interest", "Prof. Noah Smith"),
    (
        "goals",
        "short_term_goals",
        "My goal is to build evaluation methods for translation quality in low-resource settings.",
    ),
    (
        "goals",
        "long_term_goals",
        "Therefore, I plan a research career in academia, where I can extend this knowledge to the communities that need it most.",
    ),
];

static CV_ANSWERS: [SampleAnswer; 10] = [
    (
        "research_interests",
        "primary_interests",
        "Computational biology, protein structure prediction, and technical methods for reproducible science.",
    ),
    (
        "education",
        "degrees",
        "M.S. Bioinformatics, University of Toronto (2023); B.S. Biology, McGill University (2021)",
    ),
    ("education", "gpa", "3.9"),
    (
        "publications",
        "publication_list",
        "Chen L., et al. Fast contact maps for folding. Journal of Computational Biology, 2024.",
    ),
    ("publications", "citation_style", "apa"),
    (
        "experience",
        "research_positions",
        "Research Assistant, Vector Institute: developed a structure-search pipeline that reduced runtime by 45% and led a team project on benchmark design.",
    ),
    (
        "skills",
        "technical_skills",
        "Python, Rust, PyTorch, AlphaFold tooling; leadership of a four-person engineering team.",
    ),
    (
        "certifications_languages",
        "languages",
        "English (native), Mandarin (fluent), French (intermediate)",
    ),
    (
        "conferences",
        "presentations",
        "ISMB 2024 poster: Contact maps at scale",
    ),
    (
        "awards",
        "awards",
        "NSERC Graduate Scholarship ($17,500); Dean's Honour List",
    ),
];
