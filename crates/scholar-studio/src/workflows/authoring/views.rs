use super::domain::{DocumentType, FieldDefinition, FieldOption, StepDefinition};
use super::session::GenerationSession;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    pub required: bool,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepView {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub complete: bool,
    pub fields: Vec<FieldView>,
    pub missing_required: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepProgressEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub complete: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub document_type: DocumentType,
    pub current_step_index: usize,
    pub total_steps: usize,
    pub is_first_step: bool,
    pub is_last_step: bool,
    pub is_generating: bool,
    pub current_step: StepView,
    pub progress: Vec<StepProgressEntry>,
    pub generated_document: String,
}

impl FieldDefinition {
    pub fn to_view(&self) -> FieldView {
        FieldView {
            id: self.id,
            label: self.label,
            kind: self.kind.label(),
            options: self.kind.options().to_vec(),
            required: self.required,
            value: self.value.clone(),
        }
    }
}

impl StepDefinition {
    pub fn to_view(&self) -> StepView {
        StepView {
            id: self.id,
            title: self.title,
            description: self.description,
            complete: self.complete,
            fields: self.fields.iter().map(FieldDefinition::to_view).collect(),
            missing_required: self.missing_required_fields(),
        }
    }
}

impl GenerationSession {
    pub fn to_view(&self) -> SessionView {
        let progress = self
            .steps()
            .iter()
            .map(|step| StepProgressEntry {
                id: step.id,
                title: step.title,
                complete: step.complete,
            })
            .collect();

        SessionView {
            document_type: self.document_type(),
            current_step_index: self.current_step_index(),
            total_steps: self.total_steps(),
            is_first_step: self.is_first_step(),
            is_last_step: self.is_last_step(),
            is_generating: self.is_generating(),
            current_step: self.current_step().to_view(),
            progress,
            generated_document: self.generated_document().to_string(),
        }
    }
}
