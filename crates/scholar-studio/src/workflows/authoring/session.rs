use super::assembler::assemble_document;
use super::blueprint::template_for;
use super::domain::{DocumentType, StepDefinition};
use std::time::Duration;
use tracing::{debug, info};

/// Latency used when the caller does not configure one.
pub const DEFAULT_GENERATION_LATENCY: Duration = Duration::from_millis(1500);

/// One document-authoring attempt. Lives only as long as its owner keeps it.
#[derive(Debug, Clone)]
pub struct GenerationSession {
    document_type: DocumentType,
    steps: Vec<StepDefinition>,
    current_step_index: usize,
    generated_document: String,
    is_generating: bool,
    simulated_latency: Duration,
}

/// Text captured when a generation starts, applied when it completes.
///
/// Overlapping generations each hold their own ticket; whichever completes
/// last determines `generated_document`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a generation ticket does nothing until it is completed"]
pub struct GenerationTicket {
    step_id: &'static str,
    document: String,
}

impl GenerationTicket {
    pub fn step_id(&self) -> &'static str {
        self.step_id
    }

    pub fn document(&self) -> &str {
        &self.document
    }
}

impl GenerationSession {
    pub fn new(document_type: DocumentType) -> Self {
        Self {
            document_type,
            steps: template_for(document_type),
            current_step_index: 0,
            generated_document: String::new(),
            is_generating: false,
            simulated_latency: DEFAULT_GENERATION_LATENCY,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn current_step(&self) -> &StepDefinition {
        &self.steps[self.current_step_index]
    }

    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step_index == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step_index + 1 >= self.steps.len()
    }

    pub fn generated_document(&self) -> &str {
        &self.generated_document
    }

    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    pub fn simulated_latency(&self) -> Duration {
        self.simulated_latency
    }

    /// Required fields on the current step that are still blank. Purely
    /// informational: navigation and generation ignore it.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        self.current_step().missing_required_fields()
    }

    /// Set a field on the current step. Unknown ids are ignored.
    pub fn update_field(&mut self, field_id: &str, value: impl Into<String>) {
        let index = self.current_step_index;
        let step = &mut self.steps[index];
        match step.field_mut(field_id) {
            Some(field) => field.value = value.into(),
            None => debug!(
                step = step.id,
                field = field_id,
                "ignoring update for field outside the current step"
            ),
        }
    }

    pub fn next_step(&mut self) {
        if !self.is_last_step() {
            self.current_step_index += 1;
            debug!(index = self.current_step_index, "advanced to next step");
        }
    }

    pub fn prev_step(&mut self) {
        if !self.is_first_step() {
            self.current_step_index -= 1;
            debug!(index = self.current_step_index, "returned to previous step");
        }
    }

    /// Assemble the document from the current answers without touching state.
    pub fn assemble(&self) -> String {
        assemble_document(self.document_type, &self.steps)
    }

    /// Mark the current step complete, raise the busy flag, and capture the
    /// text the generation will publish.
    pub fn begin_generation(&mut self) -> GenerationTicket {
        let index = self.current_step_index;
        self.steps[index].complete = true;
        self.is_generating = true;

        let ticket = GenerationTicket {
            step_id: self.steps[index].id,
            document: self.assemble(),
        };
        info!(
            document_type = %self.document_type,
            step = ticket.step_id,
            "document generation started"
        );
        ticket
    }

    /// Publish a ticket's text. The most recent call always wins.
    pub fn complete_generation(&mut self, ticket: GenerationTicket) {
        self.generated_document = ticket.document;
        self.is_generating = false;
        info!(
            document_type = %self.document_type,
            step = ticket.step_id,
            bytes = self.generated_document.len(),
            "document generation finished"
        );
    }

    /// Generate the document, suspending for the simulated latency.
    pub async fn generate_document(&mut self) {
        let ticket = self.begin_generation();
        tokio::time::sleep(self.simulated_latency).await;
        self.complete_generation(ticket);
    }
}
