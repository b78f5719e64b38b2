//! Guided questionnaire that collects answers step by step and assembles
//! them into a Statement of Purpose or an academic CV.

mod assembler;
mod blueprint;
pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
mod session;
pub mod views;

#[cfg(test)]
mod tests;

pub use assembler::{assemble_document, NOT_PROVIDED};
pub use blueprint::template_for;
pub use domain::{
    DocumentType, DocumentTypeError, FieldDefinition, FieldKind, FieldOption, StepDefinition,
};
pub use repository::{
    RepositoryError, SessionHandle, SessionId, SessionRecord, SessionRepository,
};
pub use router::authoring_router;
pub use service::{AuthoringService, AuthoringServiceError, SessionSnapshot};
pub use session::{GenerationSession, GenerationTicket, DEFAULT_GENERATION_LATENCY};
pub use views::{FieldView, SessionView, StepProgressEntry, StepView};
