use super::domain::{DocumentType, StepDefinition};
use std::fmt::Write;

pub const NOT_PROVIDED: &str = "(Not provided)";

/// Flatten every step's answers into document text.
///
/// The output depends only on the document type and the current field
/// values, so assembling twice without edits yields identical text.
pub fn assemble_document(document_type: DocumentType, steps: &[StepDefinition]) -> String {
    let mut document = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(document, "# {}", document_type.title());

    for step in steps {
        let _ = writeln!(document);
        let _ = writeln!(document, "## {}", step.title);
        for field in &step.fields {
            let value = if field.is_answered() {
                field.value.as_str()
            } else {
                NOT_PROVIDED
            };
            let _ = writeln!(document, "{}: {}", field.label, value);
        }
    }

    document
}
