use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of documents the studio knows how to author and assess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Sop,
    Cv,
}

impl DocumentType {
    pub const fn ordered() -> [Self; 2] {
        [Self::Sop, Self::Cv]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sop => "sop",
            Self::Cv => "cv",
        }
    }

    /// Heading placed at the top of an assembled document.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Sop => "Statement of Purpose",
            Self::Cv => "Academic CV",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = DocumentTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sop" => Ok(Self::Sop),
            "cv" => Ok(Self::Cv),
            _ => Err(DocumentTypeError::Unknown(value.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentTypeError {
    #[error("unknown document type '{0}' (expected 'sop' or 'cv')")]
    Unknown(String),
}

/// A selectable choice on a select or radio field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Input widget backing a field. Options only exist where a choice is offered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Textarea,
    Select { options: Vec<FieldOption> },
    Radio { options: Vec<FieldOption> },
    Checkbox,
}

impl FieldKind {
    pub fn options(&self) -> &[FieldOption] {
        match self {
            FieldKind::Select { options } | FieldKind::Radio { options } => options,
            FieldKind::Text | FieldKind::Textarea | FieldKind::Checkbox => &[],
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Textarea => "textarea",
            FieldKind::Select { .. } => "select",
            FieldKind::Radio { .. } => "radio",
            FieldKind::Checkbox => "checkbox",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Advisory only. Navigation and generation never check it.
    pub required: bool,
    pub value: String,
}

impl FieldDefinition {
    /// Any non-empty value counts, including one made only of spaces.
    pub fn is_answered(&self) -> bool {
        !self.value.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub fields: Vec<FieldDefinition>,
    pub complete: bool,
}

impl StepDefinition {
    pub fn field(&self, field_id: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.id == field_id)
    }

    pub(crate) fn field_mut(&mut self, field_id: &str) -> Option<&mut FieldDefinition> {
        self.fields.iter_mut().find(|field| field.id == field_id)
    }

    /// Ids of required fields that are still blank.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|field| field.required && !field.is_answered())
            .map(|field| field.id)
            .collect()
    }
}
