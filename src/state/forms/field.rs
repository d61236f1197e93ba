//! Form field value objects

use super::validation::Validity;

/// Input kind, drives validation and rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Multiline,
}

/// A single form field: configuration, current value, and at most one
/// visible error annotation
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    error: Option<String>,
}

impl FormField {
    pub fn text(name: &'static str, label: &'static str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Text, required)
    }

    pub fn email(name: &'static str, label: &'static str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Email, required)
    }

    pub fn multiline(name: &'static str, label: &'static str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Multiline, required)
    }

    fn new(name: &'static str, label: &'static str, kind: FieldKind, required: bool) -> Self {
        Self {
            name,
            label,
            kind,
            required,
            value: String::new(),
            error: None,
        }
    }

    /// Append a character. Editing clears the annotation but never
    /// re-validates; the next blur or submit does that.
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
        self.clear_annotation();
    }

    /// Remove the last character, clearing the annotation like any edit
    pub fn pop_char(&mut self) {
        self.value.pop();
        self.clear_annotation();
    }

    /// Reset value and annotation (form reset after accepted submission)
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    /// Synchronize the visible annotation with a validation result.
    ///
    /// Always clears first, so a field never carries two annotations and
    /// repeated calls with the same result are idempotent.
    pub fn annotate(&mut self, validity: &Validity) {
        self.error = None;
        if let Validity::Invalid(message) = validity {
            self.error = Some(message.clone());
        }
    }

    /// Remove the annotation; a no-op when none exists
    pub fn clear_annotation(&mut self) {
        self.error = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::Multiline
    }
}
