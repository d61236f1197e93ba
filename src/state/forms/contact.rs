//! Contact form state and submission workflow
//!
//! Focus movement doubles as the blur event: the field being left is
//! validated and annotated. Editing only ever clears an annotation. Submit
//! validates every required field without short-circuiting, so all failures
//! become visible at once.

use super::field::FormField;
use super::validation::validate;

/// Focus index of the Send button row, one past the last field
pub const SEND_BUTTON_INDEX: usize = 3;

/// Result of one submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All required fields passed; values were cleared
    Accepted,
    /// At least one required field failed; values left untouched
    Rejected,
}

/// The contact form: three required fields plus a Send button row
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub message: FormField,
    active_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name", true),
            email: FormField::email("email", "Email", true),
            message: FormField::multiline("message", "Message", true),
            active_index: 0,
        }
    }

    pub fn field_count(&self) -> usize {
        SEND_BUTTON_INDEX + 1
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn is_button_active(&self) -> bool {
        self.active_index == SEND_BUTTON_INDEX
    }

    pub fn field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.message),
            _ => None,
        }
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.message),
            _ => None,
        }
    }

    pub fn fields(&self) -> [&FormField; 3] {
        [&self.name, &self.email, &self.message]
    }

    fn fields_mut(&mut self) -> [&mut FormField; 3] {
        [&mut self.name, &mut self.email, &mut self.message]
    }

    /// Validate the field losing focus and annotate it (the blur event)
    fn blur_active(&mut self) {
        if let Some(field) = self.field_mut(self.active_index) {
            let validity = validate(field);
            field.annotate(&validity);
        }
    }

    /// Move focus forward, blurring the departed field
    pub fn focus_next(&mut self) {
        self.blur_active();
        self.active_index = (self.active_index + 1) % self.field_count();
    }

    /// Move focus backward, blurring the departed field
    pub fn focus_prev(&mut self) {
        self.blur_active();
        if self.active_index == 0 {
            self.active_index = self.field_count() - 1;
        } else {
            self.active_index -= 1;
        }
    }

    /// Type into the focused field; a no-op on the button row
    pub fn input_char(&mut self, c: char) {
        let index = self.active_index;
        if let Some(field) = self.field_mut(index) {
            field.push_char(c);
        }
    }

    /// Backspace in the focused field; a no-op on the button row
    pub fn backspace(&mut self) {
        let index = self.active_index;
        if let Some(field) = self.field_mut(index) {
            field.pop_char();
        }
    }

    /// Whether every required field currently validates (no annotations are
    /// touched)
    pub fn is_valid(&self) -> bool {
        self.fields()
            .iter()
            .filter(|f| f.required)
            .all(|f| validate(f).is_valid())
    }

    /// Run one submit attempt.
    ///
    /// Every required field is validated and annotated with its result, so
    /// no failure is silently dropped. On acceptance all fields are reset to
    /// empty; on rejection values stay as typed. Nothing carries over to the
    /// next attempt.
    pub fn submit(&mut self) -> SubmitOutcome {
        let mut all_valid = true;
        for field in self.fields_mut() {
            if !field.required {
                continue;
            }
            let validity = validate(field);
            all_valid &= validity.is_valid();
            field.annotate(&validity);
        }

        if all_valid {
            for field in self.fields_mut() {
                field.clear();
            }
            SubmitOutcome::Accepted
        } else {
            SubmitOutcome::Rejected
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
