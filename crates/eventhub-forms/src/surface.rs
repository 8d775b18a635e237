// File: src/surface.rs
// Purpose: The seam between the validator and whatever holds field values and error slots

use crate::field::FieldDescriptor;

/// A form as seen by the validator.
///
/// Implementations must keep a field's error marker and error text in step:
/// `show_error` sets both, `clear_error` removes both.
pub trait FormSurface {
    /// Current value of a field, or `None` when the form has no such field
    fn value(&self, id: &str) -> Option<String>;

    /// Writes an error message into the field's slot and sets its error marker
    fn show_error(&mut self, id: &str, message: &str);

    /// Empties the field's slot and removes its error marker
    fn clear_error(&mut self, id: &str);

    /// Whether the field currently carries the error marker
    fn has_error(&self, id: &str) -> bool;

    /// Clears every value and every error slot
    fn reset(&mut self);
}

/// One field's live state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub error: Option<String>,
}

impl FieldState {
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// In-memory form, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: Vec<(String, FieldState)>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// One empty field per descriptor, keeping descriptor order
    pub fn from_descriptors(descriptors: &[FieldDescriptor]) -> Self {
        Self {
            fields: descriptors
                .iter()
                .map(|d| (d.id.clone(), FieldState::default()))
                .collect(),
        }
    }

    /// Adds a field at the end, or updates the value of an existing one
    pub fn with_field(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        let id = id.into();
        let value = value.into();
        match self.field_mut(&id) {
            Some(field) => field.value = value,
            None => self.fields.push((
                id,
                FieldState {
                    value,
                    error: None,
                },
            )),
        }
        self
    }

    /// Sets a field's value; unknown ids are ignored
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) {
        if let Some(field) = self.field_mut(id) {
            field.value = value.into();
        }
    }

    pub fn field(&self, id: &str) -> Option<&FieldState> {
        self.fields
            .iter()
            .find(|(field_id, _)| field_id == id)
            .map(|(_, state)| state)
    }

    fn field_mut(&mut self, id: &str) -> Option<&mut FieldState> {
        self.fields
            .iter_mut()
            .find(|(field_id, _)| field_id == id)
            .map(|(_, state)| state)
    }

    /// Error text currently shown for a field
    pub fn error(&self, id: &str) -> Option<&str> {
        self.field(id).and_then(|f| f.error.as_deref())
    }

    /// All shown errors, in document order
    pub fn errors(&self) -> Vec<(&str, &str)> {
        self.fields
            .iter()
            .filter_map(|(id, state)| state.error.as_deref().map(|e| (id.as_str(), e)))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldState)> {
        self.fields.iter().map(|(id, state)| (id.as_str(), state))
    }
}

impl FormSurface for FormState {
    fn value(&self, id: &str) -> Option<String> {
        self.field(id).map(|f| f.value.clone())
    }

    fn show_error(&mut self, id: &str, message: &str) {
        if let Some(field) = self.field_mut(id) {
            field.error = Some(message.to_string());
        }
    }

    fn clear_error(&mut self, id: &str) {
        if let Some(field) = self.field_mut(id) {
            field.error = None;
        }
    }

    fn has_error(&self, id: &str) -> bool {
        self.field(id).is_some_and(FieldState::has_error)
    }

    fn reset(&mut self) {
        for (_, field) in &mut self.fields {
            *field = FieldState::default();
        }
    }
}
