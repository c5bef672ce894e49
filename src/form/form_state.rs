//! Per-field selections and completion tracking.

use std::collections::HashSet;

use crate::classifier_api::{FieldDescriptor, PredictPayload};

use super::schema_filter::{AllowList, filter_fields};

/// Errors raised by form mutations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The field is not part of this form; usually a schema/allow-list mismatch.
    #[error("Unknown form field `{0}`")]
    UnknownField(String),
}

/// Selected value per field. An empty string means the field is unset.
///
/// The key set is fixed when the form is initialized; only values change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    entries: Vec<(String, String)>,
}

impl FormState {
    /// Create a form with one empty entry per field, in the given order.
    pub fn initialize(fields: &[FieldDescriptor]) -> Self {
        let mut seen = HashSet::new();
        let entries = fields
            .iter()
            .filter(|field| seen.insert(field.name.as_str()))
            .map(|field| (field.name.clone(), String::new()))
            .collect();
        Self { entries }
    }

    /// Filter `features` through `allow` and initialize from the result.
    pub fn from_schema(features: &[FieldDescriptor], allow: &AllowList) -> Self {
        Self::initialize(&filter_fields(features, allow))
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Replace the value of an existing field.
    ///
    /// The value is stored as given; it is not checked against the field's options.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let slot = self
            .entries
            .iter_mut()
            .find(|(key, _)| key == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        slot.1 = value.into();
        Ok(())
    }

    /// Clear every value, keeping the key set.
    pub fn reset_all(&mut self) {
        for (_, value) in &mut self.entries {
            value.clear();
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn filled_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .count()
    }

    /// Fraction of fields holding a value; 0 for a form without fields.
    pub fn completion_ratio(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.filled_count() as f64 / self.entries.len() as f64
    }

    /// Completion as a whole percentage, rounded to nearest.
    pub fn progress_percent(&self) -> u8 {
        (self.completion_ratio() * 100.0).round() as u8
    }

    /// True when every field holds a value. A form without fields is never complete.
    pub fn is_complete(&self) -> bool {
        !self.entries.is_empty() && self.entries.iter().all(|(_, value)| !value.is_empty())
    }

    /// Copy of every field and value, as sent to the classifier.
    pub fn snapshot(&self) -> PredictPayload {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::schema_filter::MUSHROOM_FIELDS;

    fn full_schema() -> Vec<FieldDescriptor> {
        MUSHROOM_FIELDS
            .iter()
            .map(|name| FieldDescriptor::plain(*name, &["a", "b"]))
            .collect()
    }

    fn key_set(form: &FormState) -> Vec<String> {
        form.keys().map(str::to_string).collect()
    }

    #[test]
    fn initialize_sets_every_field_empty() {
        let form = FormState::initialize(&full_schema());
        assert_eq!(form.len(), 8);
        assert!(form.keys().all(|key| form.value(key) == Some("")));
        assert_eq!(form.completion_ratio(), 0.0);
        assert_eq!(form.progress_percent(), 0);
        assert!(!form.is_complete());
    }

    #[test]
    fn from_schema_drops_fields_outside_allow_list() {
        let mut schema = full_schema();
        schema.push(FieldDescriptor::plain("cap-shape", &["x"]));
        schema.push(FieldDescriptor::plain("veil-type", &["p"]));
        let form = FormState::from_schema(&schema, &AllowList::default());
        assert_eq!(key_set(&form), MUSHROOM_FIELDS);
    }

    #[test]
    fn set_value_never_changes_key_set() {
        let mut form = FormState::initialize(&full_schema());
        let before = key_set(&form);
        form.set_value("odor", "n").unwrap();
        form.set_value("odor", "").unwrap();
        let err = form.set_value("cap-shape", "x").unwrap_err();
        assert_eq!(err, FormError::UnknownField("cap-shape".into()));
        assert_eq!(key_set(&form), before);
        assert_eq!(form.value("cap-shape"), None);
    }

    #[test]
    fn complete_iff_ratio_is_one() {
        let mut form = FormState::initialize(&full_schema());
        for (index, name) in MUSHROOM_FIELDS.iter().enumerate() {
            assert!(!form.is_complete());
            assert!(form.completion_ratio() < 1.0);
            form.set_value(name, "a").unwrap();
            assert_eq!(form.filled_count(), index + 1);
        }
        assert!(form.is_complete());
        assert_eq!(form.completion_ratio(), 1.0);
        assert_eq!(form.progress_percent(), 100);
    }

    #[test]
    fn progress_rounds_to_nearest_percent() {
        let mut form = FormState::initialize(&full_schema()[..3]);
        form.set_value("odor", "a").unwrap();
        assert_eq!(form.progress_percent(), 33);
        form.set_value("spore-print-color", "a").unwrap();
        assert_eq!(form.progress_percent(), 67);
    }

    #[test]
    fn empty_form_is_never_complete() {
        let form = FormState::initialize(&[]);
        assert!(form.is_empty());
        assert!(!form.is_complete());
        assert_eq!(form.completion_ratio(), 0.0);
    }

    #[test]
    fn reset_all_clears_values_and_keeps_keys() {
        let mut form = FormState::initialize(&full_schema());
        for name in MUSHROOM_FIELDS {
            form.set_value(name, "b").unwrap();
        }
        form.reset_all();
        assert_eq!(key_set(&form), MUSHROOM_FIELDS);
        assert_eq!(form.filled_count(), 0);
        assert!(!form.is_complete());
        assert_eq!(form.completion_ratio(), 0.0);
    }

    #[test]
    fn snapshot_carries_every_field() {
        let mut form = FormState::initialize(&full_schema());
        form.set_value("habitat", "g").unwrap();
        let payload = form.snapshot();
        assert_eq!(payload.len(), 8);
        assert_eq!(payload.get("habitat").map(String::as_str), Some("g"));
        assert_eq!(payload.get("odor").map(String::as_str), Some(""));
    }

    #[test]
    fn duplicate_descriptors_produce_one_key() {
        let schema = [
            FieldDescriptor::plain("odor", &[]),
            FieldDescriptor::plain("odor", &[]),
        ];
        assert_eq!(FormState::initialize(&schema).len(), 1);
    }
}
