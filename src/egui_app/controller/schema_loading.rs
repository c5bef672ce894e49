use super::*;
use crate::classifier_api::{Schema, SchemaLoadError};
use crate::form::filter_fields;

/// Shown when the schema could not be fetched or decoded.
pub const SCHEMA_LOAD_FAILED_MESSAGE: &str = "Could not load the schema from the backend. Check that the backend is running and that CORS allows this client.";
/// Shown when the schema has none of the supported fields.
pub const NO_FIELDS_MESSAGE: &str = "No supported fields in the schema.";

impl EguiController {
    /// Fetch the schema in the background. Ignored while a fetch is running.
    pub fn load_schema(&mut self) {
        if self.runtime.schema_load_in_progress() {
            return;
        }
        self.ui.schema = SchemaStatus::Loading;
        self.set_status("Loading schema…", StatusTone::Busy);
        self.runtime.begin_schema_load();
    }

    /// Retry after a failed schema load. Returns false when there is nothing to retry.
    pub fn reload_schema(&mut self) -> bool {
        if !matches!(self.ui.schema, SchemaStatus::Failed(_)) {
            return false;
        }
        self.load_schema();
        true
    }

    pub(super) fn apply_schema(&mut self, schema: Schema) {
        let total = schema.features.len();
        self.fields = filter_fields(&schema.features, &self.allow_list);
        self.form = FormState::initialize(&self.fields);
        self.prediction.reset();
        self.ui.schema = SchemaStatus::Ready;
        tracing::info!(
            received = total,
            rendered = self.fields.len(),
            "schema loaded"
        );
        if self.fields.is_empty() {
            self.set_status(NO_FIELDS_MESSAGE, StatusTone::Warning);
        } else {
            self.set_status(
                format!("Schema loaded: {} features", self.fields.len()),
                StatusTone::Info,
            );
        }
    }

    pub(super) fn handle_schema_load_error(&mut self, err: SchemaLoadError) {
        tracing::error!("schema load failed: {err}");
        self.fields.clear();
        self.form = FormState::default();
        self.ui.schema = SchemaStatus::Failed(SCHEMA_LOAD_FAILED_MESSAGE.to_string());
        self.set_status(format!("Schema unavailable: {err}"), StatusTone::Error);
    }
}
