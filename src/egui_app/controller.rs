//! Session controller bridging the form logic to the egui UI.
//!
//! All state changes happen on the UI thread in response to discrete events:
//! schema arrival, field edits, predict and reset clicks, and settled
//! requests picked up by [`EguiController::tick`].

mod background_jobs;
mod confirm;
mod jobs;
mod predictions;
mod schema_loading;

pub use confirm::{ConfirmPrompt, DialogConfirm};
pub use schema_loading::{NO_FIELDS_MESSAGE, SCHEMA_LOAD_FAILED_MESSAGE};

use crate::classifier_api::{ClassifierClient, FieldDescriptor};
use crate::egui_app::state::{SchemaStatus, StatusTone, UiState};
use crate::form::{
    AllowList, FieldControl, FormState, LabelDictionary, PredictionController, RequestLifecycle,
    ResultView, render_field,
};
use jobs::ControllerJobs;
use std::sync::Arc;

const RESET_TITLE: &str = "Start over?";
const RESET_MESSAGE: &str = "Clear every selection and start over?";

/// Maintains session state and bridges the form logic to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    allow_list: AllowList,
    labels: LabelDictionary,
    fields: Vec<FieldDescriptor>,
    form: FormState,
    prediction: PredictionController,
    confirm: Box<dyn ConfirmPrompt>,
    runtime: ControllerJobs,
}

impl EguiController {
    pub fn new(
        client: Arc<dyn ClassifierClient>,
        labels: LabelDictionary,
        confirm: Box<dyn ConfirmPrompt>,
    ) -> Self {
        Self {
            ui: UiState::default(),
            allow_list: AllowList::default(),
            labels,
            fields: Vec::new(),
            form: FormState::default(),
            prediction: PredictionController::new(),
            confirm,
            runtime: ControllerJobs::new(client),
        }
    }

    /// Process finished background work. Call once per frame.
    pub fn tick(&mut self) {
        self.poll_background_jobs();
    }

    /// True while a worker has not reported back; the UI keeps repainting.
    pub fn has_pending_jobs(&self) -> bool {
        self.runtime.busy()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Allowed fields from the loaded schema, in schema order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Control descriptions for every rendered field.
    pub fn field_controls(&self) -> Vec<FieldControl> {
        self.fields
            .iter()
            .map(|field| {
                let value = self.form.value(&field.name).unwrap_or_default();
                render_field(field, value, &self.labels)
            })
            .collect()
    }

    /// Record a selection for `name`. Unknown fields are rejected and reported.
    pub fn set_field_value(&mut self, name: &str, value: &str) {
        if let Err(err) = self.form.set_value(name, value) {
            tracing::warn!(field = name, "rejected edit: {err}");
            self.set_status(err.to_string(), StatusTone::Error);
        }
    }

    pub fn progress_percent(&self) -> u8 {
        self.form.progress_percent()
    }

    pub fn lifecycle(&self) -> RequestLifecycle {
        self.prediction.lifecycle()
    }

    pub fn is_loading(&self) -> bool {
        self.prediction.is_loading()
    }

    /// Whether the predict action is enabled.
    pub fn can_predict(&self) -> bool {
        self.ui.schema == SchemaStatus::Ready && self.prediction.can_predict(&self.form)
    }

    pub fn result_view(&self) -> ResultView {
        crate::form::present(self.prediction.outcome())
    }

    /// Message for the error area: schema failure first, then prediction failure.
    pub fn error_message(&self) -> Option<&str> {
        if let SchemaStatus::Failed(message) = &self.ui.schema {
            return Some(message);
        }
        self.prediction.failure().map(|(message, _)| message)
    }

    /// Connectivity hint accompanying a transport failure.
    pub fn error_hint(&self) -> Option<&'static str> {
        self.prediction.failure().and_then(|(_, kind)| kind.hint())
    }

    /// Advice shown while the form is incomplete and nothing went wrong.
    pub fn advisory_message(&self) -> Option<String> {
        if self.ui.schema != SchemaStatus::Ready
            || self.error_message().is_some()
            || self.form.is_empty()
            || self.form.is_complete()
        {
            return None;
        }
        Some(format!(
            "Describe all {} features to get a prediction.",
            self.form.len()
        ))
    }

    /// Ask for confirmation, then clear every selection and the prediction.
    ///
    /// Returns whether the reset happened. A declined prompt changes nothing.
    pub fn request_reset(&mut self) -> bool {
        if !self.confirm.confirm(RESET_TITLE, RESET_MESSAGE) {
            return false;
        }
        self.form.reset_all();
        self.prediction.reset();
        tracing::info!("form reset");
        self.set_status("Form cleared", StatusTone::Info);
        true
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.text = text.into();
        self.ui.status.tone = tone;
    }
}
