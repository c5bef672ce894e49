use super::*;
use crate::form::{FailureKind, PredictionOutcome};

impl EguiController {
    /// Submit the form if it is complete and nothing is in flight.
    ///
    /// Returns whether a request was started.
    pub fn predict(&mut self) -> bool {
        if self.ui.schema != SchemaStatus::Ready {
            return false;
        }
        let Some(ticket) = self.prediction.begin(&self.form) else {
            return false;
        };
        tracing::info!(request_id = ticket.request_id, "requesting prediction");
        self.set_status("Analyzing…", StatusTone::Busy);
        self.runtime.begin_prediction(ticket);
        true
    }

    pub(super) fn report_prediction_status(&mut self) {
        match self.prediction.outcome() {
            Some(PredictionOutcome::Success(prediction)) => {
                let text = format!("Prediction: {}", prediction.label);
                self.set_status(text, StatusTone::Info);
            }
            Some(PredictionOutcome::Failure { message, kind }) => {
                let tone = match kind {
                    FailureKind::Rejected => StatusTone::Warning,
                    FailureKind::Unreachable => StatusTone::Error,
                };
                let text = message.clone();
                self.set_status(text, tone);
            }
            None => {}
        }
    }
}
