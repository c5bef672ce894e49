use super::jobs::{JobMessage, PredictionResult};
use super::*;
use std::sync::mpsc::TryRecvError;

impl EguiController {
    pub(in crate::egui_app::controller) fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.runtime.try_recv_message() {
                Ok(message) => message,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            };
            match message {
                JobMessage::SchemaLoaded(message) => {
                    self.runtime.clear_schema_load();
                    match message.result {
                        Ok(schema) => self.apply_schema(schema),
                        Err(err) => self.handle_schema_load_error(err),
                    }
                }
                JobMessage::PredictionSettled(message) => {
                    self.runtime.finish_prediction();
                    self.handle_prediction_settled(message);
                }
            }
        }
    }

    fn handle_prediction_settled(&mut self, message: PredictionResult) {
        let PredictionResult { request_id, result } = message;
        if let Err(err) = &result {
            tracing::warn!(request_id, "prediction failed: {err}");
        }
        if !self.prediction.settle(request_id, result) {
            tracing::debug!(request_id, "dropping result for a superseded request");
            return;
        }
        self.report_prediction_status();
    }
}
