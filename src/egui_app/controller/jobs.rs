use crate::classifier_api::{
    ClassifierClient, PredictError, Prediction, Schema, SchemaLoadError,
};
use crate::form::PredictTicket;
use std::sync::{
    Arc,
    mpsc::{Receiver, Sender, TryRecvError},
};
use std::thread;

pub(crate) enum JobMessage {
    SchemaLoaded(SchemaLoadResult),
    PredictionSettled(PredictionResult),
}

#[derive(Debug)]
pub(crate) struct SchemaLoadResult {
    pub(crate) result: Result<Schema, SchemaLoadError>,
}

#[derive(Debug)]
pub(crate) struct PredictionResult {
    pub(crate) request_id: u64,
    pub(crate) result: Result<Prediction, PredictError>,
}

/// Worker threads talking to the classifier, reporting back over one channel.
pub(crate) struct ControllerJobs {
    client: Arc<dyn ClassifierClient>,
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    schema_load_in_progress: bool,
    predictions_outstanding: usize,
}

impl ControllerJobs {
    pub(super) fn new(client: Arc<dyn ClassifierClient>) -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            client,
            message_tx,
            message_rx,
            schema_load_in_progress: false,
            predictions_outstanding: 0,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    /// True while any worker has not reported back yet.
    pub(super) fn busy(&self) -> bool {
        self.schema_load_in_progress || self.predictions_outstanding > 0
    }

    pub(super) fn schema_load_in_progress(&self) -> bool {
        self.schema_load_in_progress
    }

    pub(super) fn begin_schema_load(&mut self) {
        if self.schema_load_in_progress {
            return;
        }
        self.schema_load_in_progress = true;
        let tx = self.message_tx.clone();
        let client = Arc::clone(&self.client);
        thread::spawn(move || {
            let result = client.fetch_schema();
            let _ = tx.send(JobMessage::SchemaLoaded(SchemaLoadResult { result }));
        });
    }

    pub(super) fn clear_schema_load(&mut self) {
        self.schema_load_in_progress = false;
    }

    /// Send one prediction request for `ticket` on a worker thread.
    pub(super) fn begin_prediction(&mut self, ticket: PredictTicket) {
        self.predictions_outstanding += 1;
        let tx = self.message_tx.clone();
        let client = Arc::clone(&self.client);
        thread::spawn(move || {
            let result = client.predict(&ticket.payload);
            let _ = tx.send(JobMessage::PredictionSettled(PredictionResult {
                request_id: ticket.request_id,
                result,
            }));
        });
    }

    pub(super) fn finish_prediction(&mut self) {
        self.predictions_outstanding = self.predictions_outstanding.saturating_sub(1);
    }
}
