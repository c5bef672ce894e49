//! Request lifecycle for prediction attempts.
//!
//! The controller owns no transport. [`PredictionController::begin`] hands out
//! a ticket carrying the form snapshot; whoever performs the request reports
//! back through [`PredictionController::settle`] with the ticket's id. Results
//! for a ticket that is no longer current (the session was reset meanwhile)
//! are dropped.

use crate::classifier_api::{PredictError, PredictPayload, Prediction};

use super::form_state::FormState;

/// Shown when the service rejects a request without a usable `detail`.
pub const GENERIC_REJECTION_MESSAGE: &str = "Prediction failed.";
/// Shown when the service could not be reached or answered unreadably.
pub const UNREACHABLE_MESSAGE: &str = "Could not reach the /predict endpoint.";
/// Extra guidance shown only for [`FailureKind::Unreachable`].
pub const UNREACHABLE_HINT: &str = "Check that the backend is running and reachable.";

/// Where the session is in its current prediction attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestLifecycle {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Category of a failed attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// The service answered with an error payload.
    Rejected,
    /// Network, timeout or unreadable response; worth checking connectivity.
    Unreachable,
}

/// Terminal result of one prediction attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum PredictionOutcome {
    Success(Prediction),
    Failure { message: String, kind: FailureKind },
}

impl FailureKind {
    pub fn hint(self) -> Option<&'static str> {
        match self {
            Self::Rejected => None,
            Self::Unreachable => Some(UNREACHABLE_HINT),
        }
    }
}

impl PredictionOutcome {
    pub fn from_result(result: Result<Prediction, PredictError>) -> Self {
        match result {
            Ok(prediction) => Self::Success(prediction),
            Err(PredictError::Rejected { detail, .. }) => Self::Failure {
                message: detail.unwrap_or_else(|| GENERIC_REJECTION_MESSAGE.to_string()),
                kind: FailureKind::Rejected,
            },
            Err(PredictError::Transport(_)) => Self::Failure {
                message: UNREACHABLE_MESSAGE.to_string(),
                kind: FailureKind::Unreachable,
            },
        }
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            Self::Success(prediction) => Some(prediction),
            Self::Failure { .. } => None,
        }
    }
}

/// A request the caller must perform exactly once.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictTicket {
    pub request_id: u64,
    pub payload: PredictPayload,
}

/// Tracks the single in-flight prediction and its outcome.
#[derive(Debug, Default)]
pub struct PredictionController {
    lifecycle: RequestLifecycle,
    outcome: Option<PredictionOutcome>,
    in_flight: Option<u64>,
    next_request_id: u64,
}

impl PredictionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lifecycle(&self) -> RequestLifecycle {
        self.lifecycle
    }

    pub fn outcome(&self) -> Option<&PredictionOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle == RequestLifecycle::Loading
    }

    /// The submission gate: a complete form and no request in flight.
    pub fn can_predict(&self, form: &FormState) -> bool {
        form.is_complete() && !self.is_loading()
    }

    /// Start an attempt if the gate is open.
    ///
    /// Returns `None` without touching any state when the form is incomplete
    /// or a request is already loading.
    pub fn begin(&mut self, form: &FormState) -> Option<PredictTicket> {
        if !self.can_predict(form) {
            return None;
        }
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.in_flight = Some(request_id);
        self.outcome = None;
        self.lifecycle = RequestLifecycle::Loading;
        Some(PredictTicket {
            request_id,
            payload: form.snapshot(),
        })
    }

    /// Apply the result for `request_id`. Returns false if the ticket is stale.
    pub fn settle(&mut self, request_id: u64, result: Result<Prediction, PredictError>) -> bool {
        if self.in_flight != Some(request_id) {
            return false;
        }
        self.in_flight = None;
        let outcome = PredictionOutcome::from_result(result);
        self.lifecycle = match outcome {
            PredictionOutcome::Success(_) => RequestLifecycle::Succeeded,
            PredictionOutcome::Failure { .. } => RequestLifecycle::Failed,
        };
        self.outcome = Some(outcome);
        true
    }

    /// Return to `Idle`, dropping the outcome and orphaning any in-flight ticket.
    pub fn reset(&mut self) {
        self.lifecycle = RequestLifecycle::Idle;
        self.outcome = None;
        self.in_flight = None;
    }

    /// Message and kind of the current failure, if the last attempt failed.
    pub fn failure(&self) -> Option<(&str, FailureKind)> {
        match &self.outcome {
            Some(PredictionOutcome::Failure { message, kind }) => Some((message.as_str(), *kind)),
            _ => None,
        }
    }
}
