//! HTTP client for the classification service.

use serde::Deserialize;
use url::Url;

use super::schema::{PredictPayload, Prediction, Schema};
use crate::http_client;

const MAX_SCHEMA_RESPONSE_BYTES: usize = 1024 * 1024;
const MAX_PREDICT_RESPONSE_BYTES: usize = 64 * 1024;

/// Failures while fetching the field schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaLoadError {
    #[error("Schema request returned HTTP {0}")]
    Status(u16),
    #[error("HTTP error: {0}")]
    Transport(String),
    #[error("Invalid schema body: {0}")]
    InvalidBody(String),
}

/// Failures while requesting a prediction.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PredictError {
    /// The service answered with a non-2xx status and a JSON error body.
    #[error("Prediction rejected with HTTP {status}")]
    Rejected {
        status: u16,
        detail: Option<String>,
    },
    /// The service could not be reached or answered with something unreadable.
    #[error("HTTP error: {0}")]
    Transport(String),
}

/// Remote operations the form session depends on.
pub trait ClassifierClient: Send + Sync {
    fn fetch_schema(&self) -> Result<Schema, SchemaLoadError>;
    fn predict(&self, payload: &PredictPayload) -> Result<Prediction, PredictError>;
}

/// [`ClassifierClient`] backed by the service's JSON HTTP API.
#[derive(Clone, Debug)]
pub struct HttpClassifierClient {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpClassifierClient {
    pub fn new(base_url: &Url) -> Self {
        Self {
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            agent: http_client::agent(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

impl ClassifierClient for HttpClassifierClient {
    fn fetch_schema(&self) -> Result<Schema, SchemaLoadError> {
        let url = self.endpoint("schema");
        let response = match self.agent.get(&url).set("Accept", "application/json").call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => return Err(SchemaLoadError::Status(code)),
            Err(ureq::Error::Transport(err)) => {
                return Err(SchemaLoadError::Transport(err.to_string()));
            }
        };
        let body = http_client::read_body(response, MAX_SCHEMA_RESPONSE_BYTES)
            .map_err(|err| SchemaLoadError::Transport(err.to_string()))?;
        serde_json::from_slice(&body).map_err(|err| SchemaLoadError::InvalidBody(err.to_string()))
    }

    fn predict(&self, payload: &PredictPayload) -> Result<Prediction, PredictError> {
        let url = self.endpoint("predict");
        let request = self
            .agent
            .post(&url)
            .set("Accept", "application/json")
            .set("Content-Type", "application/json");
        let response = match request.send_json(payload) {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                return Err(rejection_from_response(code, response));
            }
            Err(ureq::Error::Transport(err)) => {
                return Err(PredictError::Transport(err.to_string()));
            }
        };
        let body = http_client::read_body(response, MAX_PREDICT_RESPONSE_BYTES)
            .map_err(|err| PredictError::Transport(err.to_string()))?;
        serde_json::from_slice(&body)
            .map_err(|err| PredictError::Transport(format!("Invalid prediction body: {err}")))
    }
}

#[derive(Deserialize)]
struct RejectionWire {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

fn rejection_from_response(status: u16, response: ureq::Response) -> PredictError {
    match http_client::read_body(response, MAX_PREDICT_RESPONSE_BYTES) {
        Ok(body) => parse_rejection(status, &body),
        Err(err) => PredictError::Transport(format!("HTTP {status}: {err}")),
    }
}

/// Interpret an error body; only a non-empty string `detail` is kept.
fn parse_rejection(status: u16, body: &[u8]) -> PredictError {
    match serde_json::from_slice::<RejectionWire>(body) {
        Ok(wire) => PredictError::Rejected {
            status,
            detail: wire
                .detail
                .and_then(|detail| detail.as_str().map(str::to_string))
                .filter(|detail| !detail.is_empty()),
        },
        Err(_) => PredictError::Transport(format!("HTTP {status} with a non-JSON body")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::test_server::{json_response, serve_once};
    use std::time::Duration;

    fn client_for(base: &str) -> HttpClassifierClient {
        HttpClassifierClient::new(&Url::parse(base).unwrap())
    }

    #[test]
    fn fetches_schema() {
        let (base, requests) = serve_once(json_response(
            "200 OK",
            r#"{"features": [{"name": "odor", "options": ["a", "n"]}]}"#,
        ));
        let schema = client_for(&base).fetch_schema().unwrap();
        assert_eq!(schema.features.len(), 1);
        let request = requests.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(request.starts_with("GET /schema "));
    }

    #[test]
    fn schema_status_error_reports_code() {
        let (base, _) = serve_once(json_response("503 Service Unavailable", "{}"));
        let err = client_for(&base).fetch_schema().unwrap_err();
        assert!(matches!(err, SchemaLoadError::Status(503)));
    }

    #[test]
    fn schema_non_json_body_is_invalid() {
        let (base, _) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 4\r\nConnection: close\r\n\r\nnope".to_string(),
        );
        let err = client_for(&base).fetch_schema().unwrap_err();
        assert!(matches!(err, SchemaLoadError::InvalidBody(_)));
    }

    #[test]
    fn schema_body_missing_features_is_invalid() {
        let (base, _) = serve_once(json_response("200 OK", r#"{"detail": "upstream error"}"#));
        let err = client_for(&base).fetch_schema().unwrap_err();
        assert!(matches!(err, SchemaLoadError::InvalidBody(_)));
    }

    #[test]
    fn predict_posts_payload_and_parses_result() {
        let (base, requests) = serve_once(json_response(
            "200 OK",
            r#"{"label": "Edible", "class": "e", "confidence": 0.93}"#,
        ));
        let mut payload = PredictPayload::new();
        payload.insert("odor".into(), "n".into());
        let prediction = client_for(&base).predict(&payload).unwrap();
        assert_eq!(prediction.class_code, "e");
        assert_eq!(prediction.confidence, Some(0.93));
        let request = requests.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(request.starts_with("POST /predict "));
        assert!(request.ends_with(r#"{"odor":"n"}"#));
    }

    #[test]
    fn predict_rejection_keeps_detail_verbatim() {
        let (base, _) = serve_once(json_response(
            "422 Unprocessable Entity",
            r#"{"detail": "missing field"}"#,
        ));
        let err = client_for(&base).predict(&PredictPayload::new()).unwrap_err();
        assert_eq!(
            err,
            PredictError::Rejected {
                status: 422,
                detail: Some("missing field".into()),
            }
        );
    }

    #[test]
    fn predict_unreachable_is_transport() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = client_for(&format!("http://{addr}"))
            .predict(&PredictPayload::new())
            .unwrap_err();
        assert!(matches!(err, PredictError::Transport(_)));
    }

    #[test]
    fn rejection_without_string_detail_has_no_detail() {
        assert_eq!(
            parse_rejection(400, br#"{"detail": [{"loc": ["body"]}]}"#),
            PredictError::Rejected {
                status: 400,
                detail: None,
            }
        );
        assert_eq!(
            parse_rejection(400, br#"{"detail": ""}"#),
            PredictError::Rejected {
                status: 400,
                detail: None,
            }
        );
        assert!(matches!(
            parse_rejection(502, b"<html>Bad gateway</html>"),
            PredictError::Transport(_)
        ));
    }

    #[test]
    fn base_url_trailing_slash_is_ignored() {
        let client = client_for("http://127.0.0.1:8000/api/");
        assert_eq!(client.endpoint("schema"), "http://127.0.0.1:8000/api/schema");
    }
}
