//! Wire contract for the prediction endpoint.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::http_client;

/// Path of the plain-text prediction endpoint, joined onto the base URL.
pub const PREDICT_PATH: &str = "/predict/plain";

const MAX_PREDICT_RESPONSE_BYTES: usize = 256 * 1024;

/// One input token with an optional attribution weight.
///
/// Accepted on the wire but not rendered anywhere yet.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TokenAttribution {
    pub token: String,
    #[serde(default, alias = "attr")]
    pub attribution: Option<f64>,
}

/// A prediction returned by the service.
///
/// `label` is an open set: the service is expected to answer `"positive"` or
/// `"negative"`, but any string must be tolerated and shown as-is.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PredictionResponse {
    pub request_id: String,
    pub model_backend: String,
    pub model_version: String,
    pub latency_ms: f64,
    pub label: String,
    pub score: f64,
    #[serde(default)]
    pub probs: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    pub tokens: Option<Vec<TokenAttribution>>,
    #[serde(default)]
    pub truncated: Option<bool>,
}

/// Errors surfaced by a prediction attempt.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// Non-success HTTP status, carrying the raw diagnostic body verbatim.
    #[error("{status} {body}")]
    Status { status: u16, body: String },
    /// The service could not be reached.
    #[error("HTTP error: {0}")]
    Transport(String),
    /// Success status with a body that is not a valid prediction.
    #[error("Invalid prediction response: {0}")]
    Json(String),
}

impl PredictError {
    /// Message shown in the error banner.
    ///
    /// Falls back to a fixed string if formatting ever yields nothing,
    /// so the banner never renders empty.
    pub fn display_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            "Request failed".to_string()
        } else {
            message
        }
    }
}

/// Submit trimmed text for prediction.
///
/// The body is the raw text itself with `Content-Type: text/plain`; the
/// service expects an unwrapped body, not a JSON-encoded string.
pub fn predict(base_url: &str, text: &str) -> Result<PredictionResponse, PredictError> {
    let url = format!("{}{PREDICT_PATH}", base_url.trim_end_matches('/'));
    let response = match http_client::agent()
        .post(&url)
        .set("Content-Type", "text/plain")
        .send_string(text)
    {
        Ok(response) => response,
        Err(ureq::Error::Status(status, response)) => {
            let body = read_body_limited(response, MAX_PREDICT_RESPONSE_BYTES)
                .unwrap_or_else(|err| err);
            return Err(PredictError::Status { status, body });
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(PredictError::Transport(err.to_string()));
        }
    };

    let body =
        read_body_limited(response, MAX_PREDICT_RESPONSE_BYTES).map_err(PredictError::Json)?;
    parse_prediction_response(&body)
}

fn parse_prediction_response(body: &str) -> Result<PredictionResponse, PredictError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(PredictError::Json("Empty response body".to_string()));
    }
    serde_json::from_str(trimmed).map_err(|err| PredictError::Json(err.to_string()))
}

fn read_body_limited(response: ureq::Response, max_bytes: usize) -> Result<String, String> {
    let bytes = http_client::read_response_bytes(response, max_bytes)
        .map_err(|err| err.to_string())?;
    String::from_utf8(bytes).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    /// Serve one canned response, capturing the full request for assertions.
    fn serve_once(response: String) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (request_tx, request_rx) = mpsc::channel();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let request = read_request(&mut stream);
                let _ = stream.write_all(response.as_bytes());
                let _ = request_tx.send(request);
            }
        });
        (format!("http://{}", addr), request_rx)
    }

    fn read_request(stream: &mut std::net::TcpStream) -> String {
        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let read = match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(read) => read,
            };
            raw.extend_from_slice(&buf[..read]);
            if request_is_complete(&raw) {
                break;
            }
        }
        String::from_utf8_lossy(&raw).to_string()
    }

    fn request_is_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some((head, body)) = text.split_once("\r\n\r\n") else {
            return false;
        };
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        body.len() >= content_length
    }

    const SUCCESS_BODY: &str = concat!(
        "{\"request_id\":\"r1\",\"model_backend\":\"b\",\"model_version\":\"v1\",",
        "\"latency_ms\":12,\"label\":\"positive\",\"score\":0.987,",
        "\"probs\":{\"positive\":0.987,\"negative\":0.013}}"
    );

    fn http_ok(body: &str) -> String {
        format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        )
    }

    #[test]
    fn posts_raw_text_with_plain_content_type() {
        let (url, request_rx) = serve_once(http_ok(SUCCESS_BODY));
        let result = predict(&url, "Great \"movie\"!\n\nLoved it.").unwrap();
        assert_eq!(result.request_id, "r1");
        let request = request_rx.recv().unwrap();
        assert!(request.starts_with("POST /predict/plain HTTP/1.1\r\n"));
        let lowered = request.to_ascii_lowercase();
        assert!(lowered.contains("content-type: text/plain"));
        assert!(request.ends_with("Great \"movie\"!\n\nLoved it."));
    }

    #[test]
    fn base_url_trailing_slash_is_tolerated() {
        let (url, request_rx) = serve_once(http_ok(SUCCESS_BODY));
        predict(&format!("{url}/"), "fine").unwrap();
        let request = request_rx.recv().unwrap();
        assert!(request.starts_with("POST /predict/plain HTTP/1.1\r\n"));
    }

    #[test]
    fn error_status_embeds_code_and_raw_body() {
        let body = "internal error";
        let response = format!(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        );
        let (url, _request_rx) = serve_once(response);
        let err = predict(&url, "anything").unwrap_err();
        assert!(matches!(err, PredictError::Status { status: 500, .. }));
        assert_eq!(err.to_string(), "500 internal error");
    }

    #[test]
    fn invalid_json_on_success_is_a_parse_failure() {
        let (url, _request_rx) = serve_once(http_ok("not json at all"));
        let err = predict(&url, "anything").unwrap_err();
        assert!(matches!(err, PredictError::Json(_)));
    }

    #[test]
    fn parses_full_success_body() {
        let parsed = parse_prediction_response(SUCCESS_BODY).unwrap();
        assert_eq!(parsed.label, "positive");
        assert_eq!(parsed.score, 0.987);
        assert_eq!(parsed.latency_ms, 12.0);
        let probs = parsed.probs.unwrap();
        assert_eq!(probs.get("negative"), Some(&0.013));
        assert!(parsed.tokens.is_none());
        assert!(parsed.truncated.is_none());
    }

    #[test]
    fn tolerates_unknown_labels_and_extra_optionals() {
        let body = concat!(
            "{\"request_id\":\"r2\",\"model_backend\":\"onnx\",\"model_version\":\"v2\",",
            "\"latency_ms\":3.5,\"label\":\"mixed\",\"score\":-1.25,\"truncated\":true,",
            "\"tokens\":[{\"token\":\"great\",\"attr\":0.9},{\"token\":\".\"}]}"
        );
        let parsed = parse_prediction_response(body).unwrap();
        assert_eq!(parsed.label, "mixed");
        assert_eq!(parsed.truncated, Some(true));
        let tokens = parsed.tokens.unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].attribution, Some(0.9));
        assert_eq!(tokens[1].attribution, None);
    }

    #[test]
    fn empty_body_is_a_parse_failure() {
        let err = parse_prediction_response("   ").unwrap_err();
        assert!(matches!(err, PredictError::Json(_)));
    }

    #[test]
    fn display_message_never_returns_empty() {
        let err = PredictError::Transport(String::new());
        assert!(!err.display_message().trim().is_empty());
    }
}
