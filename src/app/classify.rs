// MailSift - app/classify.rs
//
// Classification lifecycle management. Runs each round trip on a
// background thread, sending the outcome to the UI thread via an mpsc
// channel.
//
// Architecture:
//   - `ClassifyManager` lives on the UI thread; `classify` and
//     `fetch_server_status` run on background threads.
//   - A monotonically increasing request token marks the latest classify
//     request; an outcome with any other token is stale and is discarded
//     by the UI. Clearing invalidates the current token, so a response
//     arriving after a clear never overwrites the cleared state.
//   - There is no retry and no independent timeout; one user action is
//     exactly one round trip.

use crate::core::model::{ClassificationResult, ClassifyProgress, ServerStatus, Submission};
use crate::core::protocol::{self, ClassifyRequest};
use crate::util::constants::{CLASSIFY_PATH, MAX_RESPONSE_BYTES};
use crate::util::error::ClassifyError;
use crate::util::http;
use std::sync::mpsc;

// =============================================================================
// ClassifyManager
// =============================================================================

/// Manages classification and health-check requests on background threads.
pub struct ClassifyManager {
    /// Sender cloned into each worker thread.
    progress_tx: mpsc::Sender<ClassifyProgress>,

    /// Channel receiver for the UI to poll outcome messages.
    progress_rx: mpsc::Receiver<ClassifyProgress>,

    /// Token handed to the most recently spawned classify request.
    next_request_id: u64,

    /// Token whose outcome is still wanted. `None` while idle or after a
    /// clear invalidated the in-flight request.
    current_request_id: Option<u64>,
}

impl ClassifyManager {
    pub fn new() -> Self {
        let (progress_tx, progress_rx) = mpsc::channel();
        Self {
            progress_tx,
            progress_rx,
            next_request_id: 0,
            current_request_id: None,
        }
    }

    /// Start classifying `submission` against `endpoint`.
    ///
    /// Spawns a background thread immediately and returns the request
    /// token. A previously in-flight request is implicitly superseded:
    /// its token is no longer current, so its outcome will be discarded.
    pub fn start_classify(&mut self, endpoint: &str, submission: Submission) -> u64 {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.current_request_id = Some(request_id);

        let tx = self.progress_tx.clone();
        let endpoint = endpoint.to_string();

        tracing::info!(
            request_id,
            chars = submission.text().chars().count(),
            "Classification requested"
        );

        std::thread::spawn(move || {
            let message = match classify(&endpoint, &submission) {
                Ok(result) => ClassifyProgress::Completed { request_id, result },
                Err(e) => ClassifyProgress::Failed {
                    request_id,
                    error: e.to_string(),
                },
            };
            // Receiver dropped (UI closed); exit quietly.
            let _ = tx.send(message);
        });

        request_id
    }

    /// Start a health check of the service root. Untokenised: the outcome
    /// only touches the status line.
    pub fn check_server(&self, endpoint: &str) {
        let tx = self.progress_tx.clone();
        let endpoint = endpoint.to_string();

        tracing::debug!("Server check requested");

        std::thread::spawn(move || {
            let status = fetch_server_status(&endpoint).map_err(|e| e.to_string());
            let _ = tx.send(ClassifyProgress::ServerChecked { status });
        });
    }

    /// Consume the current token if `request_id` matches it.
    ///
    /// Returns true exactly once per current request; a stale or already
    /// consumed token returns false and the caller discards the outcome.
    pub fn take_if_current(&mut self, request_id: u64) -> bool {
        if self.current_request_id == Some(request_id) {
            self.current_request_id = None;
            true
        } else {
            false
        }
    }

    /// Drop interest in the in-flight request, if any. The worker thread
    /// still runs to completion; its outcome is discarded on arrival.
    pub fn invalidate_in_flight(&mut self) {
        if let Some(request_id) = self.current_request_id.take() {
            tracing::debug!(request_id, "In-flight request invalidated");
        }
    }

    /// Poll for outcome messages without blocking. Returns all pending
    /// messages.
    pub fn poll_progress(&self) -> Vec<ClassifyProgress> {
        let mut messages = Vec::new();
        while let Ok(msg) = self.progress_rx.try_recv() {
            messages.push(msg);
        }
        messages
    }
}

impl Default for ClassifyManager {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Blocking round trips (run on worker threads; reused by the e2e tests)
// =============================================================================

/// POST the submission to the classify endpoint and parse the response.
/// Exactly one round trip; no retry.
pub fn classify(
    endpoint: &str,
    submission: &Submission,
) -> Result<ClassificationResult, ClassifyError> {
    let url = format!("{}{}", endpoint.trim_end_matches('/'), CLASSIFY_PATH);
    let request = ClassifyRequest {
        email: submission.text(),
    };

    let response = match http::agent()
        .post(&url)
        .set("Content-Type", "application/json")
        .send_json(&request)
    {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            // Best effort: a malformed or unreadable error body degrades
            // to the numeric status fallback.
            let detail = http::read_body_limited(response, MAX_RESPONSE_BYTES)
                .ok()
                .as_deref()
                .and_then(protocol::error_detail);
            return Err(ClassifyError::Status { code, detail });
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(ClassifyError::Transport {
                message: err.to_string(),
            });
        }
    };

    let body = http::read_body_limited(response, MAX_RESPONSE_BYTES).map_err(|e| {
        ClassifyError::Transport {
            message: e.to_string(),
        }
    })?;
    protocol::parse_classify_response(&body)
}

/// GET the service root and parse its health payload.
pub fn fetch_server_status(endpoint: &str) -> Result<ServerStatus, ClassifyError> {
    let url = format!("{}/", endpoint.trim_end_matches('/'));

    let response = match http::agent().get(&url).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let detail = http::read_body_limited(response, MAX_RESPONSE_BYTES)
                .ok()
                .as_deref()
                .and_then(protocol::error_detail);
            return Err(ClassifyError::Status { code, detail });
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(ClassifyError::Transport {
                message: err.to_string(),
            });
        }
    };

    let body = http::read_body_limited(response, MAX_RESPONSE_BYTES).map_err(|e| {
        ClassifyError::Transport {
            message: e.to_string(),
        }
    })?;
    protocol::parse_server_status(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::submission::prepare_submission;

    // Port 9 (discard) is unassigned on loopback; connections are refused
    // immediately, so these tests never wait on a live server.
    const DEAD_ENDPOINT: &str = "http://127.0.0.1:9";

    #[test]
    fn tokens_increase_and_latest_wins() {
        let mut manager = ClassifyManager::new();
        let first = manager.start_classify(DEAD_ENDPOINT, prepare_submission("a").unwrap());
        let second = manager.start_classify(DEAD_ENDPOINT, prepare_submission("b").unwrap());
        assert!(second > first);
        assert!(!manager.take_if_current(first), "superseded token is stale");
        assert!(manager.take_if_current(second));
        assert!(
            !manager.take_if_current(second),
            "a token is consumed at most once"
        );
    }

    #[test]
    fn invalidate_discards_the_in_flight_token() {
        let mut manager = ClassifyManager::new();
        let id = manager.start_classify(DEAD_ENDPOINT, prepare_submission("a").unwrap());
        manager.invalidate_in_flight();
        assert!(!manager.take_if_current(id));
    }

    #[test]
    fn unknown_token_is_never_current() {
        let mut manager = ClassifyManager::new();
        assert!(!manager.take_if_current(1));
    }
}
