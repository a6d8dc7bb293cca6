// MailSift - core/protocol.rs
//
// Wire shapes of the classification service and their parsing.
// The wire structs stay private; the rest of the crate sees only the
// domain types from core::model.

use serde::{Deserialize, Serialize};

use crate::core::model::{ClassificationResult, ServerStatus};
use crate::util::error::ClassifyError;

/// Request body of the classify operation.
#[derive(Debug, Serialize)]
pub struct ClassifyRequest<'a> {
    pub email: &'a str,
}

/// Raw deserialisable shape of a successful classify response.
///
/// The server also sends `message` and `model_status` alongside; unknown
/// fields are ignored for forward compatibility.
#[derive(Debug, Deserialize)]
struct ClassifyResponseWire {
    predicted_class: String,
    #[serde(default)]
    probabilities: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Raw deserialisable shape of an error response body.
#[derive(Debug, Deserialize)]
struct ErrorBodyWire {
    detail: Option<String>,
}

/// Raw deserialisable shape of the root (health) endpoint response.
#[derive(Debug, Deserialize)]
struct ServerStatusWire {
    message: String,
    model_status: String,
}

/// Parse a 2xx classify response body into a [`ClassificationResult`].
///
/// `predicted_class` is required; `probabilities` may be absent or null.
/// Entries whose value is not a JSON number are dropped rather than
/// failing the whole response. Key order of the response is preserved.
pub fn parse_classify_response(body: &str) -> Result<ClassificationResult, ClassifyError> {
    let wire: ClassifyResponseWire =
        serde_json::from_str(body).map_err(|e| ClassifyError::MalformedBody {
            reason: e.to_string(),
        })?;

    let probabilities = wire.probabilities.map(|map| {
        map.iter()
            .filter_map(|(label, value)| value.as_f64().map(|v| (label.clone(), v)))
            .collect()
    });

    Ok(ClassificationResult {
        predicted_class: wire.predicted_class,
        probabilities,
    })
}

/// Probe an error response body for a `detail` field.
///
/// A malformed or differently-shaped body yields `None`; the caller falls
/// back to the numeric HTTP status. This never fails.
pub fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBodyWire>(body)
        .ok()
        .and_then(|wire| wire.detail)
}

/// Parse the root endpoint's health payload.
pub fn parse_server_status(body: &str) -> Result<ServerStatus, ClassifyError> {
    let wire: ServerStatusWire =
        serde_json::from_str(body).map_err(|e| ClassifyError::MalformedBody {
            reason: e.to_string(),
        })?;
    Ok(ServerStatus {
        message: wire.message,
        model_status: wire.model_status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serialises_to_the_wire_shape() {
        let request = ClassifyRequest { email: "hi\nthere" };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"email":"hi\nthere"}"#
        );
    }

    #[test]
    fn parses_response_with_probabilities_in_order() {
        let body = r#"{
            "message": "Classification successful",
            "predicted_class": "Spam",
            "probabilities": {"Spam": 0.82, "Information": 0.1, "Urgent": 0.08},
            "model_status": "loaded"
        }"#;
        let result = parse_classify_response(body).unwrap();
        assert_eq!(result.predicted_class, "Spam");
        assert_eq!(
            result.probabilities,
            Some(vec![
                ("Spam".to_string(), 0.82),
                ("Information".to_string(), 0.1),
                ("Urgent".to_string(), 0.08),
            ])
        );
    }

    #[test]
    fn parses_response_without_probabilities() {
        let body = r#"{"predicted_class": "Information"}"#;
        let result = parse_classify_response(body).unwrap();
        assert_eq!(result.predicted_class, "Information");
        assert_eq!(result.probabilities, None);
    }

    #[test]
    fn null_probabilities_parse_as_absent() {
        let body = r#"{"predicted_class": "Spam", "probabilities": null}"#;
        let result = parse_classify_response(body).unwrap();
        assert_eq!(result.probabilities, None);
    }

    #[test]
    fn empty_probabilities_object_parses_as_zero_entries() {
        let body = r#"{"predicted_class": "Spam", "probabilities": {}}"#;
        let result = parse_classify_response(body).unwrap();
        assert_eq!(result.probabilities, Some(Vec::new()));
    }

    #[test]
    fn non_numeric_probability_values_are_dropped() {
        let body = r#"{"predicted_class": "Spam",
                       "probabilities": {"Spam": 0.9, "Urgent": "high"}}"#;
        let result = parse_classify_response(body).unwrap();
        assert_eq!(
            result.probabilities,
            Some(vec![("Spam".to_string(), 0.9)])
        );
    }

    #[test]
    fn missing_predicted_class_is_malformed() {
        let body = r#"{"probabilities": {"Spam": 1.0}}"#;
        let err = parse_classify_response(body).unwrap_err();
        assert!(
            err.to_string().contains("predicted_class"),
            "unexpected message: {err}"
        );
    }

    #[test]
    fn invalid_json_is_malformed() {
        assert!(parse_classify_response("not json").is_err());
    }

    #[test]
    fn error_detail_extracts_detail_field() {
        assert_eq!(
            error_detail(r#"{"detail": "model unavailable"}"#),
            Some("model unavailable".to_string())
        );
    }

    #[test]
    fn error_detail_degrades_on_malformed_or_foreign_bodies() {
        assert_eq!(error_detail("<html>Bad Gateway</html>"), None);
        assert_eq!(error_detail(r#"{"error": "other shape"}"#), None);
        assert_eq!(error_detail(""), None);
    }

    #[test]
    fn parses_server_status() {
        let body = r#"{"message": "Email Classifier API is running",
                       "model_status": "loaded"}"#;
        let status = parse_server_status(body).unwrap();
        assert_eq!(status.model_status, "loaded");
    }
}
