use async_trait::async_trait;

use crate::adapters::multipart_form::MultipartFormBody;
use crate::core::interfaces::adapters::IntersectionClassifier;
use crate::core::models::{ClassifyError, ImagePayload, Prediction, SnapshotBuffer};
use crate::global_constants;

/// Talks to the local inference server's `/predict` endpoint. One POST per
/// classification, no retries; the shared reqwest client only contributes
/// connection pooling and holds no per-call state.
pub struct PredictServerClassifier {
    http_client: reqwest::Client,
    predict_endpoint: String,
}

impl PredictServerClassifier {
    pub fn new(predict_endpoint: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            predict_endpoint,
        }
    }

    pub fn with_client(http_client: reqwest::Client, predict_endpoint: String) -> Self {
        Self {
            http_client,
            predict_endpoint,
        }
    }

    async fn post_payload(&self, payload: &ImagePayload) -> Result<Prediction, ClassifyError> {
        let body = MultipartFormBody::build_for_image(payload);

        log::info!(
            "[PREDICT] posting {} byte multipart body to {}",
            body.as_bytes().len(),
            self.predict_endpoint
        );
        log::debug!("[PREDICT] multipart boundary: {}", body.boundary());

        let response = self
            .http_client
            .post(&self.predict_endpoint)
            .header(reqwest::header::CONTENT_TYPE, body.content_type_header())
            .body(body.into_bytes())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The server contract never promised clean status codes; keep
            // parsing the body but leave a trace.
            log::warn!("[PREDICT] server answered {}, parsing body anyway", status);
        }

        let response_text = response.text().await?;
        log::debug!("[PREDICT] server response: {}", response_text);

        Self::extract_prediction(&response_text)
    }

    fn extract_prediction(response_text: &str) -> Result<Prediction, ClassifyError> {
        if response_text.is_empty() {
            return Err(ClassifyError::EmptyResponse);
        }

        let json: serde_json::Value = serde_json::from_str(response_text)
            .map_err(|e| ClassifyError::ResponseFormat(format!("body is not valid JSON: {}", e)))?;

        let label = json[global_constants::PREDICTION_JSON_FIELD]
            .as_str()
            .ok_or_else(|| {
                ClassifyError::ResponseFormat(format!(
                    "missing string field \"{}\"",
                    global_constants::PREDICTION_JSON_FIELD
                ))
            })?;

        Ok(Prediction::new(label))
    }
}

#[async_trait]
impl IntersectionClassifier for PredictServerClassifier {
    async fn classify(&self, snapshot: &SnapshotBuffer) -> Result<Prediction, ClassifyError> {
        let payload = ImagePayload::encode_from_snapshot(snapshot)?;

        let prediction = self.post_payload(&payload).await?;

        log::info!("[PREDICT] classified snapshot as: {}", prediction);
        Ok(prediction)
    }
}
