//! Gemini adapter for the AI classifier port
//!
//! Calls a generateContent-style endpoint and extracts a
//! `{main_category, subtype}` object from the model text. The model output
//! is untrusted: extraction is lenient about code fences and surrounding
//! prose, and the use case applies the final category coercion.

use super::protocol::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use async_trait::async_trait;
use taste_application::{AiClassification, AiClassifierPort, ClassifierError};
use taste_domain::Place;
use tracing::debug;

/// AI classifier backed by a Gemini generateContent endpoint
pub struct GeminiClassifier {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClassifier {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    fn request_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    fn build_prompt(place: &Place) -> String {
        format!(
            "Classify this place as somewhere to eat or something to see.\n\
             Name: {}\n\
             Description: {}\n\
             Provider types: {}\n\
             Respond with a JSON object only: \
             {{\"main_category\": \"eat\" or \"see\", \"subtype\": \"<short label>\"}}",
            place.name,
            place.description,
            place.provider_types.join(", ")
        )
    }
}

#[async_trait]
impl AiClassifierPort for GeminiClassifier {
    async fn classify(&self, place: &Place) -> Result<AiClassification, ClassifierError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Self::build_prompt(place),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
            }),
        };

        let response = self
            .client
            .post(self.request_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClassifierError::Timeout
                } else if e.is_connect() {
                    ClassifierError::ConnectionError(e.to_string())
                } else {
                    ClassifierError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifierError::RequestFailed(format!(
                "HTTP {}",
                status.as_u16()
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ClassifierError::UnparseableResponse(e.to_string()))?;

        let text = body
            .first_text()
            .ok_or_else(|| ClassifierError::UnparseableResponse("no candidate text".to_string()))?;

        debug!("Classifier returned: {}", text);
        extract_classification(text)
    }
}

/// Pull a `{main_category, subtype}` object out of raw model text.
///
/// Tolerates markdown fences and prose around the object, and accepts both
/// `main_category` and `mainCategory` spellings.
pub fn extract_classification(text: &str) -> Result<AiClassification, ClassifierError> {
    let start = text
        .find('{')
        .ok_or_else(|| ClassifierError::UnparseableResponse(text.to_string()))?;
    let end = text
        .rfind('}')
        .filter(|end| *end > start)
        .ok_or_else(|| ClassifierError::UnparseableResponse(text.to_string()))?;

    let value: serde_json::Value = serde_json::from_str(&text[start..=end])
        .map_err(|e| ClassifierError::UnparseableResponse(e.to_string()))?;

    let main_category = value
        .get("main_category")
        .or_else(|| value.get("mainCategory"))
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    let subtype = value
        .get("subtype")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    Ok(AiClassification {
        main_category,
        subtype,
    })
}
