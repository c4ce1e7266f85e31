use crate::domain::error::DomainError;
use crate::domain::ports::content_generator::ContentGenerator;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

pub struct GeminiGenerator {
    client: Client,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GeminiGenerator {
    pub fn new(api_key: String, model: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    /// Keys shorter than 20 characters or still holding a placeholder are rejected.
    pub fn is_usable_key(key: &str) -> bool {
        let key = key.trim();
        key.len() >= 20 && !key.contains("your_api_key") && !key.contains("sua_chave")
    }
}

#[async_trait::async_trait]
impl ContentGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        if !Self::is_usable_key(&self.api_key) {
            return Err(DomainError::Generation(
                "GEMINI_API_KEY is missing or invalid".into(),
            ));
        }

        let url = format!("{GEMINI_API_BASE_URL}/models/{}:generateContent", self.model);
        let resp = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateRequest {
                contents: vec![Content {
                    parts: vec![Part {
                        text: prompt.to_string(),
                    }],
                }],
                generation_config: GenerationConfig {
                    temperature: 0.7,
                    top_k: 40,
                    top_p: 0.95,
                    max_output_tokens: 2048,
                },
            })
            .send()
            .await
            .map_err(|e| DomainError::Generation(format!("Gemini API error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::Generation(format!("Gemini API {status}: {body}")));
        }

        let result: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(format!("Gemini response: {e}")))?;
        let text: String = result
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(DomainError::Generation("Gemini returned no content".into()));
        }
        Ok(text)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
