use crate::{
    abstract_trait::TranslationServiceTrait,
    config::TranslateConfig,
    domain::{
        requests::TranslateRequest,
        responses::{ApiResponse, TranslateResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::{collections::HashMap, time::Duration};
use tokio::sync::Mutex;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct UpstreamTranslation {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Proxy to an external translation API. The upstream call is bounded by a
/// timeout; any failure degrades to echoing the original text so product
/// pages never block on a third party.
pub struct TranslationService {
    client: reqwest::Client,
    api_url: String,
    timeout: Duration,
    cache: Mutex<HashMap<(String, String), String>>,
}

impl TranslationService {
    pub fn new(config: &TranslateConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            timeout: Duration::from_millis(config.timeout_ms),
            cache: Mutex::new(HashMap::new()),
        }
    }

    async fn call_upstream(&self, text: &str, target_lang: &str) -> Result<String, reqwest::Error> {
        let response = self
            .client
            .post(&self.api_url)
            .json(&json!({
                "q": text,
                "source": "auto",
                "target": target_lang,
            }))
            .send()
            .await?
            .error_for_status()?;

        let body: UpstreamTranslation = response.json().await?;
        Ok(body.translated_text)
    }
}

#[async_trait]
impl TranslationServiceTrait for TranslationService {
    async fn translate(
        &self,
        req: &TranslateRequest,
    ) -> Result<ApiResponse<TranslateResponse>, ServiceError> {
        let key = (req.text.clone(), req.target_lang.clone());

        if let Some(hit) = self.cache.lock().await.get(&key) {
            return Ok(ApiResponse {
                status: "success".to_string(),
                message: "Text translated successfully".to_string(),
                data: TranslateResponse {
                    text: hit.clone(),
                    translated: true,
                },
            });
        }

        let outcome = tokio::time::timeout(
            self.timeout,
            self.call_upstream(&req.text, &req.target_lang),
        )
        .await;

        match outcome {
            Ok(Ok(translated)) => {
                self.cache.lock().await.insert(key, translated.clone());

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Text translated successfully".to_string(),
                    data: TranslateResponse {
                        text: translated,
                        translated: true,
                    },
                })
            }
            Ok(Err(e)) => {
                warn!("Translation upstream failed, returning original text: {}", e);
                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Translation unavailable, returning original text".to_string(),
                    data: TranslateResponse {
                        text: req.text.clone(),
                        translated: false,
                    },
                })
            }
            Err(_) => {
                warn!(
                    "Translation upstream timed out after {:?}, returning original text",
                    self.timeout
                );
                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Translation unavailable, returning original text".to_string(),
                    data: TranslateResponse {
                        text: req.text.clone(),
                        translated: false,
                    },
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_url: &str, timeout_ms: u64) -> TranslateConfig {
        TranslateConfig {
            api_url: api_url.to_string(),
            timeout_ms,
        }
    }

    #[tokio::test]
    async fn unreachable_upstream_falls_back_to_original_text() {
        // Reserved TEST-NET-1 address, nothing listens there.
        let service = TranslationService::new(&config("http://192.0.2.1/translate", 200));

        let req = TranslateRequest {
            text: "fresh honey".to_string(),
            target_lang: "ml".to_string(),
        };
        let response = service.translate(&req).await.unwrap();

        assert_eq!(response.data.text, "fresh honey");
        assert!(!response.data.translated);
    }

    #[tokio::test]
    async fn cache_is_served_without_touching_upstream() {
        let service = TranslationService::new(&config("http://192.0.2.1/translate", 200));

        service
            .cache
            .lock()
            .await
            .insert(("honey".to_string(), "ml".to_string()), "തേൻ".to_string());

        let req = TranslateRequest {
            text: "honey".to_string(),
            target_lang: "ml".to_string(),
        };
        let response = service.translate(&req).await.unwrap();

        assert_eq!(response.data.text, "തേൻ");
        assert!(response.data.translated);
    }
}
