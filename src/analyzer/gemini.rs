//! Gemini API連携

use super::ExtractionBackend;
use crate::config::Config;
use crate::error::{AppError, Result};
use namelist_common::{GenerateContentRequest, GenerateContentResponse};
use std::time::Duration;
use tracing::debug;

/// generateContent クライアント
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// 設定から作成。APIキーがなければ `MissingApiKey`
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.get_api_key()?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.endpoint.trim_end_matches('/'),
            self.model,
            self.api_key
        )
    }
}

impl ExtractionBackend for GeminiClient {
    async fn generate_content(&self, request: &GenerateContentRequest) -> Result<String> {
        // URLにAPIキーが含まれるため、エラー文字列からURLを外す
        let response = self
            .http
            .post(self.url())
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::ApiCall(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), body_len = body.len(), "APIエラー応答");
            return Err(AppError::ApiCall(format!("API error: {}", status)));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::ApiCall(e.without_url().to_string()))?;

        payload
            .first_text()
            .map(str::to_string)
            .ok_or_else(|| AppError::ApiCall("Empty response".into()))
    }
}
