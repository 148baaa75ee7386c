//! 評価バックエンドのHTTPクライアント（reqwest実装）
//!
//! ボディがJSONとして読めればステータスに関係なく応答として扱う。
//! リトライ・タイムアウトは行わない。

use crate::error::Result;
use portfolio_ai_common::{
    parse_analyze_body, parse_models_body, AnalyzeResponse, BackendConfig, Error,
    EvaluationRequest, EvaluatorBackend, ModelListResponse, ModelsRequest,
};
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    config: BackendConfig,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("portfolio-ai/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    async fn post_json<T: Serialize>(
        &self,
        url: &str,
        body: &T,
    ) -> portfolio_ai_common::Result<String> {
        tracing::debug!(url, "POST");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url, %status, "backend returned non-success status");
        }

        response.text().await.map_err(|e| transport_error(url, e))
    }
}

fn transport_error(url: &str, e: reqwest::Error) -> Error {
    tracing::error!(url, error = %e, "request failed");
    Error::Transport(e.to_string())
}

impl EvaluatorBackend for HttpBackend {
    async fn fetch_models(&self, api_key: &str) -> portfolio_ai_common::Result<ModelListResponse> {
        let body = ModelsRequest {
            api_key: api_key.to_string(),
        };
        let text = self.post_json(&self.config.models_url(), &body).await?;
        parse_models_body(&text)
    }

    async fn analyze(
        &self,
        request: &EvaluationRequest,
    ) -> portfolio_ai_common::Result<AnalyzeResponse> {
        let text = self.post_json(&self.config.analyze_url(), request).await?;
        parse_analyze_body(&text)
    }
}
