//! 評価バックエンドとの契約
//!
//! - BackendConfig: 接続先（ベースURL）の設定
//! - EvaluatorBackend: `POST /models` と `POST /analyze` を発行する実装の共通トレイト
//!
//! ブラウザ版はfetch、CLI版はreqwestで実装する。

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::response::{AnalyzeResponse, ModelListResponse};
use crate::types::EvaluationRequest;

/// 既定の接続先
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

pub const MODELS_PATH: &str = "/models";
pub const ANALYZE_PATH: &str = "/analyze";

/// バックエンド接続設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl BackendConfig {
    /// ベースURLを検証して設定を作る（末尾の `/` は除去）
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');

        if trimmed.is_empty() {
            return Err(Error::Config("backend base URL is empty".into()));
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(Error::Config(format!(
                "backend base URL must start with http:// or https://: {}",
                trimmed
            )));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// エンドポイントURLを組み立てる
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn models_url(&self) -> String {
        self.endpoint(MODELS_PATH)
    }

    pub fn analyze_url(&self) -> String {
        self.endpoint(ANALYZE_PATH)
    }
}

/// 評価バックエンド
///
/// 応答ボディがJSONとして読めればステータスに関係なく `Ok` を返す。
/// 到達不能・JSONでない応答は `Err`。リトライもタイムアウトもしない。
#[allow(async_fn_in_trait)]
pub trait EvaluatorBackend {
    async fn fetch_models(&self, api_key: &str) -> Result<ModelListResponse>;

    async fn analyze(&self, request: &EvaluationRequest) -> Result<AnalyzeResponse>;
}
