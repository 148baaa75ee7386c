use crate::error::Result;
use portfolio_ai_common::{BackendConfig, DEFAULT_MODEL};

/// 接続先を指定する環境変数
pub const BACKEND_ENV: &str = "PORTFOLIO_AI_BACKEND";
/// APIキーを指定する環境変数
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// 実行時設定
///
/// コマンドライン引数 → 環境変数 → 既定値の順に解決する。ファイルには保存しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub backend: BackendConfig,
    pub api_key: Option<String>,
    pub model: String,
}

impl Config {
    pub fn resolve(
        backend: Option<String>,
        api_key: Option<String>,
        model: Option<String>,
    ) -> Result<Self> {
        Self::resolve_with(backend, api_key, model, |name| std::env::var(name).ok())
    }

    pub fn resolve_with(
        backend: Option<String>,
        api_key: Option<String>,
        model: Option<String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let backend = match backend.or_else(|| non_blank(env(BACKEND_ENV))) {
            Some(url) => BackendConfig::new(url)?,
            None => BackendConfig::default(),
        };

        let api_key = non_blank(api_key).or_else(|| non_blank(env(API_KEY_ENV)));
        let model = non_blank(model).unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            backend,
            api_key,
            model,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
