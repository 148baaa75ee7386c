//! 評価バックエンド（fetch実装）
//!
//! `POST /models` と `POST /analyze` にJSONを送り、応答ボディをそのままパースする。
//! HTTPステータスは見ない。業務エラーはボディの `error` フィールドで返ってくる。

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use portfolio_ai_common::{
    parse_analyze_body, parse_models_body, AnalyzeResponse, BackendConfig, Error,
    EvaluationRequest, EvaluatorBackend, ModelListResponse, ModelsRequest, Result,
};

/// 接続先を指定する `<meta>` タグ名
pub const BACKEND_META_NAME: &str = "portfolio-ai-backend";

/// fetchベースのバックエンド
#[derive(Debug, Clone)]
pub struct FetchBackend {
    config: BackendConfig,
}

impl FetchBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }

    /// `<meta name="portfolio-ai-backend" content="...">` から接続先を決める
    ///
    /// タグが無い、または値が不正なら既定の接続先を使う。
    pub fn from_document() -> Self {
        let config = backend_url_from_meta()
            .and_then(|url| match BackendConfig::new(url) {
                Ok(config) => Some(config),
                Err(e) => {
                    log::warn!("ignoring backend meta tag: {}", e);
                    None
                }
            })
            .unwrap_or_default();

        log::debug!("backend: {}", config.base_url);
        Self::new(config)
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }
}

impl EvaluatorBackend for FetchBackend {
    async fn fetch_models(&self, api_key: &str) -> Result<ModelListResponse> {
        let body = ModelsRequest {
            api_key: api_key.to_string(),
        };
        let text = post_json(&self.config.models_url(), &body).await?;
        parse_models_body(&text)
    }

    async fn analyze(&self, request: &EvaluationRequest) -> Result<AnalyzeResponse> {
        let text = post_json(&self.config.analyze_url(), request).await?;
        parse_analyze_body(&text)
    }
}

fn backend_url_from_meta() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", BACKEND_META_NAME);
    let element = document.query_selector(&selector).ok()??;
    element
        .get_attribute("content")
        .filter(|content| !content.trim().is_empty())
}

/// JSONをPOSTし、応答ボディを文字列で返す
async fn post_json<T: Serialize>(url: &str, body: &T) -> Result<String> {
    let body = serde_json::to_string(body)?;
    log::debug!("POST {}", url);

    send(url, &body).await.map_err(|e| {
        let message = js_error_message(&e);
        log::error!("POST {} failed: {}", url, message);
        Error::Transport(message)
    })
}

async fn send(url: &str, body: &str) -> std::result::Result<String, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        log::debug!("POST {} returned status {}", url, resp.status());
    }

    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}

fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
