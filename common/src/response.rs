//! バックエンドレスポンスパーサー
//!
//! 生のJSONボディを一度だけ解釈し、`ApiResponse<T>` に変換する。
//! HTTPステータスは見ない。業務エラーはボディの `error` フィールドで判定する。

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::types::EvaluationResult;

/// バックエンド応答（成功 or `error` フィールド付き）
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Ok(T),
    Error(String),
}

impl<T> ApiResponse<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, ApiResponse::Ok(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ApiResponse::Ok(_) => None,
            ApiResponse::Error(message) => Some(message),
        }
    }
}

/// `POST /models` の応答
pub type ModelListResponse = ApiResponse<Vec<String>>;

/// `POST /analyze` の応答
pub type AnalyzeResponse = ApiResponse<EvaluationResult>;

/// `/models` のボディ文字列をパース
pub fn parse_models_body(body: &str) -> Result<ModelListResponse> {
    let value: Value = serde_json::from_str(body)?;
    parse_models_value(value)
}

/// `/models` のJSON値をパース
///
/// `models` が無い場合は空リストとして扱う（呼び出し側で「モデルなし」と判定）。
pub fn parse_models_value(value: Value) -> Result<ModelListResponse> {
    let object = into_object(value)?;

    if let Some(message) = backend_error(&object) {
        return Ok(ApiResponse::Error(message));
    }

    let models = match object.get("models") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    Error::MalformedResponse(format!("model id is not a string: {}", item))
                })
            })
            .collect::<Result<Vec<_>>>()?,
        Some(other) => {
            return Err(Error::MalformedResponse(format!(
                "`models` is not an array: {}",
                other
            )))
        }
    };

    Ok(ApiResponse::Ok(models))
}

/// `/analyze` のボディ文字列をパース
pub fn parse_analyze_body(body: &str) -> Result<AnalyzeResponse> {
    let value: Value = serde_json::from_str(body)?;
    parse_analyze_value(value)
}

/// `/analyze` のJSON値をパース
pub fn parse_analyze_value(value: Value) -> Result<AnalyzeResponse> {
    let object = into_object(value)?;

    if let Some(message) = backend_error(&object) {
        return Ok(ApiResponse::Error(message));
    }

    let result: EvaluationResult = serde_json::from_value(Value::Object(object))
        .map_err(|e| Error::MalformedResponse(format!("evaluation result: {}", e)))?;
    Ok(ApiResponse::Ok(result))
}

fn into_object(value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(object) => Ok(object),
        other => Err(Error::MalformedResponse(format!(
            "expected a JSON object, got {}",
            type_name(&other)
        ))),
    }
}

/// `error` フィールドの取り出し
///
/// null と空文字は「エラーなし」とみなす。文字列以外はJSON表記のまま返す。
fn backend_error(object: &Map<String, Value>) -> Option<String> {
    match object.get("error")? {
        Value::Null => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
