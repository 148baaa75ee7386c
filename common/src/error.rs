//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// バックエンドが `error` フィールドで返す業務エラーはここには含めない
/// （[`crate::response::ApiResponse::Error`] として扱う）。
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_transport() {
        let error = Error::Transport("connection refused".to_string());
        assert_eq!(format!("{}", error), "Transport error: connection refused");
    }

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_display_malformed() {
        let error = Error::MalformedResponse("expected a JSON object".to_string());
        assert_eq!(
            format!("{}", error),
            "Malformed response: expected a JSON object"
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Config("base url is empty".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Config"));
        assert!(debug.contains("base url is empty"));
    }
}
