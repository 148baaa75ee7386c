//! 設定ダイアログの状態管理
//!
//! ダイアログは開いた時点で確定済みの設定をローカルに複製し、
//! 保存したときだけ呼び出し側に返す。APIキーを編集するたびに
//! `/models` を引き直し、モデル一覧が空でないときだけ保存できる。

use crate::backend::EvaluatorBackend;
use crate::error::Result;
use crate::response::{ApiResponse, ModelListResponse};
use crate::sequence::{RequestSequence, Ticket};
use crate::types::Settings;

pub const NO_MODELS_MESSAGE: &str = "No models available";
pub const MODEL_FETCH_FAILED_MESSAGE: &str = "Failed to fetch models";

/// モデル一覧の取得状態
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModelFetch {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<String>),
    Failed(String),
}

/// 発行すべきモデル一覧リクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelFetchRequest {
    pub ticket: Ticket,
    pub api_key: String,
}

impl ModelFetchRequest {
    pub async fn send<B: EvaluatorBackend>(&self, backend: &B) -> Result<ModelListResponse> {
        backend.fetch_models(&self.api_key).await
    }
}

/// 設定ダイアログ
#[derive(Debug, Clone, Default)]
pub struct SettingsDialog {
    open: bool,
    api_key: String,
    model: String,
    fetch: ModelFetch,
    sequence: RequestSequence,
}

impl SettingsDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// ダイアログを開き、確定済みの設定でローカル値を初期化する
    pub fn open(&mut self, committed: &Settings) -> Option<ModelFetchRequest> {
        self.open = true;
        self.model = committed.model.clone();
        self.api_key = committed.api_key.clone();
        self.refresh_models()
    }

    /// APIキーの編集
    ///
    /// 空白以外の値ならモデル一覧の取得を要求する。空ならIdleに戻す。
    /// 取得に失敗した後は同じキーでも再取得する。
    pub fn edit_api_key(&mut self, api_key: impl Into<String>) -> Option<ModelFetchRequest> {
        let api_key = api_key.into();
        if api_key == self.api_key && !matches!(self.fetch, ModelFetch::Failed(_)) {
            return None;
        }
        self.api_key = api_key;
        self.refresh_models()
    }

    fn refresh_models(&mut self) -> Option<ModelFetchRequest> {
        if self.api_key.trim().is_empty() {
            self.sequence.invalidate();
            self.fetch = ModelFetch::Idle;
            return None;
        }

        self.fetch = ModelFetch::Loading;
        Some(ModelFetchRequest {
            ticket: self.sequence.issue(),
            api_key: self.api_key.clone(),
        })
    }

    /// モデル一覧の取得結果を反映する
    ///
    /// 古いチケットの応答、閉じた後に届いた応答は捨てて `false` を返す。
    pub fn apply_models(&mut self, ticket: Ticket, outcome: Result<ModelListResponse>) -> bool {
        if !self.sequence.accept(ticket) {
            log::debug!("discarding stale model list response #{}", ticket.value());
            return false;
        }

        self.fetch = match outcome {
            Ok(ApiResponse::Ok(models)) if !models.is_empty() => {
                if !models.contains(&self.model) {
                    log::info!(
                        "selected model {:?} not offered by backend; switching to {:?}",
                        self.model,
                        models[0]
                    );
                    self.model = models[0].clone();
                }
                ModelFetch::Loaded(models)
            }
            Ok(ApiResponse::Ok(_)) => ModelFetch::Failed(NO_MODELS_MESSAGE.to_string()),
            Ok(ApiResponse::Error(message)) => {
                log::warn!("backend rejected model listing: {}", message);
                ModelFetch::Failed(message)
            }
            Err(e) => {
                log::warn!("model listing failed: {}", e);
                ModelFetch::Failed(MODEL_FETCH_FAILED_MESSAGE.to_string())
            }
        };
        true
    }

    pub fn select_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    /// 保存可能か（APIキーが空白でなく、モデル一覧が空でない）
    pub fn can_save(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.models().is_empty()
    }

    /// 保存して閉じる。保存できない状態なら何もしない。
    pub fn save(&mut self) -> Option<Settings> {
        if !self.can_save() {
            return None;
        }
        self.close();
        Some(Settings {
            api_key: self.api_key.clone(),
            model: self.model.clone(),
        })
    }

    /// 保存せずに閉じる
    pub fn cancel(&mut self) {
        self.close();
    }

    fn close(&mut self) {
        self.open = false;
        self.sequence.invalidate();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn fetch_state(&self) -> &ModelFetch {
        &self.fetch
    }

    pub fn models(&self) -> &[String] {
        match &self.fetch {
            ModelFetch::Loaded(models) => models,
            _ => &[],
        }
    }

    /// セレクタ用の (ID, 表示名) 一覧
    pub fn model_options(&self) -> Vec<(String, String)> {
        self.models()
            .iter()
            .map(|id| (id.clone(), format_model_name(id)))
            .collect()
    }
}

/// モデルIDの表示名
///
/// `models/` 接頭辞を外し、ハイフン区切りの各語の先頭を大文字にして空白で連結する。
///
/// # Examples
/// ```
/// use portfolio_ai_common::format_model_name;
///
/// assert_eq!(format_model_name("models/gemini-1.5-flash"), "Gemini 1.5 Flash");
/// ```
pub fn format_model_name(model: &str) -> String {
    let name = model.strip_prefix("models/").unwrap_or(model);
    name.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn settings(api_key: &str, model: &str) -> Settings {
        Settings {
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    fn models(ids: &[&str]) -> Result<ModelListResponse> {
        Ok(ApiResponse::Ok(ids.iter().map(|s| s.to_string()).collect()))
    }

    // =============================================
    // 表示名
    // =============================================

    #[test]
    fn test_format_model_name() {
        assert_eq!(format_model_name("models/gemini-1.5-flash"), "Gemini 1.5 Flash");
        assert_eq!(format_model_name("gpt-4o"), "Gpt 4o");
        assert_eq!(format_model_name("models/gemini-pro"), "Gemini Pro");
    }

    #[test]
    fn test_format_model_name_edge_cases() {
        assert_eq!(format_model_name(""), "");
        assert_eq!(format_model_name("a--b"), "A  B");
        assert_eq!(format_model_name("nested/models/x"), "Nested/models/x");
    }

    // =============================================
    // 開閉
    // =============================================

    #[test]
    fn test_open_with_blank_key_does_not_fetch() {
        let mut dialog = SettingsDialog::new();
        let request = dialog.open(&settings("", "gemini-1.5-flash"));

        assert!(request.is_none());
        assert!(dialog.is_open());
        assert_eq!(dialog.fetch_state(), &ModelFetch::Idle);
        assert_eq!(dialog.model(), "gemini-1.5-flash");
    }

    #[test]
    fn test_open_with_key_fetches() {
        let mut dialog = SettingsDialog::new();
        let request = dialog.open(&settings("key-1", "m")).expect("fetch expected");

        assert_eq!(request.api_key, "key-1");
        assert_eq!(dialog.fetch_state(), &ModelFetch::Loading);
    }

    #[test]
    fn test_cancel_discards_edits() {
        let committed = settings("old", "models/a");
        let mut dialog = SettingsDialog::new();
        dialog.open(&committed);
        dialog.edit_api_key("new");
        dialog.select_model("models/b");
        dialog.cancel();

        assert!(!dialog.is_open());
        dialog.open(&committed);
        assert_eq!(dialog.api_key(), "old");
        assert_eq!(dialog.model(), "models/a");
    }

    // =============================================
    // モデル取得
    // =============================================

    #[test]
    fn test_blank_key_resets_to_idle() {
        let mut dialog = SettingsDialog::new();
        dialog.open(&settings("", "m"));
        let request = dialog.edit_api_key("abc").unwrap();
        dialog.apply_models(request.ticket, models(&["m"]));
        assert_eq!(dialog.models().len(), 1);

        assert!(dialog.edit_api_key("   ").is_none());
        assert_eq!(dialog.fetch_state(), &ModelFetch::Idle);
        assert!(dialog.models().is_empty());
    }

    #[test]
    fn test_unchanged_key_does_not_refetch() {
        let mut dialog = SettingsDialog::new();
        dialog.open(&settings("same", "m"));
        assert!(dialog.edit_api_key("same").is_none());
    }

    #[test]
    fn test_same_key_refetches_after_transport_failure() {
        let mut dialog = SettingsDialog::new();
        dialog.open(&settings("", "m"));
        let first = dialog.edit_api_key("good-key").unwrap();
        dialog.apply_models(first.ticket, Err(Error::Transport("connection refused".into())));
        assert_eq!(
            dialog.fetch_state(),
            &ModelFetch::Failed(MODEL_FETCH_FAILED_MESSAGE.to_string())
        );

        let retry = dialog.edit_api_key("good-key").expect("retry expected");
        assert_eq!(retry.api_key, "good-key");
        assert_eq!(dialog.fetch_state(), &ModelFetch::Loading);

        assert!(dialog.apply_models(retry.ticket, models(&["m"])));
        assert!(dialog.can_save());
    }

    #[test]
    fn test_same_key_refetches_after_backend_error() {
        let mut dialog = SettingsDialog::new();
        dialog.open(&settings("", "m"));
        let first = dialog.edit_api_key("key").unwrap();
        dialog.apply_models(first.ticket, Ok(ApiResponse::Error("quota exceeded".into())));

        assert!(dialog.edit_api_key("key").is_some());
    }

    #[test]
    fn test_selection_snaps_to_first_model() {
        let mut dialog = SettingsDialog::new();
        dialog.open(&settings("", "x"));
        let request = dialog.edit_api_key("valid-key").unwrap();

        assert!(dialog.apply_models(request.ticket, models(&["models/a", "models/b"])));
        assert_eq!(dialog.model(), "models/a");
    }

    #[test]
    fn test_selection_kept_when_offered() {
        let mut dialog = SettingsDialog::new();
        dialog.open(&settings("", "models/b"));
        let request = dialog.edit_api_key("valid-key").unwrap();
        dialog.apply_models(request.ticket, models(&["models/a", "models/b"]));

        assert_eq!(dialog.model(), "models/b");
    }

    #[test]
    fn test_backend_error_message() {
        let mut dialog = SettingsDialog::new();
        let request = dialog.open(&settings("bad", "m")).unwrap();
        dialog.apply_models(request.ticket, Ok(ApiResponse::Error("API key not valid".into())));

        assert_eq!(dialog.fetch_state(), &ModelFetch::Failed("API key not valid".into()));
        assert!(!dialog.can_save());
    }

    #[test]
    fn test_empty_list_is_failure() {
        let mut dialog = SettingsDialog::new();
        let request = dialog.open(&settings("k", "m")).unwrap();
        dialog.apply_models(request.ticket, models(&[]));

        assert_eq!(dialog.fetch_state(), &ModelFetch::Failed(NO_MODELS_MESSAGE.into()));
    }

    #[test]
    fn test_transport_failure_message() {
        let mut dialog = SettingsDialog::new();
        let request = dialog.open(&settings("k", "m")).unwrap();
        dialog.apply_models(request.ticket, Err(Error::Transport("refused".into())));

        assert_eq!(
            dialog.fetch_state(),
            &ModelFetch::Failed(MODEL_FETCH_FAILED_MESSAGE.into())
        );
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut dialog = SettingsDialog::new();
        dialog.open(&settings("", "m"));
        let first = dialog.edit_api_key("k").unwrap();
        let second = dialog.edit_api_key("ke").unwrap();

        assert!(dialog.apply_models(second.ticket, models(&["models/new"])));
        assert!(!dialog.apply_models(first.ticket, models(&["models/old"])));
        assert_eq!(dialog.models(), ["models/new".to_string()]);
    }

    #[test]
    fn test_response_after_cancel_is_ignored() {
        let mut dialog = SettingsDialog::new();
        let request = dialog.open(&settings("k", "m")).unwrap();
        dialog.cancel();

        assert!(!dialog.apply_models(request.ticket, models(&["models/a"])));
    }

    // =============================================
    // 保存
    // =============================================

    #[test]
    fn test_save_disabled_when_key_blank() {
        let mut dialog = SettingsDialog::new();
        dialog.open(&settings("", "m"));
        assert!(!dialog.can_save());
        assert!(dialog.save().is_none());
        assert!(dialog.is_open());
    }

    #[test]
    fn test_save_disabled_while_loading() {
        let mut dialog = SettingsDialog::new();
        dialog.open(&settings("k", "m"));
        assert!(!dialog.can_save());
    }

    #[test]
    fn test_save_commits_and_closes() {
        let mut dialog = SettingsDialog::new();
        dialog.open(&settings("", "x"));
        let request = dialog.edit_api_key("valid-key").unwrap();
        dialog.apply_models(request.ticket, models(&["models/a", "models/b"]));
        dialog.select_model("models/b");

        assert!(dialog.can_save());
        let saved = dialog.save().expect("save should succeed");
        assert_eq!(saved, settings("valid-key", "models/b"));
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_model_options() {
        let mut dialog = SettingsDialog::new();
        let request = dialog.open(&settings("k", "m")).unwrap();
        dialog.apply_models(request.ticket, models(&["models/gemini-1.5-pro"]));

        assert_eq!(
            dialog.model_options(),
            vec![("models/gemini-1.5-pro".to_string(), "Gemini 1.5 Pro".to_string())]
        );
    }
}
