//! メイン画面の状態管理
//!
//! 入力（ポートフォリオURL・求人票）、確定済み設定、処理中フラグ、
//! エラーメッセージ、評価結果を保持し、解析リクエストの発行と
//! 応答の反映を行う。

use thiserror::Error;

use crate::backend::EvaluatorBackend;
use crate::error::Result;
use crate::response::{AnalyzeResponse, ApiResponse};
use crate::sequence::{RequestSequence, Ticket};
use crate::settings::{ModelFetchRequest, SettingsDialog};
use crate::types::{EvaluationRequest, EvaluationResult, Settings};

pub const MISSING_FIELDS_MESSAGE: &str = "Please enter both portfolio URL and job description";
pub const MISSING_API_KEY_MESSAGE: &str = "Please set your API key in settings";
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Failed to analyze portfolio. Please check your inputs and try again.";

/// 画面の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePhase {
    Idle,
    Loading,
    Success,
    Failure,
}

/// 送信を受け付けなかった理由
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    #[error("Please enter both portfolio URL and job description")]
    MissingFields,

    #[error("Please set your API key in settings")]
    MissingApiKey,

    #[error("An analysis is already in progress")]
    Busy,
}

/// 発行すべき解析リクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAnalysis {
    pub ticket: Ticket,
    pub request: EvaluationRequest,
}

impl PendingAnalysis {
    pub async fn send<B: EvaluatorBackend>(&self, backend: &B) -> Result<AnalyzeResponse> {
        backend.analyze(&self.request).await
    }
}

/// メイン画面
#[derive(Debug, Clone, Default)]
pub struct AnalyzePage {
    portfolio_url: String,
    job_description: String,
    settings: Settings,
    busy: bool,
    error: Option<String>,
    result: Option<EvaluationResult>,
    dialog: SettingsDialog,
    sequence: RequestSequence,
}

impl AnalyzePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn set_portfolio_url(&mut self, url: impl Into<String>) {
        self.portfolio_url = url.into();
    }

    pub fn set_job_description(&mut self, text: impl Into<String>) {
        self.job_description = text.into();
    }

    /// 入力を検証して解析リクエストを作る
    ///
    /// 必須項目が空ならネットワークを使わずにエラー表示する。
    /// APIキー未設定なら設定ダイアログを開く。
    pub fn submit(&mut self) -> std::result::Result<PendingAnalysis, SubmitRejection> {
        if self.busy {
            return Err(SubmitRejection::Busy);
        }

        if self.portfolio_url.trim().is_empty() || self.job_description.trim().is_empty() {
            self.error = Some(MISSING_FIELDS_MESSAGE.to_string());
            return Err(SubmitRejection::MissingFields);
        }

        if !self.settings.has_api_key() {
            self.error = Some(MISSING_API_KEY_MESSAGE.to_string());
            // 空のキーで開くのでモデル取得は発生しない
            let _ = self.dialog.open(&self.settings);
            return Err(SubmitRejection::MissingApiKey);
        }

        self.busy = true;
        self.error = None;

        let ticket = self.sequence.issue();
        log::info!(
            "analysis #{} requested for {} with model {}",
            ticket.value(),
            self.portfolio_url,
            self.settings.model
        );

        Ok(PendingAnalysis {
            ticket,
            request: EvaluationRequest {
                portfolio_url: self.portfolio_url.clone(),
                job_description: self.job_description.clone(),
                model: self.settings.model.clone(),
                api_key: self.settings.api_key.clone(),
            },
        })
    }

    /// 解析応答を反映する
    ///
    /// 最新でないチケットの応答は捨てて `false` を返す。
    pub fn finish(&mut self, ticket: Ticket, outcome: Result<AnalyzeResponse>) -> bool {
        if !self.sequence.accept(ticket) {
            log::debug!("discarding stale analysis response #{}", ticket.value());
            return false;
        }

        self.busy = false;
        match outcome {
            Ok(ApiResponse::Ok(result)) => {
                self.error = None;
                self.result = Some(result);
            }
            Ok(ApiResponse::Error(message)) => {
                log::warn!("backend rejected analysis: {}", message);
                self.error = Some(message);
                self.result = None;
            }
            Err(e) => {
                log::error!("analysis request failed: {}", e);
                self.error = Some(ANALYSIS_FAILED_MESSAGE.to_string());
                self.result = None;
            }
        }
        true
    }

    /// 送信から応答反映までをまとめて実行する
    pub async fn analyze_with<B: EvaluatorBackend>(
        &mut self,
        backend: &B,
    ) -> std::result::Result<PagePhase, SubmitRejection> {
        let pending = self.submit()?;
        let outcome = pending.send(backend).await;
        self.finish(pending.ticket, outcome);
        Ok(self.phase())
    }

    pub fn phase(&self) -> PagePhase {
        if self.busy {
            PagePhase::Loading
        } else if self.error.is_some() {
            PagePhase::Failure
        } else if self.result.is_some() {
            PagePhase::Success
        } else {
            PagePhase::Idle
        }
    }

    // ---------------------------------------------
    // 設定ダイアログ
    // ---------------------------------------------

    pub fn open_settings(&mut self) -> Option<ModelFetchRequest> {
        self.dialog.open(&self.settings)
    }

    pub fn settings_dialog(&self) -> &SettingsDialog {
        &self.dialog
    }

    pub fn settings_dialog_mut(&mut self) -> &mut SettingsDialog {
        &mut self.dialog
    }

    /// ダイアログの内容を確定する。保存できない状態なら `false`。
    pub fn save_settings(&mut self) -> bool {
        match self.dialog.save() {
            Some(settings) => {
                log::info!("settings saved; model {}", settings.model);
                self.settings = settings;
                true
            }
            None => false,
        }
    }

    pub fn cancel_settings(&mut self) {
        self.dialog.cancel();
    }

    // ---------------------------------------------
    // 参照
    // ---------------------------------------------

    pub fn portfolio_url(&self) -> &str {
        &self.portfolio_url
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&EvaluationResult> {
        self.result.as_ref()
    }
}
