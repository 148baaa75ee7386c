//! 評価リクエスト／結果の型定義
//!
//! ブラウザ(WASM)とCLIで共有される型:
//! - EvaluationRequest: `POST /analyze` のリクエストボディ
//! - ModelsRequest: `POST /models` のリクエストボディ
//! - EvaluationResult: バックエンドの評価結果
//! - Settings: APIキーと選択モデル（セッション内のみ保持）

use serde::{Deserialize, Serialize};

/// 初期選択モデル
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// `POST /analyze` のリクエスト
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub portfolio_url: String,
    pub job_description: String,
    pub model: String,
    pub api_key: String,
}

/// `POST /models` のリクエスト
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelsRequest {
    pub api_key: String,
}

/// ポートフォリオのビルド種別推定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioBuild {
    pub build_type: String,
    /// 0.0〜1.0
    pub confidence: f64,
}

impl PortfolioBuild {
    /// 表示用の確信度（四捨五入した百分率）
    pub fn confidence_percent(&self) -> i64 {
        (self.confidence * 100.0).round() as i64
    }
}

/// ATSキーワード一致
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtsMatch {
    /// 0〜100
    pub ats_keyword_score: f64,
    pub matched_keyword_count: u32,
    pub missing_keyword_count: u32,
}

/// スキル根拠
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillEvidence {
    pub strong_match_count: u32,
    pub partial_match_count: u32,
    pub partial_matches: Vec<String>,
    pub missing_skill_count: u32,
    pub missing_skills: Vec<String>,
}

/// バックエンドの評価結果
///
/// 欠けているフィールドは空値で補う。未知のフィールドは無視する。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationResult {
    pub job_title: String,
    pub hiring_decision: String,
    /// 0〜100
    pub jd_fit_score: f64,
    pub decision_reason: String,
    pub portfolio_url: String,
    pub portfolio_build: PortfolioBuild,
    pub ats_match: AtsMatch,
    pub evaluation_mode: String,
    pub skill_evidence: SkillEvidence,
}

/// APIキーと選択モデル
///
/// 永続化しない。設定ダイアログの保存操作でのみ更新される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_key: String,
    pub model: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl Settings {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
