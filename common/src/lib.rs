//! PortfolioAI Common Library
//!
//! CLIとWeb(WASM)で共有される型・状態管理・ユーティリティ

pub mod backend;
pub mod error;
pub mod page;
pub mod response;
pub mod sequence;
pub mod settings;
pub mod tiers;
pub mod types;

pub use backend::{BackendConfig, EvaluatorBackend, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use page::{
    AnalyzePage, PagePhase, PendingAnalysis, SubmitRejection, ANALYSIS_FAILED_MESSAGE,
    MISSING_API_KEY_MESSAGE, MISSING_FIELDS_MESSAGE,
};
pub use response::{
    parse_analyze_body, parse_analyze_value, parse_models_body, parse_models_value,
    AnalyzeResponse, ApiResponse, ModelListResponse,
};
pub use sequence::{RequestSequence, Ticket};
pub use settings::{
    format_model_name, ModelFetch, ModelFetchRequest, SettingsDialog, MODEL_FETCH_FAILED_MESSAGE,
    NO_MODELS_MESSAGE,
};
pub use tiers::{fill_fraction, format_score, DecisionTier, RingSize, ScoreTier, SkillTier};
pub use types::{
    AtsMatch, EvaluationRequest, EvaluationResult, ModelsRequest, PortfolioBuild, Settings,
    SkillEvidence, DEFAULT_MODEL,
};
