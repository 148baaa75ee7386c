//! PortfolioAI CLI
//!
//! 評価バックエンドに `POST /models` と `POST /analyze` を送り、
//! 結果を端末に表示する。状態遷移は portfolio-ai-common と共通。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod prompt;
pub mod report;
