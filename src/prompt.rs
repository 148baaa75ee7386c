//! 対話的な設定ダイアログ
//!
//! ブラウザ版の設定ダイアログと同じ状態遷移（SettingsDialog）を端末上で動かす。
//! APIキー入力 → モデル一覧取得 → モデル選択 → 保存。

use crate::error::{PortfolioAiError, Result};
use dialoguer::{theme::ColorfulTheme, Password, Select};
use indicatif::{ProgressBar, ProgressStyle};
use portfolio_ai_common::{AnalyzePage, EvaluatorBackend, ModelFetch, ModelFetchRequest};
use std::time::Duration;

/// 処理中スピナー
pub fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

async fn load_models<B: EvaluatorBackend>(
    page: &mut AnalyzePage,
    backend: &B,
    request: Option<ModelFetchRequest>,
) {
    let Some(request) = request else {
        return;
    };

    let pb = spinner("Loading models...");
    let outcome = request.send(backend).await;
    pb.finish_and_clear();

    page.settings_dialog_mut().apply_models(request.ticket, outcome);
}

/// 設定ダイアログを実行する
///
/// `initial_key` があれば最初の入力として使う。保存したら `Ok(())`、
/// 空のキーまたはEscで中断したら `SettingsCancelled`。
pub async fn run_settings<B: EvaluatorBackend>(
    page: &mut AnalyzePage,
    backend: &B,
    initial_key: Option<String>,
) -> Result<()> {
    let theme = ColorfulTheme::default();

    if !page.settings_dialog().is_open() {
        let request = page.open_settings();
        load_models(page, backend, request).await;
    }

    let mut next_key = initial_key;
    loop {
        if page.settings_dialog().can_save() {
            break;
        }

        if let ModelFetch::Failed(message) = page.settings_dialog().fetch_state() {
            eprintln!("✖ {}", message);
        }

        let key = match next_key.take() {
            Some(key) => key,
            None => Password::with_theme(&theme)
                .with_prompt("Gemini API Key")
                .allow_empty_password(true)
                .interact()?,
        };

        if key.trim().is_empty() {
            page.cancel_settings();
            return Err(PortfolioAiError::SettingsCancelled);
        }

        let request = page.settings_dialog_mut().edit_api_key(key);
        load_models(page, backend, request).await;
    }

    let options = page.settings_dialog().model_options();
    let names: Vec<&str> = options.iter().map(|(_, name)| name.as_str()).collect();
    let current = options
        .iter()
        .position(|(id, _)| id == page.settings_dialog().model())
        .unwrap_or(0);

    let Some(index) = Select::with_theme(&theme)
        .with_prompt("Model")
        .items(&names)
        .default(current)
        .interact_opt()?
    else {
        page.cancel_settings();
        return Err(PortfolioAiError::SettingsCancelled);
    };

    let model = options[index].0.clone();
    page.settings_dialog_mut().select_model(model);

    if page.save_settings() {
        Ok(())
    } else {
        Err(PortfolioAiError::SettingsCancelled)
    }
}
