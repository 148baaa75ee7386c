use clap::Parser;
use console::style;
use portfolio_ai::{cli, client, config, error, input, prompt, report};
use portfolio_ai_common::{
    format_model_name, AnalyzePage, ApiResponse, EvaluatorBackend, Settings, SubmitRejection,
    NO_MODELS_MESSAGE,
};
use cli::{Cli, Commands};
use client::HttpBackend;
use config::Config;
use error::{PortfolioAiError, Result};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("✖").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Models { api_key } => {
            let config = Config::resolve(cli.backend, api_key, None)?;
            let api_key = config.api_key.ok_or(PortfolioAiError::MissingApiKey)?;
            let backend = HttpBackend::new(config.backend)?;

            let pb = prompt::spinner("Loading models...");
            let response = backend.fetch_models(&api_key).await;
            pb.finish_and_clear();

            match response? {
                ApiResponse::Error(message) => return Err(PortfolioAiError::Backend(message)),
                ApiResponse::Ok(models) if models.is_empty() => {
                    return Err(PortfolioAiError::Backend(NO_MODELS_MESSAGE.to_string()));
                }
                ApiResponse::Ok(models) => {
                    println!("{}", report::render_models(&models, Some(&config.model)));
                }
            }
        }

        Commands::Analyze {
            url,
            jd,
            jd_file,
            model,
            api_key,
            json,
            no_prompt,
        } => {
            let config = Config::resolve(cli.backend, api_key, model)?;
            let job_description = input::read_job_description(jd, jd_file.as_deref())?;
            let backend = HttpBackend::new(config.backend)?;

            let mut page = AnalyzePage::with_settings(Settings {
                api_key: config.api_key.unwrap_or_default(),
                model: config.model,
            });
            page.set_portfolio_url(url.unwrap_or_default());
            page.set_job_description(job_description);

            let pending = match page.submit() {
                Ok(pending) => pending,
                Err(SubmitRejection::MissingApiKey) => {
                    if no_prompt || !std::io::stdin().is_terminal() {
                        return Err(PortfolioAiError::MissingApiKey);
                    }
                    prompt::run_settings(&mut page, &backend, None).await?;
                    page.submit()?
                }
                Err(rejection) => return Err(rejection.into()),
            };

            tracing::info!(
                backend = %backend.config().base_url,
                model = %pending.request.model,
                "analyzing portfolio"
            );

            let pb = prompt::spinner("Analyzing...");
            let outcome = pending.send(&backend).await;
            pb.finish_and_clear();
            page.finish(pending.ticket, outcome);

            if let Some(message) = page.error() {
                return Err(PortfolioAiError::Backend(message.to_string()));
            }
            if let Some(result) = page.result() {
                if json {
                    println!("{}", serde_json::to_string_pretty(result)?);
                } else {
                    println!("{}", report::render(result));
                }
            }
        }

        Commands::Settings { api_key } => {
            let config = Config::resolve(cli.backend, None, None)?;
            let backend = HttpBackend::new(config.backend)?;

            let mut page = AnalyzePage::with_settings(Settings {
                api_key: String::new(),
                model: config.model,
            });
            let initial_key = api_key.or(config.api_key);
            prompt::run_settings(&mut page, &backend, initial_key).await?;

            let settings = page.settings();
            println!(
                "{} Model: {} ({})",
                style("✔").green().bold(),
                format_model_name(&settings.model),
                settings.model
            );
            println!("  API Key: {}", mask_key(&settings.api_key));
            println!(
                "  {}",
                style("Settings are kept for this session only; pass --api-key or set GEMINI_API_KEY to reuse them.")
                    .dim()
            );
        }
    }

    Ok(())
}

/// 先頭4文字以外を伏せる
fn mask_key(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    let hidden = key.chars().count().saturating_sub(4);
    format!("{}{}", visible, "*".repeat(hidden))
}
