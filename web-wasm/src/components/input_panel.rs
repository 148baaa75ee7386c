//! 入力パネルコンポーネント

use leptos::prelude::*;
use portfolio_ai_common::AnalyzePage;
use crate::components::result_card::ResultCard;

#[component]
pub fn InputPanel<FA>(page: RwSignal<AnalyzePage>, on_analyze: FA) -> impl IntoView
where
    FA: Fn(()) + 'static + Clone + Send + Sync,
{
    let is_busy = move || page.with(|p| p.is_busy());
    let error = move || page.with(|p| p.error().map(str::to_string));

    view! {
        <ResultCard title="Input Details">
            <div class="form-group">
                <label for="portfolio">"Portfolio URL"</label>
                <input
                    type="url"
                    id="portfolio"
                    placeholder="https://example.com"
                    prop:value=move || page.with(|p| p.portfolio_url().to_string())
                    on:input=move |ev| {
                        page.update(|p| p.set_portfolio_url(event_target_value(&ev)));
                    }
                />
            </div>

            <div class="form-group">
                <label for="jd">"Job Description"</label>
                <textarea
                    id="jd"
                    placeholder="Paste the job description here..."
                    prop:value=move || page.with(|p| p.job_description().to_string())
                    on:input=move |ev| {
                        page.update(|p| p.set_job_description(event_target_value(&ev)));
                    }
                />
            </div>

            {move || error().map(|message| view! { <div class="error-box">{message}</div> })}

            <button
                class="btn btn-primary btn-block"
                disabled=is_busy
                on:click=move |_| on_analyze(())
            >
                {move || if is_busy() {
                    view! { "Analyzing..." <span class="spinner"></span> }.into_any()
                } else {
                    "Analyze Portfolio".into_any()
                }}
            </button>
        </ResultCard>
    }
}
