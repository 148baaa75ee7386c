//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header<F>(on_open_settings: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <header class="header">
            <div class="brand">
                <div class="brand-icon">"⚡"</div>
                <div>
                    <h1>"PortfolioAI"</h1>
                    <p class="text-muted">"AI-powered candidate evaluation"</p>
                </div>
            </div>
            <button
                class="btn btn-icon"
                title="Settings"
                on:click=move |_| on_open_settings(())
            >
                "⚙"
            </button>
        </header>
    }
}
