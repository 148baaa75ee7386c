//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_ai_common::{AnalyzePage, ModelFetchRequest};
use crate::api::FetchBackend;
use crate::components::{
    header::Header,
    input_panel::InputPanel,
    results_panel::ResultsPanel,
    settings_modal::SettingsModal,
};

/// モデル一覧を取得し、応答を設定ダイアログに反映する
fn spawn_model_fetch(
    page: RwSignal<AnalyzePage>,
    backend: FetchBackend,
    request: Option<ModelFetchRequest>,
) {
    let Some(request) = request else {
        return;
    };

    spawn_local(async move {
        let outcome = request.send(&backend).await;
        page.update(|p| {
            p.settings_dialog_mut().apply_models(request.ticket, outcome);
        });
    });
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let page = RwSignal::new(AnalyzePage::new());
    let backend = FetchBackend::from_document();

    // 解析開始ハンドラ
    let on_analyze = {
        let backend = backend.clone();
        move |_: ()| {
            let Some(pending) = page.try_update(|p| p.submit().ok()).flatten() else {
                return;
            };

            let backend = backend.clone();
            spawn_local(async move {
                let outcome = pending.send(&backend).await;
                page.update(|p| {
                    p.finish(pending.ticket, outcome);
                });
            });
        }
    };

    // 設定ダイアログ
    let on_open_settings = {
        let backend = backend.clone();
        move |_: ()| {
            let request = page.try_update(|p| p.open_settings()).flatten();
            spawn_model_fetch(page, backend.clone(), request);
        }
    };

    let on_api_key_change = {
        let backend = backend.clone();
        move |key: String| {
            let request = page
                .try_update(|p| p.settings_dialog_mut().edit_api_key(key))
                .flatten();
            spawn_model_fetch(page, backend.clone(), request);
        }
    };

    let on_save = move |_: ()| {
        page.update(|p| {
            p.save_settings();
        });
    };

    let on_cancel = move |_: ()| page.update(|p| p.cancel_settings());

    view! {
        <div class="app">
            <Header on_open_settings=on_open_settings />

            <main class="container">
                <div class="columns">
                    <section class="column">
                        <InputPanel page=page on_analyze=on_analyze />
                    </section>
                    <section class="column">
                        <ResultsPanel page=page />
                    </section>
                </div>
            </main>

            <SettingsModal
                page=page
                on_api_key_change=on_api_key_change
                on_save=on_save
                on_cancel=on_cancel
            />
        </div>
    }
}
