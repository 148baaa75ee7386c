//! 設定ダイアログコンポーネント

use leptos::prelude::*;
use portfolio_ai_common::{AnalyzePage, ModelFetch};

const API_KEY_URL: &str = "https://aistudio.google.com/app/apikey";

#[component]
pub fn SettingsModal<FK, FS, FC>(
    page: RwSignal<AnalyzePage>,
    on_api_key_change: FK,
    on_save: FS,
    on_cancel: FC,
) -> impl IntoView
where
    FK: Fn(String) + 'static + Clone + Send + Sync,
    FS: Fn(()) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    let is_open = move || page.with(|p| p.settings_dialog().is_open());
    let can_save = move || page.with(|p| p.settings_dialog().can_save());

    view! {
        <Show when=is_open>
            <div
                class="modal-overlay"
                on:click={
                    let on_cancel = on_cancel.clone();
                    move |_| on_cancel(())
                }
            >
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"Settings"</h2>
                        <p class="text-muted">"Configure your API key and model preferences."</p>
                    </div>

                    <div class="form-group">
                        <label for="api-key">"Gemini API Key"</label>
                        <input
                            type="password"
                            id="api-key"
                            placeholder="Enter your Gemini API key"
                            prop:value=move || page.with(|p| p.settings_dialog().api_key().to_string())
                            on:input={
                                let on_api_key_change = on_api_key_change.clone();
                                move |ev| on_api_key_change(event_target_value(&ev))
                            }
                        />
                        <p class="hint">
                            "Get your API key from "
                            <a href=API_KEY_URL target="_blank" rel="noopener noreferrer">
                                "Google AI Studio"
                            </a>
                        </p>
                    </div>

                    <div class="form-group">
                        <label for="model">"Model"</label>
                        <ModelSelector page=page />
                    </div>

                    <div class="modal-actions">
                        <button
                            class="btn btn-secondary"
                            on:click={
                                let on_cancel = on_cancel.clone();
                                move |_| on_cancel(())
                            }
                        >
                            "Cancel"
                        </button>
                        <button
                            class="btn btn-primary"
                            disabled=move || !can_save()
                            on:click={
                                let on_save = on_save.clone();
                                move |_| on_save(())
                            }
                        >
                            "Save Changes"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// モデル選択欄（取得状態に応じて表示を切り替える）
#[component]
fn ModelSelector(page: RwSignal<AnalyzePage>) -> impl IntoView {
    let fetch_state = Memo::new(move |_| page.with(|p| p.settings_dialog().fetch_state().clone()));

    move || match fetch_state.get() {
        ModelFetch::Loading => view! {
            <div class="model-status">
                <span class="spinner"></span>
                "Loading models..."
            </div>
        }
        .into_any(),
        ModelFetch::Failed(message) => view! {
            <div class="error-box">{message}</div>
        }
        .into_any(),
        ModelFetch::Loaded(_) => {
            let options = page.with_untracked(|p| p.settings_dialog().model_options());
            view! {
                <select
                    id="model"
                    on:change=move |ev| {
                        page.update(|p| p.settings_dialog_mut().select_model(event_target_value(&ev)));
                    }
                >
                    {options
                        .into_iter()
                        .map(|(id, name)| {
                            let selected_id = id.clone();
                            view! {
                                <option
                                    value=id
                                    prop:selected=move || page.with(|p| p.settings_dialog().model() == selected_id)
                                >
                                    {name}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            }
            .into_any()
        }
        ModelFetch::Idle => view! {
            <div class="model-status hint">
                "Enter a valid API key to load available models"
            </div>
        }
        .into_any(),
    }
}
