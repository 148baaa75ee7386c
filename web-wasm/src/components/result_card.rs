//! 結果カードコンポーネント

use leptos::prelude::*;

#[component]
pub fn ResultCard(
    #[prop(into)] title: String,
    #[prop(optional)] badge: Option<AnyView>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="result-card">
            <div class="result-card-header">
                <h3>{title}</h3>
                {badge}
            </div>
            {children()}
        </div>
    }
}
