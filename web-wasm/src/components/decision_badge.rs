//! 採用判定バッジコンポーネント

use leptos::prelude::*;
use portfolio_ai_common::DecisionTier;

pub fn decision_class(decision: &str) -> String {
    format!("decision-badge decision-{}", DecisionTier::from_decision(decision).as_str())
}

#[component]
pub fn DecisionBadge(#[prop(into)] decision: String) -> impl IntoView {
    let class = decision_class(&decision);
    view! {
        <span class=class>{decision}</span>
    }
}
