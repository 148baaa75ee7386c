//! スキルバッジコンポーネント

use leptos::prelude::*;
use portfolio_ai_common::SkillTier;

#[component]
pub fn SkillBadge(#[prop(into)] skill: String, tier: SkillTier) -> impl IntoView {
    view! {
        <span class=format!("skill-badge skill-{} tier-{}", tier.as_str(), tier.score_tier().as_str())>
            {skill}
        </span>
    }
}
