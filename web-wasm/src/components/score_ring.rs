//! スコアリングコンポーネント

use leptos::prelude::*;
use portfolio_ai_common::{fill_fraction, format_score, RingSize, ScoreTier};

/// リング背景色（未塗り部分）
const RING_TRACK_COLOR: &str = "hsl(222 30% 12%)";

/// リングの背景スタイル（conic-gradientで塗り割合を表す）
pub fn ring_style(score: f64) -> String {
    let tier = ScoreTier::from_score(score);
    let percent = if fill_fraction(score) >= 1.0 {
        100.0
    } else {
        score.max(0.0)
    };
    format!(
        "background: conic-gradient({} {}%, {} 0%)",
        tier.color(),
        format_score(percent),
        RING_TRACK_COLOR
    )
}

#[component]
pub fn ScoreRing(
    score: f64,
    #[prop(into)] label: String,
    #[prop(optional)] size: RingSize,
) -> impl IntoView {
    let tier = ScoreTier::from_score(score);

    view! {
        <div class="score-ring-wrapper">
            <div
                class=format!("score-ring ring-{} tier-{}", size.as_str(), tier.as_str())
                style=ring_style(score)
            >
                <div class="score-ring-inner">
                    {format!("{}%", format_score(score))}
                </div>
            </div>
            <span class="score-ring-label">{label}</span>
        </div>
    }
}
