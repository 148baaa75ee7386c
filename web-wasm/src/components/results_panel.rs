//! 解析結果パネルコンポーネント

use leptos::prelude::*;
use portfolio_ai_common::{AnalyzePage, EvaluationResult, RingSize, SkillTier};
use crate::components::{
    decision_badge::DecisionBadge,
    result_card::ResultCard,
    score_ring::ScoreRing,
    skill_badge::SkillBadge,
};

/// 評価結果だけを追跡する（入力欄の編集では再描画しない）
fn result_memo(page: RwSignal<AnalyzePage>) -> Memo<Option<EvaluationResult>> {
    Memo::new(move |_| page.with(|p| p.result().cloned()))
}

#[component]
pub fn ResultsPanel(page: RwSignal<AnalyzePage>) -> impl IntoView {
    let result = result_memo(page);

    move || match result.get() {
        Some(result) => view! { <EvaluationCards result=result /> }.into_any(),
        None => view! { <EmptyResults /> }.into_any(),
    }
}

#[component]
fn EmptyResults() -> impl IntoView {
    view! {
        <ResultCard title="Analysis Results">
            <div class="empty-state">
                <p class="empty-title">"Enter a portfolio URL and job description"</p>
                <p class="text-muted">"Results will appear here"</p>
            </div>
        </ResultCard>
    }
}

#[component]
fn EvaluationCards(result: EvaluationResult) -> impl IntoView {
    let EvaluationResult {
        job_title,
        hiring_decision,
        jd_fit_score,
        decision_reason,
        portfolio_url,
        portfolio_build,
        ats_match,
        evaluation_mode,
        skill_evidence,
    } = result;

    let confidence = format!("{}%", portfolio_build.confidence_percent());
    let portfolio_href = portfolio_url.clone();

    view! {
        <ResultCard
            title=job_title
            badge=view! { <DecisionBadge decision=hiring_decision /> }.into_any()
        >
            <div class="centered">
                <ScoreRing score=jd_fit_score label="JD Fit Score" />
            </div>
            <div class="reason-box">
                <p>{decision_reason}</p>
            </div>
            <a class="portfolio-link" href=portfolio_href target="_blank" rel="noopener noreferrer">
                {portfolio_url}" ↗"
            </a>
            <div class="stat-grid cols-2">
                <div>
                    <p class="stat-label">"Build Type"</p>
                    <p class="stat-value">{portfolio_build.build_type}</p>
                </div>
                <div>
                    <p class="stat-label">"Confidence"</p>
                    <p class="stat-value">{confidence}</p>
                </div>
            </div>
        </ResultCard>

        <ResultCard title="ATS Keyword Match">
            <div class="centered">
                <ScoreRing score=ats_match.ats_keyword_score label="ATS Score" size=RingSize::Sm />
            </div>
            <div class="stat-grid cols-3">
                <div>
                    <p class="stat-label">"Matched Keywords"</p>
                    <p class="stat-number tier-success">{ats_match.matched_keyword_count}</p>
                </div>
                <div>
                    <p class="stat-label">"Missing Keywords"</p>
                    <p class="stat-number tier-destructive">{ats_match.missing_keyword_count}</p>
                </div>
                <div>
                    <p class="stat-label">"Evaluation Mode"</p>
                    <p class="stat-mode">{evaluation_mode}</p>
                </div>
            </div>
        </ResultCard>

        <ResultCard title="Skill Evidence">
            <SkillGroup
                title="Strong Matches"
                count=skill_evidence.strong_match_count
                tier=SkillTier::Strong
                skills=Vec::new()
            />
            <SkillGroup
                title="Partial Matches"
                count=skill_evidence.partial_match_count
                tier=SkillTier::Partial
                skills=skill_evidence.partial_matches
            />
            <SkillGroup
                title="Missing Skills"
                count=skill_evidence.missing_skill_count
                tier=SkillTier::Missing
                skills=skill_evidence.missing_skills
            />
        </ResultCard>
    }
}

#[component]
fn SkillGroup(
    #[prop(into)] title: String,
    count: u32,
    tier: SkillTier,
    skills: Vec<String>,
) -> impl IntoView {
    view! {
        <div class="skill-group">
            <div class="skill-group-header">
                <p>{title}</p>
                <span class=format!("count-pill tier-{}", tier.score_tier().as_str())>{count}</span>
            </div>
            <div class="skill-list">
                {skills
                    .into_iter()
                    .map(|skill| view! { <SkillBadge skill=skill tier=tier /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_result_memo_ignores_input_edits() {
        let owner = Owner::new();
        owner.set();

        let page = RwSignal::new(AnalyzePage::new());
        let result = result_memo(page);

        let renders = Arc::new(AtomicUsize::new(0));
        let view_source = {
            let renders = Arc::clone(&renders);
            Memo::new(move |_| {
                renders.fetch_add(1, Ordering::SeqCst);
                result.get().map(|r| r.job_title)
            })
        };

        assert_eq!(view_source.get(), None);
        assert_eq!(renders.load(Ordering::SeqCst), 1);

        page.update(|p| p.set_portfolio_url("https://example.dev"));
        page.update(|p| p.set_job_description("Rust engineer"));

        assert_eq!(view_source.get(), None);
        assert_eq!(renders.load(Ordering::SeqCst), 1);
    }
}
