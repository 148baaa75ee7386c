//! 評価結果のテキスト出力

use console::{style, Color, StyledObject};
use portfolio_ai_common::{
    fill_fraction, format_model_name, format_score, DecisionTier, EvaluationResult, ScoreTier,
    SkillTier,
};

/// スコアバーのセル数
const BAR_WIDTH: usize = 20;
/// ラベル列の幅
const LABEL_WIDTH: usize = 18;

fn score_color(tier: ScoreTier) -> Color {
    match tier {
        ScoreTier::Success => Color::Green,
        ScoreTier::Warning => Color::Yellow,
        ScoreTier::Destructive => Color::Red,
    }
}

fn decision_style(decision: &str) -> StyledObject<String> {
    let text = format!("[{}]", decision);
    match DecisionTier::from_decision(decision) {
        DecisionTier::Positive => style(text).green().bold(),
        DecisionTier::Neutral => style(text).yellow().bold(),
        DecisionTier::Negative => style(text).red().bold(),
        DecisionTier::Default => style(text).dim(),
    }
}

/// スコアバー（例: `██████████░░░░░░░░░░`）
pub fn score_bar(score: f64) -> String {
    let filled = (fill_fraction(score) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn score_line(label: &str, score: f64) -> String {
    let color = score_color(ScoreTier::from_score(score));
    format!(
        "  {:<width$}{:>5}  {}",
        label,
        style(format!("{}%", format_score(score))).fg(color).bold(),
        style(score_bar(score)).fg(color),
        width = LABEL_WIDTH
    )
}

fn field_line(label: &str, value: impl std::fmt::Display) -> String {
    format!("  {:<width$}{}", label, value, width = LABEL_WIDTH)
}

fn skill_line(label: &str, count: u32, tier: SkillTier, skills: &[String]) -> String {
    let color = score_color(tier.score_tier());
    let mut line = field_line(label, style(count).fg(color).bold());
    if !skills.is_empty() {
        let names: Vec<String> = skills
            .iter()
            .map(|s| style(s).fg(color).to_string())
            .collect();
        line.push_str("  ");
        line.push_str(&names.join(", "));
    }
    line
}

fn section(title: &str) -> String {
    style(title.to_uppercase()).dim().bold().to_string()
}

/// 評価結果をレポート文字列にする
pub fn render(result: &EvaluationResult) -> String {
    let title = if result.job_title.is_empty() {
        "Evaluation"
    } else {
        result.job_title.as_str()
    };

    let mut lines = vec![
        format!("{}  {}", style(title).bold(), decision_style(&result.hiring_decision)),
        score_line("JD Fit Score", result.jd_fit_score),
    ];

    if !result.decision_reason.is_empty() {
        lines.push(String::new());
        lines.push(format!("  {}", style(&result.decision_reason).italic()));
        lines.push(String::new());
    }

    if !result.portfolio_url.is_empty() {
        lines.push(field_line("Portfolio", style(&result.portfolio_url).underlined().blue()));
    }
    lines.push(field_line("Build Type", &result.portfolio_build.build_type));
    lines.push(field_line(
        "Confidence",
        format!("{}%", result.portfolio_build.confidence_percent()),
    ));

    let ats = &result.ats_match;
    lines.push(String::new());
    lines.push(section("ATS Keyword Match"));
    lines.push(score_line("ATS Score", ats.ats_keyword_score));
    lines.push(field_line(
        "Matched Keywords",
        style(ats.matched_keyword_count).green(),
    ));
    lines.push(field_line(
        "Missing Keywords",
        style(ats.missing_keyword_count).red(),
    ));
    lines.push(field_line("Evaluation Mode", &result.evaluation_mode));

    let skills = &result.skill_evidence;
    lines.push(String::new());
    lines.push(section("Skill Evidence"));
    lines.push(skill_line(
        "Strong Matches",
        skills.strong_match_count,
        SkillTier::Strong,
        &[],
    ));
    lines.push(skill_line(
        "Partial Matches",
        skills.partial_match_count,
        SkillTier::Partial,
        &skills.partial_matches,
    ));
    lines.push(skill_line(
        "Missing Skills",
        skills.missing_skill_count,
        SkillTier::Missing,
        &skills.missing_skills,
    ));

    lines.join("\n")
}

/// モデル一覧の出力（ID と表示名）
pub fn render_models(models: &[String], selected: Option<&str>) -> String {
    let width = models.iter().map(|m| m.len()).max().unwrap_or(0);
    models
        .iter()
        .map(|id| {
            let marker = if Some(id.as_str()) == selected { "*" } else { " " };
            format!(
                "{} {:<width$}  {}",
                marker,
                id,
                style(format_model_name(id)).dim(),
                width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
