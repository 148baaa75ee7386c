//! 表示用の段階分け
//!
//! スコアリング・判定バッジ・スキルバッジの色分けを決める純関数群。
//! ブラウザ版のコンポーネントとCLIのレポート出力で共有する。

/// スコアの色段階
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Success,
    Warning,
    Destructive,
}

impl ScoreTier {
    /// 70以上: success / 40以上: warning / それ未満: destructive
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            ScoreTier::Success
        } else if score >= 40.0 {
            ScoreTier::Warning
        } else {
            ScoreTier::Destructive
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreTier::Success => "success",
            ScoreTier::Warning => "warning",
            ScoreTier::Destructive => "destructive",
        }
    }

    /// リングの塗り色
    pub fn color(&self) -> &'static str {
        match self {
            ScoreTier::Success => "hsl(158 64% 52%)",
            ScoreTier::Warning => "hsl(38 92% 50%)",
            ScoreTier::Destructive => "hsl(0 72% 51%)",
        }
    }
}

/// スコアリングのサイズ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RingSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl RingSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            RingSize::Sm => "sm",
            RingSize::Md => "md",
            RingSize::Lg => "lg",
        }
    }
}

/// リングの塗り割合（0.0〜1.0に丸める）
pub fn fill_fraction(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    (score / 100.0).clamp(0.0, 1.0)
}

/// スコアの表示文字列（整数は小数点なし、それ以外は値のまま）
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{}", score as i64)
    } else {
        format!("{}", score)
    }
}

/// 採用判定の段階
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionTier {
    Positive,
    Neutral,
    Negative,
    Default,
}

impl DecisionTier {
    /// 判定文字列を段階に変換する
    ///
    /// 大文字小文字は区別しない。未知の文字列は `Default`。
    ///
    /// # Examples
    /// ```
    /// use portfolio_ai_common::DecisionTier;
    ///
    /// assert_eq!(DecisionTier::from_decision("HIRE"), DecisionTier::Positive);
    /// assert_eq!(DecisionTier::from_decision("Shortlist"), DecisionTier::Default);
    /// ```
    pub fn from_decision(decision: &str) -> Self {
        match decision.trim().to_lowercase().as_str() {
            "hire" | "yes" | "accept" => DecisionTier::Positive,
            "hold" | "maybe" | "pending" => DecisionTier::Neutral,
            "reject" | "no" | "decline" => DecisionTier::Negative,
            _ => DecisionTier::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionTier::Positive => "positive",
            DecisionTier::Neutral => "neutral",
            DecisionTier::Negative => "negative",
            DecisionTier::Default => "default",
        }
    }
}

/// スキル一致の段階
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillTier {
    Strong,
    Partial,
    Missing,
}

impl SkillTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillTier::Strong => "strong",
            SkillTier::Partial => "partial",
            SkillTier::Missing => "missing",
        }
    }

    /// 対応するスコア色段階（バッジの配色に使う）
    pub fn score_tier(&self) -> ScoreTier {
        match self {
            SkillTier::Strong => ScoreTier::Success,
            SkillTier::Partial => ScoreTier::Warning,
            SkillTier::Missing => ScoreTier::Destructive,
        }
    }
}
