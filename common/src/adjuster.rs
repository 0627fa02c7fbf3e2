//! 偏差値補正モジュール
//!
//! 固定の加点ルールを決まった順序で評価する。減点ルールはない。

use crate::error::{Error, Result};
use crate::types::{AdjustmentContext, Category, FieldOfStudy, Modifier, ScoredResult};
use log::debug;
use serde::{Deserialize, Serialize};

/// 国公立ボーナス
pub const PUBLIC_BONUS: f64 = 5.0;
/// 理系ボーナス
pub const SCIENCE_BONUS: f64 = 5.0;

pub const PUBLIC_BONUS_LABEL: &str = "public-institution bonus";
pub const SCIENCE_BONUS_LABEL: &str = "science-track bonus";

/// 加点ルールの設定値（各ボーナスは0以上の有限値）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawScoreRules")]
pub struct ScoreRules {
    public_bonus: f64,
    science_bonus: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawScoreRules {
    public_bonus: f64,
    science_bonus: f64,
}

impl TryFrom<RawScoreRules> for ScoreRules {
    type Error = Error;

    fn try_from(raw: RawScoreRules) -> Result<Self> {
        Self::new(raw.public_bonus, raw.science_bonus)
    }
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            public_bonus: PUBLIC_BONUS,
            science_bonus: SCIENCE_BONUS,
        }
    }
}

impl ScoreRules {
    /// 負の値・非有限値は`Error::InvalidRule`
    pub fn new(public_bonus: f64, science_bonus: f64) -> Result<Self> {
        check_bonus(PUBLIC_BONUS_LABEL, public_bonus)?;
        check_bonus(SCIENCE_BONUS_LABEL, science_bonus)?;
        Ok(Self {
            public_bonus,
            science_bonus,
        })
    }

    pub fn public_bonus(&self) -> f64 {
        self.public_bonus
    }

    pub fn science_bonus(&self) -> f64 {
        self.science_bonus
    }

    /// ルールを順に評価して補正後の偏差値を求める
    ///
    /// 1. 国公立なら`public_bonus`
    /// 2. 理系なら`science_bonus`
    pub fn apply(&self, matched_name: &str, base_score: f64, context: AdjustmentContext) -> ScoredResult {
        let mut modifiers = Vec::new();

        if context.category == Category::Public {
            modifiers.push(Modifier {
                label: PUBLIC_BONUS_LABEL.to_string(),
                delta: self.public_bonus,
            });
        }

        if context.field == Some(FieldOfStudy::Science) {
            modifiers.push(Modifier {
                label: SCIENCE_BONUS_LABEL.to_string(),
                delta: self.science_bonus,
            });
        }

        let final_score = base_score + modifiers.iter().map(|m| m.delta).sum::<f64>();
        debug!(
            "補正: {} {} → {}（{}件）",
            matched_name,
            base_score,
            final_score,
            modifiers.len()
        );

        ScoredResult {
            matched_name: matched_name.to_string(),
            final_score,
            modifiers,
        }
    }
}

fn check_bonus(label: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidRule(format!("{} は0以上の数値で指定してください: {}", label, value)))
    }
}

/// 既定のボーナス値で補正する
pub fn adjust(
    matched_name: &str,
    base_score: f64,
    category: Category,
    field: Option<FieldOfStudy>,
) -> ScoredResult {
    ScoreRules::default().apply(matched_name, base_score, AdjustmentContext { category, field })
}
