//! 判定パイプライン
//!
//! 入力 → 曖昧検索 → カタログ参照 → 偏差値補正 → コメント判定 → 整形
//!
//! カタログは呼び出し側で一度だけ構築し、参照で渡す。

use crate::adjuster::ScoreRules;
use crate::catalog::Catalog;
use crate::classifier::{classify, Comment};
use crate::copy::DEFAULT_HASHTAGS;
use crate::error::{Error, Result};
use crate::resolver::{resolve, MATCH_THRESHOLD};
use crate::share::tweet_intent_url;
use crate::summary::{format_display, format_shareable_with_tags};
use crate::types::{AdjustmentContext, Category, FieldOfStudy, MatchResult, Modifier};
use log::info;
use serde::Serialize;

/// 判定結果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Judgement {
    pub matched_name: String,
    pub confidence: u8,
    pub base_score: f64,
    pub final_score: f64,
    /// 表示用（切り捨て）
    pub score: i64,
    pub category: Category,
    pub field: Option<FieldOfStudy>,
    pub modifiers: Vec<Modifier>,
    pub comment: Comment,
    pub display_text: String,
    pub share_text: String,
    pub share_url: String,
}

/// 1リクエスト分の結果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Outcome {
    Matched(Judgement),
    /// 一致度が閾値未満
    NoUsableMatch { query: String, best: MatchResult },
}

impl Outcome {
    pub fn judgement(&self) -> Option<&Judgement> {
        match self {
            Outcome::Matched(judgement) => Some(judgement),
            Outcome::NoUsableMatch { .. } => None,
        }
    }
}

/// カタログを参照して判定する
#[derive(Debug, Clone)]
pub struct Judge<'a> {
    catalog: &'a Catalog,
    rules: ScoreRules,
    threshold: u8,
    hashtags: Vec<String>,
}

impl<'a> Judge<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            rules: ScoreRules::default(),
            threshold: MATCH_THRESHOLD,
            hashtags: DEFAULT_HASHTAGS.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn with_rules(mut self, rules: ScoreRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold.min(100);
        self
    }

    pub fn with_hashtags(mut self, hashtags: Vec<String>) -> Self {
        self.hashtags = hashtags;
        self
    }

    /// 大学名を判定する
    ///
    /// 空入力は`Error::EmptyInput`。一致度不足はエラーではなく
    /// `Outcome::NoUsableMatch`を返す。
    pub fn judge(&self, query: &str, field: Option<FieldOfStudy>) -> Result<Outcome> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::EmptyInput);
        }

        let best = resolve(query, self.catalog.names())
            .ok_or_else(|| Error::CatalogUnavailable("カタログが空です".into()))?;

        if best.confidence < self.threshold {
            info!("照合失敗: 「{}」（最良候補 {} / 一致度{}）", query, best.matched_name, best.confidence);
            return Ok(Outcome::NoUsableMatch {
                query: query.to_string(),
                best,
            });
        }

        let record = self
            .catalog
            .get(&best.matched_name)
            .ok_or_else(|| Error::CatalogUnavailable(format!("{} がカタログにありません", best.matched_name)))?;

        let context = AdjustmentContext {
            category: record.category,
            field,
        };
        let scored = self.rules.apply(&record.name, record.base_score, context);
        let comment = classify(scored.final_score, &scored.matched_name);

        let context_label = field.map(|f| f.label());
        let display_text = format_display(&scored, &comment, context_label);
        let share_text = format_shareable_with_tags(&scored, &comment, context_label, &self.hashtags);
        let share_url = tweet_intent_url(&share_text);

        Ok(Outcome::Matched(Judgement {
            matched_name: scored.matched_name.clone(),
            confidence: best.confidence,
            base_score: record.base_score,
            final_score: scored.final_score,
            score: scored.display_score(),
            category: record.category,
            field,
            modifiers: scored.modifiers,
            comment,
            display_text,
            share_text,
            share_url,
        }))
    }
}

/// 既定設定で判定する
pub fn judge(catalog: &Catalog, query: &str, field: Option<FieldOfStudy>) -> Result<Outcome> {
    Judge::new(catalog).judge(query, field)
}
