//! 判定パイプラインの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - CatalogRecord: カタログの1行（大学名・偏差値・設置区分）
//! - MatchResult: 曖昧検索の結果
//! - ScoredResult: 補正後の偏差値と適用された補正

use serde::{Deserialize, Serialize};
use std::fmt;

/// 設置区分
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// 国公立
    Public,
    /// 私立
    #[default]
    Private,
}

impl Category {
    /// 表示用ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Category::Public => "国公立",
            Category::Private => "私立",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "public" | "国立" | "公立" | "国公立" => Ok(Category::Public),
            "private" | "私立" => Ok(Category::Private),
            _ => Err(format!("不明な区分: {}（public/private）", s)),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 文理区分（ユーザー入力）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldOfStudy {
    /// 文系
    Humanities,
    /// 理系
    Science,
}

impl FieldOfStudy {
    pub fn label(&self) -> &'static str {
        match self {
            FieldOfStudy::Humanities => "文系",
            FieldOfStudy::Science => "理系",
        }
    }
}

impl std::str::FromStr for FieldOfStudy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "humanities" | "h" | "文系" => Ok(FieldOfStudy::Humanities),
            "science" | "s" | "理系" => Ok(FieldOfStudy::Science),
            _ => Err(format!("Unknown field: {}. Use humanities or science", s)),
        }
    }
}

impl fmt::Display for FieldOfStudy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// カタログの1レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    pub name: String,
    pub base_score: f64,
    #[serde(default)]
    pub category: Category,
}

/// 曖昧検索の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub matched_name: String,
    /// 一致度 (0-100)
    pub confidence: u8,
}

/// 補正の判定材料
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjustmentContext {
    pub category: Category,
    pub field: Option<FieldOfStudy>,
}

/// 適用された補正
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modifier {
    pub label: String,
    pub delta: f64,
}

/// 補正後の結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult {
    pub matched_name: String,
    pub final_score: f64,
    /// ルール評価順
    pub modifiers: Vec<Modifier>,
}

impl ScoredResult {
    /// 表示用の整数偏差値（切り捨て）
    pub fn display_score(&self) -> i64 {
        self.final_score.floor() as i64
    }
}
