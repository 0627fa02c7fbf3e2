//! 学歴判定機 共通ライブラリ
//!
//! CLIとWeb(WASM)で共有される判定ロジック

pub mod types;
pub mod error;
pub mod catalog;
pub mod resolver;
pub mod adjuster;
pub mod classifier;
pub mod summary;
pub mod share;
pub mod copy;
pub mod pipeline;

pub use types::{AdjustmentContext, CatalogRecord, Category, FieldOfStudy, MatchResult, Modifier, ScoredResult};
pub use error::{Error, Result};
pub use catalog::{Catalog, ColumnMap};
pub use resolver::{rank, resolve, similarity, MATCH_THRESHOLD};
pub use adjuster::{adjust, ScoreRules, PUBLIC_BONUS, SCIENCE_BONUS};
pub use classifier::{classify, Band, Comment};
pub use summary::{format_display, format_shareable};
pub use share::tweet_intent_url;
pub use pipeline::{judge, Judge, Judgement, Outcome};
