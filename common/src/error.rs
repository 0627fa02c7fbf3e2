//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// カタログが読み込めない（ファイルなし・空など）
    #[error("データが読み込めていません: {0}")]
    CatalogUnavailable(String),

    /// カタログの内容が不正
    #[error("カタログが不正です（{line}行目）: {reason}")]
    InvalidCatalog { line: usize, reason: String },

    #[error("大学名を入力してください。")]
    EmptyInput,

    /// 加点ルールの値が不正
    #[error("加点ルールが不正です: {0}")]
    InvalidRule(String),
}

impl Error {
    pub(crate) fn invalid(line: usize, reason: impl Into<String>) -> Self {
        Error::InvalidCatalog {
            line,
            reason: reason.into(),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
