use thiserror::Error;

#[derive(Error, Debug)]
pub enum GakurekiError {
    #[error(transparent)]
    Common(#[from] gakureki_common::Error),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("Excel読み込みエラー: {0}")]
    Excel(String),

    #[error("対話入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl From<calamine::Error> for GakurekiError {
    fn from(e: calamine::Error) -> Self {
        GakurekiError::Excel(e.to_string())
    }
}

impl From<dialoguer::Error> for GakurekiError {
    fn from(e: dialoguer::Error) -> Self {
        GakurekiError::Prompt(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GakurekiError>;
