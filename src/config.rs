use crate::error::{GakurekiError, Result};
use gakureki_common::copy::DEFAULT_HASHTAGS;
use gakureki_common::{ScoreRules, MATCH_THRESHOLD, PUBLIC_BONUS, SCIENCE_BONUS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// カタログ未指定時に探すファイル名
pub const DEFAULT_CATALOG_FILE: &str = "university_data_dummy.csv";
/// カタログパスを指定する環境変数
pub const CATALOG_ENV: &str = "GAKUREKI_CATALOG";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
    pub match_threshold: u8,
    pub public_bonus: f64,
    pub science_bonus: f64,
    pub hashtags: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            match_threshold: MATCH_THRESHOLD,
            public_bonus: PUBLIC_BONUS,
            science_bonus: SCIENCE_BONUS,
            hashtags: DEFAULT_HASHTAGS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config = Self::from_json(&content)?;
            log::debug!("設定読み込み: {}", config_path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// JSON文字列から読み込み（ボーナス値も検証する）
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(content)?;
        config.score_rules()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| GakurekiError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("gakureki").join("config.json"))
    }

    /// 加点ルール
    pub fn score_rules(&self) -> Result<ScoreRules> {
        ScoreRules::new(self.public_bonus, self.science_bonus)
            .map_err(|e| GakurekiError::Config(e.to_string()))
    }

    /// カタログのパスを決定
    ///
    /// 優先順: 引数 → 設定ファイル → 環境変数 → カレントの既定ファイル → 同梱データ
    pub fn resolve_catalog_path(&self, cli_path: Option<&std::path::Path>) -> PathBuf {
        if let Some(path) = cli_path {
            return path.to_path_buf();
        }
        if let Some(path) = &self.catalog_path {
            return path.clone();
        }
        if let Ok(path) = std::env::var(CATALOG_ENV) {
            if !path.is_empty() {
                return PathBuf::from(path);
            }
        }

        let local = PathBuf::from(DEFAULT_CATALOG_FILE);
        if local.exists() {
            return local;
        }
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("data")
            .join(DEFAULT_CATALOG_FILE)
    }

    pub fn set_catalog_path(&mut self, path: PathBuf) -> Result<()> {
        self.catalog_path = Some(path);
        self.save()
    }

    pub fn set_threshold(&mut self, threshold: u8) -> Result<()> {
        if threshold > 100 {
            return Err(GakurekiError::Config(format!(
                "閾値は0〜100で指定してください: {}",
                threshold
            )));
        }
        self.match_threshold = threshold;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = Config::default();
        assert_eq!(config.match_threshold, 60);
        assert_eq!(config.score_rules().unwrap(), ScoreRules::default());
        assert_eq!(config.hashtags, vec!["学歴判定機", "wakatte_tv"]);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "match_threshold": 70 }"#).unwrap();
        assert_eq!(config.match_threshold, 70);
        assert_eq!(config.public_bonus, 5.0);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_negative_bonus_rejected() {
        let err = Config::from_json(r#"{ "public_bonus": -20 }"#).unwrap_err();
        assert!(matches!(err, GakurekiError::Config(_)));

        let config = Config::from_json(r#"{ "science_bonus": 8 }"#).unwrap();
        assert_eq!(config.score_rules().unwrap().science_bonus(), 8.0);
    }

    #[test]
    fn test_cli_path_wins() {
        let config = Config {
            catalog_path: Some(PathBuf::from("from_config.csv")),
            ..Default::default()
        };
        let path = config.resolve_catalog_path(Some(std::path::Path::new("from_cli.csv")));
        assert_eq!(path, PathBuf::from("from_cli.csv"));

        let path = config.resolve_catalog_path(None);
        assert_eq!(path, PathBuf::from("from_config.csv"));
    }
}
