use clap::{Parser, Subcommand};
use gakureki_common::FieldOfStudy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gakureki")]
#[command(about = "学歴だけで人を判断するツール（ジョーク）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 大学カタログ（CSV/JSON/Excel）
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 大学名を判定
    Judge {
        /// 大学名（例：京大、早稲田）
        #[arg(required = true)]
        name: String,

        /// 文理 (humanities/science)
        #[arg(short, long)]
        field: Option<FieldOfStudy>,

        /// JSONで出力
        #[arg(long)]
        json: bool,

        /// シェア用URLも表示
        #[arg(long)]
        share: bool,
    },

    /// 対話的に判定（空入力で終了）
    Interactive,

    /// カタログを表示
    List {
        /// 指定した名前に近い順に表示
        #[arg(short, long)]
        search: Option<String>,

        /// 表示件数
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// 設定を表示/編集
    Config {
        /// カタログファイルを設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// 一致度の閾値を設定 (0-100)
        #[arg(long)]
        set_threshold: Option<u8>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_judge() {
        let cli = Cli::parse_from(["gakureki", "judge", "早稲田", "--field", "science", "--json"]);
        match cli.command {
            Commands::Judge { name, field, json, share } => {
                assert_eq!(name, "早稲田");
                assert_eq!(field, Some(FieldOfStudy::Science));
                assert!(json);
                assert!(!share);
            }
            _ => panic!("judgeになるはず"),
        }
    }

    #[test]
    fn test_parse_global_catalog() {
        let cli = Cli::parse_from(["gakureki", "list", "--catalog", "univ.xlsx", "-v"]);
        assert_eq!(cli.catalog, Some(PathBuf::from("univ.xlsx")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_invalid_field() {
        let result = Cli::try_parse_from(["gakureki", "judge", "東大", "--field", "体育会系"]);
        assert!(result.is_err());
    }
}
