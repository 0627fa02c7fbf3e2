//! 画面・CLIで共有する固定文言

pub const APP_TITLE: &str = "🎓 学歴だけで人を判断するサイト";
pub const INTRO: &str =
    "あなたの出身大学（または志望校）を入力してください。偏差値に基づいて、忖度なしのコメントを返します。";
pub const INPUT_PLACEHOLDER: &str = "大学名を入力（例：京大、早稲田）";
pub const JUDGE_BUTTON: &str = "判定する";

pub const EMPTY_INPUT: &str = "大学名を入力してください。";
pub const CATALOG_UNAVAILABLE: &str = "データが読み込めていません。";

/// アフィリエイト枠
pub const AFFILIATE: &str =
    "💡 偏差値を上げたい？ なら、この参考書を買って勉強しろ。（ここにアフィリエイトリンクを貼る）";
pub const DISCLAIMER: &str =
    "※この偏差値はダミーデータに基づいています。ジョークサイトとしてお楽しみください。";

pub const SHARE_LABEL: &str = "Xでシェアする";
pub const DEFAULT_HASHTAGS: &[&str] = &["学歴判定機", "wakatte_tv"];

/// 照合できなかったときのメッセージ
pub fn no_match(query: &str) -> String {
    format!(
        "「{}」に近い大学が見つかりませんでした。もっと正確に入力して！",
        query
    )
}
