//! シェアリンク生成

/// X(Twitter)の投稿画面URL
pub const TWEET_INTENT_URL: &str = "https://twitter.com/intent/tweet";

/// シェア用テキストをパーセントエンコードして投稿画面URLを作る
pub fn tweet_intent_url(text: &str) -> String {
    format!("{}?text={}", TWEET_INTENT_URL, urlencoding::encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tweet_intent_url_roundtrip() {
        let text = "私の学歴は...【Acme Tech（偏差値58）】でした！\n#学歴判定機 #wakatte_tv";
        let url = tweet_intent_url(text);

        let encoded = url.strip_prefix("https://twitter.com/intent/tweet?text=").unwrap();
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('#'));
        assert!(!encoded.contains('\n'));

        let decoded = urlencoding::decode(encoded).unwrap();
        assert_eq!(decoded, text);
    }
}
