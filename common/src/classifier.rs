//! 辛口コメント判定モジュール
//!
//! 1. 特定の大学名に対する固定コメント（上から順に評価、最初の一致を採用）
//! 2. 補正後偏差値による階級判定（下限を含み上限を含まない区間）

use serde::{Deserialize, Serialize};

/// 大学名による特別扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverrideRule {
    /// 大学名に含まれていれば一致
    pub pattern: &'static str,
    pub text: &'static str,
}

impl OverrideRule {
    pub fn matches(&self, name: &str) -> bool {
        name.contains(self.pattern)
    }
}

/// 評価順に並んだ特別扱いルール
pub const OVERRIDES: &[OverrideRule] = &[
    OverrideRule {
        pattern: "帝京平成",
        text: "ここがすごい！帝京平成大学！...って言いたいだけだろ？",
    },
    OverrideRule {
        pattern: "日本体育",
        text: "筋肉は裏切らない。偏差値なんて気にするな。",
    },
];

/// 偏差値の階級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Band {
    Godlike,
    Elite,
    Upper,
    Average,
    Borderline,
    Bottom,
}

/// 下限の降順に並んだ階級表（最後の行は下限なし）
const BANDS: &[(f64, Band)] = &[
    (70.0, Band::Godlike),
    (65.0, Band::Elite),
    (60.0, Band::Upper),
    (55.0, Band::Average),
    (50.0, Band::Borderline),
    (f64::NEG_INFINITY, Band::Bottom),
];

impl Band {
    /// 偏差値から階級を求める（NaNは最下層）
    pub fn from_score(score: f64) -> Self {
        BANDS
            .iter()
            .find(|(lower, _)| score >= *lower)
            .map(|&(_, band)| band)
            .unwrap_or(Band::Bottom)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Band::Godlike => "godlike tier",
            Band::Elite => "elite tier",
            Band::Upper => "upper tier",
            Band::Average => "average tier",
            Band::Borderline => "borderline tier",
            Band::Bottom => "bottom tier",
        }
    }

    /// 見出し + 本文の2行コメント
    pub fn commentary(&self) -> &'static str {
        match self {
            Band::Godlike => "【神】\nあなたは日本の宝です。将来、納税で我々を養ってください。",
            Band::Elite => "【エリート】\nすごいですね。でも東大には勝てませんよ？",
            Band::Upper => "【上位層】\nまあまあ賢い。でも、世の中には上がいます。",
            Band::Average => "【凡人】\nTHE 普通。量産型大学生として日本を支えてください。",
            Band::Borderline => "【ギリギリ】\n日東駒専レベル。遊んでないで資格の一つでも取ったら？",
            Band::Bottom => {
                "【Fラン（仮）】\nwakatte.tvならマイクを向けられないレベルです。バイトリーダー目指して頑張れ。"
            }
        }
    }
}

/// 判定されたコメント
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// 特別扱いの場合はNone
    pub band: Option<Band>,
    pub text: &'static str,
}

impl Comment {
    /// 1行目（シェア用）
    pub fn headline(&self) -> &'static str {
        self.text.lines().next().unwrap_or(self.text)
    }
}

/// 補正後偏差値と大学名からコメントを決める
pub fn classify(final_score: f64, matched_name: &str) -> Comment {
    if let Some(rule) = OVERRIDES.iter().find(|rule| rule.matches(matched_name)) {
        return Comment {
            band: None,
            text: rule.text,
        };
    }

    let band = Band::from_score(final_score);
    Comment {
        band: Some(band),
        text: band.commentary(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_go_to_higher_band() {
        assert_eq!(Band::from_score(70.0), Band::Godlike);
        assert_eq!(Band::from_score(65.0), Band::Elite);
        assert_eq!(Band::from_score(60.0), Band::Upper);
        assert_eq!(Band::from_score(55.0), Band::Average);
        assert_eq!(Band::from_score(50.0), Band::Borderline);
    }

    #[test]
    fn test_just_below_boundaries() {
        assert_eq!(Band::from_score(69.999), Band::Elite);
        assert_eq!(Band::from_score(64.9), Band::Upper);
        assert_eq!(Band::from_score(59.5), Band::Average);
        assert_eq!(Band::from_score(54.99), Band::Borderline);
        assert_eq!(Band::from_score(49.99), Band::Bottom);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(Band::from_score(f64::INFINITY), Band::Godlike);
        assert_eq!(Band::from_score(1000.0), Band::Godlike);
        assert_eq!(Band::from_score(-5.0), Band::Bottom);
        assert_eq!(Band::from_score(f64::NEG_INFINITY), Band::Bottom);
        assert_eq!(Band::from_score(f64::NAN), Band::Bottom);
    }

    #[test]
    fn test_bands_partition_scores() {
        // 0.25刻みで全区間を走査し、階級が単調非増加であることを確認
        let mut prev = Band::from_score(100.0);
        let mut score = 100.0;
        while score > 0.0 {
            let band = Band::from_score(score);
            let idx = |b: Band| BANDS.iter().position(|(_, x)| *x == b).unwrap();
            assert!(idx(band) >= idx(prev));
            prev = band;
            score -= 0.25;
        }
        assert_eq!(prev, Band::Bottom);
    }

    #[test]
    fn test_band_labels() {
        assert_eq!(classify(58.0, "Acme Tech").band.unwrap().label(), "average tier");
        assert_eq!(classify(68.0, "Acme Tech").band.unwrap().label(), "elite tier");
    }

    #[test]
    fn test_override_ignores_score() {
        for score in [30.0, 58.0, 75.0] {
            let comment = classify(score, "帝京平成大学");
            assert_eq!(comment.band, None);
            assert_eq!(comment.text, OVERRIDES[0].text);
        }
    }

    #[test]
    fn test_override_order() {
        // 両方含む名前は先のルールが優先
        let comment = classify(40.0, "帝京平成日本体育大学");
        assert_eq!(comment.text, OVERRIDES[0].text);

        let comment = classify(40.0, "日本体育大学");
        assert_eq!(comment.text, OVERRIDES[1].text);
    }

    #[test]
    fn test_headline() {
        let comment = classify(72.0, "東京大学");
        assert_eq!(comment.headline(), "【神】");
        assert_eq!(classify(0.0, "帝京平成大学").headline(), OVERRIDES[0].text);
    }
}
