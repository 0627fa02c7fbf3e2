//! 判定パイプラインの結合テスト
//!
//! 同梱のダミーデータに対して、照合から整形までを通して検証

use gakureki_common::classifier::OVERRIDES;
use gakureki_common::{Band, Catalog, FieldOfStudy, Judge, Outcome, ScoreRules, MATCH_THRESHOLD};
use gakureki_hantei::catalog_loader::load_catalog;
use std::path::Path;

fn bundled() -> Catalog {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("university_data_dummy.csv");
    load_catalog(&path).expect("同梱データの読み込み失敗")
}

/// 略称でも部分一致で照合できる
#[test]
fn test_abbreviation_resolves() {
    let catalog = bundled();
    let outcome = Judge::new(&catalog).judge("早稲田", None).unwrap();
    let judgement = outcome.judgement().expect("一致するはず");

    assert_eq!(judgement.matched_name, "早稲田大学");
    assert!(judgement.confidence >= MATCH_THRESHOLD);
    assert_eq!(judgement.score, 67);
    assert_eq!(judgement.comment.band, Some(Band::Elite));
}

/// 2文字の略称でも一致する
#[test]
fn test_short_abbreviation_resolves() {
    let catalog = bundled();
    let outcome = Judge::new(&catalog).judge("東大", None).unwrap();
    let judgement = outcome.judgement().expect("一致するはず");

    assert_eq!(judgement.matched_name, "東京大学");
    assert_eq!(judgement.confidence, 67);
    assert_eq!(judgement.score, 77);
}

/// 国公立ボーナスと理系ボーナス
#[test]
fn test_public_science_bonus() {
    let catalog = bundled();
    let outcome = Judge::new(&catalog)
        .judge("千葉大学", Some(FieldOfStudy::Science))
        .unwrap();
    let judgement = outcome.judgement().unwrap();

    assert_eq!(judgement.final_score, 70.0);
    assert_eq!(judgement.comment.band, Some(Band::Godlike));
    assert_eq!(judgement.modifiers.len(), 2);
    assert!(judgement.display_text.contains("（偏差値: 70・理系）"));
    assert!(judgement.display_text.contains("science-track bonus"));
}

/// 設定したボーナス値が使われる
#[test]
fn test_custom_rules() {
    let catalog = bundled();
    let rules = ScoreRules::new(0.0, 10.0).unwrap();
    let outcome = Judge::new(&catalog)
        .with_rules(rules)
        .judge("千葉大学", Some(FieldOfStudy::Science))
        .unwrap();

    assert_eq!(outcome.judgement().unwrap().final_score, 70.0);
}

/// 特定の大学は偏差値に関係なく固定コメント
#[test]
fn test_override_comment() {
    let catalog = bundled();
    let outcome = Judge::new(&catalog).judge("帝京平成", None).unwrap();
    let judgement = outcome.judgement().unwrap();

    assert_eq!(judgement.matched_name, "帝京平成大学");
    assert_eq!(judgement.comment.text, OVERRIDES[0].text);
    assert!(judgement.share_text.contains(OVERRIDES[0].text));
}

/// 無関係な入力は判定しない
#[test]
fn test_gibberish_is_no_match() {
    let catalog = bundled();
    let outcome = Judge::new(&catalog).judge("qwerty", None).unwrap();
    assert!(matches!(outcome, Outcome::NoUsableMatch { .. }));
}

/// シェアURLをデコードすると大学名と整数の偏差値が含まれる
#[test]
fn test_share_url_contains_name_and_score() {
    let catalog = bundled();
    let outcome = Judge::new(&catalog).judge("東京大学", None).unwrap();
    let judgement = outcome.judgement().unwrap();

    let encoded = judgement.share_url.split("text=").nth(1).unwrap();
    let decoded = urlencoding::decode(encoded).unwrap();
    assert!(decoded.contains("東京大学"));
    assert!(decoded.contains("偏差値77"));
    assert!(decoded.contains("#学歴判定機"));
}
