//! カタログ読み込みテスト
//!
//! ファイル形式ごとの読み込みと、読み込めない場合のエラーを検証

use gakureki_common::{Category, Error};
use gakureki_hantei::catalog_loader::load_catalog;
use gakureki_hantei::error::GakurekiError;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないファイルはCatalogUnavailable
#[test]
fn test_missing_file_is_unavailable() {
    let result = load_catalog(Path::new("/nonexistent/university_data_dummy.csv"));
    let err = result.unwrap_err();

    assert!(matches!(err, GakurekiError::Common(Error::CatalogUnavailable(_))));
    assert!(format!("{}", err).contains("データが読み込めていません"));
}

/// CSVファイルの読み込み
#[test]
fn test_load_csv_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("univ.csv");
    std::fs::write(&path, "大学名,偏差値,区分\n京都大学,70,国立\n同志社大学,60,私立\n").unwrap();

    let catalog = load_catalog(&path).expect("読み込み失敗");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("京都大学").unwrap().category, Category::Public);
}

/// 拡張子なしはCSVとして扱う
#[test]
fn test_load_without_extension() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catalog");
    std::fs::write(&path, "University,Deviation\nA大学,50\n").unwrap();

    let catalog = load_catalog(&path).expect("読み込み失敗");
    assert_eq!(catalog.names(), &["A大学".to_string()]);
}

/// JSONファイルの読み込み
#[test]
fn test_load_json_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("univ.json");
    std::fs::write(
        &path,
        r#"[{ "name": "Acme Tech", "baseScore": 58, "category": "private" }]"#,
    )
    .unwrap();

    let catalog = load_catalog(&path).expect("読み込み失敗");
    assert_eq!(catalog.get("Acme Tech").unwrap().base_score, 58.0);
}

/// ヘッダーのみのCSVはCatalogUnavailable
#[test]
fn test_header_only_csv() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "University,Deviation,Category\n").unwrap();

    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, GakurekiError::Common(Error::CatalogUnavailable(_))));
}

/// 不正な行は行番号つきのInvalidCatalog
#[test]
fn test_invalid_row_reports_line() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.csv");
    std::fs::write(&path, "University,Deviation\nA大学,50\nB大学,abc\n").unwrap();

    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(
        err,
        GakurekiError::Common(Error::InvalidCatalog { line: 3, .. })
    ));
}

/// 壊れたExcelファイルはExcelエラー
#[test]
fn test_broken_excel() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.xlsx");
    std::fs::write(&path, "this is not a zip").unwrap();

    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, GakurekiError::Excel(_)));
}

/// 同梱のダミーデータが読み込めること
#[test]
fn test_bundled_catalog() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("university_data_dummy.csv");
    let catalog = load_catalog(&path).expect("同梱データの読み込み失敗");

    assert!(catalog.len() >= 20);
    assert!(catalog.get("東京大学").is_some());
    assert!(catalog.get("帝京平成大学").is_some());
}

/// 重複エラーはファイル上の行番号を示す
#[test]
fn test_duplicate_line_in_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("dup.csv");
    std::fs::write(&path, "University,Deviation\nA大学,50\n\nA大学,51\n").unwrap();

    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(
        err,
        GakurekiError::Common(Error::InvalidCatalog { line: 4, .. })
    ));
}
