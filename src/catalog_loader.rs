//! カタログファイル読み込み
//!
//! 拡張子でCSV / JSON / Excel(xlsx, xls, ods)を切り替える。

use crate::error::{GakurekiError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use gakureki_common::{Catalog, ColumnMap};
use log::info;
use std::path::Path;

/// カタログを読み込む（ファイルがなければCatalogUnavailable）
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(gakureki_common::Error::CatalogUnavailable(format!(
            "'{}' が見つかりません",
            path.display()
        ))
        .into());
    }

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let catalog = match ext.as_str() {
        "xlsx" | "xlsm" | "xls" | "ods" => load_excel(path)?,
        "json" => Catalog::from_json(&read_text(path)?)?,
        _ => Catalog::from_csv_str(&read_text(path)?)?,
    };

    info!("カタログ: {} ({}件)", path.display(), catalog.len());
    Ok(catalog)
}

/// 読めないファイルはCatalogUnavailable扱い
fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        gakureki_common::Error::CatalogUnavailable(format!("{}: {}", path.display(), e)).into()
    })
}

/// Excelの先頭シートから読み込み（1行目はヘッダー）
fn load_excel(path: &Path) -> Result<Catalog> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| GakurekiError::Excel(format!("シートがありません: {}", path.display())))??;

    let mut rows = range.rows();
    let header: Vec<String> = match rows.next() {
        Some(row) => row.iter().map(cell_to_string).collect(),
        None => {
            return Err(gakureki_common::Error::CatalogUnavailable(format!(
                "'{}' が空です",
                path.display()
            ))
            .into())
        }
    };
    let columns = ColumnMap::from_header(&header)?;

    let mut records = Vec::new();
    for (i, row) in rows.enumerate() {
        let fields: Vec<String> = row.iter().map(cell_to_string).collect();
        // ヘッダーが1行目なのでデータは2行目から
        let line = i + 2;
        if let Some(record) = columns.record(line, &fields)? {
            records.push((line, record));
        }
    }

    Ok(Catalog::from_numbered_records(records)?)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::String("東京大学".into())), "東京大学");
        assert_eq!(cell_to_string(&Data::Float(72.5)), "72.5");
    }
}
