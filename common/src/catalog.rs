//! 大学カタログモジュール
//!
//! 大学名・偏差値・設置区分の参照テーブルを管理する。
//! 起動時に一度だけ読み込み、以降は読み取り専用で参照渡しする。

use crate::error::{Error, Result};
use crate::types::{CatalogRecord, Category};
use log::{info, warn};
use std::collections::HashMap;

/// 大学名カラムとして認識するヘッダー
const NAME_HEADERS: &[&str] = &["university", "name", "大学名", "大学"];
/// 偏差値カラムとして認識するヘッダー
const SCORE_HEADERS: &[&str] = &["deviation", "score", "basescore", "偏差値"];
/// 設置区分カラムとして認識するヘッダー
const CATEGORY_HEADERS: &[&str] = &["category", "区分", "設置区分"];

/// 読み取り専用の大学カタログ
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<CatalogRecord>,
    /// 大学名 → recordsの添字
    index: HashMap<String, usize>,
    /// 照合用の大学名一覧（読み込み順）
    names: Vec<String>,
}

impl Catalog {
    /// レコード列から構築（大学名の重複・空カタログはエラー）
    ///
    /// 重複エラーの行番号はレコードの位置（1始まり）。
    pub fn from_records(records: Vec<CatalogRecord>) -> Result<Self> {
        Self::from_numbered_records(
            records
                .into_iter()
                .enumerate()
                .map(|(i, record)| (i + 1, record))
                .collect(),
        )
    }

    /// 元データの行番号付きレコード列から構築
    pub fn from_numbered_records(rows: Vec<(usize, CatalogRecord)>) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::CatalogUnavailable("カタログが空です".into()));
        }

        let mut index = HashMap::with_capacity(rows.len());
        let mut names = Vec::with_capacity(rows.len());
        let mut records = Vec::with_capacity(rows.len());

        for (line, record) in rows {
            if index.insert(record.name.clone(), records.len()).is_some() {
                return Err(Error::invalid(
                    line,
                    format!("大学名が重複しています: {}", record.name),
                ));
            }
            names.push(record.name.clone());
            records.push(record);
        }

        info!("カタログ読み込み: {}件", records.len());

        Ok(Self {
            records,
            index,
            names,
        })
    }

    /// CSV文字列から読み込み（1行目はヘッダー）
    pub fn from_csv_str(content: &str) -> Result<Self> {
        let mut lines = content.lines().enumerate();

        let header = loop {
            match lines.next() {
                Some((_, line)) if line.trim().is_empty() => continue,
                Some((_, line)) => break parse_csv_line(line),
                None => return Err(Error::CatalogUnavailable("CSVが空です".into())),
            }
        };
        let columns = ColumnMap::from_header(&header)?;

        let mut rows = Vec::new();
        for (i, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            let fields = parse_csv_line(line);
            if let Some(record) = columns.record(i + 1, &fields)? {
                rows.push((i + 1, record));
            }
        }

        Self::from_numbered_records(rows)
    }

    /// JSON配列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<CatalogRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// 大学名で完全一致検索
    pub fn get(&self, name: &str) -> Option<&CatalogRecord> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    /// 照合用の大学名一覧
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// 全レコードを取得
    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// ヘッダーから求めたカラム位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    name: usize,
    score: usize,
    category: Option<usize>,
}

impl ColumnMap {
    /// ヘッダー行からカラム位置を決定
    pub fn from_header<S: AsRef<str>>(header: &[S]) -> Result<Self> {
        let find = |candidates: &[&str]| {
            header.iter().position(|h| {
                let h = h.as_ref().trim_start_matches('\u{feff}').trim().to_lowercase();
                candidates.contains(&h.as_str())
            })
        };

        let name = find(NAME_HEADERS)
            .ok_or_else(|| Error::invalid(1, "大学名のカラムがありません（University/大学名）"))?;
        let score = find(SCORE_HEADERS)
            .ok_or_else(|| Error::invalid(1, "偏差値のカラムがありません（Deviation/偏差値）"))?;
        let category = find(CATEGORY_HEADERS);

        if category.is_none() {
            warn!("区分カラムがないため、全て私立として扱います");
        }

        Ok(Self {
            name,
            score,
            category,
        })
    }

    /// 1行分のフィールドをレコードに変換（空行はNone）
    pub fn record<S: AsRef<str>>(&self, line: usize, fields: &[S]) -> Result<Option<CatalogRecord>> {
        let field = |i: usize| fields.get(i).map(|f| f.as_ref().trim()).unwrap_or("");

        if fields.iter().all(|f| f.as_ref().trim().is_empty()) {
            return Ok(None);
        }

        let name = field(self.name);
        if name.is_empty() {
            return Err(Error::invalid(line, "大学名が空です"));
        }

        let raw_score = field(self.score);
        let base_score: f64 = raw_score
            .parse()
            .map_err(|_| Error::invalid(line, format!("偏差値が数値ではありません: {}", raw_score)))?;
        if !base_score.is_finite() {
            return Err(Error::invalid(line, format!("偏差値が不正です: {}", raw_score)));
        }

        let category = match self.category.map(field) {
            Some(raw) if !raw.is_empty() => raw
                .parse::<Category>()
                .map_err(|e| Error::invalid(line, e))?,
            Some(_) => {
                warn!("{}行目: 区分が空のため私立として扱います（{}）", line, name);
                Category::Private
            }
            None => Category::Private,
        };

        Ok(Some(CatalogRecord {
            name: name.to_string(),
            base_score,
            category,
        }))
    }
}

/// CSV行をパース（ダブルクォート対応、`""`はクォート1文字）
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                field.push('"');
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field).trim().to_string()),
            _ => field.push(c),
        }
    }

    // 最後のフィールド
    fields.push(field.trim().to_string());
    fields
}
