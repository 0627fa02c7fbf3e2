//! 曖昧検索モジュール
//!
//! 入力された大学名に最も近いカタログ上の大学名を探す。
//! 語順に依存しない重み付き類似度（挿入・削除のみの編集距離、LCSベース）を使う。

use crate::types::MatchResult;
use log::debug;
use regex::Regex;

/// この一致度未満は「見つからない」扱い
pub const MATCH_THRESHOLD: u8 = 60;

/// 語順入れ替えスコアの重み
const TOKEN_SCALE: f64 = 0.95;
/// 部分一致を使い始める長さ比
const PARTIAL_MIN_LEN_RATIO: f64 = 1.5;
/// 長さ比がこれを超えたら部分一致をさらに割り引く
const PARTIAL_WIDE_LEN_RATIO: f64 = 8.0;

/// 照合用に正規化（小文字化・記号除去・空白の圧縮）
pub fn preprocess(text: &str) -> String {
    lazy_static::lazy_static! {
        static ref NON_WORD_RE: Regex = Regex::new(r"[^\p{L}\p{N}]+").unwrap();
    }

    NON_WORD_RE
        .replace_all(&text.to_lowercase(), " ")
        .trim()
        .to_string()
}

/// 挿入・削除のみの編集距離で正規化した類似度 (0.0-1.0)
///
/// `2 × 最長共通部分列 / (長さの和)`。置換は削除+挿入の2手と数える。
fn indel_ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    // LCS長を1行ずつ更新
    let mut prev = vec![0usize; b.len() + 1];
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            row[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(row[j])
            };
        }
        std::mem::swap(&mut prev, &mut row);
    }

    2.0 * prev[b.len()] as f64 / total as f64
}

fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    indel_ratio(&a, &b)
}

/// 空白区切りのトークンを並べ替えて連結
fn sort_tokens(text: &str) -> String {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// 短い方を長い方の同じ長さの窓に当てた最大類似度
fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    if short.is_empty() {
        return 0.0;
    }

    let mut best: f64 = 0.0;
    for window in long.windows(short.len()) {
        best = best.max(indel_ratio(short, window));
        if best >= 1.0 {
            break;
        }
    }
    best
}

/// 2つの文字列の一致度 (0-100)
pub fn similarity(query: &str, candidate: &str) -> u8 {
    if query == candidate {
        return 100;
    }

    let a = preprocess(query);
    let b = preprocess(candidate);
    let (len_a, len_b) = (a.chars().count(), b.chars().count());
    if len_a == 0 || len_b == 0 {
        return 0;
    }

    let sorted_a = sort_tokens(&a);
    let sorted_b = sort_tokens(&b);

    let mut best = ratio(&a, &b).max(ratio(&sorted_a, &sorted_b) * TOKEN_SCALE);

    let len_ratio = len_a.max(len_b) as f64 / len_a.min(len_b) as f64;
    if len_ratio >= PARTIAL_MIN_LEN_RATIO {
        let scale = if len_ratio >= PARTIAL_WIDE_LEN_RATIO { 0.6 } else { 0.9 };
        best = best
            .max(partial_ratio(&a, &b) * scale)
            .max(partial_ratio(&sorted_a, &sorted_b) * TOKEN_SCALE * scale);
    }

    (best * 100.0).round().clamp(0.0, 100.0) as u8
}

/// 最も一致度の高い候補を返す（同点は先に出現した方）
///
/// 候補が空のときのみ`None`。一致度が低くても必ず1件返す。
pub fn resolve<S: AsRef<str>>(query: &str, names: &[S]) -> Option<MatchResult> {
    let mut best: Option<(usize, u8)> = None;

    for (i, name) in names.iter().enumerate() {
        let score = similarity(query, name.as_ref());
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((i, score));
        }
        if score == 100 {
            break;
        }
    }

    best.map(|(i, confidence)| {
        let matched_name = names[i].as_ref().to_string();
        debug!("照合: 「{}」→「{}」（一致度{}）", query, matched_name, confidence);
        MatchResult {
            matched_name,
            confidence,
        }
    })
}

/// 一致度の高い順に上位`limit`件を返す
pub fn rank<S: AsRef<str>>(query: &str, names: &[S], limit: usize) -> Vec<MatchResult> {
    let mut scored: Vec<MatchResult> = names
        .iter()
        .map(|name| MatchResult {
            matched_name: name.as_ref().to_string(),
            confidence: similarity(query, name.as_ref()),
        })
        .collect();

    // 安定ソートなので同点は出現順のまま
    scored.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    scored.truncate(limit);
    scored
}
