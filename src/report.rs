//! 判定結果・カタログの表示

use gakureki_common::copy;
use gakureki_common::{Catalog, Judgement, MatchResult, Outcome};

/// 判定結果を表示用テキストにする
pub fn render_outcome(outcome: &Outcome, with_share: bool) -> String {
    match outcome {
        Outcome::Matched(judgement) => render_judgement(judgement, with_share),
        Outcome::NoUsableMatch { query, best } => {
            log::debug!("最良候補: {}（一致度{}）", best.matched_name, best.confidence);
            format!("⚠ {}", copy::no_match(query))
        }
    }
}

fn render_judgement(judgement: &Judgement, with_share: bool) -> String {
    let mut out = String::new();
    out.push_str("✔ ");
    out.push_str(&judgement.display_text);
    out.push_str("\n\n---\n");
    out.push_str(copy::AFFILIATE);

    if with_share {
        out.push_str("\n\n🔗 ");
        out.push_str(copy::SHARE_LABEL);
        out.push_str(": ");
        out.push_str(&judgement.share_url);
    }
    out
}

/// カタログ一覧
pub fn render_catalog(catalog: &Catalog, limit: usize) -> String {
    let mut lines = vec![format!("カタログ: {}件", catalog.len())];
    for record in catalog.records().iter().take(limit) {
        lines.push(format!(
            "  {:<20} {:>5.1}  {}",
            record.name, record.base_score, record.category
        ));
    }
    if catalog.len() > limit {
        lines.push(format!("  ...ほか{}件", catalog.len() - limit));
    }
    lines.join("\n")
}

/// 候補一覧（一致度順）
pub fn render_candidates(catalog: &Catalog, candidates: &[MatchResult]) -> String {
    let mut lines = vec!["一致度  大学名  偏差値".to_string()];
    for candidate in candidates {
        let score = catalog
            .get(&candidate.matched_name)
            .map(|r| format!("{:.1}", r.base_score))
            .unwrap_or_default();
        lines.push(format!(
            "  {:>3}  {}  {}",
            candidate.confidence, candidate.matched_name, score
        ));
    }
    lines.join("\n")
}
