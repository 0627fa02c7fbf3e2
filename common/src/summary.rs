//! 判定結果の整形モジュール
//!
//! 画面表示用の複数行テキストと、シェア用の短いテキストを作る。
//! シェア用テキストは生の文字列で、URLエンコードは`share`モジュールで行う。

use crate::classifier::Comment;
use crate::copy::DEFAULT_HASHTAGS;
use crate::types::ScoredResult;

/// 「もしかして」行
pub fn did_you_mean(scored: &ScoredResult, context_label: Option<&str>) -> String {
    let context = context_label.map(|c| format!("・{}", c)).unwrap_or_default();
    format!(
        "もしかして： {}（偏差値: {}{}）",
        scored.matched_name,
        scored.display_score(),
        context
    )
}

/// 画面表示用テキスト
///
/// 補正がある場合は末尾に括弧書きで列挙する。
pub fn format_display(scored: &ScoredResult, comment: &Comment, context_label: Option<&str>) -> String {
    let mut lines = vec![did_you_mean(scored, context_label), comment.text.to_string()];

    if !scored.modifiers.is_empty() {
        let applied: Vec<String> = scored
            .modifiers
            .iter()
            .map(|m| format!("{} {:+}", m.label, m.delta))
            .collect();
        lines.push(format!("（{}）", applied.join(", ")));
    }

    lines.join("\n")
}

/// シェア用テキスト（コメントは1行目のみ）
pub fn format_shareable(scored: &ScoredResult, comment: &Comment, context_label: Option<&str>) -> String {
    format_shareable_with_tags(scored, comment, context_label, DEFAULT_HASHTAGS)
}

/// ハッシュタグを指定してシェア用テキストを作る
pub fn format_shareable_with_tags<S: AsRef<str>>(
    scored: &ScoredResult,
    comment: &Comment,
    context_label: Option<&str>,
    hashtags: &[S],
) -> String {
    let context = context_label.map(|c| format!("・{}", c)).unwrap_or_default();
    let tags: Vec<String> = hashtags
        .iter()
        .map(|t| format!("#{}", t.as_ref().trim_start_matches('#')))
        .collect();

    let mut text = format!(
        "私の学歴は...【{}（偏差値{}{}）】でした！\n判定結果：「{}」",
        scored.matched_name,
        scored.display_score(),
        context,
        comment.headline()
    );
    if !tags.is_empty() {
        text.push('\n');
        text.push_str(&tags.join(" "));
    }
    text
}
