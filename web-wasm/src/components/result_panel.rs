//! 判定結果コンポーネント

use crate::app::JudgeView;
use crate::components::share_button::ShareButton;
use gakureki_common::{copy, Judgement};
use leptos::prelude::*;

#[component]
pub fn ResultPanel(result: ReadSignal<JudgeView>) -> impl IntoView {
    move || match result.get() {
        JudgeView::Idle => ().into_any(),
        JudgeView::EmptyInput => view! {
            <p class="text-muted">{copy::EMPTY_INPUT}</p>
        }
        .into_any(),
        JudgeView::NoMatch(query) => view! {
            <div class="alert alert-warning">{copy::no_match(&query)}</div>
        }
        .into_any(),
        JudgeView::Unavailable(reason) => view! {
            <div class="alert alert-error">
                <p>{copy::CATALOG_UNAVAILABLE}</p>
                <small>{reason}</small>
            </div>
        }
        .into_any(),
        JudgeView::Matched(judgement) => view! { <MatchedResult judgement=judgement /> }.into_any(),
    }
}

#[component]
fn MatchedResult(judgement: Judgement) -> impl IntoView {
    let context = judgement
        .field
        .map(|f| format!("・{}", f.label()))
        .unwrap_or_default();
    let modifiers = judgement
        .modifiers
        .iter()
        .map(|m| format!("{} {:+}", m.label, m.delta))
        .collect::<Vec<_>>()
        .join(", ");
    let comment_lines = judgement
        .comment
        .text
        .lines()
        .map(|line| view! { <p>{line}</p> })
        .collect_view();

    view! {
        <div class="result">
            <div class="alert alert-success">
                "もしかして： "
                <strong>{judgement.matched_name.clone()}</strong>
                {format!("（偏差値: {}{}）", judgement.score, context)}
            </div>

            <h3 class="comment">{comment_lines}</h3>

            {(!modifiers.is_empty()).then(|| view! {
                <p class="modifiers">{format!("（{}）", modifiers)}</p>
            })}

            <ShareButton share_url=judgement.share_url.clone() />

            <hr />
            <div class="alert alert-info">{copy::AFFILIATE}</div>
        </div>
    }
}
