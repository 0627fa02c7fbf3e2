//! ヘッダーコンポーネント

use gakureki_common::copy;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>{copy::APP_TITLE}</h1>
            <p class="intro">{copy::INTRO}</p>
        </header>
    }
}
