//! Xシェアボタン

use gakureki_common::copy;
use leptos::prelude::*;

const BADGE_URL: &str = "https://img.shields.io/badge/X-%E3%82%B7%E3%82%A7%E3%82%A2%E3%81%99%E3%82%8B-black?logo=x&style=for-the-badge";

#[component]
pub fn ShareButton(share_url: String) -> impl IntoView {
    view! {
        <a
            class="share-button"
            href=share_url
            target="_blank"
            rel="noopener noreferrer"
        >
            <img src=BADGE_URL alt=copy::SHARE_LABEL />
        </a>
    }
}
