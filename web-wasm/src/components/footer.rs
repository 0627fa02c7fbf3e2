use gakureki_common::copy;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <hr />
            <small class="caption">{copy::DISCLAIMER}</small>
        </footer>
    }
}
