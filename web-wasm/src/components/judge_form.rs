//! 入力フォームコンポーネント

use gakureki_common::{copy, FieldOfStudy};
use leptos::prelude::*;

#[component]
pub fn JudgeForm<FJ>(
    query: ReadSignal<String>,
    set_query: WriteSignal<String>,
    set_field: WriteSignal<Option<FieldOfStudy>>,
    disabled: Signal<bool>,
    on_judge: FJ,
) -> impl IntoView
where
    FJ: Fn(()) + 'static + Clone + Send,
{
    view! {
        <form
            class="judge-form"
            on:submit={
                let on_judge = on_judge.clone();
                move |ev| {
                    ev.prevent_default();
                    on_judge(());
                }
            }
        >
            <div class="form-group">
                <label for="university">"大学名"</label>
                <input
                    type="text"
                    id="university"
                    placeholder=copy::INPUT_PLACEHOLDER
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        set_query.set(event_target_value(&ev));
                    }
                />
            </div>

            <div class="form-group">
                <label for="field">"文理（任意）"</label>
                <select
                    id="field"
                    on:change=move |ev| {
                        set_field.set(event_target_value(&ev).parse::<FieldOfStudy>().ok());
                    }
                >
                    <option value="" selected=true>"選択しない"</option>
                    <option value="humanities">"文系"</option>
                    <option value="science">"理系（+5）"</option>
                </select>
            </div>

            <button type="submit" class="btn btn-primary" disabled=move || disabled.get()>
                {copy::JUDGE_BUTTON}
            </button>
        </form>
    }
}
