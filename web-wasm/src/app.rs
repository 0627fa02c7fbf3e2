//! メインアプリケーションコンポーネント

use crate::components::{
    footer::Footer,
    header::Header,
    judge_form::JudgeForm,
    result_panel::ResultPanel,
};
use gakureki_common::{Catalog, Error, FieldOfStudy, Judge, Judgement, Outcome};
use leptos::prelude::*;

/// ビルド時に埋め込むダミーデータ
const CATALOG_CSV: &str = include_str!("../../data/university_data_dummy.csv");

/// 判定結果の表示状態
#[derive(Clone, Debug, Default)]
pub enum JudgeView {
    #[default]
    Idle,
    EmptyInput,
    NoMatch(String),
    Unavailable(String),
    Matched(Judgement),
}

impl JudgeView {
    /// カタログと入力から表示状態を決める
    pub fn from_request(catalog: &Result<Catalog, String>, query: &str, field: Option<FieldOfStudy>) -> Self {
        let catalog = match catalog {
            Ok(catalog) => catalog,
            Err(reason) => return JudgeView::Unavailable(reason.clone()),
        };

        match Judge::new(catalog).judge(query, field) {
            Ok(Outcome::Matched(judgement)) => JudgeView::Matched(judgement),
            Ok(Outcome::NoUsableMatch { query, .. }) => JudgeView::NoMatch(query),
            Err(Error::EmptyInput) => JudgeView::EmptyInput,
            Err(e) => JudgeView::Unavailable(e.to_string()),
        }
    }
}

fn load_catalog() -> Result<Catalog, String> {
    Catalog::from_csv_str(CATALOG_CSV).map_err(|e| {
        web_sys::console::error_1(&format!("カタログ読み込み失敗: {}", e).into());
        e.to_string()
    })
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // カタログは起動時に一度だけ構築
    let catalog = StoredValue::new(load_catalog());

    let (query, set_query) = signal(String::new());
    let (field, set_field) = signal(None::<FieldOfStudy>);
    let (result, set_result) = signal(JudgeView::Idle);

    let unavailable = Signal::derive(move || catalog.with_value(|c| c.is_err()));

    // 判定ハンドラ
    let on_judge = move |_| {
        let view = catalog.with_value(|c| {
            JudgeView::from_request(c, &query.get_untracked(), field.get_untracked())
        });
        set_result.set(view);
    };

    // カタログが読めない場合は最初からエラーを表示
    if let Some(reason) = catalog.with_value(|c| c.as_ref().err().cloned()) {
        set_result.set(JudgeView::Unavailable(reason));
    }

    view! {
        <div class="container">
            <Header />

            <JudgeForm
                query=query
                set_query=set_query
                set_field=set_field
                disabled=unavailable
                on_judge=on_judge
            />

            <ResultPanel result=result />

            <Footer />
        </div>
    }
}
