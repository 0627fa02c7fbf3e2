//! 対話式判定モジュール

use crate::error::Result;
use crate::report::render_outcome;
use dialoguer::{Input, Select};
use gakureki_common::{copy, FieldOfStudy, Judge};

/// 文理の選択肢（先頭は未選択）
const FIELD_ITEMS: &[&str] = &["選択しない", "文系", "理系"];

fn field_from_index(index: usize) -> Option<FieldOfStudy> {
    match index {
        1 => Some(FieldOfStudy::Humanities),
        2 => Some(FieldOfStudy::Science),
        _ => None,
    }
}

/// 空入力まで判定を繰り返す
pub fn run_interactive(judge: &Judge) -> Result<()> {
    println!("{}", copy::APP_TITLE);
    println!("{}", copy::INTRO);
    println!("（空のままEnterで終了）\n");

    loop {
        let name: String = Input::new()
            .with_prompt(copy::INPUT_PLACEHOLDER)
            .allow_empty(true)
            .interact_text()?;

        if name.trim().is_empty() {
            break;
        }

        let selected = Select::new()
            .with_prompt("文理")
            .items(FIELD_ITEMS)
            .default(0)
            .interact()?;

        let outcome = judge.judge(&name, field_from_index(selected))?;
        println!("\n{}\n", render_outcome(&outcome, true));
    }

    println!("\n{}", copy::DISCLAIMER);
    Ok(())
}
