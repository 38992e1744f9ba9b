//! shelf options コマンド
//!
//! 検索フォームの著者・ジャンルセレクタの選択肢を表示する。

use crate::cli::GlobalArgs;
use crate::controller::CatalogController;
use crate::page::SelectOption;
use comfy_table::{presets::UTF8_FULL, Table};
use std::rc::Rc;

pub fn run(global: &GlobalArgs) -> Result<(), String> {
    let (_, catalog) = super::load(global)?;
    let controller = CatalogController::initialize(Rc::new(catalog), None);

    println!("Authors");
    println!("{}", options_table(&controller.view().search_authors));
    println!("Genres");
    println!("{}", options_table(&controller.view().search_genres));
    Ok(())
}

fn options_table(options: &[SelectOption]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Value", "Label"]);
    for option in options {
        table.add_row(vec![option.value.as_str(), option.label.as_str()]);
    }
    table
}
