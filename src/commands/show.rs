//! shelf show コマンド
//!
//! 書籍詳細オーバーレイの内容を表示する。

use crate::cli::GlobalArgs;
use crate::controller::{CatalogController, Event};
use crate::error::ShelfError;
use crate::page::{BookDetail, Overlay};
use clap::Parser;
use owo_colors::OwoColorize;
use std::rc::Rc;

#[derive(Debug, Parser)]
pub struct Args {
    /// Book id
    pub id: String,
}

pub fn run(global: &GlobalArgs, args: Args) -> Result<(), String> {
    let (_, catalog) = super::load(global)?;
    let mut controller = CatalogController::initialize(Rc::new(catalog), None);

    controller.dispatch(Event::ListItemsClick(Some(args.id.clone())));

    let view = controller.view();
    match view.active.as_ref() {
        Some(detail) if view.is_open(Overlay::BookDetail) => {
            print!("{}", format_detail(detail));
            let catalog = controller.catalog();
            if let Some(book) = catalog.find_book(&detail.id) {
                let genres: Vec<&str> = book
                    .genres
                    .iter()
                    .map(|g| catalog.genre_name(g).unwrap_or(g.as_str()))
                    .collect();
                if !genres.is_empty() {
                    println!("Genres: {}", genres.join(", "));
                }
            }
            Ok(())
        }
        _ => Err(ShelfError::BookNotFound(args.id).to_string()),
    }
}

fn format_detail(detail: &BookDetail) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", detail.title.bold()));
    out.push_str(&format!("{}\n", detail.subtitle));
    out.push_str(&format!("Image: {}\n", detail.image));
    if !detail.description.is_empty() {
        out.push('\n');
        out.push_str(&format!("{}\n", detail.description));
    }
    out
}
