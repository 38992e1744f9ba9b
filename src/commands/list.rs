//! shelf list コマンド
//!
//! 絞り込み条件を適用し、指定ページ数分の書籍を一覧表示する。

use crate::cli::GlobalArgs;
use crate::controller::{CatalogController, Event};
use crate::form::FormData;
use crate::output::ListSummary;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;
use std::rc::Rc;

#[derive(Debug, Parser)]
pub struct Args {
    /// Filter by title (case-insensitive substring)
    #[arg(long)]
    pub title: Option<String>,

    /// Filter by author id ("any" for all)
    #[arg(long)]
    pub author: Option<String>,

    /// Filter by genre id ("any" for all)
    #[arg(long)]
    pub genre: Option<String>,

    /// Number of pages to show
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only book ids
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

/// 一覧表示の 1 行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedBook {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
}

pub fn run(global: &GlobalArgs, args: Args) -> Result<(), String> {
    let (_, catalog) = super::load(global)?;
    let mut controller = CatalogController::initialize(Rc::new(catalog), None);

    // 1. 絞り込み
    let form = search_form(&args);
    if !form.is_empty() {
        controller.dispatch(Event::SearchSubmit(form));
    }

    // 2. ページ送り
    load_pages(&mut controller, args.pages);
    tracing::debug!(
        requested = args.pages,
        loaded = controller.page(),
        "list pages loaded"
    );

    // 3. 出力
    let books = listed_books(&controller);
    if args.json {
        print_json(&books)?;
    } else if args.simple {
        print_simple(&books);
    } else {
        print_table(&books);
        let summary = ListSummary::format(
            books.len(),
            controller.match_count(),
            controller.view().list_button.remaining,
        );
        println!("{} {}", summary.prefix, summary.message);
    }

    Ok(())
}

/// 指定されたオプションだけを検索フォームに入れる
fn search_form(args: &Args) -> FormData {
    let mut form = FormData::new();
    if let Some(title) = &args.title {
        form.set("title", title.as_str());
    }
    if let Some(author) = &args.author {
        form.set("author", author.as_str());
    }
    if let Some(genre) = &args.genre {
        form.set("genre", genre.as_str());
    }
    form
}

/// `pages` ページ目まで「さらに表示」を押す（残りがなくなれば打ち切り）
fn load_pages(controller: &mut CatalogController, pages: u32) {
    for _ in 1..pages {
        if controller.view().list_button.disabled {
            break;
        }
        controller.dispatch(Event::ListButton);
    }
}

/// 一覧に表示中の書籍から行を作る
fn listed_books(controller: &CatalogController) -> Vec<ListedBook> {
    let catalog = controller.catalog();
    controller
        .displayed()
        .into_iter()
        .filter_map(|id| catalog.find_book(id))
        .map(|book| ListedBook {
            id: book.id.clone(),
            title: book.title.clone(),
            author: catalog
                .author_name(&book.author)
                .unwrap_or(book.author.as_str())
                .to_string(),
            image: book.image.clone(),
        })
        .collect()
}

fn print_table(books: &[ListedBook]) {
    if books.is_empty() {
        println!("No results found. Your filters might be too narrow.");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Title", "Author"]);

    for book in books {
        table.add_row(vec![
            book.id.as_str(),
            book.title.as_str(),
            book.author.as_str(),
        ]);
    }

    println!("{table}");
}

fn print_json(books: &[ListedBook]) -> Result<(), String> {
    // 空の場合も [] を出力
    serde_json::to_string_pretty(books)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize books: {}", e))
}

fn print_simple(books: &[ListedBook]) {
    for book in books {
        println!("{}", book.id);
    }
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
