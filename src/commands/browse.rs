//! shelf browse コマンド
//!
//! 対話的なカタログブラウザを起動する。

use crate::cli::GlobalArgs;
use crate::config::ThemeSetting;
use crate::controller::{CatalogController, Event};
use crate::error::ShelfError;
use crate::page::Overlay;
use crate::theme::prefers_dark_scheme;
use crate::tui;
use clap::Parser;
use std::rc::Rc;

#[derive(Debug, Parser)]
pub struct Args {
    /// Initial theme (overrides the config file)
    #[arg(long, value_enum)]
    pub theme: Option<ThemeSetting>,

    /// Open a book's details on start
    #[arg(long, value_name = "ID")]
    pub book: Option<String>,

    /// Overlay to open on start (search, settings, book-detail)
    #[arg(long, value_name = "OVERLAY")]
    pub open: Option<String>,
}

pub fn run(global: &GlobalArgs, args: Args) -> Result<(), String> {
    let (config, catalog) = super::load(global)?;

    let theme = args.theme.unwrap_or(config.theme);
    let prefers_dark = theme.prefers_dark(prefers_dark_scheme);

    let mut controller = CatalogController::initialize(Rc::new(catalog), prefers_dark);
    prepare(&mut controller, &args).map_err(|e| e.to_string())?;

    tui::run(controller).map_err(|e| format!("Terminal error: {}", e))
}

/// 起動時の書籍詳細・オーバーレイを適用
///
/// 端末を切り替える前に失敗させる。
fn prepare(controller: &mut CatalogController, args: &Args) -> crate::error::Result<()> {
    if let Some(id) = &args.book {
        controller.dispatch(Event::ListItemsClick(Some(id.clone())));
        if !controller.view().is_open(Overlay::BookDetail) {
            return Err(ShelfError::BookNotFound(id.clone()));
        }
    }
    if let Some(name) = &args.open {
        controller.open_overlay(name)?;
    }
    Ok(())
}
