//! カタログブラウザ TUI
//!
//! 書籍一覧の表示・絞り込み・ページ送り・詳細表示を行う TUI。
//!
//! ## モジュール構成
//!
//! - `app`: Model/Msg/update（状態とキー入力）
//! - `form`: 検索フォーム・設定フォームの入力状態
//! - `view`: 画面描画
//! - `common`: 描画ユーティリティ

mod app;
mod common;
mod form;
mod view;

use crate::controller::CatalogController;
use app::{update, Model};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{self, stdout, Stdout};

/// TUI を実行
pub fn run(controller: CatalogController) -> io::Result<()> {
    // ターミナル設定
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut model = Model::new(controller);
    let result = event_loop(&mut terminal, &mut model);

    // ターミナルを復元
    terminal::disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

/// メインループ
fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    model: &mut Model,
) -> io::Result<()> {
    while !model.should_quit {
        terminal.draw(|f| view::view(f, model))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let Some(msg) = model.key_to_msg(key.code) {
                    update(model, msg);
                }
            }
        }
    }
    Ok(())
}
