//! カタログコントローラ
//!
//! 絞り込み・ページ送りの状態を持ち、データセット・一覧表示・
//! フォーム操作（検索・テーマ・オーバーレイ）を仲介する。
//!
//! 状態は単一スレッドのイベントハンドラ内でのみ同期的に更新される。

use crate::catalog::Catalog;
use crate::element::PreviewElement;
use crate::error::Result;
use crate::filter::{filter_books, FilterCriteria};
use crate::form::FormData;
use crate::page::{select_options, BookDetail, Overlay, Page};
use crate::theme::{Theme, ThemeVars};
use std::rc::Rc;

// ============================================================================
// Event（画面からのイベント）
// ============================================================================

/// 画面のフックから届くイベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// ヘッダーの検索ボタン（`data-header-search`）
    HeaderSearch,
    /// ヘッダーの設定ボタン（`data-header-settings`）
    HeaderSettings,
    /// 検索キャンセル（`data-search-cancel`）
    SearchCancel,
    /// 設定キャンセル（`data-settings-cancel`）
    SettingsCancel,
    /// 書籍詳細を閉じる（`data-list-close`）
    ListClose,
    /// 検索フォーム送信（`data-search-form`）
    SearchSubmit(FormData),
    /// 設定フォーム送信（`data-settings-form`）
    SettingsSubmit(FormData),
    /// 「さらに表示」（`data-list-button`）
    ListButton,
    /// 一覧コンテナ内のクリック（押された要素の `data-preview`）
    ListItemsClick(Option<String>),
}

// ============================================================================
// CatalogController
// ============================================================================

/// カタログコントローラ
#[derive(Debug)]
pub struct CatalogController {
    catalog: Rc<Catalog>,
    /// 現在のページ（1 始まり）
    page: usize,
    /// 絞り込み結果（データセット内のインデックス、元の順序）
    matches: Vec<usize>,
    view: Page,
}

impl CatalogController {
    /// 初期化
    ///
    /// 絞り込みなしの 1 ページ目を描画し、ジャンル・著者セレクタを埋め、
    /// 実行環境のダークモード設定から初期テーマを適用する。
    pub fn initialize(catalog: Rc<Catalog>, prefers_dark: Option<bool>) -> Self {
        let matches = filter_books(catalog.books(), &FilterCriteria::any());
        let mut controller = Self {
            catalog,
            page: 1,
            matches,
            view: Page::new(),
        };

        controller.render_first_page();
        controller.populate_filters();

        let theme = Theme::from_preference(prefers_dark);
        controller.view.settings_theme = theme;
        controller.update_theme(theme.as_str());

        tracing::debug!(
            books = controller.catalog.books().len(),
            page_size = controller.catalog.page_size(),
            theme = %theme,
            "catalog controller initialized"
        );
        controller
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn view(&self) -> &Page {
        &self.view
    }

    /// 絞り込み結果
    #[cfg(test)]
    pub fn matches(&self) -> Vec<&crate::catalog::Book> {
        let books = self.catalog.books();
        self.matches.iter().map(|&i| &books[i]).collect()
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// 一覧に表示中の書籍ID
    pub fn displayed(&self) -> Vec<&str> {
        self.view.displayed_ids()
    }

    /// 未表示の件数
    pub fn remaining(&self) -> usize {
        self.matches
            .len()
            .saturating_sub(self.page * self.catalog.page_size())
    }

    /// イベントを処理
    pub fn dispatch(&mut self, event: Event) {
        match event {
            Event::HeaderSearch => {
                self.toggle_overlay(Overlay::Search, true);
                self.view.search_title_focused = true;
            }
            Event::HeaderSettings => self.toggle_overlay(Overlay::Settings, true),
            Event::SearchCancel => self.toggle_overlay(Overlay::Search, false),
            Event::SettingsCancel => self.toggle_overlay(Overlay::Settings, false),
            Event::ListClose => self.toggle_overlay(Overlay::BookDetail, false),
            Event::SearchSubmit(form) => {
                self.apply_filters(&FilterCriteria::from_form(&form));
            }
            Event::SettingsSubmit(form) => {
                let theme = Theme::from_form(&form);
                self.view.settings_theme = theme;
                self.update_theme(theme.as_str());
                self.toggle_overlay(Overlay::Settings, false);
            }
            Event::ListButton => {
                // 無効化されたボタンはクリックを受け付けない
                if !self.view.list_button.disabled {
                    self.load_more_books();
                }
            }
            Event::ListItemsClick(Some(id)) => self.handle_book_click(&id),
            Event::ListItemsClick(None) => {}
        }
    }

    /// 絞り込みを適用し、1 ページ目から描画し直す
    pub fn apply_filters(&mut self, criteria: &FilterCriteria) {
        self.matches = filter_books(self.catalog.books(), criteria);
        self.page = 1;

        tracing::debug!(
            title = %criteria.title,
            author = criteria.author.as_value(),
            genre = criteria.genre.as_value(),
            matches = self.matches.len(),
            "filters applied"
        );

        self.view.list_message_visible = self.matches.is_empty();
        self.view.clear_list();
        self.render_first_page();
        self.view.scroll_top = 0;
        self.toggle_overlay(Overlay::Search, false);
    }

    /// 次のページ分を一覧の末尾に追加
    ///
    /// 未表示の書籍が残っていなければ何もしない。
    pub fn load_more_books(&mut self) {
        if self.remaining() == 0 {
            return;
        }
        self.page += 1;

        let page_size = self.catalog.page_size();
        let start = (self.page - 1) * page_size;
        let end = (self.page * page_size).min(self.matches.len());
        let previews = self.previews(start, end);
        self.view.append_to_list(previews);
        self.update_list_button();

        tracing::debug!(page = self.page, shown = end, "more books loaded");
    }

    /// 書籍を開く（見つからなければ何もしない）
    pub fn handle_book_click(&mut self, id: &str) {
        let Some(book) = self.catalog.find_book(id) else {
            tracing::debug!(id, "clicked book not found");
            return;
        };

        let author = self
            .catalog
            .author_name(&book.author)
            .unwrap_or(book.author.as_str());
        let subtitle = match book.published_year() {
            Some(year) => format!("{}, {}", author, year),
            None => author.to_string(),
        };

        self.view.active = Some(BookDetail {
            id: book.id.clone(),
            image: book.image.clone(),
            title: book.title.clone(),
            subtitle,
            description: book.description.clone(),
        });
        self.toggle_overlay(Overlay::BookDetail, true);
    }

    /// テーマを適用（未知の名前は day として扱う）
    pub fn update_theme(&mut self, name: &str) {
        let theme = Theme::parse(name);
        self.view.style = ThemeVars::for_theme(theme);
        tracing::debug!(requested = name, applied = %theme, "theme updated");
    }

    /// オーバーレイの開閉
    pub fn toggle_overlay(&mut self, which: Overlay, open: bool) {
        self.view.set_overlay(which, open);
        if which == Overlay::Search && !open {
            self.view.search_title_focused = false;
        }
    }

    /// 名前でオーバーレイを開く（`search` / `settings` / `book-detail`）
    ///
    /// 書籍詳細は表示中の書籍がある場合だけ開く。
    pub fn open_overlay(&mut self, name: &str) -> Result<()> {
        match name.parse::<Overlay>()? {
            Overlay::Search => self.dispatch(Event::HeaderSearch),
            Overlay::Settings => self.dispatch(Event::HeaderSettings),
            Overlay::BookDetail if self.view.active.is_some() => {
                self.toggle_overlay(Overlay::BookDetail, true)
            }
            Overlay::BookDetail => {}
        }
        Ok(())
    }

    /// 絞り込み結果の 1 ページ目を一覧に追加
    fn render_first_page(&mut self) {
        let end = self.catalog.page_size().min(self.matches.len());
        let previews = self.previews(0, end);
        self.view.append_to_list(previews);
        self.update_list_button();
    }

    fn populate_filters(&mut self) {
        self.view.search_genres = select_options(self.catalog.genres(), "All Genres");
        self.view.search_authors = select_options(self.catalog.authors(), "All Authors");
    }

    fn update_list_button(&mut self) {
        let remaining = self.remaining();
        self.view.list_button.remaining = remaining;
        self.view.list_button.disabled = remaining == 0;
    }

    fn previews(&self, start: usize, end: usize) -> Vec<PreviewElement> {
        let books = self.catalog.books();
        self.matches[start..end]
            .iter()
            .map(|&i| PreviewElement::for_book(&self.catalog, &books[i]))
            .collect()
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
