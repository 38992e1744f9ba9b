//! カタログブラウザの Elm Architecture ベースのアプリケーション構造
//!
//! - `Model`: コントローラ + 一覧の選択状態 + フォーム入力状態
//! - `Msg`: アプリケーションへのメッセージ
//! - `update`: メッセージに応じてコントローラへイベントを送る

use super::form::{SearchField, SearchForm, SettingsForm};
use crate::controller::{CatalogController, Event};
use crate::page::Overlay;
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;

// ============================================================================
// Msg（アプリケーションへのメッセージ）
// ============================================================================

/// 検索フォームへのメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMsg {
    Input(char),
    Backspace,
    NextField,
    PrevField,
    OptionNext,
    OptionPrev,
    Submit,
    Cancel,
}

/// 設定フォームへのメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsMsg {
    Toggle,
    Submit,
    Cancel,
}

/// アプリケーションへのメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// 終了
    Quit,
    Up,
    Down,
    /// 選択中の書籍を開く
    Open,
    /// さらに表示
    ShowMore,
    OpenSearch,
    OpenSettings,
    CloseDetail,
    Search(SearchMsg),
    Settings(SettingsMsg),
}

// ============================================================================
// Model（アプリケーション全体の状態）
// ============================================================================

/// アプリケーション全体の状態
pub struct Model {
    pub controller: CatalogController,
    /// 一覧の選択状態
    pub list_state: ListState,
    pub search: SearchForm,
    pub settings: SettingsForm,
    /// 終了フラグ
    pub should_quit: bool,
}

impl Model {
    pub fn new(controller: CatalogController) -> Self {
        let mut model = Self {
            controller,
            list_state: ListState::default(),
            search: SearchForm::default(),
            settings: SettingsForm::default(),
            should_quit: false,
        };
        model.scroll_to_top();
        model
    }

    /// キー入力をメッセージに変換
    ///
    /// 最前面のオーバーレイがキーを受け取る。
    pub fn key_to_msg(&self, key: KeyCode) -> Option<Msg> {
        match self.controller.view().top_overlay() {
            Some(Overlay::BookDetail) => match key {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => Some(Msg::CloseDetail),
                _ => None,
            },
            Some(Overlay::Settings) => match key {
                KeyCode::Esc => Some(Msg::Settings(SettingsMsg::Cancel)),
                KeyCode::Enter => Some(Msg::Settings(SettingsMsg::Submit)),
                KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::Char(' ') => {
                    Some(Msg::Settings(SettingsMsg::Toggle))
                }
                _ => None,
            },
            Some(Overlay::Search) => self.search_key_to_msg(key).map(Msg::Search),
            None => match key {
                KeyCode::Char('q') => Some(Msg::Quit),
                KeyCode::Up | KeyCode::Char('k') => Some(Msg::Up),
                KeyCode::Down | KeyCode::Char('j') => Some(Msg::Down),
                KeyCode::Enter => Some(Msg::Open),
                KeyCode::Char('m') => Some(Msg::ShowMore),
                KeyCode::Char('/') => Some(Msg::OpenSearch),
                KeyCode::Char('s') => Some(Msg::OpenSettings),
                _ => None,
            },
        }
    }

    fn search_key_to_msg(&self, key: KeyCode) -> Option<SearchMsg> {
        let on_title = self.search.field == SearchField::Title;
        match key {
            KeyCode::Esc => Some(SearchMsg::Cancel),
            KeyCode::Enter => Some(SearchMsg::Submit),
            KeyCode::Tab | KeyCode::Down => Some(SearchMsg::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(SearchMsg::PrevField),
            KeyCode::Right if !on_title => Some(SearchMsg::OptionNext),
            KeyCode::Left if !on_title => Some(SearchMsg::OptionPrev),
            KeyCode::Backspace if on_title => Some(SearchMsg::Backspace),
            KeyCode::Char(c) if on_title => Some(SearchMsg::Input(c)),
            _ => None,
        }
    }

    /// 一覧の件数
    fn list_len(&self) -> usize {
        self.controller.view().list_items.len()
    }

    /// 一覧を先頭へスクロールし、先頭を選択
    fn scroll_to_top(&mut self) {
        let selected = (self.list_len() > 0).then_some(0);
        self.list_state = ListState::default()
            .with_offset(self.controller.view().scroll_top)
            .with_selected(selected);
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg) {
    match msg {
        Msg::Quit => model.should_quit = true,
        Msg::Up => select_prev(model),
        Msg::Down => select_next(model),
        Msg::Open => {
            // 一覧コンテナへのクリックとして、選択行のプレビューフックを渡す
            let hook = model
                .list_state
                .selected()
                .and_then(|i| model.controller.view().preview_at(i))
                .map(str::to_string);
            model.controller.dispatch(Event::ListItemsClick(hook));
        }
        Msg::ShowMore => model.controller.dispatch(Event::ListButton),
        Msg::OpenSearch => {
            model.search.field = SearchField::Title;
            model.controller.dispatch(Event::HeaderSearch);
        }
        Msg::OpenSettings => {
            model.settings.theme = model.controller.view().settings_theme;
            model.controller.dispatch(Event::HeaderSettings);
        }
        Msg::CloseDetail => model.controller.dispatch(Event::ListClose),
        Msg::Search(msg) => update_search(model, msg),
        Msg::Settings(msg) => update_settings(model, msg),
    }
}

fn update_search(model: &mut Model, msg: SearchMsg) {
    match msg {
        SearchMsg::Input(c) => model.search.title.push(c),
        SearchMsg::Backspace => {
            model.search.title.pop();
        }
        SearchMsg::NextField => model.search.field = model.search.field.next(),
        SearchMsg::PrevField => model.search.field = model.search.field.prev(),
        SearchMsg::OptionNext => model.search.cycle(model.controller.view(), true),
        SearchMsg::OptionPrev => model.search.cycle(model.controller.view(), false),
        SearchMsg::Submit => {
            let form = model.search.to_form(model.controller.view());
            model.controller.dispatch(Event::SearchSubmit(form));
            model.scroll_to_top();
        }
        SearchMsg::Cancel => model.controller.dispatch(Event::SearchCancel),
    }
}

fn update_settings(model: &mut Model, msg: SettingsMsg) {
    match msg {
        SettingsMsg::Toggle => model.settings.theme = model.settings.theme.toggle(),
        SettingsMsg::Submit => {
            let form = model.settings.to_form();
            model.controller.dispatch(Event::SettingsSubmit(form));
        }
        SettingsMsg::Cancel => model.controller.dispatch(Event::SettingsCancel),
    }
}

/// 選択を上に移動
fn select_prev(model: &mut Model) {
    if model.list_len() == 0 {
        return;
    }
    let current = model.list_state.selected().unwrap_or(0);
    model.list_state.select(Some(current.saturating_sub(1)));
}

/// 選択を下に移動
fn select_next(model: &mut Model) {
    let len = model.list_len();
    if len == 0 {
        return;
    }
    let current = model.list_state.selected().unwrap_or(0);
    model
        .list_state
        .select(Some((current + 1).min(len.saturating_sub(1))));
}

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;
