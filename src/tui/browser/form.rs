//! フォームの入力状態
//!
//! 検索フォーム（タイトル・著者・ジャンル）と設定フォーム（テーマ）。
//! 送信時に `FormData` へ変換してコントローラへ渡す。

use crate::filter::{FilterCriteria, Selection};
use crate::form::FormData;
use crate::page::{Page, SelectOption};
use crate::theme::Theme;

// ============================================================================
// SearchForm
// ============================================================================

/// 検索フォームの入力欄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Title,
    Author,
    Genre,
}

impl SearchField {
    pub fn next(&self) -> Self {
        match self {
            SearchField::Title => SearchField::Author,
            SearchField::Author => SearchField::Genre,
            SearchField::Genre => SearchField::Title,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            SearchField::Title => SearchField::Genre,
            SearchField::Author => SearchField::Title,
            SearchField::Genre => SearchField::Author,
        }
    }
}

/// 検索フォームの入力状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub title: String,
    /// 著者セレクタの選択位置（0 は "All Authors"）
    pub author: usize,
    /// ジャンルセレクタの選択位置（0 は "All Genres"）
    pub genre: usize,
    pub field: SearchField,
}

impl SearchForm {
    /// 選択中のセレクタを 1 つ進める／戻す（端で循環）
    pub fn cycle(&mut self, page: &Page, forward: bool) {
        let (index, len) = match self.field {
            SearchField::Title => return,
            SearchField::Author => (&mut self.author, page.search_authors.len()),
            SearchField::Genre => (&mut self.genre, page.search_genres.len()),
        };
        if len == 0 {
            return;
        }
        *index = if forward {
            (*index + 1) % len
        } else {
            (*index + len - 1) % len
        };
    }

    /// 送信用のフォームデータ
    pub fn to_form(&self, page: &Page) -> FormData {
        FilterCriteria {
            title: self.title.clone(),
            author: selected(&page.search_authors, self.author),
            genre: selected(&page.search_genres, self.genre),
        }
        .to_form()
    }

    pub fn author_label<'a>(&self, page: &'a Page) -> &'a str {
        option_label(&page.search_authors, self.author)
    }

    pub fn genre_label<'a>(&self, page: &'a Page) -> &'a str {
        option_label(&page.search_genres, self.genre)
    }
}

fn selected(options: &[SelectOption], index: usize) -> Selection {
    Selection::parse(options.get(index).map(|o| o.value.as_str()))
}

fn option_label(options: &[SelectOption], index: usize) -> &str {
    options.get(index).map(|o| o.label.as_str()).unwrap_or("")
}

// ============================================================================
// SettingsForm
// ============================================================================

/// 設定フォームの入力状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub theme: Theme,
}

impl SettingsForm {
    pub fn to_form(&self) -> FormData {
        FormData::new().with("theme", self.theme.as_str())
    }
}
