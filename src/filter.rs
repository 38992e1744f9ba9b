//! 絞り込みロジック
//!
//! 検索フォームの条件（タイトル・著者・ジャンル）で書籍を絞り込む。

use crate::catalog::Book;
use crate::form::FormData;

/// 「すべて」を表すセレクタの値
pub const ANY: &str = "any";

/// セレクタの選択値
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// 絞り込みなし
    #[default]
    Any,
    /// 特定のIDのみ
    Only(String),
}

impl Selection {
    /// フォーム値から変換（欠落・空白のみ・"any" は `Any`）
    ///
    /// それ以外の値は ID としてそのまま保持する。
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => Selection::Any,
            Some(value) if matches!(value.trim(), "" | ANY) => Selection::Any,
            Some(id) => Selection::Only(id.to_string()),
        }
    }

    /// フォーム値として返す
    pub fn as_value(&self) -> &str {
        match self {
            Selection::Any => ANY,
            Selection::Only(id) => id,
        }
    }
}

/// 絞り込み条件（検索フォーム送信ごとに生成）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub title: String,
    pub author: Selection,
    pub genre: Selection,
}

impl FilterCriteria {
    /// 全件に一致する条件
    pub fn any() -> Self {
        Self::default()
    }

    /// フォームから条件を組み立てる
    ///
    /// 欠落したフィールドは中立値（空タイトル・`any`）として扱う。
    pub fn from_form(form: &FormData) -> Self {
        Self {
            title: form.get("title").unwrap_or_default().to_string(),
            author: Selection::parse(form.get("author")),
            genre: Selection::parse(form.get("genre")),
        }
    }

    /// フォーム形式に戻す
    pub fn to_form(&self) -> FormData {
        FormData::new()
            .with("title", self.title.as_str())
            .with("author", self.author.as_value())
            .with("genre", self.genre.as_value())
    }

    /// タイトル条件（空白のみなら常に一致、それ以外は case-insensitive な部分一致）
    pub fn title_matches(&self, book: &Book) -> bool {
        self.title.trim().is_empty()
            || book
                .title
                .to_lowercase()
                .contains(&self.title.to_lowercase())
    }

    /// 著者条件
    pub fn author_matches(&self, book: &Book) -> bool {
        match &self.author {
            Selection::Any => true,
            Selection::Only(id) => book.author == *id,
        }
    }

    /// ジャンル条件
    pub fn genre_matches(&self, book: &Book) -> bool {
        match &self.genre {
            Selection::Any => true,
            Selection::Only(id) => book.has_genre(id),
        }
    }

    /// 3 条件すべてに一致するか
    pub fn matches_all_of(&self, book: &Book) -> bool {
        self.genre_matches(book) && self.title_matches(book) && self.author_matches(book)
    }
}

/// 条件に一致する書籍のインデックスを元の順序のまま返す
pub fn filter_books(books: &[Book], criteria: &FilterCriteria) -> Vec<usize> {
    books
        .iter()
        .enumerate()
        .filter(|(_, book)| criteria.matches_all_of(book))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
