//! データセットの読み込みと検証

use super::book::{AuthorId, Book, GenreId};
use crate::error::{Result, ShelfError};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// 1ページあたりの既定表示件数
pub const BOOKS_PER_PAGE: usize = 36;

/// 組み込みサンプルデータセット
const SAMPLE_DATASET: &str = include_str!("sample.json");

/// データセットファイルのルート構造
#[derive(Debug, Deserialize)]
struct DatasetFile {
    #[serde(default = "default_page_size")]
    page_size: usize,
    #[serde(default)]
    authors: BTreeMap<AuthorId, String>,
    #[serde(default)]
    genres: BTreeMap<GenreId, String>,
    #[serde(default)]
    books: Vec<Book>,
}

fn default_page_size() -> usize {
    BOOKS_PER_PAGE
}

/// 書籍カタログ（読み取り専用）
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    authors: BTreeMap<AuthorId, String>,
    genres: BTreeMap<GenreId, String>,
    page_size: usize,
}

impl Catalog {
    /// 検証済みのカタログを作成
    ///
    /// 書籍IDの重複と 0 のページサイズを拒否する。
    /// 未知の著者・ジャンル参照は表示時に扱うためここでは許容する。
    pub fn new(
        books: Vec<Book>,
        authors: BTreeMap<AuthorId, String>,
        genres: BTreeMap<GenreId, String>,
        page_size: usize,
    ) -> Result<Self> {
        if page_size == 0 {
            return Err(ShelfError::InvalidDataset(
                "page_size must be greater than 0".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for book in &books {
            if !seen.insert(book.id.as_str()) {
                return Err(ShelfError::InvalidDataset(format!(
                    "duplicate book id: {}",
                    book.id
                )));
            }
        }

        Ok(Self {
            books,
            authors,
            genres,
            page_size,
        })
    }

    /// JSON 文字列から読み込む
    pub fn from_json(content: &str) -> Result<Self> {
        let file: DatasetFile = serde_json::from_str(content)?;
        Self::new(file.books, file.authors, file.genres, file.page_size)
    }

    /// ファイルから読み込む
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            books = catalog.books.len(),
            "dataset loaded"
        );
        Ok(catalog)
    }

    /// 組み込みサンプルを読み込む
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE_DATASET)
    }

    /// ページサイズを上書きしたカタログを返す
    pub fn with_page_size(mut self, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(ShelfError::InvalidDataset(
                "page_size must be greater than 0".to_string(),
            ));
        }
        self.page_size = page_size;
        Ok(self)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn authors(&self) -> &BTreeMap<AuthorId, String> {
        &self.authors
    }

    pub fn genres(&self) -> &BTreeMap<GenreId, String> {
        &self.genres
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// IDで書籍を検索
    pub fn find_book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// 著者の表示名を取得
    pub fn author_name(&self, id: &str) -> Option<&str> {
        self.authors.get(id).map(String::as_str)
    }

    /// ジャンルの表示名を取得
    pub fn genre_name(&self, id: &str) -> Option<&str> {
        self.genres.get(id).map(String::as_str)
    }
}

#[cfg(test)]
#[path = "dataset_test.rs"]
mod tests;
