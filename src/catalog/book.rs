//! 書籍レコード

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// 書籍ID
pub type BookId = String;

/// 著者ID
pub type AuthorId = String;

/// ジャンルID
pub type GenreId = String;

/// 書籍（データセットから読み込まれ、実行中は変更されない）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: AuthorId,
    pub image: String,
    #[serde(default)]
    pub genres: Vec<GenreId>,
    #[serde(default)]
    pub description: String,
    /// ISO-8601 形式の出版日時
    #[serde(default)]
    pub published: String,
}

impl Book {
    /// 指定ジャンルに属するか
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    /// 出版年を取得
    ///
    /// RFC 3339 の日時、または先頭 10 文字の `YYYY-MM-DD` を受け付ける。
    pub fn published_year(&self) -> Option<i32> {
        let raw = self.published.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.year());
        }
        raw.get(..10)
            .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
            .map(|date| date.year())
    }
}
