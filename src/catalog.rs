//! 書籍カタログ
//!
//! 静的データセット（書籍・著者・ジャンル・ページサイズ）を保持する。
//!
//! - `book`: 書籍レコードと ID 型
//! - `dataset`: JSON データセットの読み込みと検証

mod book;
mod dataset;

pub use book::Book;
pub use dataset::Catalog;
