//! 書籍プレビュー要素
//!
//! サムネイル・タイトル・著者名を 1 件分描画する。

use super::{Attributes, Component, Element};
use crate::catalog::{Book, Catalog};
use std::rc::Rc;

/// プレビューのマークアップ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewMarkup {
    /// サムネイル画像の URL
    pub image: String,
    pub title: String,
    /// 解決済みの著者名（未知の著者IDはIDをそのまま表示）
    pub author: String,
    /// `data-preview` フック（書籍ID）
    pub preview: String,
}

/// 書籍プレビュー部品
#[derive(Debug, Clone)]
pub struct BookPreview {
    catalog: Rc<Catalog>,
}

impl BookPreview {
    pub fn new(catalog: Rc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Component for BookPreview {
    type Markup = PreviewMarkup;

    const OBSERVED_ATTRIBUTES: &'static [&'static str] = &["image", "title", "author", "id"];

    fn render(&self, attributes: &Attributes) -> PreviewMarkup {
        let attr = |name: &str| attributes.get(name).cloned().unwrap_or_default();
        let author_id = attr("author");
        let author = self
            .catalog
            .author_name(&author_id)
            .map(str::to_string)
            .unwrap_or(author_id);

        PreviewMarkup {
            image: attr("image"),
            title: attr("title"),
            author,
            preview: attr("id"),
        }
    }
}

/// 書籍プレビュー要素
pub type PreviewElement = Element<BookPreview>;

impl PreviewElement {
    /// 書籍から属性を設定した接続済み要素を作る
    pub fn for_book(catalog: &Rc<Catalog>, book: &Book) -> Self {
        let mut element = Element::new(BookPreview::new(Rc::clone(catalog)));
        element.set_attribute("image", book.image.as_str());
        element.set_attribute("title", book.title.as_str());
        element.set_attribute("author", book.author.as_str());
        element.set_attribute("id", book.id.as_str());
        element.attach();
        element
    }

    /// `data-preview` フックの値（書籍ID属性）
    pub fn data_preview(&self) -> Option<&str> {
        self.get_attribute("id").filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
#[path = "preview_test.rs"]
mod tests;
