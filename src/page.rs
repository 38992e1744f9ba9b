//! ページ（ホスト画面）モデル
//!
//! コントローラが操作する名前付きフックを型付きフィールドとして保持する。
//! 一覧コンテナ、「さらに表示」ボタン、結果なしメッセージ、
//! 検索・設定・書籍詳細の各オーバーレイ、セレクタ、配色変数。

use crate::element::PreviewElement;
use crate::error::ShelfError;
use crate::filter::ANY;
use crate::theme::{Theme, ThemeVars};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Overlay（オーバーレイ種別）
// ============================================================================

/// オーバーレイ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Search,
    Settings,
    BookDetail,
}

impl Overlay {
    pub fn all() -> &'static [Overlay] {
        &[Overlay::Search, Overlay::Settings, Overlay::BookDetail]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Overlay::Search => "search",
            Overlay::Settings => "settings",
            Overlay::BookDetail => "book-detail",
        }
    }
}

impl FromStr for Overlay {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Overlay::all()
            .iter()
            .copied()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| ShelfError::UnknownOverlay(s.to_string()))
    }
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// 部品
// ============================================================================

/// セレクタの選択肢
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// 先頭に `any` を置いた選択肢を作る（以降は表示名順、同名なら ID 順）
pub fn select_options(mapping: &BTreeMap<String, String>, first_label: &str) -> Vec<SelectOption> {
    let mut entries: Vec<(&String, &String)> = mapping.iter().collect();
    entries.sort_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)));

    std::iter::once(SelectOption {
        value: ANY.to_string(),
        label: first_label.to_string(),
    })
    .chain(entries.into_iter().map(|(id, name)| SelectOption {
        value: id.clone(),
        label: name.clone(),
    }))
    .collect()
}

/// 「さらに表示」ボタン
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListButton {
    /// 未表示の件数
    pub remaining: usize,
    pub disabled: bool,
}

impl ListButton {
    pub fn label(&self) -> String {
        format!("Show more ({})", self.remaining)
    }
}

/// 書籍詳細オーバーレイの内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetail {
    pub id: String,
    pub image: String,
    pub title: String,
    /// "著者名, 出版年"
    pub subtitle: String,
    pub description: String,
}

// ============================================================================
// Page
// ============================================================================

/// ホスト画面の状態
#[derive(Debug, Default)]
pub struct Page {
    /// 一覧コンテナ（`data-list-items`）
    pub list_items: Vec<PreviewElement>,
    /// 結果なしメッセージ（`data-list-message`）の表示状態
    pub list_message_visible: bool,
    /// 「さらに表示」ボタン（`data-list-button`）
    pub list_button: ListButton,
    /// 書籍詳細の内容（`data-list-active`）
    pub active: Option<BookDetail>,
    pub search_genres: Vec<SelectOption>,
    pub search_authors: Vec<SelectOption>,
    /// 設定フォームのテーマ選択値
    pub settings_theme: Theme,
    /// スタイルシートの配色変数
    pub style: ThemeVars,
    /// 一覧のスクロール位置（0 が先頭）
    pub scroll_top: usize,
    /// 検索フォームのタイトル欄にフォーカスしているか
    pub search_title_focused: bool,
    search_open: bool,
    settings_open: bool,
    detail_open: bool,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// オーバーレイの開閉
    pub fn set_overlay(&mut self, which: Overlay, open: bool) {
        match which {
            Overlay::Search => self.search_open = open,
            Overlay::Settings => self.settings_open = open,
            Overlay::BookDetail => self.detail_open = open,
        }
    }

    pub fn is_open(&self, which: Overlay) -> bool {
        match which {
            Overlay::Search => self.search_open,
            Overlay::Settings => self.settings_open,
            Overlay::BookDetail => self.detail_open,
        }
    }

    /// 最前面に開いているオーバーレイ
    pub fn top_overlay(&self) -> Option<Overlay> {
        [Overlay::BookDetail, Overlay::Settings, Overlay::Search]
            .into_iter()
            .find(|o| self.is_open(*o))
    }

    /// 一覧の末尾に要素をまとめて追加（未接続の要素は接続する）
    pub fn append_to_list(&mut self, items: impl IntoIterator<Item = PreviewElement>) {
        self.list_items.extend(items.into_iter().map(|mut element| {
            if !element.is_connected() {
                element.attach();
            }
            element
        }));
    }

    pub fn clear_list(&mut self) {
        self.list_items.clear();
    }

    /// 一覧の `index` 行目のプレビューフック
    pub fn preview_at(&self, index: usize) -> Option<&str> {
        self.list_items.get(index).and_then(|e| e.data_preview())
    }

    /// 一覧に表示中の書籍ID（表示順）
    pub fn displayed_ids(&self) -> Vec<&str> {
        self.list_items
            .iter()
            .filter_map(|e| e.data_preview())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_from_str() {
        assert_eq!("search".parse::<Overlay>().unwrap(), Overlay::Search);
        assert_eq!("settings".parse::<Overlay>().unwrap(), Overlay::Settings);
        assert_eq!(
            "book-detail".parse::<Overlay>().unwrap(),
            Overlay::BookDetail
        );
        assert!(matches!(
            "sidebar".parse::<Overlay>(),
            Err(ShelfError::UnknownOverlay(_))
        ));
    }

    #[test]
    fn overlays_toggle_independently() {
        let mut page = Page::new();
        page.set_overlay(Overlay::Search, true);
        page.set_overlay(Overlay::BookDetail, true);
        assert!(page.is_open(Overlay::Search));
        assert!(!page.is_open(Overlay::Settings));
        assert_eq!(page.top_overlay(), Some(Overlay::BookDetail));

        page.set_overlay(Overlay::BookDetail, false);
        assert_eq!(page.top_overlay(), Some(Overlay::Search));
    }

    #[test]
    fn select_options_start_with_any() {
        let mapping = BTreeMap::from([
            ("g2".to_string(), "Fantasy".to_string()),
            ("g1".to_string(), "Science Fiction".to_string()),
        ]);
        let options = select_options(&mapping, "All Genres");
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["any", "g2", "g1"]);
        assert_eq!(options[0].label, "All Genres");
    }

    #[test]
    fn select_options_follow_labels_not_ids() {
        let mapping = BTreeMap::from([
            ("7f3c".to_string(), "Mark Twain".to_string()),
            ("0a9e".to_string(), "Mary Shelley".to_string()),
            ("c41d".to_string(), "Jane Austen".to_string()),
            ("b002".to_string(), "Jane Austen".to_string()),
        ]);
        let options = select_options(&mapping, "All Authors");
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["any", "b002", "c41d", "7f3c", "0a9e"]);
    }

    #[test]
    fn list_button_label_shows_remaining() {
        let button = ListButton {
            remaining: 25,
            disabled: false,
        };
        assert_eq!(button.label(), "Show more (25)");
    }
}
