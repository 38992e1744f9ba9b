//! 再利用可能な UI 要素
//!
//! 属性を受け取りマークアップを返す `Component` と、
//! 属性変更のたびに再描画する `Element` ホストを提供する。
//!
//! - `preview`: 書籍プレビュー要素

mod preview;

pub use preview::{PreviewElement, PreviewMarkup};

use std::collections::BTreeMap;

/// 要素の属性（名前 → 文字列値）
pub type Attributes = BTreeMap<String, String>;

/// 描画可能な UI 部品
///
/// 描画は属性のみから決まる（同じ属性なら同じマークアップ）。
pub trait Component {
    type Markup: Clone + PartialEq + std::fmt::Debug;

    /// 変更時に再描画を引き起こす属性
    const OBSERVED_ATTRIBUTES: &'static [&'static str];

    /// 属性からマークアップ全体を生成
    fn render(&self, attributes: &Attributes) -> Self::Markup;
}

/// 部品を保持し、属性とマークアップを管理するホスト
#[derive(Debug, Clone)]
pub struct Element<C: Component> {
    component: C,
    attributes: Attributes,
    markup: C::Markup,
    connected: bool,
    #[cfg(test)]
    renders: usize,
}

impl<C: Component> Element<C> {
    pub fn new(component: C) -> Self {
        let attributes = Attributes::new();
        let markup = component.render(&attributes);
        Self {
            component,
            attributes,
            markup,
            connected: false,
            #[cfg(test)]
            renders: 0,
        }
    }

    /// コンテナへ接続（接続時に必ず再描画）
    pub fn attach(&mut self) {
        self.connected = true;
        self.rerender();
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// 属性を設定（監視対象なら再描画）
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        let changed = self.attributes.get(name) != Some(&value);
        self.attributes.insert(name.to_string(), value);
        if changed && C::OBSERVED_ATTRIBUTES.contains(&name) {
            self.rerender();
        }
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// 現在のマークアップ
    pub fn markup(&self) -> &C::Markup {
        &self.markup
    }

    /// これまでの再描画回数
    #[cfg(test)]
    pub fn renders(&self) -> usize {
        self.renders
    }

    fn rerender(&mut self) {
        self.markup = self.component.render(&self.attributes);
        #[cfg(test)]
        {
            self.renders += 1;
        }
    }
}
