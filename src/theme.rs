//! テーマ（day / night）と配色変数
//!
//! スタイルシートが参照する 2 つの配色変数 `--color-dark` / `--color-light` を管理する。

use crate::env::EnvVar;
use crate::form::FormData;
use std::fmt;

/// 前景（文字）色の変数名
pub const COLOR_DARK: &str = "--color-dark";

/// 背景色の変数名
pub const COLOR_LIGHT: &str = "--color-light";

/// 端末の前景色・背景色を示す環境変数
pub const COLORFGBG: &str = "COLORFGBG";

/// テーマ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Day,
    Night,
}

impl Theme {
    /// 名前から変換（未知の値は day）
    pub fn parse(name: &str) -> Self {
        match name.trim() {
            "night" => Theme::Night,
            _ => Theme::Day,
        }
    }

    /// 設定フォームの `theme` フィールドから変換
    pub fn from_form(form: &FormData) -> Self {
        form.get("theme").map(Self::parse).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Theme::Day => "Day",
            Theme::Night => "Night",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Theme::Day => Theme::Night,
            Theme::Night => Theme::Day,
        }
    }

    /// ダークモード設定から初期テーマを決める（不明なら day）
    pub fn from_preference(prefers_dark: Option<bool>) -> Self {
        match prefers_dark {
            Some(true) => Theme::Night,
            _ => Theme::Day,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// RGB 色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

const INK: Rgb = Rgb(10, 10, 20);
const PAPER: Rgb = Rgb(255, 255, 255);

/// 配色変数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeVars {
    pub dark: Rgb,
    pub light: Rgb,
}

impl Default for ThemeVars {
    fn default() -> Self {
        Self::for_theme(Theme::Day)
    }
}

impl ThemeVars {
    /// テーマに対応する配色（night は day の反転）
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Day => Self {
                dark: INK,
                light: PAPER,
            },
            Theme::Night => Self {
                dark: PAPER,
                light: INK,
            },
        }
    }

    /// 変数名で値を取得（`"10, 10, 20"` 形式）
    pub fn get(&self, name: &str) -> Option<String> {
        match name {
            COLOR_DARK => Some(self.dark.to_string()),
            COLOR_LIGHT => Some(self.light.to_string()),
            _ => None,
        }
    }
}

/// `COLORFGBG`（`"fg;bg"` または `"fg;default;bg"`）から暗い背景かを判定
///
/// 解釈できない場合は `None`。
pub fn prefers_dark_from(colorfgbg: Option<&str>) -> Option<bool> {
    let bg = colorfgbg?.rsplit(';').next()?.trim();
    let index: u8 = bg.parse().ok()?;
    Some(matches!(index, 0..=6 | 8))
}

/// 実行環境のダークモード設定を調べる
pub fn prefers_dark_scheme() -> Option<bool> {
    prefers_dark_from(EnvVar::get(COLORFGBG).as_deref())
}

#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;
