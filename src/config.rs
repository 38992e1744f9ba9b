//! 設定ファイル（config.toml）
//!
//! データセットの場所、ページサイズ、初期テーマを指定できる。
//! ファイルが存在しなければ既定値を使う。

use crate::catalog::Catalog;
use crate::env::EnvVar;
use crate::error::{Result, ShelfError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 初期テーマの設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSetting {
    /// 実行環境のダークモード設定に従う
    #[default]
    Auto,
    Day,
    Night,
}

impl ThemeSetting {
    /// ダークモード設定を決める（`Auto` のときだけ `probe` を呼ぶ）
    pub fn prefers_dark(&self, probe: impl FnOnce() -> Option<bool>) -> Option<bool> {
        match self {
            ThemeSetting::Auto => probe(),
            ThemeSetting::Day => Some(false),
            ThemeSetting::Night => Some(true),
        }
    }
}

/// shelf 設定
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// データセットファイル（未指定なら組み込みサンプル）
    pub data: Option<PathBuf>,
    /// ページサイズの上書き
    pub page_size: Option<usize>,
    pub theme: ThemeSetting,
}

impl Config {
    /// 既定の設定ファイルパス（~/.shelf/config.toml）
    pub fn default_path() -> Result<PathBuf> {
        Ok(EnvVar::shelf_home()?.join("config.toml"))
    }

    /// 既定のパスから読み込む（ホームディレクトリが不明なら既定値）
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Ok(path) => Self::load_from(&path),
            Err(ShelfError::HomeNotSet) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// カタログを読み込む
    ///
    /// 優先順位: 引数のパス > 設定の `data` > 組み込みサンプル。
    /// `page_size` が設定されていればデータセットの値を上書きする。
    pub fn load_catalog(&self, data_override: Option<&Path>) -> Result<Catalog> {
        let catalog = match data_override.or(self.data.as_deref()) {
            Some(path) => Catalog::load(path)?,
            None => Catalog::sample()?,
        };
        match self.page_size {
            Some(page_size) => catalog.with_page_size(page_size),
            None => Ok(catalog),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
