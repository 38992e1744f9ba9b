use crate::error::{Result, ShelfError};
use std::path::PathBuf;

/// 設定ディレクトリを上書きする環境変数
pub const SHELF_HOME: &str = "SHELF_HOME";

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }

    /// shelf のホームディレクトリ（$SHELF_HOME > $HOME/.shelf）
    pub fn shelf_home() -> Result<PathBuf> {
        if let Some(dir) = Self::get(SHELF_HOME) {
            return Ok(PathBuf::from(dir));
        }
        let home = Self::get("HOME").ok_or(ShelfError::HomeNotSet)?;
        Ok(PathBuf::from(home).join(".shelf"))
    }
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
