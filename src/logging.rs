//! ログ出力の初期化
//!
//! `SHELF_LOG` 環境変数でフィルタを指定する（既定は `warn`）。

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// ログフィルタを指定する環境変数
pub const SHELF_LOG: &str = "SHELF_LOG";

/// ログの出力先
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// 標準エラー出力（行指向のコマンド）
    Stderr,
    /// ファイル（TUI 実行中は画面を汚さないようファイルへ）
    File(PathBuf),
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(SHELF_LOG).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// ログ出力を初期化
///
/// ファイルを開けない場合はログを出さずに続行する。
pub fn init(target: LogTarget) {
    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init()
                .ok();
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                if std::fs::create_dir_all(parent).is_err() {
                    return;
                }
            }
            let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
                return;
            };
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .ok();
        }
    }
}
