use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{browse, list, show};
use crate::env::EnvVar;
use crate::logging::LogTarget;

#[derive(Debug, Parser)]
#[command(name = "shelf")]
#[command(about = "Book catalog browser", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// 全サブコマンド共通のオプション
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Dataset file (JSON). Defaults to the built-in sample catalog
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Config file. Defaults to ~/.shelf/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 対話的にカタログを閲覧
    Browse(browse::Args),

    /// 絞り込み結果を一覧表示
    List(list::Args),

    /// 書籍の詳細表示
    Show(show::Args),

    /// 著者・ジャンルの選択肢を表示
    Options,
}

impl Cli {
    /// ログの出力先（TUI はファイルへ）
    pub fn log_target(&self) -> LogTarget {
        match self.command {
            Command::Browse(_) => EnvVar::shelf_home()
                .map(|home| LogTarget::File(home.join("shelf.log")))
                .unwrap_or(LogTarget::Stderr),
            _ => LogTarget::Stderr,
        }
    }
}
