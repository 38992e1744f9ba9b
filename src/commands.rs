use crate::catalog::Catalog;
use crate::cli::{Command, GlobalArgs};
use crate::config::Config;

pub mod browse;
pub mod list;
pub mod options;
pub mod show;

pub fn dispatch(cli: crate::cli::Cli) -> Result<(), String> {
    match cli.command {
        Command::Browse(args) => browse::run(&cli.global, args),
        Command::List(args) => list::run(&cli.global, args),
        Command::Show(args) => show::run(&cli.global, args),
        Command::Options => options::run(&cli.global),
    }
}

/// 設定とカタログを読み込む
pub(crate) fn load(global: &GlobalArgs) -> Result<(Config, Catalog), String> {
    let config = match &global.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .map_err(|e| e.to_string())?;

    let catalog = config
        .load_catalog(global.data.as_deref())
        .map_err(|e| e.to_string())?;

    Ok((config, catalog))
}
