//! 描画処理の共通ユーティリティ

use crate::theme::Rgb;
use ratatui::prelude::{Color, Rect};

/// 画面中央にダイアログ領域を計算
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// 配色変数を端末の色に変換
pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// URL の末尾（ファイル名）
pub fn file_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
