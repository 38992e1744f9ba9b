//! カタログブラウザの view（描画）
//!
//! 一覧・結果なしメッセージ・「さらに表示」ボタンと、各オーバーレイを描画する。

use super::app::Model;
use super::common::{centered_rect, color, file_name};
use super::form::SearchField;
use crate::element::PreviewMarkup;
use crate::page::{Overlay, Page};
use crate::theme::{COLOR_DARK, COLOR_LIGHT};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};

/// 画面を描画
pub fn view(f: &mut Frame, model: &Model) {
    let page = model.controller.view();
    let base = Style::default()
        .fg(color(page.style.dark))
        .bg(color(page.style.light));

    f.render_widget(Clear, f.area());
    f.render_widget(Block::default().style(base), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // ヘッダー
            Constraint::Min(1),    // 一覧
            Constraint::Length(1), // さらに表示
            Constraint::Length(1), // ヘルプ
        ])
        .split(f.area());

    let header = Paragraph::new(format!(
        " Book Connect  ({} of {} shown)",
        page.list_items.len(),
        model.controller.match_count()
    ))
    .style(base.add_modifier(Modifier::BOLD));
    f.render_widget(header, chunks[0]);

    view_list(f, model, base, chunks[1]);
    view_list_button(f, page, base, chunks[2]);

    let help = Paragraph::new(" ↑/↓: move · Enter: details · m: show more · /: search · s: settings · q: quit")
        .style(base.add_modifier(Modifier::DIM));
    f.render_widget(help, chunks[3]);

    match page.top_overlay() {
        Some(Overlay::Search) => view_search(f, model, base),
        Some(Overlay::Settings) => view_settings(f, model, base),
        Some(Overlay::BookDetail) => view_detail(f, page, base),
        None => {}
    }
}

/// プレビュー 1 件を 2 行のリスト項目に変換
fn preview_item(markup: &PreviewMarkup) -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(Span::styled(
            markup.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw(format!("  {}", markup.author)),
            Span::styled(
                format!("  [{}]", file_name(&markup.image)),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]),
    ])
}

/// 一覧（または結果なしメッセージ）
fn view_list(f: &mut Frame, model: &Model, base: Style, area: Rect) {
    let page = model.controller.view();
    let block = Block::default()
        .title(" Books ")
        .borders(Borders::ALL)
        .style(base);

    if page.list_message_visible {
        let message = Paragraph::new("\n  No results found. Your filters might be too narrow.")
            .block(block)
            .style(base);
        f.render_widget(message, area);
        return;
    }

    let items: Vec<ListItem> = page
        .list_items
        .iter()
        .map(|element| preview_item(element.markup()))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(base.add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = model.list_state.clone();
    f.render_stateful_widget(list, area, &mut state);
}

/// 「さらに表示」ボタン
fn view_list_button(f: &mut Frame, page: &Page, base: Style, area: Rect) {
    let style = if page.list_button.disabled {
        base.add_modifier(Modifier::DIM)
    } else {
        base.add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new(format!(" [ {} ]", page.list_button.label())).style(style);
    f.render_widget(button, area);
}

/// 検索オーバーレイ
fn view_search(f: &mut Frame, model: &Model, base: Style) {
    let page = model.controller.view();
    let form = &model.search;
    let area = centered_rect(56, 9, f.area());
    f.render_widget(Clear, area);

    let field_style = |field: SearchField| {
        if form.field == field {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        }
    };
    let cursor = if page.search_title_focused && form.field == SearchField::Title {
        "_"
    } else {
        ""
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("  Title:  "),
            Span::styled(format!("{}{}", form.title, cursor), field_style(SearchField::Title)),
        ]),
        Line::from(vec![
            Span::raw("  Author: "),
            Span::styled(
                format!("< {} >", form.author_label(page)),
                field_style(SearchField::Author),
            ),
        ]),
        Line::from(vec![
            Span::raw("  Genre:  "),
            Span::styled(
                format!("< {} >", form.genre_label(page)),
                field_style(SearchField::Genre),
            ),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "  Tab: next field · ←/→: change · Enter: search · Esc: cancel",
            base.add_modifier(Modifier::DIM),
        )),
    ];

    let dialog = Paragraph::new(lines).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .style(base),
    );
    f.render_widget(dialog, area);
}

/// 設定オーバーレイ
fn view_settings(f: &mut Frame, model: &Model, base: Style) {
    let area = centered_rect(44, 9, f.area());
    f.render_widget(Clear, area);

    let style = &model.controller.view().style;
    let palette = [COLOR_DARK, COLOR_LIGHT].map(|name| {
        Line::from(Span::styled(
            format!("  {}: {}", name, style.get(name).unwrap_or_default()),
            base.add_modifier(Modifier::DIM),
        ))
    });

    let mut lines = vec![
        Line::from(vec![
            Span::raw("  Theme: "),
            Span::styled(
                format!("< {} >", model.settings.theme.title()),
                base.add_modifier(Modifier::REVERSED),
            ),
        ]),
        Line::default(),
    ];
    lines.extend(palette);
    lines.extend([
        Line::default(),
        Line::from(Span::styled(
            "  ←/→: change · Enter: save · Esc: cancel",
            base.add_modifier(Modifier::DIM),
        )),
    ]);

    let dialog = Paragraph::new(lines).block(
        Block::default()
            .title(" Settings ")
            .borders(Borders::ALL)
            .style(base),
    );
    f.render_widget(dialog, area);
}

/// 書籍詳細オーバーレイ
fn view_detail(f: &mut Frame, page: &Page, base: Style) {
    let Some(detail) = page.active.as_ref() else {
        return;
    };

    let area = centered_rect(64, 14, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            detail.subtitle.clone(),
            base.add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            format!("[{}]", file_name(&detail.image)),
            base.add_modifier(Modifier::DIM),
        )),
        Line::default(),
        Line::from(detail.description.clone()),
        Line::default(),
        Line::from(Span::styled(
            "Esc: close",
            base.add_modifier(Modifier::DIM),
        )),
    ];

    let dialog = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", detail.title))
                .borders(Borders::ALL)
                .style(base),
        );
    f.render_widget(dialog, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::controller::{CatalogController, Event};
    use ratatui::backend::TestBackend;
    use std::rc::Rc;

    fn render(model: &Model) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| view(f, model)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn make_model() -> Model {
        let catalog = Rc::new(Catalog::sample().unwrap());
        Model::new(CatalogController::initialize(catalog, None))
    }

    #[test]
    fn renders_previews_and_button() {
        let screen = render(&make_model());
        assert!(screen.contains("Pride and Prejudice"));
        assert!(screen.contains("Jane Austen"));
        assert!(screen.contains("Show more (12)"));
    }

    #[test]
    fn renders_no_results_message() {
        let mut model = make_model();
        model
            .controller
            .dispatch(Event::SearchSubmit(crate::form::FormData::new().with("title", "zzzz")));
        let screen = render(&model);
        assert!(screen.contains("No results found"));
        assert!(screen.contains("Show more (0)"));
    }

    #[test]
    fn renders_detail_overlay() {
        let mut model = make_model();
        model.controller.handle_book_click("b09");
        let screen = render(&model);
        assert!(screen.contains("A Study in Scarlet"));
        assert!(screen.contains("Arthur Conan Doyle, 1887"));
    }

    #[test]
    fn renders_settings_palette() {
        let mut model = make_model();
        model.controller.dispatch(Event::HeaderSettings);
        let screen = render(&model);
        assert!(screen.contains("--color-dark: 10, 10, 20"));
        assert!(screen.contains("--color-light: 255, 255, 255"));

        model.controller.update_theme("night");
        let screen = render(&model);
        assert!(screen.contains("--color-dark: 255, 255, 255"));
    }
}
