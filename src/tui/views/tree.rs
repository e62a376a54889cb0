//! Tree view
//!
//! Renders the visible tree rows with expansion markers, indentation, and
//! status-colored suffixes. The cursor row is highlighted; scrolling keeps
//! it inside the viewport.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tree::render::TreeLine;
use crate::tui::app::App;

fn marker(row: &TreeLine) -> &'static str {
    if !row.has_children {
        "  "
    } else if row.expanded {
        "▾ "
    } else {
        "▸ "
    }
}

pub fn render_tree(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let rows = app.visible();

    // Keep the cursor inside the viewport
    let height = area.height.saturating_sub(2) as usize;
    let offset = if height == 0 || app.cursor() < height {
        0
    } else {
        app.cursor() + 1 - height
    };

    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .skip(offset)
        .take(height.max(1))
        .map(|(at, row)| {
            let mut spans = vec![
                Span::raw("  ".repeat(row.depth)),
                Span::raw(marker(row)),
                Span::styled(
                    row.name.clone(),
                    Style::default().fg(theme.text_primary),
                ),
            ];
            if !row.status.is_empty() {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(
                    format!("({})", row.status),
                    theme.status_style(&row.status),
                ));
            }

            let mut line = Line::from(spans);
            if at == app.cursor() {
                line = line.style(theme.selected_style());
            }
            line
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Resource Tree ");
    f.render_widget(Paragraph::new(lines).block(block), area);
}
