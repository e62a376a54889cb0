//! Footer view
//!
//! Status counts, the active filter and search, key hints, and transient
//! status messages.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::app::App;

pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let line = if app.search_mode() {
        Line::from(vec![
            Span::styled("/", theme.footer_key_style()),
            Span::raw(app.search_buffer().to_string()),
            Span::styled("▌", Style::default().fg(theme.text_secondary)),
        ])
    } else if let Some((message, is_error)) = app.status_message() {
        let color = if *is_error { Color::Red } else { Color::Green };
        Line::from(Span::styled(
            message.clone(),
            Style::default().fg(color),
        ))
    } else {
        let mut spans = vec![Span::styled(
            format!(" {} resources ", app.summary().total),
            Style::default().fg(theme.text_secondary),
        )];
        let counts = app.summary().one_line();
        if !counts.is_empty() {
            spans.push(Span::raw(format!("[{counts}] ")));
        }
        spans.push(Span::styled("f", theme.footer_key_style()));
        spans.push(Span::raw(format!(":filter({}) ", app.filter_label())));
        spans.push(Span::styled("/", theme.footer_key_style()));
        if app.active_search().is_empty() {
            spans.push(Span::raw(":search ".to_string()));
        } else {
            spans.push(Span::raw(format!(":search({}) ", app.active_search())));
        }
        spans.push(Span::styled("e", theme.footer_key_style()));
        spans.push(Span::raw(":expand-all "));
        spans.push(Span::styled("r", theme.footer_key_style()));
        spans.push(Span::raw(":refresh "));
        spans.push(Span::styled("q", theme.footer_key_style()));
        spans.push(Span::raw(":quit"));
        Line::from(spans)
    };

    f.render_widget(Paragraph::new(line), area);
}
