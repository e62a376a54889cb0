//! Header view
//!
//! One-line banner: context, namespace, and the application-level status.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::app::App;

pub fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut spans = vec![
        Span::styled(" tree9s ", theme.header_context_style()),
        Span::styled(
            format!("ctx:{} ", app.context),
            Style::default().fg(theme.header_context),
        ),
        Span::styled(
            format!("ns:{} ", app.namespace),
            Style::default().fg(theme.header_namespace),
        ),
    ];

    if let Some(status) = app.app_status() {
        spans.push(Span::raw("app:"));
        spans.push(Span::styled(status.to_string(), theme.status_style(status)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
