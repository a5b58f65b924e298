use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::app_state::App;
use crate::theme;

const KEY_HINTS: [(&str, &str); 9] = [
    ("n", "toast"),
    ("e", "error"),
    ("a", "action"),
    ("u", "update"),
    ("x", "dismiss last"),
    ("d", "dismiss all"),
    ("c", "clear"),
    ("esc", "close"),
    ("q", "quit"),
];

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Min(1),    // Status area
            Constraint::Length(1), // Help line at bottom
        ])
        .split(frame.area());

        self.render_status(frame, layout[0]);
        render_help_line(frame, layout[1]);

        // Toasts float above everything else
        self.toaster.render(frame);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let state = self.toaster.state();
        let open = state.open_toasts().count();
        let closing = state.len() - open;
        let limit = self.store.settings().limit;

        let lines = vec![
            Line::from(Span::styled(
                "toaster",
                Style::new()
                    .fg(theme::palette::TEXT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("tracked: {}/{}", state.len(), limit)),
            Line::from(format!("open: {}  closing: {}", open, closing)),
            Line::from(format!("pending removals: {}", self.store.pending_removals())),
        ];

        let block = Block::bordered()
            .border_style(Style::new().fg(theme::palette::TEXT_DIM))
            .title(" Toasts ");

        frame.render_widget(
            Paragraph::new(lines)
                .style(Style::new().fg(theme::palette::TEXT_MUTED))
                .block(block),
            area,
        );
    }
}

fn render_help_line(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (i, (key, desc)) in KEY_HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::new().fg(theme::help_line::KEY)));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::new().fg(theme::help_line::DESCRIPTION),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::new().bg(theme::help_line::BACKGROUND)),
        area,
    );
}
