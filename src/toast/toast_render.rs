//! Toast rendering
//!
//! Draws open toasts as floating boxes in the bottom-right corner of the frame.

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Padding, Paragraph, Wrap},
};

use super::toast_types::{Toast, ToastVariant};
use crate::theme::toast::{self as toast_theme, ToastColors};
use crate::widgets::popup;

const MAX_TOAST_WIDTH: u16 = 44;
const MIN_TOAST_WIDTH: u16 = 16;
// 2 borders + 2 padding
const CHROME_WIDTH: u16 = 4;
const CLOSE_HINT: &str = " ✕ ";

fn variant_colors(variant: ToastVariant) -> ToastColors {
    match variant {
        ToastVariant::Default => toast_theme::DEFAULT,
        ToastVariant::Destructive => toast_theme::DESTRUCTIVE,
    }
}

fn content_width(toast: &Toast) -> u16 {
    let title = toast.title.as_deref().map(|t| Span::raw(t).width()).unwrap_or(0);
    let description = toast
        .description
        .as_deref()
        .map(|d| Span::raw(d).width())
        .unwrap_or(0);
    let action = toast.action.as_ref().map(Line::width).unwrap_or(0);

    title.max(description).max(action).min(u16::MAX as usize) as u16
}

fn toast_text(toast: &Toast, colors: &ToastColors) -> Text<'static> {
    let mut lines = Vec::new();

    if let Some(title) = &toast.title {
        lines.push(Line::from(Span::styled(
            title.clone(),
            Style::new().fg(colors.fg).add_modifier(Modifier::BOLD),
        )));
    }
    if let Some(description) = &toast.description {
        lines.push(Line::from(Span::styled(
            description.clone(),
            Style::new().fg(colors.fg),
        )));
    }
    if let Some(action) = &toast.action {
        lines.push(action.clone());
    }

    Text::from(lines)
}

/// Render every open toast, newest closest to the bottom-right corner.
///
/// Call after rendering the main UI so toasts appear on top. Toasts that no
/// longer fit above the ones already drawn are skipped.
pub fn render_toasts(frame: &mut Frame, toasts: &[Toast]) {
    let viewport = popup::inset_rect(frame.area(), 2, 1);
    if viewport.width < MIN_TOAST_WIDTH {
        return;
    }

    let mut bottom_offset = 0;
    for toast in toasts.iter().filter(|t| t.open) {
        let colors = variant_colors(toast.variant);

        let width = content_width(toast)
            .saturating_add(CHROME_WIDTH)
            .clamp(MIN_TOAST_WIDTH, MAX_TOAST_WIDTH)
            .min(viewport.width);

        let paragraph = Paragraph::new(toast_text(toast, &colors)).wrap(Wrap { trim: true });
        let content_lines = paragraph.line_count(width - CHROME_WIDTH).max(1);
        let height = (content_lines as u16).saturating_add(2);

        if bottom_offset + height > viewport.height {
            break;
        }

        let area = popup::anchored_bottom_right(viewport, width, height, bottom_offset);
        popup::clear_area(frame, area);

        let block = Block::bordered()
            .padding(Padding::horizontal(1))
            .border_style(Style::new().fg(colors.border).bg(colors.bg))
            .style(Style::new().bg(colors.bg))
            .title_top(
                Line::from(Span::styled(CLOSE_HINT, Style::new().fg(colors.close_hint)))
                    .right_aligned(),
            );

        frame.render_widget(paragraph.block(block), area);
        bottom_offset += height;
    }
}

#[cfg(test)]
#[path = "toast_render_tests.rs"]
mod toast_render_tests;
