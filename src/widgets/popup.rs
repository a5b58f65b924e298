use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rect of `width` x `height` whose bottom-right corner sits `bottom_offset`
/// rows above the bottom-right corner of `area`, clamped to `area`.
pub fn anchored_bottom_right(area: Rect, width: u16, height: u16, bottom_offset: u16) -> Rect {
    let width = width.min(area.width);
    let available = area.height.saturating_sub(bottom_offset);
    let height = height.min(available);

    Rect {
        x: area.x + area.width - width,
        y: area.y + available - height,
        width,
        height,
    }
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
