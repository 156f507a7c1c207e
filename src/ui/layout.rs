// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions shared by every page.
pub struct AppLayout {
    pub nav: Rect,
    pub body: Rect,
    pub flash: Rect,
    pub footer: Rect,
}

/// Splits the frame into the nav bar, the page body, the flash bar (one row
/// per visible message) and the footer.
pub fn create_layout(frame_size: Rect, flash_rows: u16) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(flash_rows),
            Constraint::Length(1),
        ])
        .split(frame_size);

    AppLayout {
        nav: chunks[0],
        body: chunks[1],
        flash: chunks[2],
        footer: chunks[3],
    }
}

/// Splits `area` into a left column of `percent` width and the remainder.
pub fn split_columns(area: Rect, percent: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(percent), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

/// A rectangle centered in `r`, sized as a percentage of it.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_rows_shrink_the_body() {
        let frame = Rect::new(0, 0, 100, 40);
        let without = create_layout(frame, 0);
        let with = create_layout(frame, 3);
        assert_eq!(without.flash.height, 0);
        assert_eq!(with.flash.height, 3);
        assert_eq!(without.body.height, with.body.height + 3);
        assert_eq!(with.footer.y, 39);
    }

    #[test]
    fn centered_rect_stays_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(70, 80, outer);
        assert!(inner.x > 0 && inner.y > 0);
        assert!(inner.right() <= outer.right());
        assert!(inner.bottom() <= outer.bottom());
    }
}
