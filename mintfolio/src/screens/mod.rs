pub mod availability;
pub mod gallery;
pub mod scarcity;

use crossterm::event::KeyEvent;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use mintfolio_widgets::theme::Theme;

use crate::app::{CatalogData, ScreenAction};

/// Trait for catalog views
pub trait Screen {
    fn render(&mut self, frame: &mut Frame, area: Rect, data: &CatalogData);
    fn handle_key(&mut self, key: KeyEvent, data: &CatalogData) -> Option<ScreenAction>;
    /// Per-frame hook for screens that animate
    fn tick(&mut self) {}
}

/// Centered plain-text message shown in place of a view's content when
/// the catalog failed to load or has nothing to show
pub fn render_notice(frame: &mut Frame, area: Rect, message: &str, is_error: bool) {
    if area.height == 0 {
        return;
    }
    let color = if is_error {
        Theme::ERROR
    } else {
        Theme::MUTED_TEXT
    };
    let y = area.y + area.height / 2;
    let line_area = Rect::new(area.x, y.min(area.bottom().saturating_sub(1)), area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(color),
        )))
        .alignment(Alignment::Center),
        line_area,
    );
}
