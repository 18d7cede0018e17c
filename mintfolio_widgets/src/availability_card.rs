use mintfolio_core::{format_card, Availability, PhotoGroup};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

use crate::theme::Theme;

/// Height of one availability row in terminal cells
pub const TILE_HEIGHT: u16 = 5;

/// One row of the availability grid: subject, edition list, and a status
/// badge taken from the group's first card.
pub struct AvailabilityCardWidget<'a> {
    pub group: &'a PhotoGroup,
    pub selected: bool,
}

impl<'a> AvailabilityCardWidget<'a> {
    pub fn new(group: &'a PhotoGroup) -> Self {
        Self {
            group,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    fn status(&self) -> Availability {
        self.group
            .cards
            .first()
            .map(|card| card.availability)
            .unwrap_or_default()
    }
}

impl Widget for AvailabilityCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 24 || area.height < TILE_HEIGHT {
            return;
        }

        let border_color = if self.selected {
            Theme::CARD_SELECTED
        } else {
            Theme::CARD_BORDER
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        block.render(area, buf);

        buf.set_string(
            inner.x + 1,
            inner.y,
            &self.group.subject,
            Style::default()
                .fg(Theme::BRIGHT_TEXT)
                .add_modifier(Modifier::BOLD),
        );

        buf.set_string(
            inner.x + 1,
            inner.y + 1,
            &self.group.caption(),
            Style::default().fg(Theme::MUTED_TEXT),
        );

        // Badge label comes from the formatted first card so the
        // capitalization rules live in one place.
        let badge = self
            .group
            .cards
            .first()
            .map(|card| format_card(card).availability_display)
            .unwrap_or_else(|| Availability::Unknown.display_name().to_string());
        let badge_text = format!("[{badge}]");
        let badge_x = inner.x + inner.width.saturating_sub(badge_text.len() as u16 + 1);
        buf.set_string(
            badge_x,
            inner.y,
            &badge_text,
            Style::default()
                .fg(Theme::availability(self.status()))
                .add_modifier(Modifier::BOLD),
        );
    }
}
