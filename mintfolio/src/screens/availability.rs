use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::Frame;

use mintfolio_widgets::availability_card::{AvailabilityCardWidget, TILE_HEIGHT};

use crate::app::{CatalogData, ScreenAction, View};
use crate::screens::{render_notice, Screen};

/// Availability grid: one row per photo group, scrollable
pub struct AvailabilityScreen {
    pub cursor: usize,
    offset: usize,
}

impl AvailabilityScreen {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            offset: 0,
        }
    }
}

impl Screen for AvailabilityScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, data: &CatalogData) {
        if data.groups.is_empty() {
            let message = data
                .load_error
                .as_deref()
                .unwrap_or("No cards to show yet.");
            render_notice(frame, area, message, data.load_error.is_some());
            return;
        }

        let rows = (area.height / TILE_HEIGHT).max(1) as usize;

        // Keep the cursor on screen
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + rows {
            self.offset = self.cursor + 1 - rows;
        }

        let width = area.width.min(72);
        let x = area.x + area.width.saturating_sub(width) / 2;
        for (slot, index) in (self.offset..(self.offset + rows).min(data.groups.len())).enumerate()
        {
            let tile_area = Rect::new(x, area.y + slot as u16 * TILE_HEIGHT, width, TILE_HEIGHT);
            let tile =
                AvailabilityCardWidget::new(&data.groups[index]).selected(index == self.cursor);
            frame.render_widget(tile, tile_area);
        }
    }

    fn handle_key(&mut self, key: KeyEvent, data: &CatalogData) -> Option<ScreenAction> {
        if data.groups.is_empty() {
            return None;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < data.groups.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Enter => return Some(ScreenAction::Show(View::Gallery)),
            KeyCode::Esc => return Some(ScreenAction::Quit),
            _ => {}
        }
        None
    }
}
