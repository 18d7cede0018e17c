use std::collections::HashSet;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use mintfolio_widgets::flip_card::{FlipCardWidget, CARD_HEIGHT, CARD_WIDTH};
use mintfolio_widgets::theme::Theme;

use crate::app::{CatalogData, ScreenAction, TICK_MS};
use crate::screens::{render_notice, Screen};

/// Flip guard matching the web gallery's 300ms debounce
const FLIP_DEBOUNCE_TICKS: u64 = 300 / TICK_MS;

const CARD_GAP: u16 = 2;

/// Photo gallery: one page of flip cards with a cursor
pub struct GalleryScreen {
    pub cursor: usize,
    flipped: HashSet<usize>,
    tick: u64,
    last_flip_tick: u64,
}

impl GalleryScreen {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            flipped: HashSet::new(),
            tick: 0,
            last_flip_tick: 0,
        }
    }

    fn flip(&mut self, index: usize) {
        if self.tick.saturating_sub(self.last_flip_tick) < FLIP_DEBOUNCE_TICKS {
            return;
        }
        self.last_flip_tick = self.tick;
        if !self.flipped.remove(&index) {
            self.flipped.insert(index);
        }
    }
}

impl Screen for GalleryScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, data: &CatalogData) {
        if data.groups.is_empty() {
            let message = data
                .load_error
                .as_deref()
                .unwrap_or("Unable to load gallery. Please try refreshing the page.");
            render_notice(frame, area, message, data.load_error.is_some());
            return;
        }
        if area.height < CARD_HEIGHT || area.width < CARD_WIDTH {
            render_notice(frame, area, "Terminal too small for the gallery.", false);
            return;
        }

        // One page of cards, the page holding the cursor
        let per_page = (area.width / (CARD_WIDTH + CARD_GAP)).max(1) as usize;
        let page = self.cursor / per_page;
        let start = page * per_page;
        let end = (start + per_page).min(data.groups.len());
        let visible = end - start;

        let row_width = visible as u16 * (CARD_WIDTH + CARD_GAP) - CARD_GAP;
        let row_x = area.x + area.width.saturating_sub(row_width) / 2;
        let row_y = area.y + area.height.saturating_sub(CARD_HEIGHT + 4) / 2;

        for (slot, index) in (start..end).enumerate() {
            let group = &data.groups[index];
            let card_area = Rect::new(
                row_x + slot as u16 * (CARD_WIDTH + CARD_GAP),
                row_y,
                CARD_WIDTH,
                CARD_HEIGHT,
            );
            let card = FlipCardWidget::new(group)
                .selected(index == self.cursor)
                .flipped(self.flipped.contains(&index));
            frame.render_widget(card, card_area);
        }

        // Detail strip for the selected photo
        let group = &data.groups[self.cursor];
        let detail_y = row_y + CARD_HEIGHT + 1;
        if detail_y + 1 < area.bottom() {
            let mut spans = vec![
                Span::styled(
                    group.subject.clone(),
                    Style::default()
                        .fg(Theme::BRIGHT_TEXT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", group.caption()),
                    Style::default().fg(Theme::MUTED_TEXT),
                ),
            ];
            if let Some(card) = group.cards.first() {
                if let Some(location) = &card.location {
                    spans.push(Span::styled(
                        format!("  {location}"),
                        Style::default().fg(Theme::DIM_TEXT),
                    ));
                }
                if let Some(height) = card.block_height {
                    spans.push(Span::styled(
                        format!("  block {height}"),
                        Style::default().fg(Theme::DIM_TEXT),
                    ));
                }
            }
            frame.render_widget(
                Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
                Rect::new(area.x, detail_y, area.width, 1),
            );

            let hints = Paragraph::new(Line::from(vec![
                Span::styled("[", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled("\u{2190}\u{2192}", Style::default().fg(Theme::GOLD)),
                Span::styled("] Browse  [", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled("Space", Style::default().fg(Theme::GOLD)),
                Span::styled("] Flip  ", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled(
                    format!("{} / {}", self.cursor + 1, data.groups.len()),
                    Style::default().fg(Theme::MUTED_TEXT),
                ),
            ]))
            .alignment(Alignment::Center);
            frame.render_widget(hints, Rect::new(area.x, detail_y + 1, area.width, 1));
        }
    }

    fn handle_key(&mut self, key: KeyEvent, data: &CatalogData) -> Option<ScreenAction> {
        if data.groups.is_empty() {
            return None;
        }
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.cursor + 1 < data.groups.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.flip(self.cursor);
            }
            KeyCode::Esc => return Some(ScreenAction::Quit),
            _ => {}
        }
        None
    }

    fn tick(&mut self) {
        self.tick += 1;
    }
}
