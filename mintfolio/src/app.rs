use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use tachyonfx::Duration;

use mintfolio_core::{
    calculate_distribution, calculate_forecast, pair_cards, statistics, Card, Catalog,
    Distribution, Forecast, PhotoGroup, Statistics,
};
use mintfolio_widgets::theme::Theme;

use crate::effects::{self, FxManager};
use crate::screens::availability::AvailabilityScreen;
use crate::screens::gallery::GalleryScreen;
use crate::screens::scarcity::ScarcityScreen;
use crate::screens::Screen;

/// Milliseconds per event-loop tick (~30fps)
pub const TICK_MS: u64 = 33;

/// Top-level catalog view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Gallery,
    Availability,
    Scarcity,
}

impl View {
    pub const ALL: [View; 3] = [View::Gallery, View::Availability, View::Scarcity];

    pub fn title(&self) -> &'static str {
        match self {
            View::Gallery => "Gallery",
            View::Availability => "Availability",
            View::Scarcity => "Scarcity",
        }
    }

    pub fn next(&self) -> View {
        match self {
            View::Gallery => View::Availability,
            View::Availability => View::Scarcity,
            View::Scarcity => View::Gallery,
        }
    }

    pub fn prev(&self) -> View {
        match self {
            View::Gallery => View::Scarcity,
            View::Availability => View::Gallery,
            View::Scarcity => View::Availability,
        }
    }
}

/// Immutable snapshot of the loaded catalog and everything derived from it
pub struct CatalogData {
    pub cards: Vec<Card>,
    pub groups: Vec<PhotoGroup>,
    pub stats: Statistics,
    pub distribution: Distribution,
    pub forecast: Forecast,
    pub load_error: Option<String>,
}

impl CatalogData {
    /// Load the catalog once. A failed or malformed load degrades to an
    /// empty card list plus a message every screen shows in place of its
    /// content; there is no retry.
    pub fn load(path: &Path) -> Self {
        let (cards, load_error) = match Catalog::load(path) {
            Ok(catalog) => (catalog.cards, None),
            Err(err) => (Vec::new(), Some(format!("Unable to load catalog ({err})."))),
        };

        let stats = statistics(&cards);
        let distribution = calculate_distribution(&cards);
        let forecast = calculate_forecast(&distribution);
        let groups = pair_cards(&cards);

        Self {
            cards,
            groups,
            stats,
            distribution,
            forecast,
            load_error,
        }
    }
}

/// Actions that screens can return
#[derive(Debug, Clone, Copy)]
pub enum ScreenAction {
    Quit,
    Show(View),
}

/// Main application state
pub struct App {
    pub data: CatalogData,
    pub view: View,
    pub fx: FxManager,
    prev_view: Option<View>,

    // Screens
    gallery: GalleryScreen,
    availability: AvailabilityScreen,
    scarcity: ScarcityScreen,
}

impl App {
    pub fn load(path: &Path) -> Self {
        let mut fx = FxManager::default();
        // The gallery deals in on launch
        fx.add_unique_effect("deal_in", effects::deal_in());

        Self {
            data: CatalogData::load(path),
            view: View::Gallery,
            fx,
            prev_view: Some(View::Gallery),
            gallery: GalleryScreen::new(),
            availability: AvailabilityScreen::new(),
            scarcity: ScarcityScreen::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(Theme::BG)), area);

        let chunks = Layout::vertical([
            Constraint::Length(2), // Header: brand + view tabs
            Constraint::Min(0),    // Active view
            Constraint::Length(1), // Footer: key hints
        ])
        .split(area);

        self.render_header(frame, chunks[0]);

        match self.view {
            View::Gallery => self.gallery.render(frame, chunks[1], &self.data),
            View::Availability => self.availability.render(frame, chunks[1], &self.data),
            View::Scarcity => self.scarcity.render(frame, chunks[1], &self.data),
        }

        self.render_footer(frame, chunks[2]);

        // Apply all tachyonfx effects on top of rendered content
        let tick_duration = Duration::from_millis(33); // one event-loop tick
        let buf = frame.buffer_mut();
        self.fx.process_effects(tick_duration, buf, area);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                " MINTFOLIO ",
                Style::default()
                    .fg(Theme::GOLD)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ", Style::default()),
        ];
        for (i, view) in View::ALL.into_iter().enumerate() {
            let style = if view == self.view {
                Style::default()
                    .fg(Theme::CARD_SELECTED)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::MUTED_TEXT)
            };
            spans.push(Span::styled(
                format!("  [{}] {}", i + 1, view.title()),
                style,
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);

        if area.height >= 2 {
            let separator: String = "\u{2500}".repeat(area.width as usize);
            let rule = Rect::new(area.x, area.y + 1, area.width, 1);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    separator,
                    Style::default().fg(Theme::CARD_BORDER),
                )),
                rule,
            );
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let footer = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("1-3", Style::default().fg(Theme::GOLD)),
            Span::styled("] Views  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Tab", Style::default().fg(Theme::GOLD)),
            Span::styled("] Cycle  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("q", Style::default().fg(Theme::GOLD)),
            Span::styled("] Quit", Style::default().fg(Theme::DIM_TEXT)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(footer, area);
    }

    /// Handle key event. Returns true if should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            KeyCode::Char('1') => {
                self.view = View::Gallery;
                return false;
            }
            KeyCode::Char('2') => {
                self.view = View::Availability;
                return false;
            }
            KeyCode::Char('3') => {
                self.view = View::Scarcity;
                return false;
            }
            KeyCode::Tab => {
                self.view = self.view.next();
                return false;
            }
            KeyCode::BackTab => {
                self.view = self.view.prev();
                return false;
            }
            _ => {}
        }

        let action = match self.view {
            View::Gallery => self.gallery.handle_key(key, &self.data),
            View::Availability => self.availability.handle_key(key, &self.data),
            View::Scarcity => self.scarcity.handle_key(key, &self.data),
        };

        self.process_action(action)
    }

    pub fn tick(&mut self) {
        // Detect view changes and trigger transition effects
        if self.prev_view != Some(self.view) {
            self.fx
                .add_unique_effect("view_transition", effects::view_transition());
            if self.view == View::Scarcity {
                self.fx
                    .add_unique_effect("forecast_fade", effects::forecast_fade_in());
            }
            self.prev_view = Some(self.view);
        }

        match self.view {
            View::Gallery => self.gallery.tick(),
            View::Availability => self.availability.tick(),
            View::Scarcity => self.scarcity.tick(),
        }
    }

    /// Process a screen action. Returns true if should quit.
    fn process_action(&mut self, action: Option<ScreenAction>) -> bool {
        match action {
            Some(ScreenAction::Quit) => true,
            Some(ScreenAction::Show(view)) => {
                // Jumping from the availability grid lands on the same photo
                if self.view == View::Availability && view == View::Gallery {
                    self.gallery.cursor = self.availability.cursor;
                }
                self.view = view;
                false
            }
            None => false,
        }
    }
}
