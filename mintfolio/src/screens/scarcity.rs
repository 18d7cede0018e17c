use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use mintfolio_core::anim::eased_progress;
use mintfolio_core::Rarity;
use mintfolio_widgets::forecast_panel::ForecastPanel;
use mintfolio_widgets::scarcity_chart::ScarcityChart;
use mintfolio_widgets::stat_tile::StatTile;
use mintfolio_widgets::theme::Theme;

use crate::app::{CatalogData, ScreenAction, TICK_MS};
use crate::screens::{render_notice, Screen};

/// Reveal timings: bars 800ms, counters 1200ms
const CHART_REVEAL_MS: u64 = 800;
const COUNTER_REVEAL_MS: u64 = 1200;

/// Scarcity view: stat counters, the ink bar chart, and the mint forecast.
/// The reveal starts when the view first becomes visible; `r` replays it.
pub struct ScarcityScreen {
    anim_tick: u64,
}

impl ScarcityScreen {
    pub fn new() -> Self {
        Self { anim_tick: 0 }
    }

    fn chart_progress(&self) -> f64 {
        eased_progress(self.anim_tick * TICK_MS, CHART_REVEAL_MS)
    }

    fn counter_progress(&self) -> f64 {
        eased_progress(self.anim_tick * TICK_MS, COUNTER_REVEAL_MS)
    }
}

impl Screen for ScarcityScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, data: &CatalogData) {
        if data.load_error.is_some() || data.cards.is_empty() {
            let message = data
                .load_error
                .as_deref()
                .unwrap_or("Unable to load scarcity data. Please try refreshing the page.");
            render_notice(frame, area, message, true);
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Length(5), // Stat tiles
            Constraint::Length(7), // Bar chart
            Constraint::Min(6),    // Forecast panel
            Constraint::Length(1), // Hint
        ])
        .split(area);

        self.render_stats(frame, chunks[0], data);
        self.render_chart(frame, chunks[1], data);

        let panel_width = chunks[2].width.min(76);
        let panel_area = Rect::new(
            chunks[2].x + chunks[2].width.saturating_sub(panel_width) / 2,
            chunks[2].y,
            panel_width,
            chunks[2].height.min(8),
        );
        frame.render_widget(ForecastPanel::new(&data.forecast), panel_area);

        let hint = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("r", Style::default().fg(Theme::GOLD)),
            Span::styled("] Replay reveal", Style::default().fg(Theme::DIM_TEXT)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[3]);
    }

    fn handle_key(&mut self, key: KeyEvent, _data: &CatalogData) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Char('r') => self.anim_tick = 0,
            KeyCode::Esc => return Some(ScreenAction::Quit),
            _ => {}
        }
        None
    }

    fn tick(&mut self) {
        self.anim_tick += 1;
    }
}

impl ScarcityScreen {
    fn render_stats(&self, frame: &mut Frame, area: Rect, data: &CatalogData) {
        let progress = self.counter_progress();
        let tiles = Layout::horizontal([Constraint::Ratio(1, 5); 5]).split(area);

        let total = StatTile::new(data.stats.total, "Total Cards", Theme::BRIGHT_TEXT)
            .progress(progress);
        frame.render_widget(total, tiles[0]);

        let subjects = StatTile::new(
            data.stats.unique_subjects,
            "Unique Subjects",
            Theme::BRIGHT_TEXT,
        )
        .progress(progress);
        frame.render_widget(subjects, tiles[1]);

        for (slot, tier) in Rarity::ALL.into_iter().enumerate() {
            let share = data.distribution.get(tier);
            let tile = StatTile::new(share.count, tier.display_name(), Theme::ink(tier))
                .percent(share.percentage)
                .progress(progress);
            frame.render_widget(tile, tiles[slot + 2]);
        }
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect, data: &CatalogData) {
        let chart_width = area.width.min(76);
        let chart_area = Rect::new(
            area.x + area.width.saturating_sub(chart_width) / 2,
            area.y + 1,
            chart_width,
            area.height.saturating_sub(1),
        );
        let chart = ScarcityChart::new(data.distribution).progress(self.chart_progress());
        frame.render_widget(chart, chart_area);
    }
}
