use mintfolio_core::{Distribution, Rarity};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Horizontal bar chart of the ink distribution. Bars grow with
/// `progress`; the count/percentage labels appear once the reveal passes
/// its midpoint, like the canvas original.
pub struct ScarcityChart {
    pub distribution: Distribution,
    pub progress: f64,
}

/// Left column reserved for tier labels
const LABEL_WIDTH: u16 = 8;
/// Right column reserved for "count (pct%)" values
const VALUE_WIDTH: u16 = 14;
const BAR_SPACING: u16 = 2;

impl ScarcityChart {
    pub fn new(distribution: Distribution) -> Self {
        Self {
            distribution,
            progress: 1.0,
        }
    }

    pub fn progress(mut self, progress: f64) -> Self {
        self.progress = progress.clamp(0.0, 1.0);
        self
    }
}

impl Widget for ScarcityChart {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < LABEL_WIDTH + VALUE_WIDTH + 8 || area.height < 5 {
            return;
        }

        let chart_width = area.width - LABEL_WIDTH - VALUE_WIDTH - 2;
        let max_count = self.distribution.max_count();

        for (row, tier) in Rarity::ALL.into_iter().enumerate() {
            let share = self.distribution.get(tier);
            let y = area.y + row as u16 * BAR_SPACING;
            if y >= area.bottom() {
                break;
            }

            // Tier label, right-aligned against the track
            let label = tier.display_name();
            let label_x = area.x + LABEL_WIDTH.saturating_sub(label.len() as u16 + 1);
            buf.set_string(
                label_x,
                y,
                label,
                Style::default().fg(Theme::BRIGHT_TEXT),
            );

            // Dim track across the full chart width
            let track_x = area.x + LABEL_WIDTH;
            for x in 0..chart_width {
                buf.set_string(
                    track_x + x,
                    y,
                    "\u{2591}",
                    Style::default().fg(Theme::BAR_TRACK),
                );
            }

            // Filled bar, scaled to the largest tier and the reveal
            let fill = if max_count > 0 {
                let full = share.count as f64 / max_count as f64 * chart_width as f64;
                (full * self.progress).round() as u16
            } else {
                0
            };
            for x in 0..fill.min(chart_width) {
                buf.set_string(
                    track_x + x,
                    y,
                    "\u{2588}",
                    Style::default().fg(Theme::ink(tier)),
                );
            }

            if self.progress > 0.5 {
                let value = format!("{} ({:.1}%)", share.count, share.percentage);
                buf.set_string(
                    track_x + chart_width + 2,
                    y,
                    &value,
                    Style::default()
                        .fg(Theme::MUTED_TEXT)
                        .add_modifier(Modifier::BOLD),
                );
            }
        }
    }
}
