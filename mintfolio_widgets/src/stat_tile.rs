use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

use crate::theme::Theme;

/// One tile of the statistics grid: a big number over its label, with an
/// optional percentage detail. `progress` scales the displayed values
/// during the counter reveal; pass 1.0 for the settled state.
pub struct StatTile {
    pub value: usize,
    pub label: String,
    pub accent: Color,
    pub percent: Option<f64>,
    pub progress: f64,
}

impl StatTile {
    pub fn new(value: usize, label: impl Into<String>, accent: Color) -> Self {
        Self {
            value,
            label: label.into(),
            accent,
            percent: None,
            progress: 1.0,
        }
    }

    pub fn percent(mut self, percent: f64) -> Self {
        self.percent = Some(percent);
        self
    }

    pub fn progress(mut self, progress: f64) -> Self {
        self.progress = progress.clamp(0.0, 1.0);
        self
    }
}

impl Widget for StatTile {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 8 || area.height < 4 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Theme::CARD_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        // Counter reveal: the number climbs toward its target and snaps
        // exact at the end.
        let shown = if self.progress >= 1.0 {
            self.value
        } else {
            (self.value as f64 * self.progress).round() as usize
        };

        let value_text = shown.to_string();
        let value_x = inner.x + inner.width.saturating_sub(value_text.len() as u16) / 2;
        buf.set_string(
            value_x,
            inner.y,
            &value_text,
            Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD),
        );

        let label_x = inner.x + inner.width.saturating_sub(self.label.len() as u16) / 2;
        buf.set_string(
            label_x,
            inner.y + 1,
            &self.label,
            Style::default().fg(Theme::MUTED_TEXT),
        );

        if let Some(percent) = self.percent {
            let text = format!("{:.1}%", percent * self.progress);
            let x = inner.x + inner.width.saturating_sub(text.len() as u16) / 2;
            if inner.height >= 3 {
                buf.set_string(x, inner.y + 2, &text, Style::default().fg(Theme::DIM_TEXT));
            }
        }
    }
}
