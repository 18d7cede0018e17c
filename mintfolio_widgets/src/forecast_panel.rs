use mintfolio_core::Forecast;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget, Wrap};

use crate::theme::Theme;

/// Recommendation panel: an ink swatch, the tier name, and the rationale
pub struct ForecastPanel<'a> {
    pub forecast: &'a Forecast,
}

impl<'a> ForecastPanel<'a> {
    pub fn new(forecast: &'a Forecast) -> Self {
        Self { forecast }
    }
}

impl Widget for ForecastPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 5 {
            return;
        }

        let title = Line::from(Span::styled(
            " Next Mint Recommendation ",
            Style::default()
                .fg(Theme::GOLD)
                .add_modifier(Modifier::BOLD),
        ));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Theme::CARD_BORDER))
            .title(title)
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        block.render(area, buf);

        let ink = Theme::ink(self.forecast.recommended);
        let headline = Line::from(vec![
            Span::styled("\u{2588}\u{2588} ", Style::default().fg(ink)),
            Span::styled(
                self.forecast.recommended.display_name(),
                Style::default().fg(ink).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ink", Style::default().fg(Theme::MUTED_TEXT)),
        ]);
        buf.set_line(inner.x, inner.y, &headline, inner.width);

        if inner.height > 2 {
            let rationale_area = Rect::new(
                inner.x,
                inner.y + 2,
                inner.width,
                inner.height - 2,
            );
            Paragraph::new(self.forecast.rationale.as_str())
                .style(Style::default().fg(Theme::MUTED_TEXT))
                .wrap(Wrap { trim: true })
                .render(rationale_area, buf);
        }
    }
}
