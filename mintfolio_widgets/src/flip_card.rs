use mintfolio_core::{image_url, PhotoGroup};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Width and height of a gallery card in terminal cells
pub const CARD_WIDTH: u16 = 30;
pub const CARD_HEIGHT: u16 = 14;

/// A photo card with a front and (usually) a back face
pub struct FlipCardWidget<'a> {
    pub group: &'a PhotoGroup,
    pub selected: bool,
    pub flipped: bool,
}

impl<'a> FlipCardWidget<'a> {
    pub fn new(group: &'a PhotoGroup) -> Self {
        Self {
            group,
            selected: false,
            flipped: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn flipped(mut self, flipped: bool) -> Self {
        self.flipped = flipped;
        self
    }

    fn border_color(&self) -> ratatui::style::Color {
        if self.selected {
            Theme::CARD_SELECTED
        } else {
            Theme::CARD_BORDER
        }
    }
}

impl Widget for FlipCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < CARD_WIDTH || area.height < CARD_HEIGHT {
            return;
        }

        let border_style = Style::default().fg(self.border_color());
        let showing_back = self.flipped && self.group.has_back();

        // Selected cards use double borders, others rounded corners.
        if self.selected {
            draw_border(area, buf, border_style, ["\u{2554}", "\u{2557}", "\u{255a}", "\u{255d}", "\u{2550}", "\u{2551}"]);
        } else {
            draw_border(area, buf, border_style, ["\u{256d}", "\u{256e}", "\u{2570}", "\u{256f}", "\u{2500}", "\u{2502}"]);
        }

        // Photo area: a placeholder pattern with the asset path centered,
        // since the terminal cannot show the photograph itself.
        let photo_rows = area.height - 5;
        let fill_style = Style::default().fg(Theme::PHOTO_FILL);
        for y in 1..photo_rows {
            for x in 1..area.width - 1 {
                let pattern = if (x + y) % 2 == 0 {
                    "\u{2593}"
                } else {
                    "\u{2591}"
                }; // alternating shade blocks
                buf.set_string(area.x + x, area.y + y, pattern, fill_style);
            }
        }

        let photo = if showing_back {
            self.group
                .back_image
                .as_deref()
                .unwrap_or(&self.group.front_image)
        } else {
            self.group.front_image.as_str()
        };
        let asset = image_url(photo);
        let label = clip(&format!(" {asset} "), (area.width - 2) as usize);
        let label_x = area.x + area.width.saturating_sub(label.len() as u16) / 2;
        buf.set_string(
            label_x,
            area.y + photo_rows / 2,
            &label,
            Style::default().fg(Theme::BRIGHT_TEXT),
        );

        // Caption rows under the photo
        let caption_y = area.y + photo_rows;
        let inner_width = (area.width - 2) as usize;

        let subject = clip(&self.group.subject, inner_width);
        buf.set_string(
            area.x + 1,
            caption_y,
            &subject,
            Style::default()
                .fg(Theme::BRIGHT_TEXT)
                .add_modifier(Modifier::BOLD),
        );

        let view = if showing_back {
            format!("back view ({})", self.group.caption())
        } else {
            "front view".to_string()
        };
        buf.set_string(
            area.x + 1,
            caption_y + 1,
            clip(&view, inner_width),
            Style::default().fg(Theme::MUTED_TEXT),
        );

        // Per-edition ink lines on the back face; edition count up front.
        let detail = if showing_back {
            let tiers: Vec<String> = self
                .group
                .cards
                .iter()
                .flat_map(|card| card.rarities())
                .map(|tier| tier.display_name().to_string())
                .collect();
            clip(&tiers.join(", "), inner_width)
        } else if self.group.cards.len() == 1 {
            clip(
                self.group.cards[0].edition.as_deref().unwrap_or(""),
                inner_width,
            )
        } else {
            clip(&format!("{} editions", self.group.cards.len()), inner_width)
        };
        buf.set_string(
            area.x + 1,
            caption_y + 2,
            &detail,
            Style::default().fg(Theme::DIM_TEXT),
        );

        // Flip affordance on the bottom border, mirroring the web flip button
        if self.group.has_back() {
            let hint = if showing_back {
                " See Front "
            } else {
                " See Back "
            };
            let hint_x = area.x + area.width.saturating_sub(hint.len() as u16) / 2;
            buf.set_string(
                hint_x,
                area.y + area.height - 1,
                hint,
                Style::default().fg(Theme::GOLD),
            );
        }
    }
}

fn clip(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

// Corner/edge glyphs ordered: top-left, top-right, bottom-left,
// bottom-right, horizontal, vertical.
fn draw_border(area: Rect, buf: &mut Buffer, style: Style, glyphs: [&str; 6]) {
    let [tl, tr, bl, br, horizontal, vertical] = glyphs;

    buf.set_string(area.x, area.y, tl, style);
    for x in 1..area.width - 1 {
        buf.set_string(area.x + x, area.y, horizontal, style);
    }
    buf.set_string(area.x + area.width - 1, area.y, tr, style);

    for y in 1..area.height - 1 {
        buf.set_string(area.x, area.y + y, vertical, style);
        buf.set_string(area.x + area.width - 1, area.y + y, vertical, style);
        for x in 1..area.width - 1 {
            buf.set_string(area.x + x, area.y + y, " ", Style::default());
        }
    }

    buf.set_string(area.x, area.y + area.height - 1, bl, style);
    for x in 1..area.width - 1 {
        buf.set_string(area.x + x, area.y + area.height - 1, horizontal, style);
    }
    buf.set_string(
        area.x + area.width - 1,
        area.y + area.height - 1,
        br,
        style,
    );
}
