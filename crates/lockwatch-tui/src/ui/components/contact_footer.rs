use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::Theme;

/// Contact footer section: fixed static text, no inputs
pub struct ContactFooter;

impl Widget for ContactFooter {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                "· lockwatch · smart lock companion",
                Theme::text_dim(),
            )),
            Line::from(Span::styled(
                "· support: support@lockwatch.example",
                Theme::text_dim(),
            )),
            Line::from(Span::styled(
                "· source: https://github.com/lockwatch/lockwatch",
                Theme::text_dim(),
            )),
        ];

        Paragraph::new(lines).render(area, buf);
    }
}
