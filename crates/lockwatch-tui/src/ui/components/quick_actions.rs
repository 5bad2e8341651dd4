use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::Theme;

/// Primary actions section: exactly two fixed buttons. Display only;
/// nothing is wired to a device link.
pub struct QuickActions;

impl Widget for QuickActions {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled("[ unlock ]", Theme::text_bold()),
            Span::raw("      "),
            Span::styled("[ lock ]", Theme::text_bold()),
        ]);

        let paragraph = Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        );

        paragraph.render(area, buf);
    }
}
