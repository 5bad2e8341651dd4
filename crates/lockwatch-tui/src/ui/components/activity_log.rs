use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use lockwatch_types::ActivityRecord;

use crate::ui::Theme;

/// Activity log section: one line per record in supplied order, or a
/// single "no records" line when the log is empty
pub struct ActivityLog<'a> {
    records: &'a [ActivityRecord],
    scroll: usize,
}

impl<'a> ActivityLog<'a> {
    pub fn new(records: &'a [ActivityRecord], scroll: usize) -> Self {
        Self { records, scroll }
    }
}

impl Widget for ActivityLog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = record_lines(self.records);

        let visible = area.height.saturating_sub(2) as usize;
        let offset = clamp_scroll(self.scroll, lines.len(), visible);

        let paragraph = Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .block(
                Block::default()
                    .title(" activity ")
                    .title_style(Theme::title())
                    .borders(Borders::ALL)
                    .border_style(Theme::border()),
            );

        paragraph.render(area, buf);
    }
}

/// Build the display lines for the record list. Empty input yields
/// exactly one placeholder line; otherwise one line per record.
pub fn record_lines(records: &[ActivityRecord]) -> Vec<Line<'_>> {
    if records.is_empty() {
        return vec![Line::from(Span::styled("no records", Theme::text_dim()))];
    }

    records
        .iter()
        .map(|record| {
            Line::from(vec![
                Span::styled(record.record_time.as_str(), Theme::text_dim()),
                Span::styled(" · ", Theme::text_dim()),
                Span::styled(record.record_text.as_str(), Theme::text()),
                Span::styled(" · ", Theme::text_dim()),
                Span::styled(
                    record.outcome_label(),
                    Theme::status(record.outcome_color()),
                ),
            ])
        })
        .collect()
}

/// Clamp a requested scroll offset to the last full viewport
fn clamp_scroll(requested: usize, total: usize, visible: usize) -> usize {
    requested.min(total.saturating_sub(visible))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_log_renders_placeholder() {
        let lines = record_lines(&[]);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content, "no records");
    }

    #[test]
    fn test_one_line_per_record_in_order() {
        let records = vec![
            ActivityRecord::new("2022-12-14 22:31:12", "fingerprint unlock", true),
            ActivityRecord::new("2022-12-14 14:32:53", "auto lock", true),
            ActivityRecord::new("2022-12-14 14:32:11", "keypad unlock", false),
        ];

        let lines = record_lines(&records);
        assert_eq!(lines.len(), records.len());
        assert_eq!(lines[0].spans[2].content, "fingerprint unlock");
        assert_eq!(lines[2].spans[2].content, "keypad unlock");
        assert_eq!(lines[2].spans[4].content, "failure");
    }

    #[test]
    fn test_scroll_clamped_to_content() {
        assert_eq!(clamp_scroll(usize::MAX, 10, 4), 6);
        assert_eq!(clamp_scroll(3, 10, 4), 3);
        // Everything fits; no scrolling possible
        assert_eq!(clamp_scroll(5, 3, 4), 0);
    }
}
