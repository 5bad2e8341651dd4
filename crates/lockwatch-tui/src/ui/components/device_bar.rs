use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use lockwatch_types::DeviceInfo;

use crate::ui::Theme;

/// Character width of the battery fill bar
const BAR_WIDTH: usize = 20;

/// Device status section: name, lock state, and battery voltage with a
/// proportional fill bar
pub struct DeviceBar<'a> {
    device: &'a DeviceInfo,
}

impl<'a> DeviceBar<'a> {
    pub fn new(device: &'a DeviceInfo) -> Self {
        Self { device }
    }
}

impl Widget for DeviceBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let device = self.device;

        let name_line = Line::from(vec![
            Span::styled(device.display_name().to_string(), Theme::text_bold()),
            Span::styled("  ⇄ switch device", Theme::text_dim()),
        ]);

        let lock_line = Line::from(vec![
            Span::styled("▌ ", Theme::status(device.lock_color())),
            Span::styled(device.lock_label(), Theme::status(device.lock_color())),
        ]);

        let (filled, empty) = bar_cells(device.battery_percent(), BAR_WIDTH);
        let battery_line = Line::from(vec![
            Span::styled("voltage ", Theme::text_dim()),
            Span::styled(device.battery_label(), Theme::status(device.battery_color())),
            Span::raw(" "),
            Span::styled("█".repeat(filled), Theme::status(device.battery_color())),
            Span::styled("░".repeat(empty), Theme::text_dim()),
        ]);

        let paragraph = Paragraph::new(vec![name_line, lock_line, battery_line]).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        );

        paragraph.render(area, buf);
    }
}

/// Split a bar of `width` cells into filled and empty counts for the
/// given fill percentage
fn bar_cells(percent: u16, width: usize) -> (usize, usize) {
    let filled = (width * usize::from(percent.min(100))) / 100;
    (filled, width - filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_cells_proportional() {
        // 84% of 20 cells
        assert_eq!(bar_cells(84, 20), (16, 4));
        assert_eq!(bar_cells(0, 20), (0, 20));
        assert_eq!(bar_cells(100, 20), (20, 0));
    }

    #[test]
    fn test_bar_cells_clamped() {
        assert_eq!(bar_cells(150, 20), (20, 0));
    }
}
