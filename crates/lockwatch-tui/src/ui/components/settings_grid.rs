use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use lockwatch_types::SettingsInfo;

use crate::ui::{Layout, Theme};

/// Settings shortcuts section: four fixed tiles in a 2x2 grid, each
/// with a summary string interpolated from the credential counters.
/// All four render regardless of counts.
pub struct SettingsGrid<'a> {
    settings: &'a SettingsInfo,
}

impl<'a> SettingsGrid<'a> {
    pub fn new(settings: &'a SettingsInfo) -> Self {
        Self { settings }
    }

    /// Tile titles with their summary text, in grid order
    fn tiles(&self) -> [(&'static str, String); 4] {
        [
            ("passwords", self.settings.password_summary()),
            ("fingerprints", self.settings.fingerprint_summary()),
            ("nfc cards", self.settings.nfc_summary()),
            ("lock settings", "more settings...".to_string()),
        ]
    }
}

impl Widget for SettingsGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cells = Layout::settings_grid(area);

        for ((title, summary), cell) in self.tiles().into_iter().zip(cells) {
            let tile = Paragraph::new(Line::from(Span::styled(summary, Theme::text_dim())))
                .block(
                    Block::default()
                        .title(format!(" {} ", title))
                        .title_style(Theme::text_bold())
                        .borders(Borders::ALL)
                        .border_style(Theme::border()),
                );
            tile.render(cell, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_tiles_always_present() {
        let settings = SettingsInfo::default();
        let grid = SettingsGrid::new(&settings);
        let tiles = grid.tiles();
        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles[0].0, "passwords");
        assert_eq!(tiles[3].1, "more settings...");
    }

    #[test]
    fn test_tile_summaries_interpolate_counts() {
        let settings = SettingsInfo {
            password_count: 2,
            password_age_days: 3,
            fingerprint_count: 1,
            nfc_card_count: 2,
        };
        let grid = SettingsGrid::new(&settings);
        let tiles = grid.tiles();
        assert_eq!(tiles[0].1, "2 active · set 3 days ago");
        assert_eq!(tiles[1].1, "1 enrolled");
        assert_eq!(tiles[2].1, "2 cards registered");
    }
}
