use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

use lockwatch_types::SectionKind;

/// Layout helper for consistent screen layouts
pub struct Layout;

impl Layout {
    /// Create the main layout with header, content, and status bar
    pub fn main(area: Rect) -> (Rect, Rect, Rect) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(1),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        (chunks[0], chunks[1], chunks[2])
    }

    /// Vertical constraint for a home screen section. Kinds this build
    /// does not know about get zero height and render nothing.
    pub fn section_constraint(kind: &SectionKind) -> Constraint {
        match kind {
            SectionKind::DeviceBar(_) => Constraint::Length(5),
            SectionKind::QuickActions => Constraint::Length(3),
            SectionKind::SettingsGrid(_) => Constraint::Length(8),
            SectionKind::ActivityLog(_) => Constraint::Min(4),
            SectionKind::ContactFooter => Constraint::Length(5),
            _ => Constraint::Length(0),
        }
    }

    /// Split the content area into one region per section, in order
    pub fn home_sections(area: Rect, kinds: &[&SectionKind]) -> Vec<Rect> {
        let constraints: Vec<Constraint> =
            kinds.iter().map(|k| Self::section_constraint(k)).collect();

        RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area)
            .to_vec()
    }

    /// Split a section area into the four settings tiles (2x2 grid)
    pub fn settings_grid(area: Rect) -> [Rect; 4] {
        let rows = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let top = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        let bottom = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        [top[0], top[1], bottom[0], bottom[1]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lockwatch_types::{DeviceInfo, SettingsInfo, compose_home_sections};

    #[test]
    fn test_one_region_per_section() {
        let device = DeviceInfo::new("Lock-A", 4.2, true);
        let settings = SettingsInfo::default();
        let sections = compose_home_sections(&device, &settings, &[]);

        let kinds: Vec<&SectionKind> = sections.iter().map(|s| &s.kind).collect();
        let area = Rect::new(0, 0, 80, 40);
        let regions = Layout::home_sections(area, &kinds);
        assert_eq!(regions.len(), sections.len());
    }

    #[test]
    fn test_settings_grid_is_two_by_two() {
        let area = Rect::new(0, 0, 40, 8);
        let tiles = Layout::settings_grid(area);
        assert_eq!(tiles.len(), 4);
        // Tiles in the same row share a y coordinate
        assert_eq!(tiles[0].y, tiles[1].y);
        assert_eq!(tiles[2].y, tiles[3].y);
        assert!(tiles[2].y > tiles[0].y);
    }
}
