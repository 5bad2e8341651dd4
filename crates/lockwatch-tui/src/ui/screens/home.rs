use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use lockwatch_types::SectionKind;

use crate::{
    app::AppState,
    ui::{
        Layout, Theme,
        components::{
            ActivityLog, ContactFooter, DeviceBar, QuickActions, SettingsGrid, StatusBar,
            home_hints,
        },
    },
};

/// Home screen: the composed section list rendered top to bottom
pub struct HomeScreen;

impl HomeScreen {
    pub fn render(frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        let (header_area, content_area, status_area) = Layout::main(area);

        Self::render_header(frame, header_area, state);
        Self::render_sections(frame, content_area, state);
        Self::render_status_bar(frame, status_area, state);
    }

    fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
        let title = Line::from(vec![
            Span::styled("lockwatch", Theme::title()),
            Span::styled(" │ ", Theme::text_dim()),
            Span::styled(state.device.display_name(), Theme::text()),
            Span::styled(" │ ", Theme::text_dim()),
            Span::styled("Home", Theme::text()),
        ]);

        let header = Paragraph::new(title).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        );

        frame.render_widget(header, area);
    }

    /// Dispatch each section to its rendering routine by kind. A kind
    /// this build does not recognize renders nothing.
    fn render_sections(frame: &mut Frame, area: Rect, state: &AppState) {
        let kinds: Vec<&SectionKind> = state.sections.iter().map(|s| &s.kind).collect();
        let regions = Layout::home_sections(area, &kinds);

        for (section, region) in state.sections.iter().zip(regions) {
            match &section.kind {
                SectionKind::DeviceBar(device) => {
                    frame.render_widget(DeviceBar::new(device), region);
                }
                SectionKind::QuickActions => {
                    frame.render_widget(QuickActions, region);
                }
                SectionKind::SettingsGrid(settings) => {
                    frame.render_widget(SettingsGrid::new(settings), region);
                }
                SectionKind::ActivityLog(records) => {
                    frame.render_widget(
                        ActivityLog::new(records, state.ui_state.activity_scroll),
                        region,
                    );
                }
                SectionKind::ContactFooter => {
                    frame.render_widget(ContactFooter, region);
                }
                _ => {}
            }
        }
    }

    fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
        let status = StatusBar::new().hints(home_hints());

        let status = if let Some(error) = &state.ui_state.error_message {
            status.right_error(error.clone())
        } else {
            let right = format!(
                "{} · {}",
                state.device.lock_label(),
                state.device.battery_label()
            );
            status.right(right)
        };

        frame.render_widget(status, area);
    }
}
