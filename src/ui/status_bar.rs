use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        " pagelab ",
        state.theme.status_bar().add_modifier(Modifier::BOLD),
    ));
    parts.push(Span::styled(
        format!(" theme:{} ", state.theme.name.name()),
        state.theme.status_bar(),
    ));
    parts.push(Span::styled(
        " Tab focus · Ctrl+C quit ",
        state.theme.status_bar(),
    ));

    let focus_name = state.focus.label();

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.len()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), state.theme.status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        state.theme.status_bar().add_modifier(Modifier::BOLD),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
