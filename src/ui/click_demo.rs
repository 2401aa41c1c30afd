use crate::app::state::{AppState, FocusPanel};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::ClickDemo;
    let block = super::panel_block(&state.theme, "Click Demo", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let button_line = Line::from(vec![
        Span::styled(" Click Me ", state.theme.button(focused)),
        Span::styled("  (Enter)", state.theme.text_muted()),
    ]);

    let message_line = match state.click.message {
        Some(msg) => Line::from(Span::styled(msg, state.theme.success())),
        None => Line::default(),
    };

    frame.render_widget(Paragraph::new(vec![button_line, message_line]), inner);
}
