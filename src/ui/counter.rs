use crate::app::state::{AppState, FocusPanel};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Counter;
    let block = super::panel_block(&state.theme, "Counter", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value_style = state
        .theme
        .emphasis(state.counter.emphasis())
        .add_modifier(Modifier::BOLD);
    let value_line = Line::from(vec![
        Span::styled(" − ", state.theme.button(focused)),
        Span::styled(format!("  {:^5}  ", state.counter.value), value_style),
        Span::styled(" + ", state.theme.button(focused)),
    ]);

    let hint = Line::from(Span::styled(
        "+/- adjust · r reset · never drops below zero",
        state.theme.text_muted(),
    ));

    frame.render_widget(Paragraph::new(vec![value_line, hint]), inner);
}
