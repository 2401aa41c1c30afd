use crate::app::state::{AppState, FocusPanel, MouseStatus};
use crate::ui::layout;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::MouseDemo;
    let block = super::panel_block(&state.theme, "Mouse Demo", focused);
    frame.render_widget(block, area);

    // The hoverable box; same rect the handler hit-tests against.
    let target = layout::interactive_box(area);
    let box_style = if state.mouse_demo.inside {
        state.theme.border_focused()
    } else {
        state.theme.border()
    };
    let target_block = Block::default()
        .title(" hover / click me ")
        .title_style(state.theme.text_muted())
        .borders(Borders::ALL)
        .border_style(box_style);
    frame.render_widget(target_block, target);

    let status_style = match state.mouse_demo.status {
        MouseStatus::Waiting => state.theme.text_muted(),
        MouseStatus::Over => state.theme.success(),
        MouseStatus::Left => state.theme.danger(),
        MouseStatus::Clicked => state.theme.highlight(),
    };
    let status_area = Rect {
        y: target.bottom(),
        height: 1,
        ..target
    };
    frame.render_widget(
        Paragraph::new(Span::styled(state.mouse_demo.status.text(), status_style)),
        status_area,
    );
}
