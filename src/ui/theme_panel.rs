use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::ThemeName;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::ThemePanel;
    let block = super::panel_block(&state.theme, "Theme", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans: Vec<Span> = Vec::new();
    for (idx, name) in ThemeName::ALL.iter().enumerate() {
        let selected = focused && idx == state.theme_panel.selected;
        let active = *name == state.theme.name;
        let label = if active {
            format!(" {} ✓ ", name.name())
        } else {
            format!(" {} ", name.name())
        };
        spans.push(Span::styled(label, state.theme.button(selected)));
        spans.push(Span::raw(" "));
    }

    let hint = Line::from(Span::styled(
        "←/→ select · Enter apply · saved across sessions",
        state.theme.text_muted(),
    ));

    frame.render_widget(Paragraph::new(vec![Line::from(spans), hint]), inner);
}
