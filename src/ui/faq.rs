use crate::app::state::{AppState, FocusPanel};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Faq;
    let block = super::panel_block(&state.theme, "FAQ", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for (idx, entry) in state.faq.entries.iter().enumerate() {
        let open = state.faq.open == Some(idx);
        let selected = focused && idx == state.faq.selected;
        let toggle = if open { "−" } else { "+" };

        let question_style = if selected {
            state.theme.highlight().add_modifier(Modifier::BOLD)
        } else {
            state.theme.text()
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", toggle), state.theme.highlight()),
            Span::styled(entry.question, question_style),
        ]));

        if open {
            lines.push(Line::from(Span::styled(
                format!("   {}", entry.answer),
                state.theme.text_muted(),
            )));
        }
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        inner,
    );
}
