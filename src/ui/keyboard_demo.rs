use crate::app::state::{AppState, FocusPanel, KeyboardOutput};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const PROMPT: &str = "Type: ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::KeyboardDemo;
    let block = super::panel_block(&state.theme, "Keyboard Demo", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input_line = Line::from(vec![
        Span::styled(PROMPT, state.theme.text_muted()),
        Span::styled(state.keyboard.editor.text.as_str(), state.theme.text()),
    ]);

    let output_line = match &state.keyboard.output {
        KeyboardOutput::Idle => Line::default(),
        KeyboardOutput::Echo => Line::from(Span::styled(
            format!("You typed: {}", state.keyboard.editor.text),
            state.theme.emphasis(state.keyboard.echo_emphasis()),
        )),
        KeyboardOutput::Final(text) => Line::from(Span::styled(
            format!("You pressed Enter! Final input: {}", text),
            state.theme.danger(),
        )),
    };

    frame.render_widget(Paragraph::new(vec![input_line, output_line]), inner);

    if focused && inner.height > 0 {
        let editor = &state.keyboard.editor;
        let cursor_x = inner.x
            + PROMPT.width() as u16
            + editor.text[..editor.cursor].width() as u16;
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
    }
}
