use crate::app::state::{AppState, FocusPanel};
use crate::form::{FieldId, FormResult, FormRow};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const LABEL_WIDTH: usize = 18;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Form;
    let block = super::panel_block(&state.theme, "Registration", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    for id in FieldId::ALL {
        let field = state.form.field(id);
        let selected = focused && state.form.selected_row() == FormRow::Field(id);

        let label_style = if selected {
            state.theme.highlight().add_modifier(Modifier::BOLD)
        } else {
            state.theme.text_muted()
        };
        let mark = field.verdict.map(|v| v.is_valid());
        let value = display_value(id, &field.editor.text);

        let mut spans = vec![
            Span::styled(format!("{:<LABEL_WIDTH$}", format!("{}:", id.label())), label_style),
            Span::styled(value, state.theme.field_mark(mark)),
        ];
        if field.is_marked_valid() {
            spans.push(Span::styled(" ✓", state.theme.success()));
        }
        lines.push(Line::from(spans));

        // Inline error slot; empty unless the field is marked invalid.
        lines.push(Line::from(Span::styled(
            format!("{:LABEL_WIDTH$}{}", "", field.error_message()),
            state.theme.danger(),
        )));
    }

    lines.push(Line::default());

    let submit_selected = focused && state.form.selected_row() == FormRow::Submit;
    lines.push(Line::from(vec![
        Span::raw(" ".repeat(LABEL_WIDTH)),
        Span::styled(" Submit ", state.theme.button(submit_selected)),
        Span::styled("  (Enter)", state.theme.text_muted()),
    ]));

    let result_line = match state.form.result {
        Some(FormResult::Success) => Line::from(Span::styled(
            "Form submitted successfully!",
            state.theme.success().add_modifier(Modifier::BOLD),
        )),
        Some(FormResult::Failure) => Line::from(Span::styled(
            "Please fix the errors above.",
            state.theme.danger().add_modifier(Modifier::BOLD),
        )),
        None => Line::default(),
    };
    lines.push(result_line);

    frame.render_widget(Paragraph::new(lines), inner);

    // Cursor on the selected field's value
    if focused {
        if let FormRow::Field(id) = state.form.selected_row() {
            if let Some(row) = FieldId::ALL.iter().position(|f| *f == id) {
                let editor = &state.form.field(id).editor;
                let typed_width = if id.is_secret() {
                    editor.text[..editor.cursor].chars().count()
                } else {
                    editor.text[..editor.cursor].width()
                };
                let cursor_x = inner.x + LABEL_WIDTH as u16 + typed_width as u16;
                let cursor_y = inner.y + (row as u16) * 2;
                if cursor_y < inner.bottom() {
                    frame.set_cursor_position((
                        cursor_x.min(inner.right().saturating_sub(1)),
                        cursor_y,
                    ));
                }
            }
        }
    }
}

/// Secret fields render one bullet per character.
fn display_value(id: FieldId, text: &str) -> String {
    if id.is_secret() {
        "•".repeat(text.chars().count())
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_fields_are_masked() {
        assert_eq!(display_value(FieldId::Password, "abc"), "•••");
        assert_eq!(display_value(FieldId::Confirm, ""), "");
        assert_eq!(display_value(FieldId::Name, "Ada"), "Ada");
    }
}
