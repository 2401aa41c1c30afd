mod click_demo;
mod counter;
mod faq;
mod form;
mod keyboard_demo;
pub mod layout;
mod mouse_demo;
mod status_bar;
mod theme_panel;
pub mod theme;

use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Paint the themed background before any panel draws over it.
    frame.render_widget(Block::default().style(state.theme.root()), area);

    let panels = layout::compute_layout(area);

    click_demo::render(frame, panels.click_demo, state);
    mouse_demo::render(frame, panels.mouse_demo, state);
    keyboard_demo::render(frame, panels.keyboard_demo, state);
    theme_panel::render(frame, panels.theme_panel, state);
    counter::render(frame, panels.counter, state);
    faq::render(frame, panels.faq, state);
    form::render(frame, panels.form, state);
    status_bar::render(frame, panels.status_bar, state);
}

/// Bordered panel frame with the shared focused/unfocused styling.
fn panel_block(theme: &Theme, title: &str, focused: bool) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(if focused {
            theme.title()
        } else {
            theme.text_muted()
        })
        .borders(Borders::ALL)
        .border_style(if focused {
            theme.border_focused()
        } else {
            theme.border()
        })
}
