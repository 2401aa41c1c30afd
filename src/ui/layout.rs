use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub click_demo: Rect,
    pub mouse_demo: Rect,
    pub keyboard_demo: Rect,
    pub theme_panel: Rect,
    pub counter: Rect,
    pub faq: Rect,
    pub form: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Horizontal: demos column | FAQ + form column
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Percentage(45), // Left: event demos, theme, counter
            Constraint::Min(40),        // Right: FAQ and registration form
        ])
        .split(content);

    let left_panel = h_chunks[0];
    let right_panel = h_chunks[1];

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Click demo
            Constraint::Length(6), // Mouse demo (box + status line)
            Constraint::Length(4), // Keyboard demo
            Constraint::Length(4), // Theme switcher
            Constraint::Min(4),    // Counter
        ])
        .split(left_panel);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),     // FAQ accordion
            Constraint::Length(15), // Registration form
        ])
        .split(right_panel);

    AppLayout {
        click_demo: left_chunks[0],
        mouse_demo: left_chunks[1],
        keyboard_demo: left_chunks[2],
        theme_panel: left_chunks[3],
        counter: left_chunks[4],
        faq: right_chunks[0],
        form: right_chunks[1],
        status_bar,
    }
}

/// The hoverable box inside the mouse demo panel: the panel interior minus
/// the status line at the bottom. The handler hit-tests mouse events against
/// this same rect, so the geometry lives here rather than in the renderer.
pub fn interactive_box(panel: Rect) -> Rect {
    let inner = Rect {
        x: panel.x.saturating_add(1),
        y: panel.y.saturating_add(1),
        width: panel.width.saturating_sub(2),
        height: panel.height.saturating_sub(2),
    };
    Rect {
        height: inner.height.saturating_sub(1),
        ..inner
    }
}
