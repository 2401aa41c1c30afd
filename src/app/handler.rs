use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::form::{FormResult, FormRow};
use crate::ui::layout;
use crate::ui::theme::ThemeName;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Delay before the click demo's thank-you message is cleared.
const CLICK_MESSAGE_RESET: Duration = Duration::from_secs(3);
/// Delay before the mouse demo returns to its idle status after a leave.
const MOUSE_STATUS_RESET: Duration = Duration::from_secs(2);
/// Delay before a successfully submitted form is cleared.
const FORM_CLEAR_DELAY: Duration = Duration::from_secs(3);

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            handle_tick(state);
            vec![]
        }
    }
}

fn handle_tick(state: &mut AppState) {
    let now = Instant::now();
    for kind in state.take_due_resets(now) {
        debug!(?kind, "delayed reset fired");
        state.apply_reset(kind);
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => {
            handle_mouse(state, mouse);
            vec![]
        }
        CEvent::Resize(w, h) => {
            state.screen_area = ratatui::layout::Rect::new(0, 0, w, h);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    state.dirty = true;

    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        return vec![Action::Quit];
    }
    match key.code {
        KeyCode::Tab => {
            state.cycle_focus();
            return vec![];
        }
        KeyCode::BackTab => {
            state.cycle_focus_back();
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        FocusPanel::ClickDemo => handle_click_demo_key(state, key),
        FocusPanel::MouseDemo => handle_mouse_demo_key(state, key),
        FocusPanel::KeyboardDemo => handle_keyboard_key(state, key),
        FocusPanel::ThemePanel => return handle_theme_key(state, key),
        FocusPanel::Counter => handle_counter_key(state, key),
        FocusPanel::Faq => handle_faq_key(state, key),
        FocusPanel::Form => handle_form_key(state, key),
    }
    vec![]
}

fn handle_click_demo_key(state: &mut AppState, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
        state.click.message = Some(CLICK_THANKS);
        state.schedule_reset(ResetKind::ClickMessage, CLICK_MESSAGE_RESET);
    }
}

fn handle_mouse_demo_key(state: &mut AppState, key: KeyEvent) {
    // Keyboard stand-in for clicking the box
    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
        state.mouse_demo.status = MouseStatus::Clicked;
        state.cancel_reset(ResetKind::MouseStatus);
    }
}

fn handle_keyboard_key(state: &mut AppState, key: KeyEvent) {
    let demo = &mut state.keyboard;
    match key.code {
        KeyCode::Enter => {
            let text = demo.editor.take_text();
            demo.output = KeyboardOutput::Final(text);
        }
        KeyCode::Backspace => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                demo.editor.delete_word_back();
            } else {
                demo.editor.delete_back();
            }
            demo.output = KeyboardOutput::Echo;
        }
        KeyCode::Delete => {
            demo.editor.delete_forward();
            demo.output = KeyboardOutput::Echo;
        }
        KeyCode::Left => demo.editor.move_left(),
        KeyCode::Right => demo.editor.move_right(),
        KeyCode::Home => demo.editor.move_home(),
        KeyCode::End => demo.editor.move_end(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'a' => demo.editor.move_home(),
                    'e' => demo.editor.move_end(),
                    'w' => {
                        demo.editor.delete_word_back();
                        demo.output = KeyboardOutput::Echo;
                    }
                    'u' => {
                        demo.editor.clear();
                        demo.output = KeyboardOutput::Echo;
                    }
                    _ => {}
                }
            } else {
                demo.editor.insert_char(c);
                demo.output = KeyboardOutput::Echo;
            }
        }
        _ => {}
    }
}

fn handle_theme_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let panel = &mut state.theme_panel;
    match key.code {
        KeyCode::Left | KeyCode::Up => {
            panel.selected = if panel.selected == 0 {
                ThemeName::ALL.len() - 1
            } else {
                panel.selected - 1
            };
        }
        KeyCode::Right | KeyCode::Down => {
            panel.selected = (panel.selected + 1) % ThemeName::ALL.len();
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let name = ThemeName::ALL[panel.selected];
            info!(theme = name.name(), "theme selected");
            return vec![Action::SetTheme(name)];
        }
        KeyCode::Char(c @ '1'..='3') => {
            let idx = (c as usize) - ('1' as usize);
            panel.selected = idx;
            return vec![Action::SetTheme(ThemeName::ALL[idx])];
        }
        _ => {}
    }
    vec![]
}

fn handle_counter_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up | KeyCode::Right => {
            state.counter.increment();
        }
        KeyCode::Char('-') | KeyCode::Down | KeyCode::Left => {
            state.counter.decrement();
        }
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('0') => {
            state.counter.reset();
        }
        _ => {}
    }
}

fn handle_faq_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up => state.faq.select_prev(),
        KeyCode::Down => state.faq.select_next(),
        KeyCode::Enter | KeyCode::Char(' ') => state.faq.toggle_selected(),
        _ => {}
    }
}

fn handle_form_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up => state.form.select_prev(),
        KeyCode::Down => state.form.select_next(),
        KeyCode::Enter => submit_form(state),
        KeyCode::Backspace => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                edit_form(state, |editor| editor.delete_word_back());
            } else {
                edit_form(state, |editor| editor.delete_back());
            }
        }
        KeyCode::Delete => edit_form(state, |editor| editor.delete_forward()),
        KeyCode::Left => edit_form(state, |editor| editor.move_left()),
        KeyCode::Right => edit_form(state, |editor| editor.move_right()),
        KeyCode::Home => edit_form(state, |editor| editor.move_home()),
        KeyCode::End => edit_form(state, |editor| editor.move_end()),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'a' => edit_form(state, |editor| editor.move_home()),
                    'e' => edit_form(state, |editor| editor.move_end()),
                    'w' => edit_form(state, |editor| editor.delete_word_back()),
                    'u' => edit_form(state, |editor| editor.clear()),
                    _ => {}
                }
            } else {
                edit_form(state, |editor| editor.insert_char(c));
            }
        }
        _ => {}
    }
}

/// Any edit supersedes a post-success clear still in flight: the pending
/// reset is cancelled and the success banner dismissed before the keystroke
/// lands, so a stale timer can never wipe text the user is typing.
fn edit_form(state: &mut AppState, edit: impl FnOnce(&mut InputState)) {
    if state.form.selected_row() == FormRow::Submit {
        return;
    }
    if state.form.result == Some(FormResult::Success) {
        state.cancel_reset(ResetKind::FormClear);
        state.form.result = None;
    }
    state.form.edit_selected(edit);
}

fn submit_form(state: &mut AppState) {
    match state.form.submit() {
        FormResult::Success => {
            info!("form submitted successfully");
            state.schedule_reset(ResetKind::FormClear, FORM_CLEAR_DELAY);
        }
        FormResult::Failure => {
            debug!("form submission rejected");
        }
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let panels = layout::compute_layout(state.screen_area);
    let target = layout::interactive_box(panels.mouse_demo);
    let inside = target.contains(Position::new(mouse.column, mouse.row));

    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            if inside && !state.mouse_demo.inside {
                state.mouse_demo.inside = true;
                state.mouse_demo.status = MouseStatus::Over;
                state.cancel_reset(ResetKind::MouseStatus);
                state.dirty = true;
            } else if !inside && state.mouse_demo.inside {
                state.mouse_demo.inside = false;
                state.mouse_demo.status = MouseStatus::Left;
                state.schedule_reset(ResetKind::MouseStatus, MOUSE_STATUS_RESET);
                state.dirty = true;
            }
        }
        MouseEventKind::Down(MouseButton::Left) if inside => {
            state.mouse_demo.status = MouseStatus::Clicked;
            state.cancel_reset(ResetKind::MouseStatus);
            state.dirty = true;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::form::FieldId;
    use ratatui::layout::Rect;

    fn test_state() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.screen_area = Rect::new(0, 0, 120, 40);
        state
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn ctrl(c: char) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> AppEvent {
        AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut state = test_state();
        let actions = handle_event(&mut state, ctrl('c'));
        assert!(matches!(actions.as_slice(), [Action::Quit]));
    }

    #[test]
    fn test_click_demo_sets_message_and_schedules_reset() {
        let mut state = test_state();
        assert_eq!(state.focus, FocusPanel::ClickDemo);
        handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(state.click.message, Some(CLICK_THANKS));
        assert!(state
            .pending_resets
            .iter()
            .any(|r| r.kind == ResetKind::ClickMessage));
    }

    #[test]
    fn test_keyboard_demo_echo_and_enter() {
        let mut state = test_state();
        state.focus = FocusPanel::KeyboardDemo;
        type_text(&mut state, "hello");
        assert_eq!(state.keyboard.editor.text, "hello");
        assert_eq!(state.keyboard.output, KeyboardOutput::Echo);
        handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(
            state.keyboard.output,
            KeyboardOutput::Final("hello".to_string())
        );
        assert_eq!(state.keyboard.editor.text, "");
    }

    #[test]
    fn test_theme_key_emits_set_theme() {
        let mut state = test_state();
        state.focus = FocusPanel::ThemePanel;
        handle_event(&mut state, key(KeyCode::Right));
        let actions = handle_event(&mut state, key(KeyCode::Enter));
        assert!(matches!(actions.as_slice(), [Action::SetTheme(_)]));
    }

    #[test]
    fn test_counter_keys() {
        let mut state = test_state();
        state.focus = FocusPanel::Counter;
        handle_event(&mut state, key(KeyCode::Char('-')));
        assert_eq!(state.counter.value, 0);
        handle_event(&mut state, key(KeyCode::Char('+')));
        handle_event(&mut state, key(KeyCode::Up));
        assert_eq!(state.counter.value, 2);
        handle_event(&mut state, key(KeyCode::Char('r')));
        assert_eq!(state.counter.value, 0);
    }

    #[test]
    fn test_faq_toggle_via_keys() {
        let mut state = test_state();
        state.focus = FocusPanel::Faq;
        handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(state.faq.open, Some(0));
        handle_event(&mut state, key(KeyCode::Down));
        handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(state.faq.open, Some(1));
    }

    fn fill_form_valid(state: &mut AppState) {
        state.focus = FocusPanel::Form;
        let values = [
            "Ada Lovelace",
            "ada@example.org",
            "Abcdefg1",
            "Abcdefg1",
            "36",
        ];
        for value in values {
            type_text(state, value);
            handle_event(state, key(KeyCode::Down));
        }
    }

    #[test]
    fn test_form_submit_success_schedules_clear() {
        let mut state = test_state();
        fill_form_valid(&mut state);
        handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(state.form.result, Some(FormResult::Success));
        assert!(state
            .pending_resets
            .iter()
            .any(|r| r.kind == ResetKind::FormClear));
    }

    #[test]
    fn test_form_submit_failure_keeps_values() {
        let mut state = test_state();
        state.focus = FocusPanel::Form;
        type_text(&mut state, "Ada");
        handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(state.form.result, Some(FormResult::Failure));
        assert_eq!(state.form.value(FieldId::Name), "Ada");
        assert!(state.pending_resets.is_empty());
    }

    #[test]
    fn test_form_edit_after_success_cancels_clear() {
        let mut state = test_state();
        fill_form_valid(&mut state);
        handle_event(&mut state, key(KeyCode::Enter));
        // move back to a field and start correcting
        handle_event(&mut state, key(KeyCode::Down));
        handle_event(&mut state, key(KeyCode::Char('x')));
        assert_eq!(state.form.result, None);
        assert!(!state
            .pending_resets
            .iter()
            .any(|r| r.kind == ResetKind::FormClear));
    }

    #[test]
    fn test_tick_applies_due_reset() {
        let mut state = test_state();
        handle_event(&mut state, key(KeyCode::Enter));
        assert!(state.click.message.is_some());
        // force the deadline into the past
        for reset in &mut state.pending_resets {
            reset.due_at = Instant::now() - Duration::from_millis(1);
        }
        state.dirty = false;
        handle_event(&mut state, AppEvent::Tick);
        assert_eq!(state.click.message, None);
        assert!(state.dirty);
    }

    #[test]
    fn test_mouse_enter_leave_click() {
        let mut state = test_state();
        let panels = layout::compute_layout(state.screen_area);
        let target = layout::interactive_box(panels.mouse_demo);
        let (cx, cy) = (
            target.x + target.width / 2,
            target.y + target.height / 2,
        );

        handle_event(&mut state, mouse(MouseEventKind::Moved, cx, cy));
        assert_eq!(state.mouse_demo.status, MouseStatus::Over);

        handle_event(&mut state, mouse(MouseEventKind::Moved, 0, 0));
        assert_eq!(state.mouse_demo.status, MouseStatus::Left);
        assert!(state
            .pending_resets
            .iter()
            .any(|r| r.kind == ResetKind::MouseStatus));

        // re-entering supersedes the pending idle reset
        handle_event(&mut state, mouse(MouseEventKind::Moved, cx, cy));
        assert!(state.pending_resets.is_empty());

        handle_event(
            &mut state,
            mouse(MouseEventKind::Down(MouseButton::Left), cx, cy),
        );
        assert_eq!(state.mouse_demo.status, MouseStatus::Clicked);
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut state = test_state();
        handle_event(&mut state, key(KeyCode::Tab));
        assert_eq!(state.focus, FocusPanel::MouseDemo);
        handle_event(&mut state, key(KeyCode::BackTab));
        assert_eq!(state.focus, FocusPanel::ClickDemo);
    }
}
