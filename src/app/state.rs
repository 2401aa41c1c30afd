use crate::config::AppConfig;
use crate::form::FormState;
use crate::ui::theme::{Theme, ThemeName};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Single-line text editor shared by the keyboard demo and the form fields.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.text.len())
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.next_boundary();
            self.text.drain(self.cursor..next);
        }
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary();
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.next_boundary();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Take the current text, leaving the editor empty.
    pub fn take_text(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    ClickDemo,
    MouseDemo,
    KeyboardDemo,
    ThemePanel,
    Counter,
    Faq,
    Form,
}

impl FocusPanel {
    pub fn label(&self) -> &'static str {
        match self {
            FocusPanel::ClickDemo => "CLICK",
            FocusPanel::MouseDemo => "MOUSE",
            FocusPanel::KeyboardDemo => "KEYBOARD",
            FocusPanel::ThemePanel => "THEME",
            FocusPanel::Counter => "COUNTER",
            FocusPanel::Faq => "FAQ",
            FocusPanel::Form => "FORM",
        }
    }

    fn next(self) -> Self {
        match self {
            FocusPanel::ClickDemo => FocusPanel::MouseDemo,
            FocusPanel::MouseDemo => FocusPanel::KeyboardDemo,
            FocusPanel::KeyboardDemo => FocusPanel::ThemePanel,
            FocusPanel::ThemePanel => FocusPanel::Counter,
            FocusPanel::Counter => FocusPanel::Faq,
            FocusPanel::Faq => FocusPanel::Form,
            FocusPanel::Form => FocusPanel::ClickDemo,
        }
    }

    fn prev(self) -> Self {
        match self {
            FocusPanel::ClickDemo => FocusPanel::Form,
            FocusPanel::MouseDemo => FocusPanel::ClickDemo,
            FocusPanel::KeyboardDemo => FocusPanel::MouseDemo,
            FocusPanel::ThemePanel => FocusPanel::KeyboardDemo,
            FocusPanel::Counter => FocusPanel::ThemePanel,
            FocusPanel::Faq => FocusPanel::Counter,
            FocusPanel::Form => FocusPanel::Faq,
        }
    }
}

/// The delayed resets a widget can have in flight. At most one pending entry
/// exists per kind; scheduling again replaces the earlier deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetKind {
    ClickMessage,
    MouseStatus,
    FormClear,
}

#[derive(Debug)]
pub struct PendingReset {
    pub kind: ResetKind,
    pub due_at: Instant,
}

/// Display emphasis derived from a magnitude (input length, counter value).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Normal,
    Elevated,
    High,
}

fn emphasis_for(value: usize) -> Emphasis {
    if value > 10 {
        Emphasis::High
    } else if value > 5 {
        Emphasis::Elevated
    } else {
        Emphasis::Normal
    }
}

#[derive(Debug, Default)]
pub struct ClickDemoState {
    pub message: Option<&'static str>,
}

pub const CLICK_THANKS: &str = "Button clicked! Thanks for interacting with me!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseStatus {
    #[default]
    Waiting,
    Over,
    Left,
    Clicked,
}

impl MouseStatus {
    pub fn text(&self) -> &'static str {
        match self {
            MouseStatus::Waiting => "Status: Waiting for interaction",
            MouseStatus::Over => "Status: Mouse is over the box",
            MouseStatus::Left => "Status: Mouse left the box",
            MouseStatus::Clicked => "Status: Box was clicked!",
        }
    }
}

#[derive(Debug, Default)]
pub struct MouseDemoState {
    pub status: MouseStatus,
    /// Whether the pointer was inside the box at the last motion event.
    pub inside: bool,
}

/// What the keyboard demo's output line shows.
#[derive(Debug, Default, PartialEq, Eq)]
pub enum KeyboardOutput {
    #[default]
    Idle,
    /// Live echo of the editor contents ("You typed: ...").
    Echo,
    /// Enter was pressed; the editor was cleared and this is what it held.
    Final(String),
}

#[derive(Debug, Default)]
pub struct KeyboardDemoState {
    pub editor: InputState,
    pub output: KeyboardOutput,
}

impl KeyboardDemoState {
    /// Echo color threshold follows the typed length (>5, >10 characters).
    pub fn echo_emphasis(&self) -> Emphasis {
        emphasis_for(self.editor.text.chars().count())
    }
}

#[derive(Debug, Default)]
pub struct CounterState {
    pub value: u32,
}

impl CounterState {
    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    /// Decrement stops at zero; the counter never goes negative.
    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }

    pub fn emphasis(&self) -> Emphasis {
        emphasis_for(self.value as usize)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "What is this application?",
        answer: "A small playground of interactive widgets: event demos, a theme \
                 switcher, a counter, this FAQ and a validated registration form.",
    },
    FaqEntry {
        question: "How do I move between panels?",
        answer: "Tab and Shift-Tab cycle the focus. The focused panel is drawn \
                 with a highlighted border and listed in the status bar.",
    },
    FaqEntry {
        question: "Is my theme choice remembered?",
        answer: "Yes. Switching themes writes the choice to the config file, and \
                 it is read back the next time the application starts.",
    },
    FaqEntry {
        question: "Does the form send anything anywhere?",
        answer: "No. Submission is simulated entirely locally; the values never \
                 leave the terminal.",
    },
];

#[derive(Debug)]
pub struct FaqState {
    pub entries: &'static [FaqEntry],
    pub selected: usize,
    /// Index of the single open entry, if any (exclusive accordion).
    pub open: Option<usize>,
}

impl Default for FaqState {
    fn default() -> Self {
        Self {
            entries: FAQ_ENTRIES,
            selected: 0,
            open: None,
        }
    }
}

impl FaqState {
    pub fn select_next(&mut self) {
        if !self.entries.is_empty() {
            self.selected = (self.selected + 1) % self.entries.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.entries.is_empty() {
            self.selected = if self.selected == 0 {
                self.entries.len() - 1
            } else {
                self.selected - 1
            };
        }
    }

    /// Toggle the selected entry. Opening one closes whichever was open.
    pub fn toggle_selected(&mut self) {
        self.open = if self.open == Some(self.selected) {
            None
        } else {
            Some(self.selected)
        };
    }
}

#[derive(Debug, Default)]
pub struct ThemePanelState {
    pub selected: usize,
}

pub struct AppState {
    pub config: AppConfig,
    pub theme: Theme,
    pub focus: FocusPanel,
    pub click: ClickDemoState,
    pub mouse_demo: MouseDemoState,
    pub keyboard: KeyboardDemoState,
    pub counter: CounterState,
    pub faq: FaqState,
    pub theme_panel: ThemePanelState,
    pub form: FormState,
    pub pending_resets: Vec<PendingReset>,
    /// Last known terminal area, used to hit-test mouse events against the
    /// computed layout.
    pub screen_area: Rect,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let theme = Theme::new(config.theme);
        let theme_panel = ThemePanelState {
            selected: ThemeName::ALL
                .iter()
                .position(|n| *n == config.theme)
                .unwrap_or(0),
        };
        Self {
            config,
            theme,
            focus: FocusPanel::ClickDemo,
            click: ClickDemoState::default(),
            mouse_demo: MouseDemoState::default(),
            keyboard: KeyboardDemoState::default(),
            counter: CounterState::default(),
            faq: FaqState::default(),
            theme_panel,
            form: FormState::default(),
            pending_resets: Vec::new(),
            screen_area: Rect::default(),
            should_quit: false,
            dirty: true,
        }
    }

    pub fn set_theme(&mut self, name: ThemeName) {
        self.theme = Theme::new(name);
        self.config.theme = name;
        if let Some(idx) = ThemeName::ALL.iter().position(|n| *n == name) {
            self.theme_panel.selected = idx;
        }
        self.dirty = true;
    }

    /// Schedule a delayed reset, replacing any pending one of the same kind.
    pub fn schedule_reset(&mut self, kind: ResetKind, delay: Duration) {
        self.cancel_reset(kind);
        self.pending_resets.push(PendingReset {
            kind,
            due_at: Instant::now() + delay,
        });
    }

    /// Drop a pending reset; a superseding user action makes it stale.
    pub fn cancel_reset(&mut self, kind: ResetKind) {
        self.pending_resets.retain(|r| r.kind != kind);
    }

    pub fn take_due_resets(&mut self, now: Instant) -> Vec<ResetKind> {
        let mut due = Vec::new();
        self.pending_resets.retain(|r| {
            if now >= r.due_at {
                due.push(r.kind);
                false
            } else {
                true
            }
        });
        due
    }

    pub fn apply_reset(&mut self, kind: ResetKind) {
        match kind {
            ResetKind::ClickMessage => self.click.message = None,
            ResetKind::MouseStatus => self.mouse_demo.status = MouseStatus::Waiting,
            ResetKind::FormClear => self.form.clear(),
        }
        self.dirty = true;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
        self.dirty = true;
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = self.focus.prev();
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_floor_and_emphasis() {
        let mut counter = CounterState::default();
        counter.decrement();
        assert_eq!(counter.value, 0);
        for _ in 0..6 {
            counter.increment();
        }
        assert_eq!(counter.emphasis(), Emphasis::Elevated);
        for _ in 0..5 {
            counter.increment();
        }
        assert_eq!(counter.emphasis(), Emphasis::High);
        counter.reset();
        assert_eq!(counter.value, 0);
        assert_eq!(counter.emphasis(), Emphasis::Normal);
    }

    #[test]
    fn test_faq_exclusive_accordion() {
        let mut faq = FaqState::default();
        faq.toggle_selected();
        assert_eq!(faq.open, Some(0));
        faq.select_next();
        faq.toggle_selected();
        // opening the second entry closed the first
        assert_eq!(faq.open, Some(1));
        faq.toggle_selected();
        assert_eq!(faq.open, None);
    }

    #[test]
    fn test_faq_selection_wraps() {
        let mut faq = FaqState::default();
        faq.select_prev();
        assert_eq!(faq.selected, FAQ_ENTRIES.len() - 1);
        faq.select_next();
        assert_eq!(faq.selected, 0);
    }

    #[test]
    fn test_schedule_reset_replaces_pending() {
        let mut state = AppState::new(AppConfig::default());
        state.schedule_reset(ResetKind::ClickMessage, Duration::from_secs(3));
        state.schedule_reset(ResetKind::ClickMessage, Duration::from_secs(3));
        assert_eq!(
            state
                .pending_resets
                .iter()
                .filter(|r| r.kind == ResetKind::ClickMessage)
                .count(),
            1
        );
    }

    #[test]
    fn test_cancel_reset() {
        let mut state = AppState::new(AppConfig::default());
        state.schedule_reset(ResetKind::MouseStatus, Duration::from_secs(2));
        state.cancel_reset(ResetKind::MouseStatus);
        assert!(state.pending_resets.is_empty());
    }

    #[test]
    fn test_take_due_resets_leaves_future_ones() {
        let mut state = AppState::new(AppConfig::default());
        state.schedule_reset(ResetKind::ClickMessage, Duration::ZERO);
        state.schedule_reset(ResetKind::FormClear, Duration::from_secs(60));
        let due = state.take_due_resets(Instant::now());
        assert_eq!(due, vec![ResetKind::ClickMessage]);
        assert_eq!(state.pending_resets.len(), 1);
        assert_eq!(state.pending_resets[0].kind, ResetKind::FormClear);
    }

    #[test]
    fn test_apply_reset_clears_widget_state() {
        let mut state = AppState::new(AppConfig::default());
        state.click.message = Some(CLICK_THANKS);
        state.mouse_demo.status = MouseStatus::Left;
        state.apply_reset(ResetKind::ClickMessage);
        state.apply_reset(ResetKind::MouseStatus);
        assert_eq!(state.click.message, None);
        assert_eq!(state.mouse_demo.status, MouseStatus::Waiting);
    }

    #[test]
    fn test_input_state_editing() {
        let mut input = InputState::default();
        for c in "héllo".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.text, "héllo");
        input.delete_back();
        assert_eq!(input.text, "héll");
        input.move_home();
        input.delete_forward();
        assert_eq!(input.text, "éll");
        input.move_end();
        assert_eq!(input.take_text(), "éll");
        assert_eq!(input.text, "");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_input_delete_word_back() {
        let mut input = InputState::default();
        for c in "one two  ".chars() {
            input.insert_char(c);
        }
        input.delete_word_back();
        assert_eq!(input.text, "one ");
        input.delete_word_back();
        assert_eq!(input.text, "");
    }

    #[test]
    fn test_focus_cycle_roundtrip() {
        let mut state = AppState::new(AppConfig::default());
        let start = state.focus;
        for _ in 0..7 {
            state.cycle_focus();
        }
        assert_eq!(state.focus, start);
        state.cycle_focus();
        state.cycle_focus_back();
        assert_eq!(state.focus, start);
    }
}
