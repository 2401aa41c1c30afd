use crate::ui::theme::ThemeName;

/// Side effects the handler cannot perform itself. Applied in `main` after
/// each event is handled.
#[derive(Debug)]
pub enum Action {
    /// Apply a theme and persist the choice to the config file.
    SetTheme(ThemeName),
    Quit,
}
