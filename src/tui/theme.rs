//! Color palettes for the picker

use std::io::IsTerminal;

use ratatui::prelude::*;

use crate::config::ThemeMode;

/// Terminal backgrounds brighter than this count as light
const LIGHT_LUMA_THRESHOLD: f32 = 0.6;

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    // Header line ("Select a PR ...")
    pub header_style: Style,
    pub count_color: Color,

    // List rows
    pub row_style: Style,
    pub row_selected: Style,
    pub group_color: Color,
    pub number_color: Color,

    // Hint line
    pub muted: Color,
    pub key_color: Color,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            header_style: Style::new().fg(Color::Cyan).bold(),
            count_color: Color::Gray,
            row_style: Style::new().fg(Color::White),
            row_selected: Style::new().fg(Color::LightGreen).bold(),
            group_color: Color::Cyan,
            number_color: Color::DarkGray,
            muted: Color::Gray,
            key_color: Color::Cyan,
        }
    }

    pub fn light() -> Self {
        Self {
            header_style: Style::new().fg(Color::Blue).bold(),
            count_color: Color::DarkGray,
            row_style: Style::new().fg(Color::Black),
            row_selected: Style::new().fg(Color::Green).bold(),
            group_color: Color::Blue,
            number_color: Color::Gray,
            muted: Color::DarkGray,
            key_color: Color::Blue,
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::dark()
    }
}

/// Pick a palette for the configured mode. `Auto` asks the terminal for its
/// background luma and falls back to dark when the terminal does not answer.
pub fn resolve_theme(mode: ThemeMode) -> ThemeColors {
    resolve_theme_for(mode, std::io::stdout().is_terminal(), || {
        terminal_light::luma().ok()
    })
}

/// The luma query writes to stdout, so it only runs when stdout is a terminal.
/// Redirected output stays clean and falls back to dark.
fn resolve_theme_for<F>(mode: ThemeMode, stdout_is_tty: bool, query_luma: F) -> ThemeColors
where
    F: FnOnce() -> Option<f32>,
{
    match mode {
        ThemeMode::Dark => ThemeColors::dark(),
        ThemeMode::Light => ThemeColors::light(),
        ThemeMode::Auto if !stdout_is_tty => ThemeColors::dark(),
        ThemeMode::Auto => match query_luma() {
            Some(luma) => theme_for_luma(luma),
            None => ThemeColors::dark(),
        },
    }
}

fn theme_for_luma(luma: f32) -> ThemeColors {
    if luma > LIGHT_LUMA_THRESHOLD {
        ThemeColors::light()
    } else {
        ThemeColors::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_modes() {
        assert_eq!(resolve_theme(ThemeMode::Dark), ThemeColors::dark());
        assert_eq!(resolve_theme(ThemeMode::Light), ThemeColors::light());
    }

    #[test]
    fn test_auto_skips_query_when_stdout_redirected() {
        let queried = std::cell::Cell::new(false);
        let theme = resolve_theme_for(ThemeMode::Auto, false, || {
            queried.set(true);
            Some(0.9)
        });
        assert!(!queried.get());
        assert_eq!(theme, ThemeColors::dark());
    }

    #[test]
    fn test_auto_queries_on_terminal() {
        assert_eq!(
            resolve_theme_for(ThemeMode::Auto, true, || Some(0.9)),
            ThemeColors::light()
        );
        assert_eq!(
            resolve_theme_for(ThemeMode::Auto, true, || None),
            ThemeColors::dark()
        );
    }

    #[test]
    fn test_explicit_modes_never_query() {
        let theme = resolve_theme_for(ThemeMode::Light, true, || panic!("queried"));
        assert_eq!(theme, ThemeColors::light());
    }

    #[test]
    fn test_theme_for_luma() {
        assert_eq!(theme_for_luma(0.9), ThemeColors::light());
        assert_eq!(theme_for_luma(0.1), ThemeColors::dark());
    }

    #[test]
    fn test_selected_row_differs_from_normal_row() {
        for theme in [ThemeColors::dark(), ThemeColors::light()] {
            assert_ne!(theme.row_selected, theme.row_style);
        }
    }
}
