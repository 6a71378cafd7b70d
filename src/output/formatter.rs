use std::io::IsTerminal;

use owo_colors::OwoColorize;

/// Message shown before handing a URL to the browser
pub fn format_opening(url: &str, use_colors: bool) -> String {
    if use_colors {
        format!("Opening {} in browser...", url.underline())
    } else {
        format!("Opening {} in browser...", url)
    }
}

pub fn format_no_selection(use_colors: bool) -> String {
    if use_colors {
        "No PR selected.".dimmed().to_string()
    } else {
        "No PR selected.".to_string()
    }
}

/// Friendly message for a search that matched nothing
pub fn format_empty(message: &str, use_colors: bool) -> String {
    if use_colors {
        message.green().to_string()
    } else {
        message.to_string()
    }
}

/// One-line error summary for stderr
pub fn format_error(message: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{} {}", "Error:".red().bold(), message)
    } else {
        format!("Error: {}", message)
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Check if stderr is a TTY
pub fn should_use_colors_stderr() -> bool {
    std::io::stderr().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_opening_plain() {
        assert_eq!(
            format_opening("https://github.com/acme/api/pull/42", false),
            "Opening https://github.com/acme/api/pull/42 in browser..."
        );
    }

    #[test]
    fn test_format_opening_colored_keeps_url() {
        let result = format_opening("url1", true);
        assert!(result.contains("url1"));
        assert!(result.contains("\x1b["));
    }

    #[test]
    fn test_format_no_selection_plain() {
        assert_eq!(format_no_selection(false), "No PR selected.");
    }

    #[test]
    fn test_format_empty_plain() {
        assert_eq!(format_empty("Nothing here.", false), "Nothing here.");
    }

    #[test]
    fn test_format_error() {
        assert_eq!(format_error("boom", false), "Error: boom");
        let colored = format_error("boom", true);
        assert!(colored.contains("Error:"));
        assert!(colored.ends_with("boom"));
    }
}
