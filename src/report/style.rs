//! ANSI styling for console output

use colored::{ColoredString, Colorize};

/// Text styles used in console messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Red,
    BoldRed,
    Yellow,
    BoldYellow,
    Green,
    BoldGreen,
    Magenta,
    Cyan,
    BoldCyan,
}

/// Apply `style` to `text`
///
/// Whether escape codes are emitted follows the `colored` crate's global
/// control (terminal detection, `NO_COLOR`, or an explicit override).
pub fn colorize(text: &str, style: Style) -> String {
    let styled: ColoredString = match style {
        Style::Red => text.red(),
        Style::BoldRed => text.red().bold(),
        Style::Yellow => text.yellow(),
        Style::BoldYellow => text.yellow().bold(),
        Style::Green => text.green(),
        Style::BoldGreen => text.green().bold(),
        Style::Magenta => text.magenta(),
        Style::Cyan => text.cyan(),
        Style::BoldCyan => text.cyan().bold(),
    };
    styled.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorize_wraps_text_in_escape_codes() {
        colored::control::set_override(true);

        let red = colorize("Error", Style::BoldRed);
        assert!(red.starts_with("\x1b["));
        assert!(red.contains("Error"));
        assert!(red.ends_with("\x1b[0m"));

        assert_ne!(colorize("x", Style::Cyan), colorize("x", Style::BoldCyan));
        assert_ne!(colorize("x", Style::Green), colorize("x", Style::Magenta));
    }
}
