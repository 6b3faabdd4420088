//! Terminal styling helpers.

use console::{style, StyledObject};

use gann_core::AngleType;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Whether styled output should be written to the terminal.
#[must_use]
pub fn color_enabled() -> bool {
    !is_color_disabled() && console::colors_enabled()
}

/// Print a styled section header.
pub fn print_header(text: &str, color: bool) {
    if color {
        println!("{}", style(format!("=== {text} ===")).bold().cyan());
    } else {
        println!("=== {text} ===");
    }
}

/// Print a success message.
pub fn print_success(text: &str, color: bool) {
    if color {
        println!("{} {text}", style("[OK]").green().bold());
    } else {
        println!("[OK] {text}");
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str, color: bool) {
    if color {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    } else {
        eprintln!("[ERROR] {text}");
    }
}

/// Color an already padded cell by its angle type.
///
/// Cardinal is green, Ordinal blue, Special yellow; Regular is left plain.
pub fn style_angle<D>(cell: D, angle_type: AngleType) -> StyledObject<D> {
    let styled = style(cell);
    match angle_type {
        AngleType::Cardinal => styled.green().bold(),
        AngleType::Ordinal => styled.blue().bold(),
        AngleType::Special => styled.yellow().bold(),
        AngleType::Regular => styled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_check_does_not_panic() {
        let _ = is_color_disabled();
        if is_color_disabled() {
            assert!(!color_enabled());
        }
    }

    #[test]
    fn print_functions_do_not_panic() {
        for color in [true, false] {
            print_header("GANN Table", color);
            print_success("Exported", color);
            print_error("Something went wrong", color);
        }
    }

    #[test]
    fn style_angle_keeps_text() {
        let cell = format!("{:<9}", "Cardinal");
        let styled = style_angle(cell.clone(), AngleType::Cardinal)
            .force_styling(false)
            .to_string();
        assert_eq!(styled, cell);
    }

    #[test]
    fn style_angle_adds_codes_when_forced() {
        let styled = style_angle("Special", AngleType::Special)
            .force_styling(true)
            .to_string();
        assert!(styled.contains("Special"));
        assert!(styled.len() > "Special".len());

        let plain = style_angle("Regular", AngleType::Regular)
            .force_styling(true)
            .to_string();
        assert_eq!(plain, "Regular");
    }
}
