/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Colour an item answer symbol: ✓ green, ✗ red, unset grey.
pub fn colorize_answer(symbol: &str) -> String {
    match symbol {
        "✓" => format!("{GREEN}{symbol}{RESET}"),
        "✗" => format!("{RED}{symbol}{RESET}"),
        _ => format!("{GREY}{symbol}{RESET}"),
    }
}
