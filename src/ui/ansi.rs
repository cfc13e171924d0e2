// ANSI/VT100 control sequences shared across the UI.

use crate::core::types::Priority;

/// ESC (escape) as a byte value.
pub const ESC_BYTE: u8 = 0x1B;

#[macro_export]
macro_rules! csi {
    ($suffix:literal) => {
        concat!("\x1B[", $suffix)
    };
}

#[macro_export]
macro_rules! csi2 {
    ($first:literal, $second:literal) => {
        concat!("\x1B[", $first, "\x1B[", $second)
    };
}

/// Switch to the terminal's alternate screen buffer (smcup).
pub const ENTER_ALT_SCREEN: &str = crate::csi!("?1049h");
/// Return to the main screen buffer (rmcup).
pub const EXIT_ALT_SCREEN: &str = crate::csi!("?1049l");

/// Move the cursor to the top-left corner.
pub const CURSOR_HOME: &str = crate::csi!("H");
/// Clear from cursor to end of line.
pub const CLEAR_LINE_REST: &str = crate::csi!("0K");
/// Move the cursor up one line.
pub const CURSOR_UP_ONE: &str = crate::csi!("1A");

/// Hide the cursor.
pub const HIDE_CURSOR: &str = crate::csi!("?25l");
/// Show the cursor.
pub const SHOW_CURSOR: &str = crate::csi!("?25h");
/// Request a blinking block cursor (if the terminal supports it).
pub const CURSOR_BLINKING_BLOCK: &str = crate::csi!("1 q");

/// Reset terminal styling to defaults.
pub const STYLE_RESET: &str = crate::csi!("0m");
/// Bold text.
pub const STYLE_BOLD: &str = crate::csi!("1m");
/// Italic text.
pub const STYLE_ITALIC: &str = crate::csi!("3m");
/// Underlined text.
pub const STYLE_UNDERLINE: &str = crate::csi!("4m");
/// Light gray foreground.
pub const FG_LIGHT_GRAY: &str = crate::csi!("37m");
/// Dark gray foreground, used for days outside the current period.
pub const FG_DARK_GRAY: &str = crate::csi!("90m");
/// Dark gray background with white text for input prompts.
pub const PROMPT_STYLE: &str = crate::csi2!("38;5;15m", "48;5;236m");

pub const FG_GREEN: &str = crate::csi!("32m");
pub const FG_YELLOW: &str = crate::csi!("33m");
pub const FG_MAGENTA: &str = crate::csi!("35m");
pub const FG_RED: &str = crate::csi!("31m");

/// Foreground colour for a task count whose most pressing open task has
/// `priority`.
pub fn priority_fg(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => FG_GREEN,
        Priority::Medium => FG_YELLOW,
        Priority::High => FG_MAGENTA,
        Priority::Urgent => FG_RED,
    }
}
