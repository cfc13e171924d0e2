use crate::ui::ansi::{
    CLEAR_LINE_REST, CURSOR_UP_ONE, FG_LIGHT_GRAY, PROMPT_STYLE, STYLE_BOLD, STYLE_ITALIC,
    STYLE_RESET,
};
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

/// Screen-level helpers (banner, prompt line).
#[derive(Debug, Default, Clone)]
pub struct UiChrome {
    util: WidthUtil,
}

impl UiChrome {
    pub fn new() -> Self {
        Self {
            util: WidthUtil::default(),
        }
    }

    pub fn print_banner(&self) {
        let mut stdout = io::stdout();
        let _ = self.render_banner(&mut stdout);
    }

    pub fn render_banner<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        const INNER_WIDTH: usize = 50;
        let version = env!("CARGO_PKG_VERSION");
        let title = format!(
            "{STYLE_BOLD}T A S K G R I D{STYLE_RESET} {FG_LIGHT_GRAY}(v{version}){STYLE_RESET}"
        );
        let subtitle = format!("{STYLE_ITALIC}Your tasks, one day at a time{STYLE_RESET}");
        writeln!(out, "╭{}╮", "─".repeat(INNER_WIDTH))?;
        writeln!(out, "│{}│", " ".repeat(INNER_WIDTH))?;
        writeln!(out, "│{}│", self.util.center_visible(&title, INNER_WIDTH))?;
        writeln!(out, "│{}│", self.util.center_visible(&subtitle, INNER_WIDTH))?;
        writeln!(out, "│{}│", " ".repeat(INNER_WIDTH))?;
        writeln!(out, "╰{}╯", "─".repeat(INNER_WIDTH))
    }

    pub fn print_prompt(&self, prompt: &str) {
        print!("{PROMPT_STYLE}{CLEAR_LINE_REST}{STYLE_RESET}\n");
        print!("{PROMPT_STYLE}{prompt}{CLEAR_LINE_REST}{STYLE_RESET}\n");
        print!("{PROMPT_STYLE}{CLEAR_LINE_REST}{STYLE_RESET}");
        let column = self.util.visible_width(prompt) + 1;
        print!("{CURSOR_UP_ONE}\x1B[{column}G{PROMPT_STYLE}");
        let _ = io::stdout().flush();
    }

    /// Close the styled prompt block after the user pressed enter.
    pub fn finish_prompt(&self) {
        print!("{PROMPT_STYLE}{CLEAR_LINE_REST}{STYLE_RESET}\n\n");
        let _ = io::stdout().flush();
    }
}
