use crate::ui::ansi::{FG_LIGHT_GRAY, STYLE_BOLD, STYLE_ITALIC, STYLE_RESET};
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

const BANNER_INNER_WIDTH: usize = 50;

/// Screen-level pieces around the tables: the banner and the prompt.
#[derive(Debug, Default, Clone)]
pub struct UiChrome {
    util: WidthUtil,
}

impl UiChrome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_banner<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        let version = env!("CARGO_PKG_VERSION");
        let title = format!(
            "{STYLE_BOLD}C O U R T B O O K{STYLE_RESET} {FG_LIGHT_GRAY}(v{version}){STYLE_RESET}"
        );
        let subtitle = format!("{STYLE_ITALIC}Half-hour court reservations{STYLE_RESET}");
        let blank = " ".repeat(BANNER_INNER_WIDTH);

        writeln!(out, "╭{}╮", "─".repeat(BANNER_INNER_WIDTH))?;
        writeln!(out, "│{blank}│")?;
        writeln!(out, "│{}│", self.util.center_visible(&title, BANNER_INNER_WIDTH))?;
        writeln!(out, "│{}│", self.util.center_visible(&subtitle, BANNER_INNER_WIDTH))?;
        writeln!(out, "│{blank}│")?;
        writeln!(out, "╰{}╯", "─".repeat(BANNER_INNER_WIDTH))
    }

    pub fn print_banner(&self) {
        let _ = self.render_banner(&mut io::stdout());
    }

    /// Prompt prefix naming the selected date, e.g. `[2025-03-30] > `.
    pub fn format_prompt(&self, date_key: &str) -> String {
        format!("{FG_LIGHT_GRAY}[{date_key}]{STYLE_RESET} > ")
    }

    pub fn print_prompt(&self, date_key: &str) {
        print!("{}", self.format_prompt(date_key));
        let _ = io::stdout().flush();
    }
}
