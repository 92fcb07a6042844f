// ANSI/VT100 control sequences used by the terminal flow.

/// Hide the cursor.
pub const HIDE_CURSOR: &str = crate::csi!("?25l");
/// Show the cursor.
pub const SHOW_CURSOR: &str = crate::csi!("?25h");

/// Reset terminal styling to defaults.
pub const STYLE_RESET: &str = crate::csi!("0m");
/// Bold text.
pub const STYLE_BOLD: &str = crate::csi!("1m");
/// Italic text.
pub const STYLE_ITALIC: &str = crate::csi!("3m");
/// Light gray foreground.
pub const FG_LIGHT_GRAY: &str = crate::csi!("37m");
/// Dark gray foreground; available cells.
pub const FG_DARK_GRAY: &str = crate::csi!("90m");
/// Red foreground; locked cells.
pub const FG_RED: &str = crate::csi!("31m");
/// Green foreground; selected cells.
pub const FG_GREEN: &str = crate::csi!("32m");
/// Bold yellow; the selected date.
pub const FG_HIGHLIGHT: &str = crate::csi2!("1m", "33m");
