use terminal_size::{Width, terminal_size};

use crate::ui::ascii::ESC_BYTE;

type ByteIter<'a> = std::iter::Peekable<std::str::Bytes<'a>>;

const FALLBACK_TERMINAL_WIDTH: usize = 80;

/// Width arithmetic that ignores ANSI styling, so painted grid markers line
/// up with plain text.
#[derive(Debug, Default, Clone)]
pub struct WidthUtil;

impl WidthUtil {
    pub(crate) fn strip_ansi(s: &str) -> String {
        let mut bytes = s.bytes().peekable();
        let mut plain = Vec::with_capacity(s.len());

        while let Some(byte) = bytes.next() {
            if byte == ESC_BYTE && matches!(bytes.peek(), Some(b'[')) {
                Self::skip_csi(&mut bytes);
                continue;
            }
            plain.push(byte);
        }
        // only whole escape sequences were removed, so this stays valid UTF-8
        String::from_utf8_lossy(&plain).into_owned()
    }

    fn skip_csi(bytes: &mut ByteIter<'_>) {
        let _ = bytes.next(); // '['
        for b in bytes.by_ref() {
            if b.is_ascii_alphabetic() {
                break;
            }
        }
    }

    pub fn visible_width(&self, s: &str) -> usize {
        Self::strip_ansi(s).chars().count()
    }

    pub fn pad_visible(&self, s: &str, width: usize) -> String {
        let w = self.visible_width(s);
        if w >= width {
            return s.to_string();
        }
        format!("{s}{}", " ".repeat(width - w))
    }

    /// Center `s` inside `width` columns; extra space goes to the right.
    pub fn center_visible(&self, s: &str, width: usize) -> String {
        let w = self.visible_width(s);
        if w >= width {
            return s.to_string();
        }
        let left = (width - w) / 2;
        let right = width - w - left;
        format!("{}{s}{}", " ".repeat(left), " ".repeat(right))
    }

    /// Best-effort terminal width; 80 when stdout is not a terminal.
    pub fn terminal_width(&self) -> usize {
        match terminal_size() {
            Some((Width(w), _)) => w as usize,
            None => FALLBACK_TERMINAL_WIDTH,
        }
    }

    /// Left padding to center a block of `content_width` in the terminal.
    pub fn center_pad(&self, content_width: usize) -> usize {
        self.terminal_width().saturating_sub(content_width) / 2
    }
}
