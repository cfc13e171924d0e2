use terminal_size::{Width, terminal_size};

use crate::ui::ansi::ESC_BYTE;
type ByteIter<'a> = std::iter::Peekable<std::str::Bytes<'a>>;

/// Width arithmetic that ignores ANSI styling.
#[derive(Debug, Default, Clone)]
pub struct WidthUtil;

impl WidthUtil {
    pub fn strip_ansi(s: &str) -> String {
        let mut out = Vec::with_capacity(s.len());
        let mut bytes = s.bytes().peekable();

        while let Some(byte) = bytes.next() {
            if byte == ESC_BYTE && matches!(bytes.peek(), Some(b'[')) {
                Self::consume_csi(&mut bytes);
                continue;
            }
            out.push(byte);
        }
        // Only whole escape sequences were removed, so the bytes stay UTF-8.
        String::from_utf8(out).unwrap_or_default()
    }

    fn consume_csi(bytes: &mut ByteIter<'_>) {
        let _ = bytes.next(); // skip '['
        for nb in bytes.by_ref() {
            if nb.is_ascii_alphabetic() {
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

    /// Center `s` in `width` columns; the odd column goes to the right.
    pub fn center_visible(&self, s: &str, width: usize) -> String {
        let w = self.visible_width(s);
        if w >= width {
            return s.to_string();
        }
        let left = (width - w) / 2;
        let right = width - w - left;
        format!("{}{s}{}", " ".repeat(left), " ".repeat(right))
    }

    /// Best-effort terminal width (defaults to 80).
    pub fn terminal_width(&self) -> usize {
        if let Some((Width(w), _)) = terminal_size() {
            w as usize
        } else {
            80
        }
    }

    /// Left padding to center a box of `content_width` inside the terminal.
    pub fn center_pad(&self, content_width: usize) -> usize {
        let tw = self.terminal_width();
        tw.saturating_sub(content_width) / 2
    }
}
