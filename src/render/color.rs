//! ANSI palette for the status line.

pub const RESET: &str = "\x1b[0m";

/// Muted gray for labels and separators (256-color 241).
pub const MUTED: &str = "\x1b[38;5;241m";
pub const FILLED_GREEN: &str = "\x1b[32m";
pub const WARN_ORANGE: &str = "\x1b[33m";

/// The escape codes one rendered line draws from, plus the master color
/// switch (off under `NO_COLOR` or `--no-color`).
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub muted: &'static str,
    pub filled: &'static str,
    pub warn: &'static str,
    pub enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self {
            muted: MUTED,
            filled: FILLED_GREEN,
            warn: WARN_ORANGE,
            enabled,
        }
    }

    pub fn paint(&self, text: &str, code: &'static str) -> String {
        colorize(text, code, self.enabled)
    }
}

pub fn colorize(text: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Drop CSI escape sequences, keeping only printable text.
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch != '\x1b' {
            out.push(ch);
            continue;
        }
        // consume "[" plus parameters up to the final alphabetic byte
        if let Some('[') = chars.clone().next() {
            for esc in chars.by_ref() {
                if esc.is_ascii_alphabetic() {
                    break;
                }
            }
        }
    }
    out
}

/// Glyph-cell count as the terminal sees it, ignoring color codes.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorize_enabled_wraps_with_reset() {
        assert_eq!(colorize("30m", MUTED, true), "\x1b[38;5;241m30m\x1b[0m");
    }

    #[test]
    fn colorize_disabled_passes_through() {
        assert_eq!(colorize("30m", MUTED, false), "30m");
    }

    #[test]
    fn strip_ansi_removes_256_color_codes() {
        let colored = format!("{MUTED}demo{RESET} {FILLED_GREEN}ok{RESET}");
        assert_eq!(strip_ansi(&colored), "demo ok");
    }

    #[test]
    fn visible_width_counts_glyphs_not_bytes() {
        let colored = colorize("▰▰▱", FILLED_GREEN, true);
        assert_eq!(visible_width(&colored), 3);
    }
}
