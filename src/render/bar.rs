//! Fixed-width progress bars.
//!
//! Every bar is exactly `width` glyph cells regardless of which color codes
//! are active, so the line never shifts as percentages move.

use super::color::Palette;

/// Glyph pair a bar is drawn with.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub filled: char,
    pub empty: char,
}

/// Solid block for consumed cells, outlined block for the remainder.
pub const BLOCKS: Glyphs = Glyphs {
    filled: '▰',
    empty: '▱',
};

/// Cell count for a percentage: non-finite reads as 0, everything else is
/// clamped to 0-100 before scaling and rounding.
fn cells(pct: f64, width: usize) -> usize {
    let pct = if pct.is_finite() {
        pct.clamp(0.0, 100.0)
    } else {
        0.0
    };
    ((pct / 100.0 * width as f64).round() as usize).min(width)
}

/// Single-tone bar. With `warn_at` set, the filled cells switch to the
/// warning color once `pct` reaches the threshold.
pub fn render_bar(
    pct: f64,
    width: usize,
    warn_at: Option<f64>,
    glyphs: Glyphs,
    palette: &Palette,
) -> String {
    let filled = cells(pct, width);
    let code = match warn_at {
        Some(threshold) if pct.is_finite() && pct >= threshold => palette.warn,
        _ => palette.filled,
    };
    let mut bar = String::new();
    if filled > 0 {
        bar.push_str(&palette.paint(&glyphs.filled.to_string().repeat(filled), code));
    }
    bar.push_str(&glyphs.empty.to_string().repeat(width - filled));
    bar
}

/// Dual-tone bar: filled cells for what is already consumed, warning-colored
/// cells for the extra the projection expects by end of window, outline for
/// the rest. Both counts clamp to the width and their sum never exceeds it.
pub fn render_split_bar(
    actual: f64,
    projected: f64,
    width: usize,
    glyphs: Glyphs,
    palette: &Palette,
) -> String {
    let consumed = cells(actual, width);
    let reach = cells(projected, width);
    let ahead = reach.saturating_sub(consumed);

    let mut bar = String::new();
    if consumed > 0 {
        bar.push_str(&palette.paint(&glyphs.filled.to_string().repeat(consumed), palette.filled));
    }
    if ahead > 0 {
        bar.push_str(&palette.paint(&glyphs.filled.to_string().repeat(ahead), palette.warn));
    }
    bar.push_str(&glyphs.empty.to_string().repeat(width - consumed - ahead));
    bar
}
