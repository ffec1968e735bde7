//! Frame buffer and text helpers shared by the components.
//!
//! Components draw into a [`Canvas`] instead of printing directly, so a frame
//! is emitted with a single write and can be inspected in tests.

use crate::ui::theme::Theme;

/// Accumulates one frame of ANSI output.
#[derive(Debug, Default)]
pub struct Canvas {
    buf: String,
}

impl Canvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to a 1-indexed `row`/`col`.
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.buf.push_str(&format!("\u{1b}[{row};{col}H"));
    }

    pub fn push(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Appends `n` spaces.
    pub fn pad(&mut self, n: usize) {
        self.buf.extend(std::iter::repeat(' ').take(n));
    }

    /// Writes `text` centred in `width` columns, padding both sides.
    pub fn centered(&mut self, text: &str, width: usize) {
        let len = display_width(text).min(width);
        let left = (width - len) / 2;
        self.pad(left);
        self.push(text);
        self.pad(width.saturating_sub(left + len));
    }

    /// Writes `text` with `ranges` (char indices) in the match colors.
    ///
    /// Selected rows are written plain so the selection background wins.
    pub fn highlighted(&mut self, text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) {
        if ranges.is_empty() || is_selected {
            self.push(text);
            return;
        }

        let chars: Vec<char> = text.chars().collect();
        let mut pos = 0;

        for &(start, end) in ranges {
            let start = start.clamp(pos, chars.len());
            let end = end.clamp(start, chars.len());

            self.buf.extend(&chars[pos..start]);
            self.push(&Theme::fg(&theme.colors.match_highlight_fg));
            self.push(&Theme::bg(&theme.colors.match_highlight_bg));
            self.buf.extend(&chars[start..end]);
            self.push(Theme::reset());
            self.push(&Theme::fg(&theme.colors.text_normal));
            pos = end;
        }

        self.buf.extend(&chars[pos..]);
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Terminal columns taken by `text`, counted as one per `char`.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Keeps the first `max` characters of `text`.
#[must_use]
pub fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_pads_to_width() {
        let mut canvas = Canvas::new();
        canvas.centered("ab", 6);
        assert_eq!(canvas.into_string(), "  ab  ");
    }

    #[test]
    fn highlighted_wraps_ranges_in_match_colors() {
        let theme = Theme::for_mode(true);
        let mut canvas = Canvas::new();
        canvas.highlighted("Excalidraw", &[(0, 3)], &theme, false);
        let out = canvas.into_string();
        assert!(out.starts_with(&Theme::fg(&theme.colors.match_highlight_fg)));
        assert!(out.contains("Exc\u{1b}[0m"));
        assert!(out.ends_with("alidraw"));
    }

    #[test]
    fn highlighted_tolerates_out_of_range_spans() {
        let theme = Theme::for_mode(false);
        let mut canvas = Canvas::new();
        canvas.highlighted("ab", &[(1, 9), (7, 8)], &theme, false);
        assert!(canvas.into_string().ends_with(&Theme::fg(&theme.colors.text_normal)));
    }

    #[test]
    fn selected_rows_are_plain() {
        let theme = Theme::for_mode(true);
        let mut canvas = Canvas::new();
        canvas.highlighted("Excalidraw", &[(0, 3)], &theme, true);
        assert_eq!(canvas.into_string(), "Excalidraw");
    }

    #[test]
    fn width_counts_chars() {
        assert_eq!(display_width("日本"), 2);
        assert_eq!(clip("Excalidraw", 3), "Exc");
    }
}
