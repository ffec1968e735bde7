//! Footer help bar with centred keybinding hints.

use crate::ui::helpers::{clip, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Draws the hints, clipped to the terminal width.
pub fn render_footer(canvas: &mut Canvas, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    canvas.move_to(row, 1);
    canvas.push(&Theme::fg(&theme.colors.text_dim));
    canvas.centered(&clip(&footer.keybindings, cols), cols);
    canvas.push(Theme::reset());
    row + 1
}
