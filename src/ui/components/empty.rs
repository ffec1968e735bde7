//! Empty-state message shown in place of the list.

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Draws the centred message at `row` and the dimmed subtitle below it.
pub fn render_empty_state(canvas: &mut Canvas, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    canvas.move_to(row, 1);
    canvas.push(&Theme::fg(&theme.colors.empty_state_fg));
    canvas.centered(&empty.message, cols);
    canvas.push(Theme::reset());

    canvas.move_to(row + 1, 1);
    canvas.push(Theme::dim());
    canvas.push(&Theme::fg(&theme.colors.text_dim));
    canvas.centered(&empty.subtitle, cols);
    canvas.push(Theme::reset());
}
