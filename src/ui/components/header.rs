//! Title bar: centred title with the active theme at the right edge.

use crate::ui::helpers::{display_width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

pub fn render_header(canvas: &mut Canvas, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let label = format!("[{}] ", header.theme_label);
    let label_len = display_width(&label);

    canvas.move_to(row, 1);
    canvas.push(Theme::bold());
    canvas.push(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        canvas.push(&Theme::bg(bg));
    }

    if cols > label_len * 2 + display_width(&header.title) {
        canvas.pad(label_len);
        canvas.centered(&header.title, cols - label_len * 2);
        canvas.push(Theme::dim());
        canvas.push(&label);
    } else {
        canvas.centered(&header.title, cols);
    }

    canvas.push(Theme::reset());
    row + 1
}
