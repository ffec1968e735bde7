//! Loader status line, colored by severity.

use crate::ui::helpers::{clip, display_width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusLine;

pub fn render_status(canvas: &mut Canvas, row: usize, status: Option<&StatusLine>, theme: &Theme, cols: usize) -> usize {
    canvas.move_to(row, 1);

    let Some(status) = status else {
        canvas.pad(cols);
        return row + 1;
    };

    let color = if status.is_error {
        &theme.colors.status_error_fg
    } else {
        &theme.colors.status_info_fg
    };

    let text = clip(&format!(" {}", status.text), cols);
    canvas.push(&Theme::fg(color));
    canvas.push(&text);
    canvas.pad(cols.saturating_sub(display_width(&text)));
    canvas.push(Theme::reset());
    row + 1
}
