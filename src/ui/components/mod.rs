//! Composable UI component renderers.
//!
//! Each component draws one region of the frame into a [`Canvas`] and returns
//! the next free row.
//!
//! ```text
//! row 1        blank
//! row 2        header            (title, counts, theme)
//! row 3        border
//! rows 4-6     search box
//! row 7        column headings
//! rows 8..     application rows  (or the empty-state message)
//! rows-2       status line
//! rows-1       border
//! rows         footer
//! ```

mod empty;
mod footer;
mod header;
mod list;
mod search;
mod status;

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Draws a full-width horizontal rule and returns the next row.
fn render_border(canvas: &mut Canvas, row: usize, color: &str, cols: usize) -> usize {
    canvas.move_to(row, 1);
    canvas.push(&Theme::fg(color));
    canvas.push(&"─".repeat(cols));
    canvas.push(Theme::reset());
    row + 1
}

/// Draws every region of the frame.
pub fn render_frame(canvas: &mut Canvas, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut row = 2;
    row = header::render_header(canvas, row, &vm.header, theme, cols);
    row = render_border(canvas, row, &theme.colors.border, cols);
    row = search::render_search_bar(canvas, row, &vm.search_bar, theme, cols);
    row = list::render_list_headings(canvas, row, theme);

    match &vm.empty_state {
        Some(empty) => empty::render_empty_state(canvas, row + 1, empty, theme, cols),
        None => {
            list::render_list_rows(canvas, row, &vm.display_items, theme, cols);
        }
    }

    let footer_row = rows.max(row + 3);
    status::render_status(canvas, footer_row - 2, vm.status.as_ref(), theme, cols);
    render_border(canvas, footer_row - 1, &theme.colors.border, cols);
    footer::render_footer(canvas, footer_row, &vm.footer, theme, cols);
}
