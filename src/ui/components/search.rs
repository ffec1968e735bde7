//! Search input box.

use crate::ui::helpers::{clip, display_width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin on each side of the box.
const SEARCH_BOX_MARGIN: usize = 5;

/// Draws the three-line search box and returns the row below it.
///
/// ```text
/// ┌──────────────────────┐
/// │ Search: exc …        │
/// └──────────────────────┘
/// ```
///
/// The trailing `…` marks a query still inside its debounce window.
pub fn render_search_bar(canvas: &mut Canvas, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let inner_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2 + 2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    canvas.move_to(row, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.push(&border);
    canvas.push(&format!("┌{}┐", "─".repeat(inner_width)));
    canvas.push(Theme::reset());

    let marker = if search.pending { " …" } else { "" };
    let text = clip(&format!(" Search: {}{marker}", search.query), inner_width);

    canvas.move_to(row + 1, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.push(&border);
    canvas.push("│");
    canvas.push(&Theme::fg(&theme.colors.text_normal));
    canvas.push(&text);
    canvas.pad(inner_width.saturating_sub(display_width(&text)));
    canvas.push(&border);
    canvas.push("│");
    canvas.push(Theme::reset());

    canvas.move_to(row + 2, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.push(&border);
    canvas.push(&format!("└{}┘", "─".repeat(inner_width)));
    canvas.push(Theme::reset());

    row + 3
}
