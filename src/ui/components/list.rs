//! Application list: a NAME column followed by the URL and an optional
//! dimmed description.

use crate::ui::helpers::{display_width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Width of the NAME column including its trailing gap.
const NAME_COLUMN: usize = 32;

pub fn render_list_headings(canvas: &mut Canvas, row: usize, theme: &Theme) -> usize {
    canvas.move_to(row, 1);
    canvas.push(Theme::bold());
    canvas.push(&Theme::fg(&theme.colors.header_fg));
    canvas.push(&format!("{:<NAME_COLUMN$}{}", "NAME", "URL"));
    canvas.push(Theme::reset());
    row + 1
}

pub fn render_list_rows(canvas: &mut Canvas, row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    items
        .iter()
        .fold(row, |row, item| render_list_row(canvas, row, item, theme, cols))
}

/// Selected rows get the selection colors across the full width; other rows
/// show query matches highlighted in the name.
fn render_list_row(canvas: &mut Canvas, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let base = if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    canvas.move_to(row, 1);
    canvas.push(&base);
    canvas.highlighted(&item.name, &item.highlight_ranges, theme, item.is_selected);

    let name_len = display_width(&item.name);
    canvas.pad(NAME_COLUMN.saturating_sub(name_len));

    if !item.is_selected {
        canvas.push(&Theme::fg(&theme.colors.url_fg));
    }
    canvas.push(&item.url);
    let mut line_len = NAME_COLUMN.max(name_len) + display_width(&item.url);

    if let Some(description) = &item.description {
        if !item.is_selected {
            canvas.push(&Theme::fg(&theme.colors.text_dim));
        }
        canvas.pad(2);
        canvas.push(description);
        line_len += 2 + display_width(description);
    }

    canvas.pad(cols.saturating_sub(line_len));
    canvas.push(Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(selected: bool) -> DisplayItem {
        DisplayItem {
            name: "Excalidraw".to_string(),
            url: "http://draw.localhost:80".to_string(),
            description: Some("Whiteboard".to_string()),
            is_selected: selected,
            highlight_ranges: vec![(0, 3)],
        }
    }

    #[test]
    fn row_contains_url_and_description() {
        let theme = Theme::for_mode(true);
        let mut canvas = Canvas::new();
        let next = render_list_rows(&mut canvas, 8, &[item(false), item(true)], &theme, 100);
        assert_eq!(next, 10);
        let out = canvas.into_string();
        assert!(out.contains("\u{1b}[8;1H"));
        assert!(out.contains("\u{1b}[9;1H"));
        assert!(out.contains("http://draw.localhost:80"));
        assert!(out.contains("  Whiteboard"));
    }

    #[test]
    fn selected_row_uses_selection_background() {
        let theme = Theme::for_mode(false);
        let mut canvas = Canvas::new();
        render_list_rows(&mut canvas, 1, &[item(true)], &theme, 80);
        let out = canvas.into_string();
        assert!(out.contains(&Theme::bg(&theme.colors.selection_bg)));
        assert!(!out.contains(&Theme::bg(&theme.colors.match_highlight_bg)));
    }
}
