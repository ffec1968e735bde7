//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute a [`UIViewModel`] from the state, then
//! draw every component into a [`Canvas`] that is flushed with one `print!`.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_to_string(state, rows, cols));
}

/// Renders the plugin UI into a string of ANSI-styled output.
pub fn render_to_string(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols)
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut canvas = Canvas::new();
    components::render_frame(&mut canvas, vm, theme, cols, rows);
    canvas.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Application, Catalog};
    use crate::Config;

    fn state_with_apps() -> AppState {
        let mut state = AppState::new(&Config::default());
        state.replace_catalog(Catalog::replace(vec![
            Application::new("Excalidraw", "http://draw.localhost"),
            Application::new("Grafana", "http://grafana.localhost"),
        ]));
        state
    }

    #[test]
    fn frame_shows_title_and_rows() {
        let out = render_to_string(&state_with_apps(), 24, 100);
        assert!(out.contains("Launchpad"));
        assert!(out.contains("Excalidraw"));
        assert!(out.contains("http://grafana.localhost"));
        assert!(out.contains("NAME"));
    }

    #[test]
    fn empty_catalog_shows_retry_hint() {
        let state = AppState::new(&Config::default());
        let out = render_to_string(&state, 24, 100);
        assert!(out.contains("No apps loaded"));
        assert!(out.contains("Ctrl+r"));
    }

    #[test]
    fn footer_lands_on_last_row() {
        let out = render_to_string(&state_with_apps(), 24, 100);
        assert!(out.contains("\u{1b}[24;1H"));
        assert!(!out.contains("\u{1b}[25;1H"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let out = render_to_string(&state_with_apps(), 3, 4);
        assert!(!out.is_empty());
    }
}
