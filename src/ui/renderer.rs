//! Top-level rendering coordinator.
//!
//! Computes the view model from the application state and hands it to the
//! layout for the current presentation.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, ScreenLayout, UIViewModel};

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output positioned with absolute cursor moves. The
/// returned [`ScreenLayout`] describes where the clickable page markers
/// ended up and is kept by the plugin until the next frame.
pub fn render(state: &AppState, rows: usize, cols: usize) -> ScreenLayout {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols)
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> ScreenLayout {
    match &vm.body {
        Body::Placeholder(empty) => components::render_placeholder_mode(vm, empty, theme, cols, rows),
        Body::Grid(grid) => components::render_grid_mode(vm, grid, theme, cols, rows),
    }
}
