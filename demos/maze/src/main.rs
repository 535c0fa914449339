use slint::ComponentHandle;
use slint_maze_editor::{EditorConfig, MazeEditorController};
use tracing_subscriber::EnvFilter;

slint::include_modules!();

fn main() -> Result<(), slint::PlatformError> {
    // RUST_LOG=slint_maze_editor=debug shows search progress
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let window = MainWindow::new()?;
    let ctrl = MazeEditorController::with_config(EditorConfig::default());
    let w = window.as_weak();

    window.set_rows(ctrl.rows() as i32);
    window.set_cols(ctrl.cols() as i32);
    window.set_cell_size(ctrl.cell_size());
    window.set_cell_colors(ctrl.cell_colors());
    window.set_grid_commands(ctrl.grid_lines());
    window.set_current_tool(ctrl.tool().index());

    // Painting - controller maps pointer positions to cells
    window.on_pointer_pressed(ctrl.pointer_pressed_callback());
    window.on_pointer_moved(ctrl.pointer_moved_callback());
    window.on_pointer_released(ctrl.pointer_released_callback());

    window.on_tool_selected({
        let select = ctrl.select_tool_callback();
        let w = w.clone();
        move |index| {
            select(index);
            if let Some(w) = w.upgrade() {
                w.set_current_tool(index);
            }
        }
    });

    // Search controls
    window.on_start_search(ctrl.start_search_callback());
    window.on_reset_search(ctrl.reset_search_callback());
    window.on_clear_maze(ctrl.clear_maze_callback());

    ctrl.set_status_handler(move |status| {
        tracing::info!(status = %status.message(), "status changed");
        if let Some(w) = w.upgrade() {
            w.set_status_text(status.message().into());
            w.set_searching(status.is_searching());
        }
    });

    window.run()
}
