mod render;
mod state;
mod update;

pub use render::render;
pub use state::{PaneFocus, TodoListState};
pub use update::{enter_effects, handle_key, handle_loaded, handle_pushed};
