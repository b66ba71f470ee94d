//! UI rendering module

mod layout;
mod render;
pub mod theme;

pub use layout::{centered_rect, get_layout, AppLayout};
pub use render::render;
pub use theme::{current_variant, set_theme, theme, toggle_theme, Theme};
