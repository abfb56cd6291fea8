pub mod text_view;
pub mod tree_render;

pub use text_view::TextView;
pub use tree_render::render_grouped;
