mod render;
mod time;

pub use render::render_entries;
pub use time::format_relative_time;
