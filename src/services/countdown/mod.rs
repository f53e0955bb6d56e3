mod models;
mod render;
mod timer;

pub use models::TimeRemaining;
pub use render::render_table;
pub use timer::CountdownTimer;
