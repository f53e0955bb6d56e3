// Module exports for models

pub mod event;
pub mod schedule;
pub mod settings;
