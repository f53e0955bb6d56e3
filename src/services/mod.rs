// Service module exports

pub mod countdown;
pub mod resolver;
pub mod schedule;
pub mod settings;
