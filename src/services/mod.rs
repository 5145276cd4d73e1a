// Service module exports

pub mod calendar_grid;
pub mod scheduler;
pub mod session;
pub mod settings;
