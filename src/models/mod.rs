// Module exports for models

pub mod notification;
pub mod session;
pub mod settings;
pub mod ui;
