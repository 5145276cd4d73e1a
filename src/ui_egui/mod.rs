mod app;
pub mod session_dialog;
pub mod theme;
pub mod views;

pub use app::SchedulerApp;
