pub mod calendar_grid_view;
mod palette;
pub mod session_card;

pub use calendar_grid_view::CalendarGridView;
pub use session_card::{SessionCard, SessionCardAction};
