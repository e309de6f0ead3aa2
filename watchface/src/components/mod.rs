pub mod backdrop;
pub mod date_text;
pub mod time_text;

pub use backdrop::draw_backdrop;
pub use date_text::draw_date;
pub use time_text::draw_time;
