pub mod animation;
pub mod components;
pub mod display;
pub mod draw;
pub mod format;
pub mod layout;
pub mod page;
pub mod palette;
pub mod text;

pub use palette::{COBALT_BLUE, FACE_BACKGROUND, PICTON_BLUE, TEXT_COLOR};
