//! Fixed geometry of the face. The pane start/end pairs here are the single
//! source of truth for the entry slide; no other module hardcodes them.

use std::time::Duration;

use embedded_graphics::{
    prelude::{Point, Size},
    primitives::Rectangle,
};

pub const SCREEN: Size = Size::new(144, 168);

/// Light pane slides in from the left edge.
pub const LIGHT_PANE_START: Rectangle = Rectangle::new(Point::new(-144, 0), Size::new(0, 168));
pub const LIGHT_PANE: Rectangle = Rectangle::new(Point::new(0, 0), Size::new(144, 168));

/// Dark pane slides in from the right edge.
pub const DARK_PANE_START: Rectangle = Rectangle::new(Point::new(144, 43), Size::new(144, 82));
pub const DARK_PANE: Rectangle = Rectangle::new(Point::new(0, 43), Size::new(144, 82));

pub const TIME_FRAME: Rectangle = Rectangle::new(Point::new(0, 42), Size::new(144, 70));
pub const DATE_FRAME: Rectangle = Rectangle::new(Point::new(0, 88), Size::new(144, 80));

pub const ENTRY_SLIDE: Duration = Duration::from_millis(800);
