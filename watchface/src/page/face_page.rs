use std::fmt::Debug;
use std::time::Duration;

use embedded_graphics::{pixelcolor::Rgb565, prelude::DrawTarget};

use crate::{
    animation::EntrySlide,
    components::{draw_backdrop, draw_date, draw_time},
    draw::DrawError,
};

/// Everything the face owns: the two derived strings and the entry slide.
/// One instance exists while the face is up; building it is the load step
/// and dropping it releases the whole widget set at once.
pub struct FacePage {
    pub time: String,
    pub date: String,
    pub entry: EntrySlide,
}

impl FacePage {
    pub fn new() -> Self {
        Self {
            time: String::new(),
            date: String::new(),
            entry: EntrySlide::new(),
        }
    }

    pub fn set_time(&mut self, time: String) {
        self.time = time;
    }

    pub fn set_date(&mut self, date: String) {
        self.date = date;
    }

    /// Renders the full face for the given time since the face appeared.
    /// Same strings and elapsed value, same output.
    pub fn draw<Display>(&self, display: &mut Display, elapsed: Duration) -> Result<(), DrawError>
    where
        Display: DrawTarget<Color = Rgb565>,
        Display::Error: Debug,
    {
        let (light, dark) = self.entry.frames_at(elapsed);
        draw_backdrop(display, light, dark)?;

        draw_time(display, &self.time)?;
        draw_date(display, &self.date)?;

        Ok(())
    }
}

impl Default for FacePage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{display::Framebuffer, layout, palette};
    use embedded_graphics::prelude::Point;

    #[test]
    fn test_draw_full_face() {
        let mut page = FacePage::new();
        page.set_time("09:05".to_string());
        page.set_date("THURS, SEPT 21".to_string());

        let mut fb = Framebuffer::face();
        page.draw(&mut fb, layout::ENTRY_SLIDE).unwrap();

        // Panes are in place under the text.
        assert_eq!(fb.get_pixel(Point::new(2, 2)), palette::PICTON_BLUE);
        assert_eq!(fb.get_pixel(Point::new(2, 44)), palette::COBALT_BLUE);
    }

    #[test]
    fn test_draw_during_entry() {
        let mut page = FacePage::new();
        page.set_time("12:00".to_string());
        page.set_date("SUN, JAN 1".to_string());

        // Text shows from the very first frame, before the panes arrive.
        let mut fb = Framebuffer::face();
        page.draw(&mut fb, Duration::ZERO).unwrap();
        assert_eq!(fb.get_pixel(Point::new(2, 2)), palette::FACE_BACKGROUND);
    }

    #[test]
    fn test_draw_is_idempotent() {
        let mut page = FacePage::new();
        page.set_time("23:59".to_string());
        page.set_date("SAT, DEC 31".to_string());

        let mut first = Framebuffer::face();
        page.draw(&mut first, layout::ENTRY_SLIDE).unwrap();

        let mut second = Framebuffer::face();
        page.draw(&mut second, layout::ENTRY_SLIDE).unwrap();

        assert_eq!(first, second);
    }
}
