use embedded_graphics::{pixelcolor::Rgb565, prelude::DrawTarget, primitives::Rectangle};
use std::fmt::Debug;

use crate::{
    draw::{clear, fill_rect, DrawError},
    palette,
};

/// Paints the face background and the two panes at the frames the caller
/// supplies, which may still be mid-slide.
pub fn draw_backdrop<Display>(
    display: &mut Display,
    light: Rectangle,
    dark: Rectangle,
) -> Result<(), DrawError>
where
    Display: DrawTarget<Color = Rgb565>,
    Display::Error: Debug,
{
    clear(display, palette::FACE_BACKGROUND)?;

    fill_rect(display, light, palette::PICTON_BLUE)?;
    fill_rect(display, dark, palette::COBALT_BLUE)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use embedded_graphics::prelude::Point;

    use super::*;
    use crate::{animation::EntrySlide, display::Framebuffer, layout};

    fn backdrop_at(elapsed: Duration) -> Framebuffer {
        let mut fb = Framebuffer::face();
        let (light, dark) = EntrySlide::new().frames_at(elapsed);
        draw_backdrop(&mut fb, light, dark).unwrap();
        fb
    }

    #[test]
    fn test_panes_start_off_screen() {
        let fb = backdrop_at(Duration::ZERO);

        // Nothing has slid in yet, the whole face is background.
        for point in [
            Point::new(0, 0),
            Point::new(72, 84),
            Point::new(143, 167),
            Point::new(5, 100),
        ] {
            assert_eq!(fb.get_pixel(point), palette::FACE_BACKGROUND);
        }
    }

    #[test]
    fn test_panes_cover_their_final_frames() {
        let fb = backdrop_at(layout::ENTRY_SLIDE);

        // Light pane fills the face outside the dark band.
        assert_eq!(fb.get_pixel(Point::new(5, 5)), palette::PICTON_BLUE);
        assert_eq!(fb.get_pixel(Point::new(140, 42)), palette::PICTON_BLUE);
        assert_eq!(fb.get_pixel(Point::new(72, 160)), palette::PICTON_BLUE);

        // Dark band spans rows 43..125.
        assert_eq!(fb.get_pixel(Point::new(72, 43)), palette::COBALT_BLUE);
        assert_eq!(fb.get_pixel(Point::new(0, 100)), palette::COBALT_BLUE);
        assert_eq!(fb.get_pixel(Point::new(143, 124)), palette::COBALT_BLUE);
        assert_eq!(fb.get_pixel(Point::new(72, 125)), palette::PICTON_BLUE);
    }

    #[test]
    fn test_dark_pane_mid_slide() {
        let fb = backdrop_at(Duration::from_millis(400));

        // Halfway in, the dark pane's left edge sits at x = 72.
        assert_eq!(fb.get_pixel(Point::new(100, 100)), palette::COBALT_BLUE);
        assert_eq!(fb.get_pixel(Point::new(40, 100)), palette::FACE_BACKGROUND);
    }
}
