use embedded_graphics::{pixelcolor::Rgb565, prelude::DrawTarget};
use std::fmt::Debug;
use u8g2_fonts::{fonts, types::HorizontalAlignment, FontRenderer};

use crate::{draw::DrawError, layout, palette, text::Text};

/// Draws the time string centered in its frame, in the large display font.
pub fn draw_time<Display>(display: &mut Display, time: &str) -> Result<(), DrawError>
where
    Display: DrawTarget<Color = Rgb565>,
    Display::Error: Debug,
{
    let font = FontRenderer::new::<fonts::u8g2_font_logisoso46_tn>();

    Text::new(time, &font)
        .x(layout::TIME_FRAME.top_left.x + layout::TIME_FRAME.size.width as i32 / 2)
        .y(layout::TIME_FRAME.top_left.y)
        .horizontal_align(HorizontalAlignment::Center)
        .draw(display, palette::TEXT_COLOR)?;

    Ok(())
}
