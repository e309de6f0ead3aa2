use embedded_graphics::{pixelcolor::Rgb565, prelude::DrawTarget};
use std::fmt::Debug;
use u8g2_fonts::{fonts, types::HorizontalAlignment, FontRenderer};

use crate::{draw::DrawError, layout, palette, text::Text};

/// Draws the date string centered in its frame, below the time.
pub fn draw_date<Display>(display: &mut Display, date: &str) -> Result<(), DrawError>
where
    Display: DrawTarget<Color = Rgb565>,
    Display::Error: Debug,
{
    let font = FontRenderer::new::<fonts::u8g2_font_helvB18_tr>();

    Text::new(date, &font)
        .x(layout::DATE_FRAME.top_left.x + layout::DATE_FRAME.size.width as i32 / 2)
        .y(layout::DATE_FRAME.top_left.y)
        .horizontal_align(HorizontalAlignment::Center)
        .draw(display, palette::TEXT_COLOR)?;

    Ok(())
}
