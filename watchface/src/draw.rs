use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::{DrawTarget, Primitive},
    primitives::{PrimitiveStyleBuilder, Rectangle},
    Drawable,
};
use std::fmt::Debug;
use thiserror::Error;

pub fn clear<Display>(display: &mut Display, color: Rgb565) -> Result<(), DrawError>
where
    Display: DrawTarget<Color = Rgb565>,
{
    display
        .clear(color)
        .map_err(|_| DrawError::DrawFailed("Failed to clear display".to_string()))
}

/// Fills a rectangle with a solid color. Off-screen parts are clipped by the
/// target, so panes mid-slide can safely hang over the edges.
pub fn fill_rect<Display>(
    display: &mut Display,
    rect: Rectangle,
    color: Rgb565,
) -> Result<(), DrawError>
where
    Display: DrawTarget<Color = Rgb565>,
    Display::Error: Debug,
{
    let style = PrimitiveStyleBuilder::new().fill_color(color).build();

    rect.into_styled(style)
        .draw(display)
        .map_err(|err| DrawError::DrawFailed(format!("{:?}", err)))?;

    Ok(())
}

#[derive(Debug, Error)]
pub enum DrawError {
    #[error("Draw failed: {0}")]
    DrawFailed(String),
}
