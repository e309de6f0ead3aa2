use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::{DrawTarget, Point},
    primitives::Rectangle,
};
use std::fmt::Debug;
use u8g2_fonts::{
    types::{FontColor, HorizontalAlignment, VerticalPosition},
    FontRenderer,
};

use crate::draw::DrawError;

pub struct Text {
    text: String,
    font: FontRenderer,
    x: i32,
    y: i32,
    vertical_pos: VerticalPosition,
    horizontal_align: HorizontalAlignment,
}

impl Text {
    pub fn new(text: &str, font: &FontRenderer) -> Self {
        Self {
            text: text.to_string(),
            font: font.clone(),
            x: 0,
            y: 0,
            vertical_pos: VerticalPosition::Top,
            horizontal_align: HorizontalAlignment::Left,
        }
    }

    pub fn x(mut self, x: i32) -> Self {
        self.x = x;
        self
    }

    pub fn y(mut self, y: i32) -> Self {
        self.y = y;
        self
    }

    pub fn vertical_pos(mut self, vertical_pos: VerticalPosition) -> Self {
        self.vertical_pos = vertical_pos;
        self
    }

    pub fn horizontal_align(mut self, horizontal_align: HorizontalAlignment) -> Self {
        self.horizontal_align = horizontal_align;
        self
    }

    /// Draws the text with a transparent background, so it sits over
    /// whatever the backdrop put underneath.
    pub fn draw<Display>(&self, display: &mut Display, color: Rgb565) -> Result<Rectangle, DrawError>
    where
        Display: DrawTarget<Color = Rgb565>,
        Display::Error: Debug,
    {
        let position = Point::new(self.x, self.y);

        // Get the bounding box of the text to determine the width and height
        let bounding_box = self
            .font
            .get_rendered_dimensions_aligned(
                self.text.as_str(),
                position,
                self.vertical_pos,
                self.horizontal_align,
            )
            .map_err(|err| DrawError::DrawFailed(format!("{:?}", err)))?
            .ok_or(DrawError::DrawFailed(
                "Failed to get bounding box".to_string(),
            ))?;

        // Render the text on the display
        self.font
            .render_aligned(
                self.text.as_str(),
                position,
                self.vertical_pos,
                self.horizontal_align,
                FontColor::Transparent(color),
                display,
            )
            .map_err(|err| DrawError::DrawFailed(format!("{:?}", err)))?;

        Ok(bounding_box)
    }
}
