use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;

/// Light backdrop pane, #00AAFF.
pub const PICTON_BLUE: Rgb565 = Rgb565::new(0, 42, 31);

/// Dark backdrop pane, #0055AA.
pub const COBALT_BLUE: Rgb565 = Rgb565::new(0, 21, 21);

/// Shows through until the panes have slid into place.
pub const FACE_BACKGROUND: Rgb565 = Rgb565::BLACK;

pub const TEXT_COLOR: Rgb565 = Rgb565::WHITE;
