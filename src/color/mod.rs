mod gamma;
mod palette;

use smart_leds::RGB8;

pub use gamma::{GAMMA_TABLE, gamma_rgb, gamma8};
pub use palette::{PALETTE, Palette};

pub type Rgb = RGB8;
