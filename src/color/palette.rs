//! Named colors of the fixture
//!
//! Every entry is built from linear intensities passed through the
//! correction table once, at compile time.

use super::{Rgb, gamma_rgb};
use crate::state::AmbientLevel;

/// Fixed set of colors the fixture can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Turn signal amber
    pub signal: Rgb,
    /// Running light, daytime
    pub day: Rgb,
    /// Dimmed running light, daytime
    pub day_dim: Rgb,
    /// Running light, nighttime
    pub night: Rgb,
    /// Dimmed running light, nighttime
    pub night_dim: Rgb,
    /// Unlit pixel
    pub black: Rgb,
}

impl Palette {
    /// Running light color for the given ambient level
    pub const fn ambient(&self, level: AmbientLevel) -> Rgb {
        match level {
            AmbientLevel::Day => self.day,
            AmbientLevel::Night => self.night,
        }
    }

    /// Dimmed running light color for the given ambient level
    pub const fn ambient_dim(&self, level: AmbientLevel) -> Rgb {
        match level {
            AmbientLevel::Day => self.day_dim,
            AmbientLevel::Night => self.night_dim,
        }
    }
}

/// Colors used by the fixture
pub const PALETTE: Palette = Palette {
    signal: gamma_rgb(255, 120, 0),
    day: gamma_rgb(255, 200, 180),
    day_dim: gamma_rgb(127, 100, 90),
    night: gamma_rgb(191, 128, 98),
    night_dim: gamma_rgb(127, 85, 65),
    black: gamma_rgb(0, 0, 0),
};
