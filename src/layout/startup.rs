//! Power-on animation
//!
//! Played once over the whole strip, symmetric about its midpoint:
//! - two dim dots travel from the ends toward the center
//! - a dim trail grows back out from the center
//! - a full-brightness core grows out from the center over the trail

use super::Layout;
use crate::color::{Palette, Rgb};
use crate::config::PIXELS;
use crate::state::AmbientLevel;

const HALF: usize = PIXELS / 2;
/// First phase of the dim trail
const TRAIL_START: usize = HALF;
/// First phase of the full-brightness core
const CORE_START: usize = HALF + HALF / 2;

/// Distance of a position from the nearest strip end
///
/// Folds the strip into two mirrored halves that meet between the two
/// middle pixels.
pub const fn folded_index(position: usize) -> usize {
    if position >= HALF {
        PIXELS - 1 - position
    } else {
        position
    }
}

/// Startup animation colors for one ambient level
#[derive(Debug, Clone, Copy)]
pub struct StartupLayout {
    full: Rgb,
    dim: Rgb,
    black: Rgb,
}

impl StartupLayout {
    pub const fn new(palette: &Palette, level: AmbientLevel) -> Self {
        Self {
            full: palette.ambient(level),
            dim: palette.ambient_dim(level),
            black: palette.black,
        }
    }

    fn pixel(&self, phase: usize, position: usize) -> Rgb {
        let folded = folded_index(position);
        if phase < TRAIL_START {
            return if folded == phase { self.dim } else { self.black };
        }

        // Distance from the center
        let dist = HALF - 1 - folded;
        if phase >= CORE_START && dist <= phase - CORE_START {
            self.full
        } else if dist <= phase - TRAIL_START {
            self.dim
        } else {
            self.black
        }
    }
}

impl Layout for StartupLayout {
    #[allow(clippy::cast_possible_truncation)]
    const FRAMES: u16 = (CORE_START + HALF) as u16;

    fn render(&self, phase: u16, leds: &mut [Rgb]) {
        let phase = usize::from(phase);
        for (position, led) in leds.iter_mut().enumerate() {
            *led = self.pixel(phase, position);
        }
    }
}
