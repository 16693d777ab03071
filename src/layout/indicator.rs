//! Sequential turn indicator
//!
//! Strip layout, from the first pixel:
//! `EDGE` ambient, right zone, `GAP` ambient, left zone, `EDGE` ambient.
//! An active zone fills with the signal color one pixel per phase, growing
//! from the outer strip end toward the gap.

use super::Layout;
use crate::color::{Palette, Rgb};
use crate::config::PIXELS;
use crate::state::{AmbientLevel, InputState};

/// Ambient pixels at each strip end
pub const EDGE_PIXELS: usize = 3;
/// Pixels per indicator zone
pub const ZONE_PIXELS: usize = 10;
/// Ambient pixels between the two zones
pub const GAP_PIXELS: usize = 30;

const RIGHT_ZONE: usize = EDGE_PIXELS;
const LEFT_ZONE: usize = EDGE_PIXELS + ZONE_PIXELS + GAP_PIXELS;

const _: () = assert!(
    2 * EDGE_PIXELS + 2 * ZONE_PIXELS + GAP_PIXELS == PIXELS,
    "indicator layout must cover the whole strip"
);

/// Indicator frame for one input state and ambient level
#[derive(Debug, Clone, Copy)]
pub struct IndicatorLayout {
    ambient: Rgb,
    signal: Rgb,
    left: bool,
    right: bool,
}

impl IndicatorLayout {
    pub const fn new(palette: &Palette, level: AmbientLevel, input: InputState) -> Self {
        Self {
            ambient: palette.ambient(level),
            signal: palette.signal,
            left: input.animates_left(),
            right: input.animates_right(),
        }
    }
}

impl Layout for IndicatorLayout {
    #[allow(clippy::cast_possible_truncation)]
    const FRAMES: u16 = ZONE_PIXELS as u16;

    fn render(&self, phase: u16, leds: &mut [Rgb]) {
        let phase = usize::from(phase);
        leds.fill(self.ambient);

        if self.right {
            let zone = &mut leds[RIGHT_ZONE..RIGHT_ZONE + ZONE_PIXELS];
            for (offset, led) in zone.iter_mut().enumerate() {
                if offset + phase >= ZONE_PIXELS - 1 {
                    *led = self.signal;
                }
            }
        }

        if self.left {
            let zone = &mut leds[LEFT_ZONE..LEFT_ZONE + ZONE_PIXELS];
            for (offset, led) in zone.iter_mut().enumerate() {
                if offset <= phase {
                    *led = self.signal;
                }
            }
        }
    }
}
