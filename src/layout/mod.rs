//! Strip layouts driven by a discrete animation phase
//!
//! A layout turns a phase index into a full frame. Phases come from
//! [`animation_phase`], which saturates on the last frame once the
//! animation's duration has passed.

mod indicator;
mod startup;

pub use indicator::{EDGE_PIXELS, GAP_PIXELS, IndicatorLayout, ZONE_PIXELS};
pub use startup::{StartupLayout, folded_index};

use crate::clock::{ClockSample, Ticks};
use crate::color::Rgb;

pub trait Layout {
    /// Number of discrete phases in the animation
    const FRAMES: u16;

    /// Fill `leds`, one entry per strip position, for the given phase
    fn render(&self, phase: u16, leds: &mut [Rgb]);
}

/// Phase of an animation with `frames` steps spread over `duration` ticks
///
/// Holds the last frame once `duration` has passed or the counter has
/// overflowed. `duration` must be at least `frames`.
pub const fn animation_phase(sample: ClockSample, frames: u16, duration: Ticks) -> u16 {
    let last = frames - 1;
    if sample.has_reached(duration) {
        return last;
    }
    let phase = sample.ticks / (duration / frames);
    if phase > last { last } else { phase }
}
