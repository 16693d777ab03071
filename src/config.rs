//! Build-time configuration of the fixture
//!
//! Everything here is evaluated in const context, so an inconsistent value
//! fails the build rather than misbehaving on the strip.

use embassy_time::Duration;

use crate::clock::{Ticks, ticks_for};
use crate::renderer::AnimationTimings;
use crate::timing::{PulseBand, PulseSpec, PulseTiming};

/// Number of pixels on the strip
pub const PIXELS: usize = 56;

/// CPU clock driving the cycle counts
pub const CPU_HZ: u32 = 16_000_000;

/// Cycles spent by the pin set/clear instruction itself
pub const PIN_TOGGLE_CYCLES: u32 = 2;

/// Logical one: long high phase
pub const ONE_PULSE: PulseSpec = PulseSpec {
    high_ns: 900,
    low_ns: 600,
    high_band: PulseBand::new(650, 950),
    low_band: PulseBand::new(300, 600),
};

/// Logical zero: short high phase
pub const ZERO_PULSE: PulseSpec = PulseSpec {
    high_ns: 400,
    low_ns: 900,
    high_band: PulseBand::new(250, 550),
    low_band: PulseBand::new(700, 1_000),
};

/// Idle time that makes the strip latch the frame
pub const RESET_NS: u32 = 6_000;

pub const WS2812_TIMING: PulseTiming =
    PulseTiming::new(CPU_HZ, ONE_PULSE, ZERO_PULSE, RESET_NS, PIN_TOGGLE_CYCLES);

/// Animation counter period (16 MHz / 256)
pub const TICK_PERIOD: Duration = Duration::from_micros(16);

/// Length of the power-on animation
pub const STARTUP_DURATION: Duration = Duration::from_millis(960);

/// Time for an indicator segment to grow to full length
pub const ANIMATION_DURATION: Duration = Duration::from_millis(240);

pub const STARTUP_TICKS: Ticks = ticks_for(STARTUP_DURATION, TICK_PERIOD);
pub const ANIMATION_TICKS: Ticks = ticks_for(ANIMATION_DURATION, TICK_PERIOD);

pub const DEFAULT_TIMINGS: AnimationTimings =
    AnimationTimings::new(STARTUP_TICKS, ANIMATION_TICKS);
