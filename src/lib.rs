#![no_std]

pub mod clock;
pub mod color;
pub mod config;
pub mod encoder;
pub mod frame_scheduler;
pub mod input;
pub mod layout;
pub mod line;
pub mod renderer;
pub mod state;
pub mod timing;

pub use clock::{AnimationClock, ClockSample, OverflowFlag, TickCounter, Ticks};
pub use color::{PALETTE, Palette, Rgb};
pub use config::{DEFAULT_TIMINGS, PIXELS, WS2812_TIMING};
pub use encoder::{PulseLine, Ws2812Encoder};
pub use frame_scheduler::FrameScheduler;
pub use input::{InputSource, PinInputs};
pub use line::{CycleSpin, PinPulseLine};
pub use renderer::{AnimationTimings, SignalRenderer};
pub use state::{AmbientLevel, InputRequests, InputState};
pub use embassy_time::Duration;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write one complete frame to the LED strip and latch it
    fn write(&mut self, colors: &[Rgb]);
}
