//! WS2812 single-wire encoder
//!
//! Serializes colors into pulse pairs on a [`PulseLine`]. Each pulse runs
//! inside a critical section so an interrupt cannot stretch its width; the
//! gaps between pulses are allowed to grow, the pulses themselves are not.

use core::convert::Infallible;

use smart_leds::SmartLedsWrite;

use crate::OutputDriver;
use crate::color::Rgb;
use crate::config::WS2812_TIMING;
use crate::timing::PulseTiming;

/// Physical data line with cycle-exact pulse generation
///
/// Implementations must hit the requested cycle counts exactly, e.g. with
/// unrolled `nop`s. General purpose delays are not precise enough.
pub trait PulseLine {
    /// Hold the line high for `high_cycles`, then low for `low_cycles`.
    ///
    /// Both counts include the cost of toggling the pin.
    fn pulse(&mut self, high_cycles: u32, low_cycles: u32);

    /// Keep the line low for at least `micros` microseconds
    fn idle(&mut self, micros: u32);
}

/// Encoder for a strip of WS2812 pixels
pub struct Ws2812Encoder<L> {
    line: L,
    timing: PulseTiming,
}

impl<L: PulseLine> Ws2812Encoder<L> {
    /// Create an encoder using the configured timing
    pub const fn new(line: L) -> Self {
        Self::with_timing(line, WS2812_TIMING)
    }

    pub const fn with_timing(line: L, timing: PulseTiming) -> Self {
        Self { line, timing }
    }

    pub const fn timing(&self) -> &PulseTiming {
        &self.timing
    }

    /// Give the line back
    pub fn release(self) -> L {
        self.line
    }

    /// Emit a single bit with interrupts masked
    pub fn send_bit(&mut self, bit: bool) {
        let pulse = self.timing.bit(bit);
        critical_section::with(|_| {
            self.line.pulse(pulse.high_cycles, pulse.low_cycles);
        });
    }

    /// Emit a byte, most significant bit first
    pub fn send_byte(&mut self, byte: u8) {
        for shift in (0..8).rev() {
            self.send_bit((byte >> shift) & 0x01 == 0x01);
        }
    }

    /// Emit one pixel in the strip's green, red, blue order
    pub fn send_pixel(&mut self, color: Rgb) {
        self.send_byte(color.g);
        self.send_byte(color.r);
        self.send_byte(color.b);
    }

    /// Hold the line idle long enough for the strip to latch
    pub fn latch(&mut self) {
        self.line.idle(self.timing.latch_us);
    }

    /// Emit every pixel of a frame, then latch
    pub fn send_frame(&mut self, colors: &[Rgb]) {
        for &color in colors {
            self.send_pixel(color);
        }
        self.latch();
    }

    /// Emit `count` pixels of the same color, then latch
    pub fn send_solid(&mut self, color: Rgb, count: usize) {
        for _ in 0..count {
            self.send_pixel(color);
        }
        self.latch();
    }
}

impl<L: PulseLine> OutputDriver for Ws2812Encoder<L> {
    fn write(&mut self, colors: &[Rgb]) {
        self.send_frame(colors);
    }
}

impl<L: PulseLine> SmartLedsWrite for Ws2812Encoder<L> {
    type Error = Infallible;
    type Color = Rgb;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        for color in iterator {
            self.send_pixel(color.into());
        }
        self.latch();
        Ok(())
    }
}
