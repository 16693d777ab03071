//! `embedded-hal` backed data line
//!
//! Wraps an output pin, a cycle-exact spinner and a general delay into a
//! [`PulseLine`]. The spinner times the pulses, the delay only the latch gap.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::PIN_TOGGLE_CYCLES;
use crate::encoder::PulseLine;

/// Busy-wait for an exact number of CPU cycles
pub trait CycleSpin {
    fn spin(&mut self, cycles: u32);
}

/// Data line driven through an output pin
pub struct PinPulseLine<P, S, D> {
    pin: P,
    spinner: S,
    delay: D,
}

impl<P, S, D> PinPulseLine<P, S, D>
where
    P: OutputPin<Error = Infallible>,
    S: CycleSpin,
    D: DelayNs,
{
    /// Take the pin and park it low
    pub fn new(mut pin: P, spinner: S, delay: D) -> Self {
        let Ok(()) = pin.set_low();
        Self {
            pin,
            spinner,
            delay,
        }
    }

    pub fn release(self) -> (P, S, D) {
        (self.pin, self.spinner, self.delay)
    }
}

impl<P, S, D> PulseLine for PinPulseLine<P, S, D>
where
    P: OutputPin<Error = Infallible>,
    S: CycleSpin,
    D: DelayNs,
{
    fn pulse(&mut self, high_cycles: u32, low_cycles: u32) {
        let Ok(()) = self.pin.set_high();
        self.spinner.spin(high_cycles.saturating_sub(PIN_TOGGLE_CYCLES));
        let Ok(()) = self.pin.set_low();
        self.spinner.spin(low_cycles.saturating_sub(PIN_TOGGLE_CYCLES));
    }

    fn idle(&mut self, micros: u32) {
        let Ok(()) = self.pin.set_low();
        self.delay.delay_us(micros);
    }
}
