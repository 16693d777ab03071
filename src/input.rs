//! Input line sampling

use core::convert::Infallible;

use embedded_hal::digital::InputPin;

use crate::state::InputRequests;

/// Source of the three request lines, sampled once per loop iteration
pub trait InputSource {
    fn sample(&mut self) -> InputRequests;
}

/// Active-high request lines read from input pins
///
/// The pins need no pull resistors; the harness pulls them to ground when
/// the request is absent.
pub struct PinInputs<L, R, N> {
    left: L,
    right: R,
    night: N,
}

impl<L, R, N> PinInputs<L, R, N> {
    pub const fn new(left: L, right: R, night: N) -> Self {
        Self { left, right, night }
    }
}

impl<L, R, N> InputSource for PinInputs<L, R, N>
where
    L: InputPin<Error = Infallible>,
    R: InputPin<Error = Infallible>,
    N: InputPin<Error = Infallible>,
{
    fn sample(&mut self) -> InputRequests {
        let Ok(left) = self.left.is_high();
        let Ok(right) = self.right.is_high();
        let Ok(night) = self.night.is_high();
        InputRequests::new(left, right, night)
    }
}
