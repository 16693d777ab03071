//! Elapsed-time source for animations
//!
//! A free-running hardware counter paired with a sticky overflow flag. The
//! flag is raised from the counter's overflow interrupt and is only cleared
//! together with the counter, inside a critical section, so a sample never
//! sees a zeroed counter with a stale flag or the other way around.

use core::sync::atomic::{AtomicBool, Ordering};

use embassy_time::Duration;

/// Raw counter value
pub type Ticks = u16;

/// Free-running hardware counter
pub trait TickCounter {
    /// Current counter value
    fn ticks(&self) -> Ticks;

    /// Zero the counter and drop any pending overflow notification
    fn clear(&mut self);
}

/// Sticky overflow indicator shared with the overflow interrupt
///
/// Place it in a `static` and call [`OverflowFlag::notify`] from the
/// interrupt handler. Reading and clearing happen through [`AnimationClock`].
#[derive(Debug)]
pub struct OverflowFlag {
    raised: AtomicBool,
}

impl OverflowFlag {
    pub const fn new() -> Self {
        Self {
            raised: AtomicBool::new(false),
        }
    }

    /// Record a counter wrap. Does nothing else.
    pub fn notify(&self) {
        self.raised.store(true, Ordering::Relaxed);
    }

    fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Relaxed)
    }

    fn clear(&self) {
        self.raised.store(false, Ordering::Relaxed);
    }
}

impl Default for OverflowFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Consistent snapshot of the counter and the overflow flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockSample {
    /// Ticks since the last reset
    pub ticks: Ticks,
    /// The counter wrapped at least once since the last reset
    pub overflowed: bool,
}

impl ClockSample {
    pub const fn new(ticks: Ticks, overflowed: bool) -> Self {
        Self { ticks, overflowed }
    }

    /// Whether at least `duration` ticks are known to have passed
    pub const fn has_reached(self, duration: Ticks) -> bool {
        self.overflowed || self.ticks >= duration
    }

    /// Physical time covered by `ticks`
    ///
    /// Only meaningful while `overflowed` is false.
    #[allow(clippy::cast_lossless)]
    pub const fn elapsed(self, tick_period: Duration) -> Duration {
        Duration::from_ticks(self.ticks as u64 * tick_period.as_ticks())
    }
}

/// Convert a physical duration into counter ticks
///
/// Fails const evaluation when the duration does not fit the counter.
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn ticks_for(duration: Duration, tick_period: Duration) -> Ticks {
    assert!(tick_period.as_ticks() > 0, "tick period must be non-zero");
    let ticks = duration.as_ticks() / tick_period.as_ticks();
    assert!(
        ticks <= Ticks::MAX as u64,
        "duration does not fit the tick counter"
    );
    ticks as Ticks
}

/// Animation clock: counter plus overflow flag behind one sample/reset pair
pub struct AnimationClock<'a, C> {
    counter: C,
    overflow: &'a OverflowFlag,
}

impl<'a, C: TickCounter> AnimationClock<'a, C> {
    pub const fn new(counter: C, overflow: &'a OverflowFlag) -> Self {
        Self { counter, overflow }
    }

    /// Read ticks and overflow state as one consistent pair
    pub fn sample(&self) -> ClockSample {
        critical_section::with(|_| ClockSample {
            ticks: self.counter.ticks(),
            overflowed: self.overflow.is_raised(),
        })
    }

    /// Zero the counter and clear the overflow flag atomically
    pub fn reset(&mut self) {
        critical_section::with(|_| {
            self.counter.clear();
            self.overflow.clear();
        });
    }
}
