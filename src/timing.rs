//! WS2812 pulse timing
//!
//! Pulse widths are specified in nanoseconds and converted to CPU cycles in
//! const context. A timing set that cannot be represented at the configured
//! clock, or that lands outside the receiver's tolerance bands, fails the
//! build instead of producing a line the strip cannot decode.

const NANOS_PER_SEC: u64 = 1_000_000_000;
const NANOS_PER_MICRO: u32 = 1_000;

/// Convert nanoseconds to whole CPU cycles, rounding down
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn ns_to_cycles(ns: u32, cpu_hz: u32) -> u32 {
    (ns as u64 * cpu_hz as u64 / NANOS_PER_SEC) as u32
}

/// Convert CPU cycles to nanoseconds, rounding down
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn cycles_to_ns(cycles: u32, cpu_hz: u32) -> u32 {
    (cycles as u64 * NANOS_PER_SEC / cpu_hz as u64) as u32
}

/// Accepted width of one pulse phase, inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseBand {
    pub min_ns: u32,
    pub max_ns: u32,
}

impl PulseBand {
    pub const fn new(min_ns: u32, max_ns: u32) -> Self {
        Self { min_ns, max_ns }
    }

    pub const fn contains(self, ns: u32) -> bool {
        ns >= self.min_ns && ns <= self.max_ns
    }
}

/// Target widths and tolerance bands of one bit shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseSpec {
    pub high_ns: u32,
    pub low_ns: u32,
    pub high_band: PulseBand,
    pub low_band: PulseBand,
}

/// One bit shape resolved to CPU cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitPulse {
    /// Total cycles the line stays high, edge included
    pub high_cycles: u32,
    /// Total cycles the line stays low, edge included
    pub low_cycles: u32,
    pub high_band: PulseBand,
    pub low_band: PulseBand,
}

impl BitPulse {
    const fn resolve(shape: PulseSpec, cpu_hz: u32, edge_cycles: u32) -> Self {
        let high_cycles = ns_to_cycles(shape.high_ns, cpu_hz);
        let low_cycles = ns_to_cycles(shape.low_ns, cpu_hz);

        assert!(
            high_cycles > edge_cycles && low_cycles > edge_cycles,
            "pulse phase is shorter than the pin toggle overhead"
        );
        assert!(
            shape.high_band.contains(cycles_to_ns(high_cycles, cpu_hz)),
            "high phase falls outside its tolerance band at this clock"
        );
        assert!(
            shape.low_band.contains(cycles_to_ns(low_cycles, cpu_hz)),
            "low phase falls outside its tolerance band at this clock"
        );

        Self {
            high_cycles,
            low_cycles,
            high_band: shape.high_band,
            low_band: shape.low_band,
        }
    }
}

/// Complete timing of the single-wire protocol at one clock frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseTiming {
    pub cpu_hz: u32,
    /// Shape of a logical one (long high phase)
    pub one: BitPulse,
    /// Shape of a logical zero (short high phase)
    pub zero: BitPulse,
    /// Idle time after a frame, rounded up to whole microseconds
    pub latch_us: u32,
}

impl PulseTiming {
    /// Resolve a timing set, failing const evaluation if it is not representable
    ///
    /// `edge_cycles` is the cost of toggling the pin, which each phase must exceed.
    pub const fn new(
        cpu_hz: u32,
        one: PulseSpec,
        zero: PulseSpec,
        reset_ns: u32,
        edge_cycles: u32,
    ) -> Self {
        assert!(cpu_hz > 0, "clock frequency must be non-zero");
        let one = BitPulse::resolve(one, cpu_hz, edge_cycles);
        let zero = BitPulse::resolve(zero, cpu_hz, edge_cycles);
        assert!(
            one.high_cycles > zero.high_cycles,
            "one and zero bits are indistinguishable"
        );

        Self {
            cpu_hz,
            one,
            zero,
            // Never shorter than the reset time
            latch_us: reset_ns / NANOS_PER_MICRO + 1,
        }
    }

    /// Pulse shape for a logical bit value
    pub const fn bit(&self, bit: bool) -> BitPulse {
        if bit { self.one } else { self.zero }
    }
}
