//! Control loop of the fixture.
//!
//! One iteration samples the inputs, realigns the animation clock on a state
//! change, renders a frame and transmits it. There is no frame pacing: the
//! transmission and its latch gap set the loop period.

use crate::OutputDriver;
use crate::clock::{AnimationClock, TickCounter};
use crate::input::InputSource;
use crate::renderer::SignalRenderer;

/// Drives the renderer from the inputs and the clock, frame after frame
///
/// # Usage
///
/// ```ignore
/// static OVERFLOW: OverflowFlag = OverflowFlag::new();
///
/// let clock = AnimationClock::new(timer, &OVERFLOW);
/// let renderer = SignalRenderer::new(PALETTE, DEFAULT_TIMINGS);
/// let output = Ws2812Encoder::new(line);
///
/// FrameScheduler::new(renderer, output, clock, inputs).run()
/// ```
pub struct FrameScheduler<'a, O, C, I> {
    output: O,
    clock: AnimationClock<'a, C>,
    inputs: I,
    renderer: SignalRenderer,
}

impl<'a, O, C, I> FrameScheduler<'a, O, C, I>
where
    O: OutputDriver,
    C: TickCounter,
    I: InputSource,
{
    pub const fn new(
        renderer: SignalRenderer,
        output: O,
        clock: AnimationClock<'a, C>,
        inputs: I,
    ) -> Self {
        Self {
            output,
            clock,
            inputs,
            renderer,
        }
    }

    /// Run a single loop iteration, transmitting exactly one frame
    pub fn tick(&mut self) {
        let requests = self.inputs.sample();
        if self.renderer.apply_requests(requests) {
            self.clock.reset();
        }

        let sample = self.clock.sample();
        let frame = self.renderer.render(sample);
        self.output.write(frame);
    }

    /// Run the loop until power is removed
    pub fn run(mut self) -> ! {
        loop {
            self.tick();
        }
    }

    pub fn renderer(&self) -> &SignalRenderer {
        &self.renderer
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn inputs_mut(&mut self) -> &mut I {
        &mut self.inputs
    }

    pub fn clock(&self) -> &AnimationClock<'a, C> {
        &self.clock
    }
}
