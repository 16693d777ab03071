use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::clock::{ClockSample, Ticks, ticks_for};
use crate::color::{Palette, Rgb};
use crate::config::PIXELS;
use crate::layout::{IndicatorLayout, Layout, StartupLayout, animation_phase};
use crate::state::{AmbientLevel, InputRequests, InputState};

/// Animation durations in clock ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTimings {
    /// Length of the power-on animation
    pub startup: Ticks,
    /// Time for an indicator zone to fill
    pub animation: Ticks,
}

impl AnimationTimings {
    /// Fails const evaluation if a duration is too short to hold one tick per frame
    pub const fn new(startup: Ticks, animation: Ticks) -> Self {
        assert!(
            startup >= StartupLayout::FRAMES,
            "startup duration is shorter than its frame count"
        );
        assert!(
            animation >= IndicatorLayout::FRAMES,
            "indicator duration is shorter than its frame count"
        );
        Self { startup, animation }
    }

    pub const fn from_durations(startup: Duration, animation: Duration, tick: Duration) -> Self {
        Self::new(ticks_for(startup, tick), ticks_for(animation, tick))
    }
}

#[derive(Debug, Clone, Copy)]
struct LightState {
    input: InputState,
    ambient: AmbientLevel,
    /// Latched once the power-on animation is over
    startup_complete: bool,
}

/// Signal light state machine
///
/// Derives the fixture state from the input lines and renders one frame
/// per loop iteration from the animation clock.
pub struct SignalRenderer {
    palette: Palette,
    timings: AnimationTimings,
    state: LightState,
    frame_buffer: [Rgb; PIXELS],
}

impl SignalRenderer {
    pub const fn new(palette: Palette, timings: AnimationTimings) -> Self {
        Self {
            frame_buffer: [palette.black; PIXELS],
            palette,
            timings,
            state: LightState {
                input: InputState::None,
                ambient: AmbientLevel::Day,
                startup_complete: false,
            },
        }
    }

    pub const fn input_state(&self) -> InputState {
        self.state.input
    }

    pub const fn ambient_level(&self) -> AmbientLevel {
        self.state.ambient
    }

    pub const fn is_startup_complete(&self) -> bool {
        self.state.startup_complete
    }

    /// Apply this iteration's input levels
    ///
    /// Returns `true` when the input state changed, in which case the
    /// animation clock has to be reset before sampling it.
    pub fn apply_requests(&mut self, requests: InputRequests) -> bool {
        let ambient = requests.ambient();
        if ambient != self.state.ambient {
            #[cfg(feature = "esp32-log")]
            println!(
                "[SignalRenderer.apply_requests] ambient {:?} -> {:?}",
                self.state.ambient, ambient
            );
            self.state.ambient = ambient;
        }

        let input = requests.state();
        if input == self.state.input {
            return false;
        }
        #[cfg(feature = "esp32-log")]
        println!(
            "[SignalRenderer.apply_requests] input {:?} -> {:?}",
            self.state.input, input
        );
        self.state.input = input;
        true
    }

    /// Render the frame for the current state
    pub fn render(&mut self, sample: ClockSample) -> &[Rgb] {
        match self.state.input {
            InputState::None => self.render_running_light(sample),
            input => self.render_indicators(input, sample),
        }

        &self.frame_buffer
    }

    fn render_running_light(&mut self, sample: ClockSample) {
        if sample.has_reached(self.timings.startup) {
            self.complete_startup();
        }

        if self.state.startup_complete {
            self.frame_buffer
                .fill(self.palette.ambient(self.state.ambient));
            return;
        }

        let phase = animation_phase(sample, StartupLayout::FRAMES, self.timings.startup);
        StartupLayout::new(&self.palette, self.state.ambient).render(phase, &mut self.frame_buffer);
    }

    fn render_indicators(&mut self, input: InputState, sample: ClockSample) {
        // A signal cuts the power-on animation short for good
        self.complete_startup();

        let phase = animation_phase(sample, IndicatorLayout::FRAMES, self.timings.animation);
        IndicatorLayout::new(&self.palette, self.state.ambient, input)
            .render(phase, &mut self.frame_buffer);
    }

    fn complete_startup(&mut self) {
        if self.state.startup_complete {
            return;
        }
        #[cfg(feature = "esp32-log")]
        println!("[SignalRenderer.complete_startup] startup animation done");
        self.state.startup_complete = true;
    }
}
