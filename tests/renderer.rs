mod tests {
    use myrtio_signal_light::config::{ANIMATION_TICKS, PIXELS, STARTUP_TICKS};
    use myrtio_signal_light::layout::{EDGE_PIXELS, GAP_PIXELS, ZONE_PIXELS};
    use myrtio_signal_light::{
        AmbientLevel, AnimationTimings, ClockSample, DEFAULT_TIMINGS, InputRequests, InputState,
        PALETTE, SignalRenderer,
    };

    const LEFT_ZONE: usize = EDGE_PIXELS + ZONE_PIXELS + GAP_PIXELS;
    const RIGHT_ZONE: usize = EDGE_PIXELS;

    fn renderer() -> SignalRenderer {
        SignalRenderer::new(PALETTE, DEFAULT_TIMINGS)
    }

    #[test]
    fn test_input_state_table() {
        assert_eq!(InputState::from_requests(true, true), InputState::Hazard);
        assert_eq!(InputState::from_requests(true, false), InputState::Left);
        assert_eq!(InputState::from_requests(false, true), InputState::Right);
        assert_eq!(InputState::from_requests(false, false), InputState::None);
    }

    #[test]
    fn test_ambient_level() {
        assert_eq!(InputRequests::new(false, false, false).ambient(), AmbientLevel::Day);
        assert_eq!(InputRequests::new(true, true, true).ambient(), AmbientLevel::Night);
    }

    #[test]
    fn test_apply_requests_reports_transitions() {
        let mut renderer = renderer();
        assert_eq!(renderer.input_state(), InputState::None);
        assert!(!renderer.apply_requests(InputRequests::new(false, false, false)));
        assert!(renderer.apply_requests(InputRequests::new(true, false, false)));
        assert!(!renderer.apply_requests(InputRequests::new(true, false, false)));
        assert!(renderer.apply_requests(InputRequests::new(true, true, false)));
        assert!(renderer.apply_requests(InputRequests::new(false, false, false)));
        assert_eq!(renderer.input_state(), InputState::None);
    }

    #[test]
    fn test_ambient_change_is_not_a_transition() {
        let mut renderer = renderer();
        assert!(!renderer.apply_requests(InputRequests::new(false, false, true)));
        assert_eq!(renderer.ambient_level(), AmbientLevel::Night);
        assert!(!renderer.apply_requests(InputRequests::new(false, false, false)));
        assert_eq!(renderer.ambient_level(), AmbientLevel::Day);
    }

    #[test]
    fn test_power_on_frame() {
        let mut renderer = renderer();
        let frame = renderer.render(ClockSample::new(0, false));
        assert_eq!(frame.len(), PIXELS);
        let dim = frame.iter().filter(|led| **led == PALETTE.day_dim).count();
        let black = frame.iter().filter(|led| **led == PALETTE.black).count();
        assert_eq!((dim, black), (2, PIXELS - 2));
        assert_eq!(frame[0], PALETTE.day_dim);
        assert_eq!(frame[PIXELS - 1], PALETTE.day_dim);
        assert!(!renderer.is_startup_complete());
    }

    #[test]
    fn test_startup_completes_on_duration() {
        let mut renderer = renderer();
        renderer.render(ClockSample::new(STARTUP_TICKS - 1, false));
        assert!(!renderer.is_startup_complete());

        let frame = renderer.render(ClockSample::new(STARTUP_TICKS, false));
        assert!(frame.iter().all(|led| *led == PALETTE.day));
        assert!(renderer.is_startup_complete());
    }

    #[test]
    fn test_startup_completes_on_overflow() {
        let mut renderer = renderer();
        let frame = renderer.render(ClockSample::new(5, true));
        assert!(frame.iter().all(|led| *led == PALETTE.day));
        assert!(renderer.is_startup_complete());
    }

    #[test]
    fn test_startup_never_replays() {
        let mut renderer = renderer();
        renderer.render(ClockSample::new(STARTUP_TICKS, false));
        assert!(renderer.is_startup_complete());

        for _ in 0..3 {
            renderer.apply_requests(InputRequests::new(false, true, false));
            renderer.render(ClockSample::new(0, false));
            renderer.apply_requests(InputRequests::new(false, false, true));
            let frame = renderer.render(ClockSample::new(0, false));
            assert!(frame.iter().all(|led| *led == PALETTE.night));
            assert!(renderer.is_startup_complete());
        }
    }

    #[test]
    fn test_signal_cuts_startup_short() {
        let mut renderer = renderer();
        renderer.render(ClockSample::new(100, false));
        assert!(!renderer.is_startup_complete());

        renderer.apply_requests(InputRequests::new(true, false, false));
        renderer.render(ClockSample::new(0, false));
        assert!(renderer.is_startup_complete());

        renderer.apply_requests(InputRequests::new(false, false, false));
        let frame = renderer.render(ClockSample::new(0, false));
        assert!(frame.iter().all(|led| *led == PALETTE.day));
    }

    #[test]
    fn test_left_signal_scenario() {
        let mut renderer = renderer();
        assert!(renderer.apply_requests(InputRequests::new(true, false, false)));
        assert_eq!(renderer.input_state(), InputState::Left);
        assert_eq!(renderer.ambient_level(), AmbientLevel::Day);

        let frame = renderer.render(ClockSample::new(0, false));
        let lit: Vec<usize> = (0..PIXELS).filter(|&p| frame[p] == PALETTE.signal).collect();
        assert_eq!(lit, vec![LEFT_ZONE]);

        let frame = renderer.render(ClockSample::new(ANIMATION_TICKS, false));
        assert!(frame[LEFT_ZONE..LEFT_ZONE + ZONE_PIXELS]
            .iter()
            .all(|led| *led == PALETTE.signal));
        assert!(frame[RIGHT_ZONE..RIGHT_ZONE + ZONE_PIXELS]
            .iter()
            .all(|led| *led == PALETTE.day));
    }

    #[test]
    fn test_hazard_scenario() {
        let mut renderer = renderer();
        renderer.apply_requests(InputRequests::new(true, true, true));
        assert_eq!(renderer.input_state(), InputState::Hazard);

        let frame = renderer.render(ClockSample::new(ANIMATION_TICKS / 2, false));
        let right = frame[RIGHT_ZONE..RIGHT_ZONE + ZONE_PIXELS].to_vec();
        let mut left = frame[LEFT_ZONE..LEFT_ZONE + ZONE_PIXELS].to_vec();
        left.reverse();
        assert_eq!(right, left);
        assert_eq!(right.iter().filter(|led| **led == PALETTE.signal).count(), 6);
        assert!(frame[..EDGE_PIXELS].iter().all(|led| *led == PALETTE.night));
    }

    #[test]
    fn test_indicator_holds_last_frame() {
        let mut renderer = renderer();
        renderer.apply_requests(InputRequests::new(false, true, false));
        let saturated = renderer.render(ClockSample::new(ANIMATION_TICKS, false)).to_vec();
        let overflowed = renderer.render(ClockSample::new(1, true)).to_vec();
        let later = renderer.render(ClockSample::new(u16::MAX, false)).to_vec();
        assert_eq!(saturated, overflowed);
        assert_eq!(saturated, later);
    }

    #[test]
    fn test_custom_timings() {
        let timings = AnimationTimings::new(70, 10);
        let mut renderer = SignalRenderer::new(PALETTE, timings);
        renderer.apply_requests(InputRequests::new(true, false, false));
        let frame = renderer.render(ClockSample::new(3, false));
        assert_eq!(
            frame[LEFT_ZONE..LEFT_ZONE + ZONE_PIXELS]
                .iter()
                .filter(|led| **led == PALETTE.signal)
                .count(),
            4
        );
    }

    #[test]
    #[should_panic(expected = "shorter than its frame count")]
    fn test_timings_reject_short_durations() {
        let _ = AnimationTimings::new(69, 10);
    }
}
