mod tests {
    use haptic_array_engine::topology::Channel;
    use haptic_array_engine::{PointStore, PwmDriver, RampEngine};

    /// Records every hardware call for inspection.
    #[derive(Default)]
    struct RecordingDriver {
        levels: Vec<(u8, Channel, u16)>,
    }

    impl PwmDriver for RecordingDriver {
        fn configure_unit(&mut self, _unit: u8, _clock_divider: f32, _wrap: u16) {}

        fn set_channel_level(&mut self, unit: u8, channel: Channel, level: u16) {
            self.levels.push((unit, channel, level));
        }

        fn enable_unit(&mut self, _unit: u8) {}
    }

    #[test]
    fn test_idle_tick_makes_no_hardware_calls() {
        let store = PointStore::new();
        let mut engine = RampEngine::new(&store, RecordingDriver::default());
        engine.tick();
        assert!(engine.driver().levels.is_empty());
    }

    #[test]
    fn test_ramp_drives_level_and_store() {
        let store = PointStore::new();
        let mut engine = RampEngine::new(&store, RecordingDriver::default());

        store.set_target(1, 1024, 100);
        engine.tick();

        assert_eq!(engine.driver().levels, vec![(0, Channel::A, 100)]);
        assert_eq!(store.snapshot(1).unwrap().current, 100);
    }

    #[test]
    fn test_convergence_scenario() {
        // 0 -> 1024 at 100/tick: ten steps of 100, one clamped step of 24
        let store = PointStore::new();
        let mut engine = RampEngine::new(&store, RecordingDriver::default());

        store.set_target(1, 1024, 100);
        for _ in 0..10 {
            engine.tick();
        }
        assert_eq!(store.snapshot(1).unwrap().current, 1000);

        engine.tick();
        assert_eq!(store.snapshot(1).unwrap().current, 1024);

        // Converged: further ticks are silent
        engine.tick();
        engine.tick();
        assert_eq!(store.snapshot(1).unwrap().current, 1024);
        assert_eq!(engine.driver().levels.len(), 11);
        assert_eq!(engine.driver().levels.last(), Some(&(0, Channel::A, 1024)));
    }

    #[test]
    fn test_zero_ramp_holds_forever() {
        let store = PointStore::new();
        let mut engine = RampEngine::new(&store, RecordingDriver::default());

        store.set_target(9, 500, 0);
        for _ in 0..100 {
            engine.tick();
        }

        assert_eq!(store.snapshot(9).unwrap().current, 0);
        assert!(engine.driver().levels.is_empty());
    }

    #[test]
    fn test_invalid_point_set_has_no_effect() {
        let store = PointStore::new();
        let mut engine = RampEngine::new(&store, RecordingDriver::default());

        store.set_target(0, 1, 1);
        engine.tick();

        assert!(engine.driver().levels.is_empty());
        for point in 0..16u8 {
            if let Some(state) = store.snapshot(point) {
                assert_eq!(state.current, 0);
            }
        }
    }

    #[test]
    fn test_retarget_restarts_from_current() {
        let store = PointStore::new();
        let mut engine = RampEngine::new(&store, RecordingDriver::default());

        store.set_target(1, 1024, 100);
        for _ in 0..5 {
            engine.tick();
        }
        assert_eq!(store.snapshot(1).unwrap().current, 500);

        // Reverse mid-ramp: converges back down from 500, no overshoot
        store.set_target(1, 0, 200);
        engine.tick();
        assert_eq!(store.snapshot(1).unwrap().current, 300);
        engine.tick();
        assert_eq!(store.snapshot(1).unwrap().current, 100);
        engine.tick();
        assert_eq!(store.snapshot(1).unwrap().current, 0);
        engine.tick();
        assert_eq!(store.snapshot(1).unwrap().current, 0);
    }

    #[test]
    fn test_points_update_independently() {
        let store = PointStore::new();
        let mut engine = RampEngine::new(&store, RecordingDriver::default());

        store.set_target(1, 100, 100);
        store.set_target(10, 300, 100);
        engine.tick();

        assert_eq!(
            engine.driver().levels,
            vec![(0, Channel::A, 100), (4, Channel::B, 100)]
        );
        engine.tick();
        assert_eq!(store.snapshot(1).unwrap().current, 100);
        assert_eq!(store.snapshot(10).unwrap().current, 200);
    }
}
