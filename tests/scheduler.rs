mod tests {
    use embassy_time::{Duration, Instant};
    use haptic_array_engine::topology::Channel;
    use haptic_array_engine::{PointStore, PwmDriver, RampEngine, TICK_PERIOD, TickScheduler};

    #[derive(Default)]
    struct CountingDriver {
        writes: usize,
    }

    impl PwmDriver for CountingDriver {
        fn configure_unit(&mut self, _unit: u8, _clock_divider: f32, _wrap: u16) {}

        fn set_channel_level(&mut self, _unit: u8, _channel: Channel, _level: u16) {
            self.writes += 1;
        }

        fn enable_unit(&mut self, _unit: u8) {}
    }

    #[test]
    fn test_tick_period_is_one_millisecond() {
        assert_eq!(TICK_PERIOD, Duration::from_millis(1));
    }

    #[test]
    fn test_tick_advances_deadline_by_one_period() {
        let store = PointStore::new();
        let engine = RampEngine::new(&store, CountingDriver::default());
        let mut scheduler = TickScheduler::new(engine);

        let result = scheduler.tick(Instant::from_micros(0));
        assert_eq!(result.next_deadline, Instant::from_micros(1000));
        assert_eq!(result.sleep_duration, Duration::from_micros(1000));
    }

    #[test]
    fn test_on_time_caller_keeps_cadence() {
        let store = PointStore::new();
        let engine = RampEngine::new(&store, CountingDriver::default());
        let mut scheduler = TickScheduler::new(engine);

        let mut now = Instant::from_micros(0);
        for expected in 1..=5u64 {
            let result = scheduler.tick(now);
            assert_eq!(result.next_deadline, Instant::from_micros(expected * 1000));
            now = result.next_deadline;
        }
    }

    #[test]
    fn test_slightly_late_caller_gets_shorter_sleep() {
        let store = PointStore::new();
        let engine = RampEngine::new(&store, CountingDriver::default());
        let mut scheduler = TickScheduler::new(engine);

        scheduler.tick(Instant::from_micros(0));
        // 400 us late for the 1000 us deadline
        let result = scheduler.tick(Instant::from_micros(1400));
        assert_eq!(result.next_deadline, Instant::from_micros(2000));
        assert_eq!(result.sleep_duration, Duration::from_micros(600));
    }

    #[test]
    fn test_long_stall_reanchors_instead_of_bursting() {
        let store = PointStore::new();
        let engine = RampEngine::new(&store, CountingDriver::default());
        let mut scheduler = TickScheduler::new(engine);

        scheduler.tick(Instant::from_micros(0));
        // 50 ms stall, far past the two-period drift limit
        let result = scheduler.tick(Instant::from_micros(50_000));
        assert_eq!(result.next_deadline, Instant::from_micros(51_000));
        assert_eq!(result.sleep_duration, Duration::from_micros(1000));
    }

    #[test]
    fn test_scheduler_runs_the_engine() {
        let store = PointStore::new();
        let engine = RampEngine::new(&store, CountingDriver::default());
        let mut scheduler = TickScheduler::new(engine);

        store.set_target(1, 300, 100);
        let mut now = Instant::from_micros(0);
        for _ in 0..5 {
            now = scheduler.tick(now).next_deadline;
        }

        assert_eq!(scheduler.engine().driver().writes, 3);
        assert_eq!(store.snapshot(1).unwrap().current, 300);
    }
}
