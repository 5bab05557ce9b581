mod common;

mod tests {
    use random_cv::{StatusLed, StatusLedConfig, StatusLedMode};

    use super::common::FakeOutputPin;

    fn led() -> StatusLed<FakeOutputPin> {
        StatusLed::new(FakeOutputPin::default(), StatusLedConfig::default())
    }

    fn ticks(led: &mut StatusLed<FakeOutputPin>, count: usize) {
        for _ in 0..count {
            led.process_tick();
        }
    }

    #[test]
    fn test_starts_in_normal_mode() {
        let led = led();
        assert_eq!(led.mode(), StatusLedMode::Normal);
        assert!(!led.is_lit());
        assert!(led.pin().history.is_empty());
    }

    #[test]
    fn test_normal_blip() {
        let mut led = led();
        ticks(&mut led, 48);
        assert!(!led.is_lit());
        assert!(led.pin().history.is_empty());

        led.process_tick();
        assert!(led.is_lit());
        led.process_tick();
        assert!(led.is_lit());
        led.process_tick();
        assert!(!led.is_lit());
        assert!(!led.pin().is_high);
    }

    #[test]
    fn test_normal_blip_repeats() {
        let mut led = led();
        ticks(&mut led, 51);
        ticks(&mut led, 48);
        assert!(!led.is_lit());
        led.process_tick();
        assert!(led.is_lit());
    }

    #[test]
    fn test_error_blink() {
        let mut led = led();
        led.set_mode(StatusLedMode::Error);
        assert!(led.pin().history.is_empty());

        ticks(&mut led, 5);
        assert!(!led.is_lit());
        led.process_tick();
        assert!(led.is_lit());

        ticks(&mut led, 5);
        assert!(led.is_lit());
        led.process_tick();
        assert!(!led.is_lit());
    }

    #[test]
    fn test_same_mode_keeps_phase() {
        let mut led = led();
        led.set_mode(StatusLedMode::Error);
        ticks(&mut led, 3);
        led.set_mode(StatusLedMode::Error);
        ticks(&mut led, 3);
        assert!(led.is_lit());
    }

    #[test]
    fn test_mode_change_keeps_counter() {
        let mut led = led();
        ticks(&mut led, 40);
        led.set_mode(StatusLedMode::Error);
        led.process_tick();
        assert!(led.is_lit());
    }

    #[test]
    fn test_error_during_blip_darkens_on_next_tick() {
        let mut led = led();
        ticks(&mut led, 49);
        assert!(led.is_lit());

        led.set_mode(StatusLedMode::Error);
        assert!(led.is_lit());
        led.process_tick();
        assert!(!led.is_lit());
    }

    #[test]
    fn test_on_and_off_are_static() {
        let mut led = led();
        led.set_mode(StatusLedMode::On);
        assert!(led.pin().is_high);
        ticks(&mut led, 200);
        assert_eq!(led.pin().history, [true]);

        led.set_mode(StatusLedMode::Off);
        assert!(!led.pin().is_high);
        ticks(&mut led, 200);
        assert_eq!(led.pin().history, [true, false]);
    }

    #[test]
    fn test_custom_thresholds() {
        let config = StatusLedConfig {
            normal_on_ticks: 1,
            normal_off_ticks: 2,
            error_toggle_ticks: 0,
        };
        let mut led = StatusLed::new(FakeOutputPin::default(), config);
        led.process_tick();
        assert!(!led.is_lit());
        led.process_tick();
        assert!(led.is_lit());
        led.process_tick();
        assert!(!led.is_lit());

        led.set_mode(StatusLedMode::Error);
        led.process_tick();
        assert!(led.is_lit());
        led.process_tick();
        assert!(!led.is_lit());
    }
}
