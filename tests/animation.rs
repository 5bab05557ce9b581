mod common;

mod tests {
    use random_cv::{Animation, AnimationState, AnimationStatus, Led};

    use super::common::{RecordingTransmitter, Transfer};

    const ON: u16 = 0xffff;
    const OFF: u16 = 0;

    #[test]
    fn test_full_chase() {
        let mut animation = Animation::new();
        let mut transmitter = RecordingTransmitter::default();

        for step in 0..7 {
            assert_eq!(
                animation.clock(&mut transmitter),
                AnimationStatus::Ongoing,
                "step {step}"
            );
        }
        assert_eq!(animation.clock(&mut transmitter), AnimationStatus::Completed);
        assert!(animation.is_complete());

        let expected = [
            Transfer::Led(Led::Led1, ON),
            Transfer::Led(Led::Led2, ON),
            Transfer::Led(Led::Led1, OFF),
            Transfer::Led(Led::Led3, ON),
            Transfer::Led(Led::Led2, OFF),
            Transfer::Led(Led::Led4, ON),
            Transfer::Led(Led::Led3, OFF),
            Transfer::Led(Led::Led3, ON),
            Transfer::Led(Led::Led4, OFF),
            Transfer::Led(Led::Led2, ON),
            Transfer::Led(Led::Led3, OFF),
            Transfer::Led(Led::Led1, ON),
            Transfer::Led(Led::Led2, OFF),
            Transfer::Led(Led::Led1, OFF),
        ];
        assert_eq!(transmitter.transfers, expected);
    }

    #[test]
    fn test_complete_is_terminal() {
        let mut animation = Animation::new();
        let mut transmitter = RecordingTransmitter::default();
        for _ in 0..8 {
            animation.clock(&mut transmitter);
        }
        let transfers = transmitter.transfers.len();

        for _ in 0..5 {
            assert_eq!(animation.clock(&mut transmitter), AnimationStatus::Completed);
        }
        assert_eq!(animation.state(), AnimationState::Complete);
        assert_eq!(transmitter.transfers.len(), transfers);
    }

    #[test]
    fn test_failure_still_advances() {
        let mut animation = Animation::new();
        let mut transmitter = RecordingTransmitter::failing();

        assert_eq!(animation.clock(&mut transmitter), AnimationStatus::Error);
        assert_eq!(animation.state(), AnimationState::Step1);
        assert_eq!(animation.clock(&mut transmitter), AnimationStatus::Error);
        assert_eq!(animation.state(), AnimationState::Step2);
        // a failed "on" skips the matching "off"
        assert_eq!(transmitter.calls, 2);
    }

    #[test]
    fn test_recovers_to_completion_after_failures() {
        let mut animation = Animation::new();
        let mut transmitter = RecordingTransmitter::failing();
        for _ in 0..8 {
            assert_eq!(animation.clock(&mut transmitter), AnimationStatus::Error);
        }
        assert!(animation.is_complete());
        assert_eq!(animation.clock(&mut transmitter), AnimationStatus::Completed);
    }

    #[test]
    fn test_state_sequence() {
        let mut state = AnimationState::None;
        let mut visited = 0;
        while state != AnimationState::Complete {
            state = state.next();
            visited += 1;
        }
        assert_eq!(visited, 8);
        assert_eq!(AnimationState::Complete.next(), AnimationState::Complete);
    }
}
