use bitflags::bitflags;

bitflags! {
    /// Call progress events that trigger a status callback webhook on a
    /// `<Dial>` noun. Combine with `|` to subscribe to several.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StatusCallbackEvent: u8 {
        /// The call was created, before it starts ringing.
        const INITIATED = 1 << 0;
        const RINGING = 1 << 1;
        const ANSWERED = 1 << 2;
        const COMPLETED = 1 << 3;

        const ALL = Self::INITIATED.bits()
            | Self::RINGING.bits()
            | Self::ANSWERED.bits()
            | Self::COMPLETED.bits();
    }
}

impl StatusCallbackEvent {
    const TOKENS: [(StatusCallbackEvent, &'static str); 4] = [
        (StatusCallbackEvent::INITIATED, "initiated"),
        (StatusCallbackEvent::RINGING, "ringing"),
        (StatusCallbackEvent::ANSWERED, "answered"),
        (StatusCallbackEvent::COMPLETED, "completed"),
    ];
}

flag_attr!(StatusCallbackEvent, "statusCallbackEvent");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::AttrValue;

    #[test]
    fn single_events() {
        assert_eq!(StatusCallbackEvent::INITIATED.encode(), "initiated");
        assert_eq!(StatusCallbackEvent::RINGING.encode(), "ringing");
        assert_eq!(StatusCallbackEvent::ANSWERED.encode(), "answered");
        assert_eq!(StatusCallbackEvent::COMPLETED.encode(), "completed");
    }

    #[test]
    fn zero_is_empty() {
        assert_eq!(StatusCallbackEvent::empty().encode(), "");
        assert!(StatusCallbackEvent::default().is_zero());
    }

    #[test]
    fn three_events_in_bit_order() {
        let v = StatusCallbackEvent::COMPLETED
            | StatusCallbackEvent::INITIATED
            | StatusCallbackEvent::ANSWERED;
        assert_eq!(v.encode(), "initiated answered completed");
    }

    #[test]
    fn all_events() {
        assert_eq!(
            StatusCallbackEvent::ALL.encode(),
            "initiated ringing answered completed"
        );
    }

    #[test]
    fn parse_accepts_any_order() {
        let v: StatusCallbackEvent = "completed  ringing".parse().unwrap();
        assert_eq!(v, StatusCallbackEvent::RINGING | StatusCallbackEvent::COMPLETED);
        assert!("ringing hungup".parse::<StatusCallbackEvent>().is_err());
    }
}
