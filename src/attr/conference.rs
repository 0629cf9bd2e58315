//! Conference-only attributes: mixing region and status callback events.

use bitflags::bitflags;

bitflags! {
    /// Region where the conference is mixed.
    ///
    /// Overrides automatic region selection. The region is taken from the
    /// first participant that sets it; later participants' values are ignored.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ConfRegion: u16 {
        const AUSTRALIA = 1 << 0;
        const BRAZIL = 1 << 1;
        const IRELAND = 1 << 2;
        const JAPAN = 1 << 3;
        const SINGAPORE = 1 << 4;
        const US = 1 << 5;
    }
}

impl ConfRegion {
    const TOKENS: [(ConfRegion, &'static str); 6] = [
        (ConfRegion::AUSTRALIA, "au1"),
        (ConfRegion::BRAZIL, "br1"),
        (ConfRegion::IRELAND, "ie1"),
        (ConfRegion::JAPAN, "jp1"),
        (ConfRegion::SINGAPORE, "sg1"),
        (ConfRegion::US, "us1"),
    ];
}

exclusive_attr!(ConfRegion, "region");

bitflags! {
    /// Conference events that trigger a status callback. Combine with `|`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ConfStatusCallbackEvent: u16 {
        /// Audio mixing has begun: at least one participant is present and a
        /// participant with `startConferenceOnEnter="true"` joins.
        const START = 1 << 0;
        /// The last participant left, or one with `endConferenceOnExit="true"` did.
        const END = 1 << 1;
        const JOIN = 1 << 2;
        const LEAVE = 1 << 3;
        /// A participant was muted or unmuted.
        const MUTE = 1 << 4;
        /// A participant was held or unheld.
        const HOLD = 1 << 5;
        /// A participant started or stopped speaking.
        const SPEAKER = 1 << 6;

        const ALL = Self::START.bits()
            | Self::END.bits()
            | Self::JOIN.bits()
            | Self::LEAVE.bits()
            | Self::MUTE.bits()
            | Self::HOLD.bits()
            | Self::SPEAKER.bits();
    }
}

impl ConfStatusCallbackEvent {
    const TOKENS: [(ConfStatusCallbackEvent, &'static str); 7] = [
        (ConfStatusCallbackEvent::START, "start"),
        (ConfStatusCallbackEvent::END, "end"),
        (ConfStatusCallbackEvent::JOIN, "join"),
        (ConfStatusCallbackEvent::LEAVE, "leave"),
        (ConfStatusCallbackEvent::MUTE, "mute"),
        (ConfStatusCallbackEvent::HOLD, "hold"),
        (ConfStatusCallbackEvent::SPEAKER, "speaker"),
    ];
}

flag_attr!(ConfStatusCallbackEvent, "statusCallbackEvent");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::AttrValue;

    #[test]
    fn region_tokens() {
        assert_eq!(ConfRegion::AUSTRALIA.encode(), "au1");
        assert_eq!(ConfRegion::BRAZIL.encode(), "br1");
        assert_eq!(ConfRegion::IRELAND.encode(), "ie1");
        assert_eq!(ConfRegion::JAPAN.encode(), "jp1");
        assert_eq!(ConfRegion::SINGAPORE.encode(), "sg1");
        assert_eq!(ConfRegion::US.encode(), "us1");
        assert_eq!(ConfRegion::empty().encode(), "");
        assert_eq!((ConfRegion::US | ConfRegion::JAPAN).encode(), "");
        assert_eq!(ConfRegion::from_bits_retain(1 << 9).encode(), "");
    }

    #[test]
    fn status_events_single() {
        assert_eq!(ConfStatusCallbackEvent::START.encode(), "start");
        assert_eq!(ConfStatusCallbackEvent::END.encode(), "end");
        assert_eq!(ConfStatusCallbackEvent::JOIN.encode(), "join");
        assert_eq!(ConfStatusCallbackEvent::LEAVE.encode(), "leave");
        assert_eq!(ConfStatusCallbackEvent::MUTE.encode(), "mute");
        assert_eq!(ConfStatusCallbackEvent::HOLD.encode(), "hold");
        assert_eq!(ConfStatusCallbackEvent::SPEAKER.encode(), "speaker");
        assert_eq!(ConfStatusCallbackEvent::empty().encode(), "");
    }

    #[test]
    fn status_events_all_in_bit_order() {
        assert_eq!(
            ConfStatusCallbackEvent::ALL.encode(),
            "start end join leave mute hold speaker"
        );
    }

    #[test]
    fn status_events_combined_in_bit_order() {
        let v = ConfStatusCallbackEvent::SPEAKER
            | ConfStatusCallbackEvent::START
            | ConfStatusCallbackEvent::HOLD;
        assert_eq!(v.encode(), "start hold speaker");
    }

    #[test]
    fn undeclared_bits_are_ignored() {
        let v = ConfStatusCallbackEvent::from_bits_retain(ConfStatusCallbackEvent::MUTE.bits() | 1 << 12);
        assert_eq!(v.encode(), "mute");
    }
}
