//! Tri-state booleans: explicitly true, explicitly false, or unset.
//!
//! TwiML defaults each of these attributes to `true`, so the boolean view treats
//! everything except the explicit `FALSE` member as true.

use bitflags::bitflags;

bitflags! {
    /// Whether media nested in `<Gather>` stops playing once speech or DTMF
    /// is detected.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BargeIn: u8 {
        const TRUE = 1 << 0;
        const FALSE = 1 << 1;
    }
}

bitflags! {
    /// Whether a beep is played to the conference when a participant joins
    /// or leaves.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ConfBeep: u8 {
        const TRUE = 1 << 0;
        const FALSE = 1 << 1;
    }
}

bitflags! {
    /// Whether the conference starts when this participant joins.
    ///
    /// When false and the conference has not started, the participant is
    /// muted and hears hold music until a participant with a true value
    /// joins. Useful for moderated conferences.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ConfStartOnEnter: u8 {
        const TRUE = 1 << 0;
        const FALSE = 1 << 1;
    }
}

macro_rules! toggle_impl {
    ($ty:ident, $kind:literal) => {
        impl $ty {
            const TOKENS: [($ty, &'static str); 2] = [($ty::TRUE, "true"), ($ty::FALSE, "false")];

            /// Boolean view. Only the explicit `FALSE` member is false; zero and
            /// undeclared values follow the platform default of true.
            pub fn as_bool(&self) -> bool {
                *self != $ty::FALSE
            }
        }

        impl From<bool> for $ty {
            fn from(value: bool) -> Self {
                if value {
                    $ty::TRUE
                } else {
                    $ty::FALSE
                }
            }
        }

        exclusive_attr!($ty, $kind);
    };
}

toggle_impl!(BargeIn, "bargeIn");
toggle_impl!(ConfBeep, "beep");
toggle_impl!(ConfStartOnEnter, "startConferenceOnEnter");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::AttrValue;

    #[test]
    fn barge_in_tokens() {
        assert_eq!(BargeIn::TRUE.encode(), "true");
        assert_eq!(BargeIn::FALSE.encode(), "false");
        assert_eq!(BargeIn::empty().encode(), "");
        assert_eq!(BargeIn::from_bits_retain(3).encode(), "");
        assert_eq!(BargeIn::from_bits_retain(200).encode(), "");
    }

    #[test]
    fn barge_in_defaults_to_true() {
        assert!(BargeIn::default().as_bool());
        assert!(BargeIn::TRUE.as_bool());
        assert!(!BargeIn::FALSE.as_bool());
        assert!(BargeIn::from_bits_retain(3).as_bool());
        assert!(BargeIn::from_bits_retain(128).as_bool());
    }

    #[test]
    fn conf_beep_defaults_to_true() {
        assert_eq!(ConfBeep::TRUE.encode(), "true");
        assert_eq!(ConfBeep::FALSE.encode(), "false");
        assert!(ConfBeep::default().as_bool());
        assert!(!ConfBeep::FALSE.as_bool());
        assert!(ConfBeep::from_bits_retain(64).as_bool());
    }

    #[test]
    fn start_on_enter_defaults_to_true() {
        assert_eq!(ConfStartOnEnter::TRUE.encode(), "true");
        assert_eq!(ConfStartOnEnter::FALSE.encode(), "false");
        assert_eq!(ConfStartOnEnter::from_bits_retain(4).encode(), "");
        assert!(ConfStartOnEnter::default().as_bool());
        assert!(!ConfStartOnEnter::FALSE.as_bool());
    }

    #[test]
    fn from_bool_and_parse() {
        assert_eq!(ConfBeep::from(false), ConfBeep::FALSE);
        assert_eq!(BargeIn::from(true), BargeIn::TRUE);
        assert_eq!("false".parse::<ConfStartOnEnter>().unwrap(), ConfStartOnEnter::FALSE);
        assert_eq!("".parse::<BargeIn>().unwrap(), BargeIn::empty());

        let err = "yes".parse::<BargeIn>().unwrap_err();
        assert_eq!(err.to_string(), "unknown bargeIn token 'yes'");
    }
}
