//! Typed attribute values and their TwiML string encodings.
//!
//! Two shapes of enumeration live here:
//!
//! - **Exclusive**: one named value at a time, encoded by table lookup. What an
//!   undeclared integer encodes to differs per type (empty string for most,
//!   `"unknown"` for [`Language`] and [`Voice`]) and is kept that way.
//! - **Flag**: any combination of named bits, encoded by walking a fixed token
//!   table and joining the tokens of the set bits. Output order is the table
//!   order, never the order the caller OR'ed the bits together.
//!
//! Every type implements [`AttrValue`], which is all the renderer needs: the
//! encoded string plus a zero check that decides whether the attribute is
//! emitted at all.

use std::borrow::Cow;

use bitflags::Flags;

use crate::error::ParseAttrError;
use crate::pool;

/// Display and serde impls shared by every attribute type.
///
/// Values serialize as their encoded token string and deserialize through
/// `FromStr`, so scripts read `trim: do-not-trim` rather than raw integers.
macro_rules! attr_common {
    ($ty:ty) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&$crate::attr::AttrValue::encode(self))
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&$crate::attr::AttrValue::encode(self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let token = <String as serde::Deserialize>::deserialize(deserializer)?;
                token.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Default, [`AttrValue`] and `FromStr` for a bit-backed exclusive type with a
/// `TOKENS` table. Undeclared bit patterns encode to the empty string.
macro_rules! exclusive_attr {
    ($ty:ident, $kind:literal) => {
        impl Default for $ty {
            fn default() -> Self {
                $ty::empty()
            }
        }

        impl $crate::attr::AttrValue for $ty {
            fn encode(&self) -> std::borrow::Cow<'static, str> {
                std::borrow::Cow::Borrowed($crate::attr::lookup(self, &$ty::TOKENS).unwrap_or(""))
            }

            fn is_zero(&self) -> bool {
                self.is_empty()
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::error::ParseAttrError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $crate::attr::parse_exclusive(s, &$ty::TOKENS, $kind)
            }
        }

        attr_common!($ty);
    };
}

/// Default, [`AttrValue`] and `FromStr` for a space-joined flag type with a
/// `TOKENS` table in emission order.
macro_rules! flag_attr {
    ($ty:ident, $kind:literal) => {
        impl Default for $ty {
            fn default() -> Self {
                $ty::empty()
            }
        }

        impl $crate::attr::AttrValue for $ty {
            fn encode(&self) -> std::borrow::Cow<'static, str> {
                if self.is_empty() {
                    return std::borrow::Cow::Borrowed("");
                }
                std::borrow::Cow::Owned($crate::attr::join_flags(*self, &$ty::TOKENS, " "))
            }

            fn is_zero(&self) -> bool {
                self.is_empty()
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::error::ParseAttrError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $crate::attr::parse_flags(s, &$ty::TOKENS, $kind)
            }
        }

        attr_common!($ty);
    };
}

/// Raw-integer constructors, [`AttrValue`] and `FromStr` for a sequential
/// newtype with a `TOKENS` table. `$unmapped` is what an undeclared value
/// encodes to.
macro_rules! sequential_attr {
    ($ty:ident, $repr:ty, $kind:literal, unmapped = $unmapped:literal) => {
        impl $ty {
            /// Wrap a raw value, declared or not.
            pub const fn from_raw(raw: $repr) -> Self {
                $ty(raw)
            }

            pub const fn raw(self) -> $repr {
                self.0
            }
        }

        impl $crate::attr::AttrValue for $ty {
            fn encode(&self) -> std::borrow::Cow<'static, str> {
                std::borrow::Cow::Borrowed($crate::attr::lookup(self, &$ty::TOKENS).unwrap_or($unmapped))
            }

            fn is_zero(&self) -> bool {
                self.0 == 0
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::error::ParseAttrError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $crate::attr::parse_exclusive(s, &$ty::TOKENS, $kind)
            }
        }

        attr_common!($ty);
    };
}

mod conference;
mod finish_on_key;
mod gather_input;
mod language;
mod recording;
mod reject_reason;
mod ring_tone;
mod status_callback;
mod toggle;
mod voice;

pub use conference::{ConfRegion, ConfStatusCallbackEvent};
pub use finish_on_key::FinishOnKey;
pub use gather_input::GatherInput;
pub use language::Language;
pub use recording::{ConfRecord, DialRecord, Trim};
pub use reject_reason::RejectReason;
pub use ring_tone::RingTone;
pub use status_callback::StatusCallbackEvent;
pub use toggle::{BargeIn, ConfBeep, ConfStartOnEnter};
pub use voice::Voice;

/// A typed value that renders to a TwiML attribute.
pub trait AttrValue {
    /// Canonical string form, as the TwiML parser expects it.
    fn encode(&self) -> Cow<'static, str>;

    /// True when the underlying integer is zero. Zero-valued attributes are
    /// left out of the rendered element.
    fn is_zero(&self) -> bool;

    /// The `(name, value)` attribute pair for this value.
    fn to_attr(&self, name: &'static str) -> (&'static str, Cow<'static, str>) {
        (name, self.encode())
    }
}

/// Token for an exclusive value, if it is one of the declared members.
pub(crate) fn lookup<T: PartialEq>(value: &T, table: &[(T, &'static str)]) -> Option<&'static str> {
    table
        .iter()
        .find(|(member, _)| member == value)
        .map(|(_, token)| *token)
}

/// Join the tokens of every set bit in table order.
///
/// The join runs in a pooled scratch string; the result is copied out so the
/// scratch buffer can be reset and handed to the next caller.
pub(crate) fn join_flags<T: Flags + Copy>(
    value: T,
    table: &[(T, &'static str)],
    separator: &str,
) -> String {
    let mut buf = pool::TOKENS.get();
    for (flag, token) in table {
        if value.contains(*flag) {
            if !buf.is_empty() {
                buf.push_str(separator);
            }
            buf.push_str(token);
        }
    }
    buf.as_str().to_owned()
}

/// Inverse of [`lookup`]. The empty string parses to the zero value.
pub(crate) fn parse_exclusive<T: Copy + Default>(
    s: &str,
    table: &[(T, &'static str)],
    kind: &'static str,
) -> Result<T, ParseAttrError> {
    if s.is_empty() {
        return Ok(T::default());
    }
    table
        .iter()
        .find(|(_, token)| *token == s)
        .map(|(member, _)| *member)
        .ok_or_else(|| ParseAttrError::new(kind, s))
}

/// Inverse of [`join_flags`] for whitespace-separated tokens, in any order.
pub(crate) fn parse_flags<T: Flags + Copy>(
    s: &str,
    table: &[(T, &'static str)],
    kind: &'static str,
) -> Result<T, ParseAttrError> {
    s.split_whitespace().try_fold(T::empty(), |acc, word| {
        table
            .iter()
            .find(|(_, token)| *token == word)
            .map(|(flag, _)| acc.union(*flag))
            .ok_or_else(|| ParseAttrError::new(kind, word))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn to_attr_pairs_name_with_encoding() {
        assert_eq!(
            Trim::DO_NOT_TRIM.to_attr("trim"),
            ("trim", Cow::Borrowed("do-not-trim"))
        );
        assert_eq!(
            StatusCallbackEvent::RINGING.to_attr("statusCallbackEvent"),
            ("statusCallbackEvent", Cow::Borrowed("ringing"))
        );
    }

    #[test]
    fn display_matches_encode() {
        assert_eq!(Language::ENGLISH_UK.to_string(), "en-GB");
        assert_eq!(FinishOnKey::STAR.to_string(), "*");
        assert_eq!(Voice::from_raw(42).to_string(), "unknown");
    }

    #[test]
    fn join_flags_leaves_no_state_behind() {
        let first = StatusCallbackEvent::ALL.encode();
        let second = StatusCallbackEvent::ANSWERED.encode();
        assert_eq!(first, "initiated ringing answered completed");
        assert_eq!(second, "answered");
    }

    #[test]
    fn serde_uses_tokens() {
        let json = serde_json::to_string(&ConfRegion::JAPAN).unwrap();
        assert_eq!(json, r#""jp1""#);

        let events: ConfStatusCallbackEvent = serde_json::from_str(r#""leave join""#).unwrap();
        assert_eq!(
            events,
            ConfStatusCallbackEvent::JOIN | ConfStatusCallbackEvent::LEAVE
        );

        let err = serde_json::from_str::<Trim>(r#""trim-everything""#).unwrap_err();
        assert!(err.to_string().contains("trim-everything"));
    }

    fn status_events() -> impl Strategy<Value = StatusCallbackEvent> {
        any::<u8>().prop_map(StatusCallbackEvent::from_bits_truncate)
    }

    proptest! {
        #[test]
        fn flag_order_ignores_or_order(a in status_events(), b in status_events()) {
            prop_assert_eq!((a | b).encode(), (b | a).encode());
        }

        #[test]
        fn declared_flags_survive_parse(v in status_events()) {
            let parsed: StatusCallbackEvent = v.encode().parse().unwrap();
            prop_assert_eq!(parsed, v);
        }

        #[test]
        fn conference_flags_survive_parse(bits in any::<u16>()) {
            let v = ConfStatusCallbackEvent::from_bits_truncate(bits);
            let parsed: ConfStatusCallbackEvent = v.encode().parse().unwrap();
            prop_assert_eq!(parsed, v);
        }
    }
}
